//! Game layer: the reducer state, the session state machine, move gating
//! and snapshots.

pub mod state;
pub mod session;
pub mod gate;
pub mod snapshot;

pub use state::{GameAction, GameState};
pub use session::{GameSession, GameStatus, TurnOutcome};
pub use gate::MoveGate;
pub use snapshot::GameSnapshot;
