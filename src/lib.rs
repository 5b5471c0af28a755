//! # rust-2048
//!
//! Rules engine for a 2048-style tile merging puzzle played on a square grid
//! with obstacle cells.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Board moves are functions from (board, tiles) to new
//!    (board, tiles). `GameState::apply` is a reducer over `GameAction`s.
//!
//! 2. **Closed Cells**: A cell is `Empty`, `Obstacle` or `Tile(id)`, matched
//!    exhaustively everywhere.
//!
//! 3. **Synchronous Turns**: A move, its victory/defeat check and the
//!    follow-up spawn complete inside one call. Throttling user input is the
//!    caller's job (`MoveGate`).
//!
//! ## Architecture
//!
//! - **Obstacle Ranges**: Each row or column is split into obstacle-free
//!   ranges; tiles slide and merge within a range only.
//!
//! - **Persistent Tile Map**: Tiles live in an `im` map so states clone in
//!   O(1) and snapshots are cheap.
//!
//! - **Seeded RNG**: Obstacle placement and spawns draw from a ChaCha8 RNG,
//!   so a seed reproduces a whole game.
//!
//! ## Modules
//!
//! - `core`: Coordinates, tiles, configuration, RNG, errors
//! - `board`: Cells, the grid, range partitioning
//! - `rules`: Move resolution and board reconciliation
//! - `game`: Reducer state, session state machine, move gate, snapshots

pub mod core;
pub mod board;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Axis, Coordinate, Direction, LineDirection,
    Tile, TileId, TileMap,
    GameOptions, RulesConfig,
    GameRng, GameRngState,
    EngineError, EngineResult,
};

pub use crate::board::{Board, Cell, CellRange, partition};

pub use crate::rules::{resolve_line, resolve_range, reconcile, slide, LineMove, Reconciled, Slide};

pub use crate::game::{
    GameAction, GameState,
    GameSession, GameStatus, TurnOutcome,
    MoveGate, GameSnapshot,
};
