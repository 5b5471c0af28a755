//! Session lifecycle and turn orchestration.
//!
//! ```text
//! Setup --start_game--> Playing --move_tiles--> Victory | Defeat
//!   ^                                               |
//!   +------------------- reset_game ----------------+
//! ```
//!
//! `GameSession` is the only mutation surface the presentation layer needs.
//! Every call runs to completion before returning: a changed move is fully
//! committed before victory, defeat or the follow-up spawn is evaluated.
//!
//! ## Usage
//!
//! ```
//! use rust_2048::core::{Direction, GameOptions};
//! use rust_2048::game::{GameSession, GameStatus};
//!
//! let mut session = GameSession::new(42);
//! session.start_game(GameOptions::new(4, 0)).unwrap();
//! assert_eq!(session.status(), GameStatus::Playing);
//! assert_eq!(session.tiles().len(), 1);
//!
//! session.move_tiles(Direction::Left).unwrap();
//!
//! session.reset_game();
//! assert_eq!(session.status(), GameStatus::Setup);
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use super::snapshot::GameSnapshot;
use super::state::{GameAction, GameState};
use crate::board::Board;
use crate::core::{
    Direction, EngineError, EngineResult, GameOptions, GameRng, RulesConfig, Tile,
};
use crate::rules::can_slide;

/// Outer lifecycle of one playthrough.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Setup,
    Playing,
    Victory,
    Defeat,
}

impl GameStatus {
    /// Victory or Defeat.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, GameStatus::Victory | GameStatus::Defeat)
    }
}

/// What a call to `move_tiles` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The session was not Playing.
    Ignored,
    /// Nothing could move. No turn was consumed.
    Unchanged,
    /// The board changed and a new tile was spawned.
    Spawned(Tile),
    /// The board changed and a tile reached the winning value.
    Victory,
    /// The board changed and no useful spawn remains.
    Defeat,
}

/// A game session: status, rules, current state and the RNG.
#[derive(Clone, Debug)]
pub struct GameSession {
    status: GameStatus,
    rules: RulesConfig,
    /// `None` in Setup.
    state: Option<GameState>,
    rng: GameRng,
}

impl GameSession {
    /// New session in Setup with default rules.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rules(RulesConfig::default(), seed)
    }

    /// New session in Setup.
    #[must_use]
    pub fn with_rules(rules: RulesConfig, seed: u64) -> Self {
        Self {
            status: GameStatus::Setup,
            rules,
            state: None,
            rng: GameRng::new(seed),
        }
    }

    /// Enter Playing on a prepared state. The state must satisfy the
    /// board/tile invariant.
    pub fn resume(state: GameState, rules: RulesConfig, seed: u64) -> EngineResult<Self> {
        state.validate()?;
        Ok(Self {
            status: GameStatus::Playing,
            rules,
            state: Some(state),
            rng: GameRng::new(seed),
        })
    }

    // === Queries ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Options of the running game, defaults in Setup.
    #[must_use]
    pub fn options(&self) -> GameOptions {
        self.state.as_ref().map(|s| *s.options()).unwrap_or_default()
    }

    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.state.as_ref().map(GameState::board)
    }

    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.state.as_ref().is_some_and(GameState::has_changed)
    }

    /// Snapshot of all tiles, ordered by id.
    #[must_use]
    pub fn tiles(&self) -> Vec<Tile> {
        self.state
            .as_ref()
            .map(|s| s.tiles().values().copied().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn max_value(&self) -> Option<u32> {
        self.state.as_ref().and_then(GameState::max_value)
    }

    /// Whether any direction would change the board.
    ///
    /// Informational only: turn resolution does not consult it.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        self.state.as_ref().is_some_and(|s| {
            Direction::ALL
                .iter()
                .any(|&d| can_slide(s.board(), s.tiles(), d))
        })
    }

    // === Transitions ===

    /// Start a game: build a fresh board, enter Playing, spawn one tile.
    pub fn start_game(&mut self, options: GameOptions) -> EngineResult<()> {
        if self.status != GameStatus::Setup {
            return Err(EngineError::NotInSetup { status: self.status });
        }
        options.validate()?;

        // Work on a copy of the RNG so a failure leaves the session as it was.
        let mut rng = self.rng.clone();
        let state = GameState::new(options, &mut rng)?;
        let tile = state.random_tile(&mut rng, self.rules.starting_value)?;
        let state = state.apply(&GameAction::CreateTile(tile))?;

        info!(
            size = options.size,
            obstacles = options.n_obstacles,
            "game started"
        );

        self.rng = rng;
        self.state = Some(state);
        self.status = GameStatus::Playing;
        Ok(())
    }

    /// Play a move. A no-op outside Playing, or when nothing can move.
    pub fn move_tiles(&mut self, direction: Direction) -> EngineResult<TurnOutcome> {
        let Some(state) = self.state.as_ref().filter(|_| self.status == GameStatus::Playing) else {
            return Ok(TurnOutcome::Ignored);
        };

        let moved = state.apply(&GameAction::Move(direction))?;
        if !moved.has_changed() {
            return Ok(TurnOutcome::Unchanged);
        }

        self.resolve_turn(moved)
    }

    /// Evaluate a committed, changed move: victory, defeat or spawn.
    fn resolve_turn(&mut self, moved: GameState) -> EngineResult<TurnOutcome> {
        if moved.max_value().is_some_and(|v| v >= self.rules.winning_value) {
            return Ok(self.finish(moved, GameStatus::Victory));
        }

        let empty = moved.board().empty_cells();
        let dead_end = match empty.as_slice() {
            [] => true,
            [last] if self.rules.dead_end_check => moved
                .board()
                .available_neighbours(moved.tiles(), *last, self.rules.starting_value)
                .is_empty(),
            _ => false,
        };
        if dead_end {
            return Ok(self.finish(moved, GameStatus::Defeat));
        }

        let mut rng = self.rng.clone();
        let tile = moved.random_tile(&mut rng, self.rules.starting_value)?;
        let spawned = moved.apply(&GameAction::CreateTile(tile))?;

        self.rng = rng;
        self.state = Some(spawned);
        Ok(TurnOutcome::Spawned(tile))
    }

    fn finish(&mut self, state: GameState, status: GameStatus) -> TurnOutcome {
        info!(?status, max_value = ?state.max_value(), "game finished");
        self.state = Some(state);
        self.status = status;
        match status {
            GameStatus::Victory => TurnOutcome::Victory,
            _ => TurnOutcome::Defeat,
        }
    }

    /// Discard the current game and return to Setup. Always succeeds.
    pub fn reset_game(&mut self) {
        if self.status != GameStatus::Setup {
            info!(from = ?self.status, "game reset");
        }
        self.state = None;
        self.status = GameStatus::Setup;
    }

    // === Snapshots ===

    /// Capture the whole session, RNG position included.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.status,
            rules: self.rules.clone(),
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a session from a snapshot, checking its consistency.
    pub fn restore(snapshot: GameSnapshot) -> EngineResult<Self> {
        match (&snapshot.state, snapshot.status) {
            (None, GameStatus::Setup) => {}
            (Some(state), status) if status != GameStatus::Setup => state.validate()?,
            (_, status) => {
                return Err(EngineError::InvariantViolation(format!(
                    "snapshot state does not match status {:?}",
                    status
                )))
            }
        }

        Ok(Self {
            status: snapshot.status,
            rules: snapshot.rules,
            state: snapshot.state,
            rng: GameRng::from_state(&snapshot.rng),
        })
    }
}
