//! Game configuration.
//!
//! - `GameOptions`: what the player picks before a game (grid size,
//!   obstacle count)
//! - `RulesConfig`: rule policy (starting value, winning value, dead-end
//!   check)
//! - Policy constants shared with the presentation layer

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Grid sizes offered to the player.
pub const SUPPORTED_SIZES: [usize; 3] = [4, 6, 8];

/// Upper bound for the obstacle picker. The engine itself only requires
/// `n_obstacles < size * size`.
pub const MAX_OBSTACLES: usize = 4;

/// Value of every spawned tile.
pub const STARTING_VALUE: u32 = 1;

/// Growth applied to the surviving tile of a merge.
pub const MERGE_FACTOR: u32 = 2;

/// Reaching this value wins the game.
pub const WINNING_VALUE: u32 = 2048;

/// Duration of the merge animation, in milliseconds.
pub const MERGE_ANIMATION_MS: u64 = 100;

/// Duration of the slide animation, in milliseconds.
pub const MOVE_ANIMATION_MS: u64 = 200;

/// Options chosen at game start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameOptions {
    /// Board is `size` x `size`.
    pub size: usize,

    /// Number of obstacle cells scattered at random.
    pub n_obstacles: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            size: 6,
            n_obstacles: 0,
        }
    }
}

impl GameOptions {
    #[must_use]
    pub fn new(size: usize, n_obstacles: usize) -> Self {
        Self { size, n_obstacles }
    }

    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_obstacles(mut self, n_obstacles: usize) -> Self {
        self.n_obstacles = n_obstacles;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Check the options can host a game.
    ///
    /// At least one cell must remain free for the first spawn, so
    /// `n_obstacles` must be strictly below the cell count.
    pub fn validate(&self) -> EngineResult<()> {
        if self.size == 0 {
            return Err(EngineError::InvalidSize { size: self.size });
        }
        if self.n_obstacles >= self.cell_count() {
            return Err(EngineError::TooManyObstacles {
                obstacles: self.n_obstacles,
                cells: self.cell_count(),
            });
        }
        Ok(())
    }
}

/// Rule policy for turn resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Value of spawned tiles.
    pub starting_value: u32,

    /// A tile reaching this value wins the game.
    pub winning_value: u32,

    /// Declare defeat when exactly one empty cell is left and none of its
    /// orthogonal neighbours is empty or holds a starting-value tile.
    pub dead_end_check: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_value: STARTING_VALUE,
            winning_value: WINNING_VALUE,
            dead_end_check: true,
        }
    }
}

impl RulesConfig {
    /// Spawned tiles carry `value`, which must be a power of two.
    #[must_use]
    pub fn with_starting_value(mut self, value: u32) -> Self {
        self.starting_value = value;
        self
    }

    #[must_use]
    pub fn with_winning_value(mut self, value: u32) -> Self {
        self.winning_value = value;
        self
    }

    /// Disable the single-empty-cell dead-end heuristic.
    #[must_use]
    pub fn without_dead_end_check(mut self) -> Self {
        self.dead_end_check = false;
        self
    }
}
