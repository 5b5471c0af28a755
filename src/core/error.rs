//! Engine errors.
//!
//! Every variant is a precondition violation: the caller asked for
//! something the rules do not allow. Operations that fail leave the state
//! they were called on untouched, and `GameSession::reset_game` always
//! recovers to a valid Setup state.

use super::coordinate::Coordinate;
use crate::game::GameStatus;

/// Result alias used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Grid size must be at least 1.
    #[error("Invalid grid size: {size}")]
    InvalidSize { size: usize },

    /// At least one cell must stay free for the first spawn.
    #[error("Too many obstacles: {obstacles} obstacles on a board of {cells} cells")]
    TooManyObstacles { obstacles: usize, cells: usize },

    /// A spawn was requested on a board without empty cells.
    #[error("No empty cells")]
    NoEmptyCells,

    /// `start_game` outside the Setup state.
    #[error("Cannot start a game while {status:?}")]
    NotInSetup { status: GameStatus },

    /// Explicit placement outside the grid.
    #[error("Coordinate {coordinate} is outside a {size}x{size} board")]
    OutOfBounds { coordinate: Coordinate, size: usize },

    /// Explicit placement on an obstacle or another tile.
    #[error("Cell {coordinate} is not empty")]
    CellOccupied { coordinate: Coordinate },

    /// Tile values are powers of two.
    #[error("Invalid tile value: {value}")]
    InvalidTileValue { value: u32 },

    /// No tile id is left to allocate.
    #[error("Tile ids exhausted")]
    TileIdsExhausted,

    /// The board and the tile map disagree.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Snapshot encoding or decoding failed.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}
