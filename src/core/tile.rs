//! Tiles and their identifiers.
//!
//! A tile is owned by the game state's tile map. The board only stores its
//! `TileId`, never the tile itself.
//!
//! ## Values
//!
//! Values start at `STARTING_VALUE` (1) and are multiplied by
//! `MERGE_FACTOR` (2) on every merge, so a value is always a power of two.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::config::MERGE_FACTOR;
use super::coordinate::Coordinate;

/// Unique identifier of a tile within one game session.
///
/// Allocated from a monotonically increasing counter, so ids are never
/// reused while the session lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id following this one, `None` once the counter is exhausted.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Tile collection keyed by id.
///
/// Persistent map: cloning a state is O(1), and iteration is ordered by id so
/// replays with the same seed visit tiles in the same order.
pub type TileMap = OrdMap<TileId, Tile>;

/// A numbered piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub coordinate: Coordinate,
    pub value: u32,
}

impl Tile {
    #[must_use]
    pub const fn new(id: TileId, coordinate: Coordinate, value: u32) -> Self {
        Self { id, coordinate, value }
    }

    /// Copy of this tile relocated to `coordinate`.
    #[must_use]
    pub const fn moved_to(self, coordinate: Coordinate) -> Self {
        Self { coordinate, ..self }
    }

    /// Copy of this tile with its value grown by one merge, `None` when the
    /// grown value does not fit.
    #[must_use]
    pub fn merged(self) -> Option<Self> {
        self.value
            .checked_mul(MERGE_FACTOR)
            .map(|value| Self { value, ..self })
    }

    /// Whether `value` may appear on a tile.
    #[must_use]
    pub const fn is_valid_value(value: u32) -> bool {
        value.is_power_of_two()
    }
}
