//! Board cells.

use serde::{Deserialize, Serialize};

use crate::core::TileId;

/// Content of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// Permanent for the whole session. Blocks sliding and merging.
    Obstacle,
    /// Back-reference to the tile standing here.
    Tile(TileId),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub const fn is_obstacle(self) -> bool {
        matches!(self, Cell::Obstacle)
    }

    /// The tile id if this cell is occupied.
    #[must_use]
    pub const fn tile_id(self) -> Option<TileId> {
        match self {
            Cell::Tile(id) => Some(id),
            Cell::Empty | Cell::Obstacle => None,
        }
    }
}
