//! Splitting a row or column into obstacle-free ranges.
//!
//! Tiles never cross an obstacle, so every move is computed independently
//! on each maximal run of non-obstacle cells.
//!
//! ```
//! use rust_2048::board::{partition, Cell, CellRange};
//!
//! let line = [Cell::Empty, Cell::Empty, Cell::Obstacle, Cell::Empty];
//! let ranges = partition(&line);
//! assert_eq!(ranges.as_slice(), &[CellRange::new(0, 1), CellRange::new(3, 3)]);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::Cell;

/// Closed index interval `[start, end]` within one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRange {
    pub start: usize,
    pub end: usize,
}

impl CellRange {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of cells covered. Never zero.
    #[must_use]
    pub const fn len(self) -> usize {
        self.end - self.start + 1
    }

    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Line indices of this range, in order.
    pub fn indices(self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Ranges of one line. Boards up to 8 wide have at most 4 ranges per line.
pub type LineRanges = SmallVec<[CellRange; 4]>;

/// Partition a line into maximal obstacle-free ranges, ordered by start.
///
/// Obstacles belong to no range. An empty or all-obstacle line yields no
/// ranges.
#[must_use]
pub fn partition(cells: &[Cell]) -> LineRanges {
    let mut ranges = LineRanges::new();
    let mut open: Option<usize> = None;

    for (i, cell) in cells.iter().enumerate() {
        match (cell.is_obstacle(), open) {
            (false, None) => open = Some(i),
            (true, Some(start)) => {
                ranges.push(CellRange::new(start, i - 1));
                open = None;
            }
            _ => {}
        }
    }

    if let Some(start) = open {
        ranges.push(CellRange::new(start, cells.len() - 1));
    }

    ranges
}
