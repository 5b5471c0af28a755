//! Board model: cells, the grid, and obstacle-free range partitioning.

pub mod cell;
pub mod grid;
pub mod ranges;

pub use cell::Cell;
pub use grid::Board;
pub use ranges::{partition, CellRange, LineRanges};
