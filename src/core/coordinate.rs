//! Grid coordinates, axes and move directions.
//!
//! Coordinates are 0-indexed with `x` the column and `y` the row, so a cell
//! lives at `board[y][x]`.
//!
//! ```
//! use rust_2048::core::{Axis, Coordinate, Direction, LineDirection};
//!
//! let c = Coordinate::new(2, 3);
//! assert_eq!(c.along(Axis::X), 2);
//! assert_eq!(c.with_along(Axis::Y, 0), Coordinate::new(2, 0));
//!
//! assert_eq!(Direction::Right.axis(), Axis::X);
//! assert_eq!(Direction::Right.line_direction(), LineDirection::End);
//! ```

use serde::{Deserialize, Serialize};

/// A cell position on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Coordinate {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Component along the given axis.
    #[must_use]
    pub const fn along(self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Copy with the component along `axis` replaced, the other untouched.
    #[must_use]
    pub const fn with_along(self, axis: Axis, value: usize) -> Self {
        match axis {
            Axis::X => Self { x: value, y: self.y },
            Axis::Y => Self { x: self.x, y: value },
        }
    }

    /// Orthogonal neighbours inside an `size`x`size` grid.
    ///
    /// Order is left, right, up, down; positions off the grid are omitted.
    pub fn neighbours(self, size: usize) -> impl Iterator<Item = Coordinate> {
        let Coordinate { x, y } = self;
        [
            (x > 0).then(|| Coordinate::new(x - 1, y)),
            (x + 1 < size).then(|| Coordinate::new(x + 1, y)),
            (y > 0).then(|| Coordinate::new(x, y - 1)),
            (y + 1 < size).then(|| Coordinate::new(x, y + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis of movement. A horizontal move updates `x`, a vertical one `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Direction of movement within a single row or column.
///
/// `Start` moves tiles toward index 0, `End` toward the last index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineDirection {
    Start,
    End,
}

/// A move intent dispatched by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The axis whose component changes under this move.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Y,
            Direction::Left | Direction::Right => Axis::X,
        }
    }

    /// Where tiles travel within each row (horizontal) or column (vertical).
    #[must_use]
    pub const fn line_direction(self) -> LineDirection {
        match self {
            Direction::Up | Direction::Left => LineDirection::Start,
            Direction::Down | Direction::Right => LineDirection::End,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
