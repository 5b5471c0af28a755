//! Whole-board moves.

use super::reconcile::{reconcile, Reconciled};
use super::resolver::{resolve_line, LineMove};
use crate::board::Board;
use crate::core::{Direction, TileMap};

/// Result of sliding every row or column of a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    pub changed: bool,
    pub merges: usize,
    pub board: Board,
    pub tiles: TileMap,
}

/// Slide the whole board in `direction`.
///
/// Horizontal moves resolve every row, vertical moves every column. The
/// inputs are untouched; the result carries a reconciled board and the
/// surviving tiles.
#[must_use]
pub fn slide(board: &Board, tiles: &TileMap, direction: Direction) -> Slide {
    let axis = direction.axis();
    let line_direction = direction.line_direction();

    // Rows are indexed by y and hold cells along x, columns the reverse.
    let mut outcome = LineMove::default();
    for index in 0..board.size() {
        let cells = board.line(axis, index);
        outcome.absorb(resolve_line(tiles, &cells, line_direction, axis));
    }

    let Reconciled { board, tiles } = reconcile(board, &outcome.updated);
    Slide {
        changed: outcome.changed,
        merges: outcome.merges,
        board,
        tiles,
    }
}

/// Whether sliding in `direction` would change anything.
#[must_use]
pub fn can_slide(board: &Board, tiles: &TileMap, direction: Direction) -> bool {
    slide(board, tiles, direction).changed
}
