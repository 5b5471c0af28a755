//! Sliding and merging within a row or column.
//!
//! Each obstacle-free range of a line is compacted on its own. The `End`
//! direction walks the range back to front, so a single "toward the first
//! slot" pass serves both directions.
//!
//! ## Merge bookkeeping
//!
//! When two equal tiles meet, the earlier one (closer to the wall) doubles
//! in place and the later one is reported at the same coordinate with its
//! value unchanged. `reconcile` then keeps only the higher value on the
//! board. A tile produced by a merge cannot merge again during the move.

use smallvec::SmallVec;
use tracing::warn;

use crate::board::{partition, Cell, CellRange};
use crate::core::{Axis, LineDirection, Tile, TileMap};

/// Outcome of resolving one range or one line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineMove {
    /// A tile moved or a merge happened.
    pub changed: bool,

    /// Number of merges performed.
    pub merges: usize,

    /// New state of every tile found in the line, absorbed tiles included.
    pub updated: TileMap,
}

impl LineMove {
    /// Fold another outcome into this one. Ranges never share tiles.
    pub fn absorb(&mut self, other: LineMove) {
        self.changed |= other.changed;
        self.merges += other.merges;
        self.updated = std::mem::take(&mut self.updated).union(other.updated);
    }
}

/// Resolve a move within one obstacle-free range of `cells`.
///
/// `cells` is the whole line; coordinates written along `axis` are line
/// indices. Cells referencing tiles missing from `tiles` are skipped.
#[must_use]
pub fn resolve_range(
    tiles: &TileMap,
    cells: &[Cell],
    range: CellRange,
    direction: LineDirection,
    axis: Axis,
) -> LineMove {
    let slots: SmallVec<[usize; 8]> = match direction {
        LineDirection::Start => range.indices().collect(),
        LineDirection::End => range.indices().rev().collect(),
    };

    let mut outcome = LineMove::default();
    let mut open = 0;
    let mut previous: Option<Tile> = None;

    for &slot in &slots {
        let Some(id) = cells[slot].tile_id() else {
            continue;
        };
        let Some(&current) = tiles.get(&id) else {
            warn!(%id, slot, "skipping cell with unknown tile");
            continue;
        };

        let grown = previous
            .filter(|prev| prev.value == current.value)
            .and_then(Tile::merged);

        match grown {
            Some(grown) => {
                let merged_at = current.coordinate.with_along(axis, slots[open - 1]);
                outcome.updated.insert(grown.id, grown);
                outcome.updated.insert(current.id, current.moved_to(merged_at));
                outcome.changed = true;
                outcome.merges += 1;
                previous = None;
            }
            None => {
                let target = current.coordinate.with_along(axis, slots[open]);
                let moved = current.moved_to(target);
                outcome.changed |= target != current.coordinate;
                outcome.updated.insert(moved.id, moved);
                previous = Some(moved);
                open += 1;
            }
        }
    }

    outcome
}

/// Resolve a move across a whole row or column, range by range.
#[must_use]
pub fn resolve_line(
    tiles: &TileMap,
    cells: &[Cell],
    direction: LineDirection,
    axis: Axis,
) -> LineMove {
    let mut outcome = LineMove::default();
    for range in partition(cells) {
        outcome.absorb(resolve_range(tiles, cells, range, direction, axis));
    }
    outcome
}
