//! Rebuilding board occupancy after a move.

use rustc_hash::FxHashMap;

use crate::board::{Board, Cell};
use crate::core::{Coordinate, Tile, TileMap};

/// Board and tile map after a move, consistent with each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconciled {
    pub board: Board,
    /// Surviving tiles only. Tiles absorbed by a merge are dropped.
    pub tiles: TileMap,
}

/// Place `updated` tiles on a clean copy of `board`.
///
/// When two tiles claim the same cell (the transient state left by a merge),
/// the strictly greater value wins the cell and the other tile is dropped.
#[must_use]
pub fn reconcile(board: &Board, updated: &TileMap) -> Reconciled {
    let mut next = board.clean();
    let mut occupants: FxHashMap<Coordinate, Tile> = FxHashMap::default();

    for tile in updated.values() {
        let keep = occupants
            .get(&tile.coordinate)
            .map_or(true, |occupant| tile.value > occupant.value);
        if keep {
            next.set(tile.coordinate, Cell::Tile(tile.id));
            occupants.insert(tile.coordinate, *tile);
        }
    }

    let tiles = occupants.into_values().map(|tile| (tile.id, tile)).collect();
    Reconciled { board: next, tiles }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileId;

    #[test]
    fn test_keeps_higher_value_on_collision() {
        let board = Board::with_obstacles(6, &[Coordinate::new(1, 0)]).unwrap();
        let updated: TileMap = [
            Tile::new(TileId(1), Coordinate::new(2, 0), 4),
            Tile::new(TileId(2), Coordinate::new(2, 0), 2),
        ]
        .into_iter()
        .map(|t| (t.id, t))
        .collect();

        let result = reconcile(&board, &updated);

        assert_eq!(result.board.get(Coordinate::new(2, 0)), Some(Cell::Tile(TileId(1))));
        assert_eq!(result.board.get(Coordinate::new(1, 0)), Some(Cell::Obstacle));
        assert_eq!(result.board.tile_count(), 1);
        assert_eq!(result.tiles.len(), 1);
        assert!(result.tiles.contains_key(&TileId(1)));
    }

    #[test]
    fn test_collision_order_does_not_matter() {
        let board = Board::empty(4);
        let updated: TileMap = [
            Tile::new(TileId(1), Coordinate::new(0, 0), 1),
            Tile::new(TileId(2), Coordinate::new(0, 0), 2),
        ]
        .into_iter()
        .map(|t| (t.id, t))
        .collect();

        let result = reconcile(&board, &updated);

        assert_eq!(result.board.get(Coordinate::new(0, 0)), Some(Cell::Tile(TileId(2))));
        assert_eq!(result.tiles.keys().copied().collect::<Vec<_>>(), vec![TileId(2)]);
    }

    #[test]
    fn test_stale_occupancy_cleared() {
        let mut board = Board::empty(4);
        board.set(Coordinate::new(3, 3), Cell::Tile(TileId(1)));
        let updated: TileMap = [(TileId(1), Tile::new(TileId(1), Coordinate::new(0, 3), 2))]
            .into_iter()
            .collect();

        let result = reconcile(&board, &updated);

        assert_eq!(result.board.get(Coordinate::new(3, 3)), Some(Cell::Empty));
        assert_eq!(result.board.get(Coordinate::new(0, 3)), Some(Cell::Tile(TileId(1))));
    }
}
