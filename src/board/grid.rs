//! The square game board.
//!
//! Cells are stored row-major: the cell at `(x, y)` is `cells[y * size + x]`,
//! the flat equivalent of `board[y][x]`.
//!
//! ## Usage
//!
//! ```
//! use rust_2048::board::{Board, Cell};
//! use rust_2048::core::{Coordinate, GameOptions, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let board = Board::generate(&GameOptions::new(4, 3), &mut rng).unwrap();
//!
//! assert_eq!(board.obstacles().len(), 3);
//! assert_eq!(board.empty_cells().len(), 13);
//!
//! // Clean boards keep obstacles and drop tile occupancy.
//! assert_eq!(board.clean(), board);
//! ```

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::core::{Axis, Coordinate, EngineError, EngineResult, GameOptions, GameRng, TileMap};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// A `size` x `size` board of empty cells.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Build a fresh board for `options`, scattering obstacles at random.
    ///
    /// Obstacles are placed one at a time, each on a cell drawn uniformly
    /// from the cells still empty.
    pub fn generate(options: &GameOptions, rng: &mut GameRng) -> EngineResult<Self> {
        options.validate()?;

        let mut board = Self::empty(options.size);
        for _ in 0..options.n_obstacles {
            let empty = board.empty_cells();
            let coordinate = *rng.choose(&empty).ok_or(EngineError::NoEmptyCells)?;
            board.set(coordinate, Cell::Obstacle);
        }

        Ok(board)
    }

    /// A board with obstacles at the given positions. Repeated positions
    /// place a single obstacle.
    pub fn with_obstacles(size: usize, obstacles: &[Coordinate]) -> EngineResult<Self> {
        GameOptions::new(size, 0).validate()?;

        let mut board = Self::empty(size);
        for &coordinate in obstacles {
            board.check_bounds(coordinate)?;
            board.set(coordinate, Cell::Obstacle);
        }
        GameOptions::new(size, board.obstacles().len()).validate()?;

        Ok(board)
    }

    /// Check that the grid is non-empty and holds exactly `size * size`
    /// cells.
    pub fn validate(&self) -> EngineResult<()> {
        if self.size == 0 || self.cells.len() != self.size * self.size {
            return Err(EngineError::InvariantViolation(format!(
                "{} cells on a {}x{} board",
                self.cells.len(),
                self.size,
                self.size
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.size && coordinate.y < self.size
    }

    pub(crate) fn check_bounds(&self, coordinate: Coordinate) -> EngineResult<()> {
        if self.contains(coordinate) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                coordinate,
                size: self.size,
            })
        }
    }

    /// Cell at `coordinate`, `None` outside the grid.
    #[must_use]
    pub fn get(&self, coordinate: Coordinate) -> Option<Cell> {
        self.contains(coordinate)
            .then(|| self.cells[self.index(coordinate)])
    }

    pub(crate) fn set(&mut self, coordinate: Coordinate, cell: Cell) {
        let index = self.index(coordinate);
        self.cells[index] = cell;
    }

    fn index(&self, coordinate: Coordinate) -> usize {
        assert!(self.contains(coordinate), "coordinate {} outside board", coordinate);
        coordinate.y * self.size + coordinate.x
    }

    /// Iterate `(coordinate, cell)` in scan order: row by row, then column.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coordinate::new(i % size, i / size), cell))
    }

    /// Coordinates of all empty cells, in scan order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coordinate, _)| coordinate)
            .collect()
    }

    /// Coordinates of all obstacles, in scan order.
    #[must_use]
    pub fn obstacles(&self) -> Vec<Coordinate> {
        self.iter()
            .filter(|(_, cell)| cell.is_obstacle())
            .map(|(coordinate, _)| coordinate)
            .collect()
    }

    /// Number of tile-occupied cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.tile_id().is_some()).count()
    }

    /// Copy with every tile-occupied cell reset to empty. Obstacles stay.
    #[must_use]
    pub fn clean(&self) -> Self {
        Self {
            size: self.size,
            cells: self
                .cells
                .iter()
                .map(|&cell| match cell {
                    Cell::Tile(_) => Cell::Empty,
                    Cell::Empty | Cell::Obstacle => cell,
                })
                .collect(),
        }
    }

    /// One line of cells along `axis`.
    ///
    /// `Axis::X` yields row `index` (cells ordered by x), `Axis::Y` yields
    /// column `index` (cells ordered by y).
    #[must_use]
    pub fn line(&self, axis: Axis, index: usize) -> Vec<Cell> {
        assert!(index < self.size, "line {} outside board", index);
        match axis {
            Axis::X => self.cells[index * self.size..(index + 1) * self.size].to_vec(),
            Axis::Y => (0..self.size)
                .map(|y| self.cells[y * self.size + index])
                .collect(),
        }
    }

    /// Orthogonal neighbours of `coordinate` that could still take part in
    /// play: empty cells, or tiles holding `starting_value`.
    ///
    /// Obstacles and dangling tile references are never available.
    #[must_use]
    pub fn available_neighbours(
        &self,
        tiles: &TileMap,
        coordinate: Coordinate,
        starting_value: u32,
    ) -> Vec<Coordinate> {
        coordinate
            .neighbours(self.size)
            .filter(|&neighbour| match self.cells[self.index(neighbour)] {
                Cell::Empty => true,
                Cell::Obstacle => false,
                Cell::Tile(id) => tiles.get(&id).is_some_and(|t| t.value == starting_value),
            })
            .collect()
    }

    /// Text rendering for logs and debugging: `.` empty, `#` obstacle,
    /// tile values otherwise, `?` for a dangling tile reference.
    #[must_use]
    pub fn render(&self, tiles: &TileMap) -> String {
        let mut out = String::new();
        for row in self.cells.chunks(self.size.max(1)) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".".to_string(),
                    Cell::Obstacle => "#".to_string(),
                    Cell::Tile(id) => tiles
                        .get(id)
                        .map_or_else(|| "?".to_string(), |t| t.value.to_string()),
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Tile, TileId};

    fn tile_board() -> (Board, TileMap) {
        let mut board = Board::with_obstacles(4, &[Coordinate::new(1, 1)]).unwrap();
        let mut tiles = TileMap::new();
        for (id, x, y, value) in [(1, 0, 0, 1), (2, 2, 1, 4), (3, 3, 3, 2)] {
            let tile = Tile::new(TileId(id), Coordinate::new(x, y), value);
            board.set(tile.coordinate, Cell::Tile(tile.id));
            tiles.insert(tile.id, tile);
        }
        (board, tiles)
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty(4);
        assert_eq!(board.size(), 4);
        assert_eq!(board.empty_cells().len(), 16);
        assert!(board.obstacles().is_empty());
        assert_eq!(board.tile_count(), 0);
    }

    #[test]
    fn test_generate_places_obstacles() {
        let mut rng = GameRng::new(42);
        let board = Board::generate(&GameOptions::new(4, 12), &mut rng).unwrap();

        assert_eq!(board.iter().count(), 16);
        assert_eq!(board.obstacles().len(), 12);
        assert_eq!(board.empty_cells().len(), 4);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let options = GameOptions::new(6, 4);
        let a = Board::generate(&options, &mut GameRng::new(9)).unwrap();
        let b = Board::generate(&options, &mut GameRng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_rejects_full_obstacles() {
        let mut rng = GameRng::new(1);
        assert!(matches!(
            Board::generate(&GameOptions::new(4, 16), &mut rng),
            Err(EngineError::TooManyObstacles { .. })
        ));
    }

    #[test]
    fn test_with_obstacles_bounds() {
        assert!(matches!(
            Board::with_obstacles(4, &[Coordinate::new(4, 0)]),
            Err(EngineError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_with_obstacles_counts_distinct_positions() {
        let board = Board::with_obstacles(2, &[Coordinate::new(0, 0); 4]).unwrap();
        assert_eq!(board.obstacles(), vec![Coordinate::new(0, 0)]);

        let all = [
            Coordinate::new(0, 0),
            Coordinate::new(1, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 1),
        ];
        assert!(matches!(
            Board::with_obstacles(2, &all),
            Err(EngineError::TooManyObstacles { obstacles: 4, cells: 4 })
        ));
    }

    #[test]
    fn test_validate_shape() {
        assert!(Board::empty(3).validate().is_ok());
        assert!(Board::empty(0).validate().is_err());

        let short: Board = serde_json::from_str(r#"{"size":2,"cells":["Empty"]}"#).unwrap();
        assert!(matches!(short.validate(), Err(EngineError::InvariantViolation(_))));
    }

    #[test]
    fn test_empty_cells_scan_order() {
        let board = Board::with_obstacles(2, &[Coordinate::new(0, 0)]).unwrap();
        assert_eq!(
            board.empty_cells(),
            vec![Coordinate::new(1, 0), Coordinate::new(0, 1), Coordinate::new(1, 1)]
        );
    }

    #[test]
    fn test_get_outside() {
        let board = Board::empty(4);
        assert_eq!(board.get(Coordinate::new(3, 3)), Some(Cell::Empty));
        assert_eq!(board.get(Coordinate::new(4, 0)), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let (board, _) = tile_board();
        let mut copy = board.clone();
        copy.set(Coordinate::new(0, 0), Cell::Empty);

        assert_eq!(board.get(Coordinate::new(0, 0)), Some(Cell::Tile(TileId(1))));
        assert_eq!(copy.get(Coordinate::new(0, 0)), Some(Cell::Empty));
    }

    #[test]
    fn test_clean_keeps_obstacles() {
        let (board, _) = tile_board();
        let clean = board.clean();

        assert_eq!(clean.tile_count(), 0);
        assert_eq!(clean.obstacles(), vec![Coordinate::new(1, 1)]);
        assert_eq!(board.tile_count(), 3);
    }

    #[test]
    fn test_lines() {
        let (board, _) = tile_board();

        assert_eq!(
            board.line(Axis::X, 1),
            vec![Cell::Empty, Cell::Obstacle, Cell::Tile(TileId(2)), Cell::Empty]
        );
        assert_eq!(
            board.line(Axis::Y, 0),
            vec![Cell::Tile(TileId(1)), Cell::Empty, Cell::Empty, Cell::Empty]
        );
        assert_eq!(
            board.line(Axis::Y, 3),
            vec![Cell::Empty, Cell::Empty, Cell::Empty, Cell::Tile(TileId(3))]
        );
    }

    #[test]
    fn test_available_neighbours() {
        let (board, tiles) = tile_board();

        // (1, 0): left holds a starting tile, right is empty, below is an obstacle.
        let n = board.available_neighbours(&tiles, Coordinate::new(1, 0), 1);
        assert_eq!(n, vec![Coordinate::new(0, 0), Coordinate::new(2, 0)]);

        // (2, 2): the tile above has value 4.
        let n = board.available_neighbours(&tiles, Coordinate::new(2, 2), 1);
        assert_eq!(
            n,
            vec![Coordinate::new(1, 2), Coordinate::new(3, 2), Coordinate::new(2, 3)]
        );
    }

    #[test]
    fn test_render() {
        let (board, tiles) = tile_board();
        assert_eq!(board.render(&tiles), "1 . . .\n. # 4 .\n. . . .\n. . . 2\n");
    }
}
