//! Game state and its reducer.
//!
//! `GameState` is a value: `apply` takes the current state and an action
//! and returns the next state, leaving the original untouched. The tile map
//! is persistent, so keeping older states around (undo, snapshots) is cheap.
//!
//! ## Invariant
//!
//! Every tile id in the tile map appears in exactly one board cell, at the
//! tile's own coordinate, and the board references no other ids. Both
//! actions preserve it; `validate` checks it.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::{Board, Cell};
use crate::core::{
    Coordinate, Direction, EngineError, EngineResult, GameOptions, GameRng, Tile, TileId, TileMap,
};
use crate::rules::slide;

/// Actions accepted by the reducer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Put a new tile on an empty cell.
    CreateTile(Tile),
    /// Slide every tile in a direction.
    Move(Direction),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    options: GameOptions,
    board: Board,
    tiles: TileMap,

    /// Set by a move that changed the board, cleared by tile creation.
    has_changed: bool,

    /// Next id handed out by `next_tile`.
    next_tile_id: TileId,
}

impl GameState {
    /// Fresh state for `options`: obstacles scattered, no tiles.
    pub fn new(options: GameOptions, rng: &mut GameRng) -> EngineResult<Self> {
        let board = Board::generate(&options, rng)?;
        Ok(Self::from_board_unchecked(options, board))
    }

    /// Fresh state on a prepared board. Tile cells on `board` are cleared.
    pub fn from_board(board: Board) -> EngineResult<Self> {
        let board = board.clean();
        let options = GameOptions::new(board.size(), board.obstacles().len());
        options.validate()?;
        Ok(Self::from_board_unchecked(options, board))
    }

    fn from_board_unchecked(options: GameOptions, board: Board) -> Self {
        Self {
            options,
            board,
            tiles: TileMap::new(),
            has_changed: false,
            next_tile_id: TileId(1),
        }
    }

    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn tiles(&self) -> &TileMap {
        &self.tiles
    }

    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Whether the last action was a move that changed the board.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.has_changed
    }

    /// Highest tile value, `None` without tiles.
    #[must_use]
    pub fn max_value(&self) -> Option<u32> {
        self.tiles.values().map(|t| t.value).max()
    }

    /// Build the next tile to create at `coordinate`, with a fresh id.
    #[must_use]
    pub fn next_tile(&self, coordinate: Coordinate, value: u32) -> Tile {
        Tile::new(self.next_tile_id, coordinate, value)
    }

    /// Build a tile of `value` on an empty cell drawn uniformly at random.
    pub fn random_tile(&self, rng: &mut GameRng, value: u32) -> EngineResult<Tile> {
        let empty = self.board.empty_cells();
        let coordinate = *rng.choose(&empty).ok_or(EngineError::NoEmptyCells)?;
        Ok(self.next_tile(coordinate, value))
    }

    /// Create a tile of `value` at `coordinate`. Shorthand for applying
    /// `CreateTile` with `next_tile`.
    pub fn with_tile(&self, coordinate: Coordinate, value: u32) -> EngineResult<Self> {
        self.apply(&GameAction::CreateTile(self.next_tile(coordinate, value)))
    }

    /// Reduce `action` over this state.
    pub fn apply(&self, action: &GameAction) -> EngineResult<Self> {
        match action {
            GameAction::CreateTile(tile) => self.create_tile(*tile),
            GameAction::Move(direction) => Ok(self.slide(*direction)),
        }
    }

    fn create_tile(&self, tile: Tile) -> EngineResult<Self> {
        if !Tile::is_valid_value(tile.value) {
            return Err(EngineError::InvalidTileValue { value: tile.value });
        }
        let following = tile.id.next().ok_or(EngineError::TileIdsExhausted)?;
        self.board.check_bounds(tile.coordinate)?;
        if self.board.get(tile.coordinate) != Some(Cell::Empty) {
            return Err(EngineError::CellOccupied {
                coordinate: tile.coordinate,
            });
        }
        if self.tiles.contains_key(&tile.id) {
            return Err(EngineError::InvariantViolation(format!(
                "{} already exists",
                tile.id
            )));
        }

        trace!(id = %tile.id, at = %tile.coordinate, value = tile.value, "creating tile");

        let mut next = self.clone();
        next.board.set(tile.coordinate, Cell::Tile(tile.id));
        next.tiles.insert(tile.id, tile);
        next.has_changed = false;
        next.next_tile_id = next.next_tile_id.max(following);
        Ok(next)
    }

    fn slide(&self, direction: Direction) -> Self {
        let result = slide(&self.board, &self.tiles, direction);

        debug!(
            %direction,
            changed = result.changed,
            merges = result.merges,
            tiles = result.tiles.len(),
            "move resolved"
        );

        if !result.changed {
            return Self {
                has_changed: false,
                ..self.clone()
            };
        }

        Self {
            options: self.options,
            board: result.board,
            tiles: result.tiles,
            has_changed: true,
            next_tile_id: self.next_tile_id,
        }
    }

    /// Check the board shape, the options and the board/tile-map invariant.
    pub fn validate(&self) -> EngineResult<()> {
        let fail = |msg: String| Err(EngineError::InvariantViolation(msg));

        self.board.validate()?;
        self.options.validate()?;

        if self.board.size() != self.options.size {
            return fail(format!(
                "board size {} differs from options size {}",
                self.board.size(),
                self.options.size
            ));
        }

        let obstacles = self.board.obstacles().len();
        if obstacles != self.options.n_obstacles {
            return fail(format!(
                "board holds {} obstacles, options expect {}",
                obstacles, self.options.n_obstacles
            ));
        }

        if let Some(tile) = self.tiles.values().find(|t| !Tile::is_valid_value(t.value)) {
            return Err(EngineError::InvalidTileValue { value: tile.value });
        }

        let mut seen = 0;
        for (coordinate, cell) in self.board.iter() {
            let Some(id) = cell.tile_id() else {
                continue;
            };
            match self.tiles.get(&id) {
                None => return fail(format!("{} at {} is not in the tile map", id, coordinate)),
                Some(tile) if tile.coordinate != coordinate => {
                    return fail(format!(
                        "{} is on cell {} but reports {}",
                        id, coordinate, tile.coordinate
                    ))
                }
                Some(_) => seen += 1,
            }
        }

        // Each board id resolved to a tile at that very cell, so ids are
        // distinct; matching counts leaves no orphans.
        if seen != self.tiles.len() {
            return fail(format!(
                "board holds {} tiles, tile map holds {}",
                seen,
                self.tiles.len()
            ));
        }

        if let Some(id) = self.tiles.keys().find(|id| **id >= self.next_tile_id) {
            return fail(format!("{} not below next id {}", id, self.next_tile_id));
        }

        Ok(())
    }
}
