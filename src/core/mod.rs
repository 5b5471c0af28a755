//! Core engine types: coordinates, tiles, configuration, RNG, errors.

pub mod coordinate;
pub mod tile;
pub mod config;
pub mod rng;
pub mod error;

pub use coordinate::{Axis, Coordinate, Direction, LineDirection};
pub use tile::{Tile, TileId, TileMap};
pub use config::{
    GameOptions, RulesConfig, MAX_OBSTACLES, MERGE_ANIMATION_MS, MERGE_FACTOR, MOVE_ANIMATION_MS,
    STARTING_VALUE, SUPPORTED_SIZES, WINNING_VALUE,
};
pub use rng::{GameRng, GameRngState};
pub use error::{EngineError, EngineResult};
