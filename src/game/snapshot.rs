//! Serializable session snapshots.
//!
//! A snapshot carries the RNG position, so a restored session spawns the
//! same tiles the original would have.

use serde::{Deserialize, Serialize};

use super::session::GameStatus;
use super::state::GameState;
use crate::core::{EngineResult, GameRngState, RulesConfig};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub rules: RulesConfig,
    /// `None` exactly when `status` is Setup.
    pub state: Option<GameState>,
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> EngineResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode with bincode. Consistency is checked by `GameSession::restore`.
    pub fn from_bytes(bytes: &[u8]) -> EngineResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
