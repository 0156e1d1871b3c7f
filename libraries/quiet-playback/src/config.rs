//! Session configuration

use quiet_core::PlayMode;
use serde::{Deserialize, Serialize};

/// Configuration for a player session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Initial play mode (default: Sequence)
    pub play_mode: PlayMode,

    /// Fixed shuffle seed for every queue the session owns (default: random)
    pub shuffle_seed: Option<u64>,
}
