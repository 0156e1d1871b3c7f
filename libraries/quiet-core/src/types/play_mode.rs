/// Play mode policy
use crate::error::QuietError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the queue picks the next/previous track
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    /// Follow the shuffle order, regenerating it at either end
    Shuffle,

    /// Repeat the current track
    Single,

    /// Follow the natural order, wrapping at either end
    #[default]
    Sequence,
}

impl PlayMode {
    /// All modes, ordered by index
    pub const ALL: [PlayMode; 3] = [PlayMode::Shuffle, PlayMode::Single, PlayMode::Sequence];

    /// Stable integer used by host bindings
    pub fn index(self) -> u8 {
        match self {
            PlayMode::Shuffle => 0,
            PlayMode::Single => 1,
            PlayMode::Sequence => 2,
        }
    }

    /// Inverse of [`PlayMode::index`]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Mode that follows this one when the user cycles modes
    ///
    /// Sequence -> Shuffle -> Single -> Sequence
    pub fn next(self) -> Self {
        match self {
            PlayMode::Sequence => PlayMode::Shuffle,
            PlayMode::Shuffle => PlayMode::Single,
            PlayMode::Single => PlayMode::Sequence,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlayMode::Shuffle => "shuffle",
            PlayMode::Single => "single",
            PlayMode::Sequence => "sequence",
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayMode {
    type Err = QuietError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shuffle" => Ok(PlayMode::Shuffle),
            "single" => Ok(PlayMode::Single),
            "sequence" => Ok(PlayMode::Sequence),
            other => Err(QuietError::invalid_argument(format!(
                "unknown play mode: {other}"
            ))),
        }
    }
}
