//! Queue wire record
//!
//! The string-keyed map a queue is exchanged as:
//!
//! ```text
//! { "queueId": "...", "queueTitle": "...", "queue": [track...],
//!   "shuffleQueue": ["mediaId", ...], "extras": { ... } }
//! ```
//!
//! The record is plain data; validation happens when a queue is built from it.

use super::MusicMetadata;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Serialized form of a play queue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueRecord {
    /// Required when building a queue; absent only in malformed input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_title: Option<String>,

    #[serde(default)]
    pub queue: Vec<MusicMetadata>,

    /// Media ids in shuffle order; generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuffle_queue: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<Value>,
}

impl QueueRecord {
    /// Parse a record from JSON text
    pub fn from_json(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
