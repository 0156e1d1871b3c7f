//! Music metadata
//!
//! The track value carried by a play queue. Serializes to the track record
//! shape exchanged with host bindings:
//!
//! ```text
//! { "mediaId": "...", "title": "...", "subtitle": "...", "mediaUri": "...",
//!   "iconUri": "...", "duration": 180000, "extras": { ... } }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::hash::{Hash, Hasher};
use std::time::Duration;

/// Track metadata
///
/// Identity is the `media_id` alone: two values with the same id compare
/// equal even if their display fields differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicMetadata {
    media_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    media_uri: Option<String>,

    /// Artwork location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon_uri: Option<String>,

    /// Duration in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<u64>,

    /// Opaque payload, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extras: Option<Value>,
}

impl MusicMetadata {
    /// Create metadata with only an id
    pub fn new(media_id: impl Into<String>) -> Self {
        Self {
            media_id: media_id.into(),
            title: None,
            subtitle: None,
            media_uri: None,
            icon_uri: None,
            duration: None,
            extras: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_media_uri(mut self, uri: impl Into<String>) -> Self {
        self.media_uri = Some(uri.into());
        self
    }

    pub fn with_icon_uri(mut self, uri: impl Into<String>) -> Self {
        self.icon_uri = Some(uri.into());
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration = Some(duration_ms);
        self
    }

    pub fn with_extras(mut self, extras: Value) -> Self {
        self.extras = Some(extras);
        self
    }

    pub fn media_id(&self) -> &str {
        &self.media_id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn media_uri(&self) -> Option<&str> {
        self.media_uri.as_deref()
    }

    pub fn icon_uri(&self) -> Option<&str> {
        self.icon_uri.as_deref()
    }

    pub fn duration_ms(&self) -> Option<u64> {
        self.duration
    }

    /// Duration as a `std::time::Duration`
    pub fn duration(&self) -> Option<Duration> {
        self.duration.map(Duration::from_millis)
    }

    pub fn extras(&self) -> Option<&Value> {
        self.extras.as_ref()
    }

    /// Title if present, otherwise the media id
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.media_id)
    }

    /// Field-by-field comparison, unlike `==` which only looks at the id
    pub fn same_details(&self, other: &Self) -> bool {
        self.media_id == other.media_id
            && self.title == other.title
            && self.subtitle == other.subtitle
            && self.media_uri == other.media_uri
            && self.icon_uri == other.icon_uri
            && self.duration == other.duration
            && self.extras == other.extras
    }
}

impl PartialEq for MusicMetadata {
    fn eq(&self, other: &Self) -> bool {
        self.media_id == other.media_id
    }
}

impl Eq for MusicMetadata {}

impl Hash for MusicMetadata {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.media_id.hash(state);
    }
}
