//! Play queue
//!
//! Ordered track list plus a shuffle order over the same media ids.
//!
//! ```text
//! natural:  [A] [B] [C] [D]      Sequence / Single
//! shuffle:  [C] [A] [D] [B]      Shuffle
//! ```
//!
//! The queue does not track the current track or the play mode; both are
//! passed in per call by the owner (see [`crate::PlayerSession`]).
//!
//! Next/previous resolution:
//!
//! | mode     | no anchor          | anchor at boundary             | anchor not queued     |
//! |----------|--------------------|--------------------------------|-----------------------|
//! | Sequence | first / last       | wrap to first / last           | first / last          |
//! | Single   | first / last       | anchor                         | anchor                |
//! | Shuffle  | shuffle first/last | regenerate, new first / last   | shuffle first         |

use crate::listeners::{ListenerId, Listeners};
use crate::shuffle;
use quiet_core::{MusicMetadata, PlayMode, QueueRecord, QuietError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Receives structural change notifications from a [`PlayQueue`]
///
/// Called synchronously, with no payload; re-read the queue (or its
/// [`PlayQueue::to_record`] form) to see the new state.
pub trait QueueListener: Send + Sync {
    fn on_queue_changed(&self);
}

impl<F> QueueListener for F
where
    F: Fn() + Send + Sync,
{
    fn on_queue_changed(&self) {
        self();
    }
}

/// Track queue with sequence, single and shuffle resolution
#[derive(Debug)]
pub struct PlayQueue {
    queue_id: String,
    title: Option<String>,

    /// Natural (insertion) order
    tracks: Vec<MusicMetadata>,

    /// Media ids of `tracks`, permuted
    shuffle_order: Vec<String>,

    extras: Option<Value>,
    rng: StdRng,
    listeners: Listeners<dyn QueueListener>,
}

impl PlayQueue {
    /// Build a queue from its parts
    ///
    /// Without `shuffle_order` a fresh random order is generated. Fails with
    /// `InvalidArgument` on empty or duplicate media ids, or when the given
    /// shuffle order is not a permutation of the track ids.
    pub fn new(
        queue_id: impl Into<String>,
        title: Option<String>,
        tracks: Vec<MusicMetadata>,
        shuffle_order: Option<Vec<String>>,
        extras: Option<Value>,
    ) -> Result<Self> {
        Self::assemble(
            queue_id.into(),
            title,
            tracks,
            shuffle_order,
            extras,
            StdRng::from_entropy(),
        )
    }

    /// The empty queue: anonymous id, no title, no tracks
    pub fn empty() -> Self {
        Self {
            queue_id: String::new(),
            title: None,
            tracks: Vec::new(),
            shuffle_order: Vec::new(),
            extras: None,
            rng: StdRng::from_entropy(),
            listeners: Listeners::new(),
        }
    }

    /// Build a queue from its wire record
    pub fn from_record(record: QueueRecord) -> Result<Self> {
        Self::from_record_with_rng(record, StdRng::from_entropy())
    }

    /// Like [`PlayQueue::from_record`], with a fixed shuffle seed
    pub fn from_record_seeded(record: QueueRecord, seed: u64) -> Result<Self> {
        Self::from_record_with_rng(record, StdRng::seed_from_u64(seed))
    }

    fn from_record_with_rng(record: QueueRecord, rng: StdRng) -> Result<Self> {
        let queue_id = record
            .queue_id
            .ok_or_else(|| QuietError::invalid_argument("queue id is required"))?;

        Self::assemble(
            queue_id,
            record.queue_title,
            record.queue,
            record.shuffle_queue,
            record.extras,
            rng,
        )
    }

    /// Parse a queue from wire JSON
    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_record(QueueRecord::from_json(text)?)
    }

    fn assemble(
        queue_id: String,
        title: Option<String>,
        tracks: Vec<MusicMetadata>,
        shuffle_order: Option<Vec<String>>,
        extras: Option<Value>,
        mut rng: StdRng,
    ) -> Result<Self> {
        let mut seen = HashSet::with_capacity(tracks.len());
        for track in &tracks {
            if track.media_id().is_empty() {
                return Err(QuietError::invalid_argument("media id must not be empty"));
            }
            if !seen.insert(track.media_id()) {
                return Err(QuietError::invalid_argument(format!(
                    "duplicate media id: {}",
                    track.media_id()
                )));
            }
        }

        let shuffle_order = match shuffle_order {
            Some(order) => {
                shuffle::validate_permutation(&tracks, &order)?;
                order
            }
            None => shuffle::shuffled_ids(&tracks, &mut rng),
        };

        debug!(
            "Built queue '{}' with {} tracks",
            queue_id,
            tracks.len()
        );

        Ok(Self {
            queue_id,
            title,
            tracks,
            shuffle_order,
            extras,
            rng,
            listeners: Listeners::new(),
        })
    }

    /// Replace the random source with a seeded one
    ///
    /// Affects future regenerations only; the current shuffle order is kept.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn queue_id(&self) -> &str {
        &self.queue_id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn extras(&self) -> Option<&Value> {
        self.extras.as_ref()
    }

    /// Tracks in natural order
    pub fn tracks(&self) -> &[MusicMetadata] {
        &self.tracks
    }

    /// Media ids in shuffle order
    pub fn shuffle_order(&self) -> &[String] {
        &self.shuffle_order
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn contains(&self, media_id: &str) -> bool {
        self.position_of(media_id).is_some()
    }

    /// Index in natural order
    pub fn position_of(&self, media_id: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.media_id() == media_id)
    }

    fn shuffle_position(&self, media_id: &str) -> Option<usize> {
        self.shuffle_order.iter().position(|id| id == media_id)
    }

    pub fn find_by_media_id(&self, media_id: &str) -> Option<&MusicMetadata> {
        self.tracks.iter().find(|t| t.media_id() == media_id)
    }

    /// Tracks in the order `mode` plays them
    pub fn ordered(&self, mode: PlayMode) -> Vec<&MusicMetadata> {
        match mode {
            PlayMode::Shuffle => self
                .shuffle_order
                .iter()
                .filter_map(|id| self.find_by_media_id(id))
                .collect(),
            PlayMode::Sequence | PlayMode::Single => self.tracks.iter().collect(),
        }
    }

    fn shuffle_track(&self, index: usize) -> Option<MusicMetadata> {
        let id = self.shuffle_order.get(index)?;
        self.find_by_media_id(id).cloned()
    }

    fn first_in(&self, mode: PlayMode) -> Option<MusicMetadata> {
        match mode {
            PlayMode::Shuffle => self.shuffle_track(0),
            PlayMode::Sequence | PlayMode::Single => self.tracks.first().cloned(),
        }
    }

    fn last_in(&self, mode: PlayMode) -> Option<MusicMetadata> {
        match mode {
            PlayMode::Shuffle => self.shuffle_track(self.shuffle_order.len().checked_sub(1)?),
            PlayMode::Sequence | PlayMode::Single => self.tracks.last().cloned(),
        }
    }

    /// Track that plays after `anchor` under `mode`
    ///
    /// Returns `None` only for an empty queue. In shuffle mode, moving past
    /// the last shuffled track regenerates the shuffle order (and notifies
    /// listeners) so shuffle playback never runs out.
    pub fn get_next(&mut self, anchor: Option<&MusicMetadata>, mode: PlayMode) -> Option<MusicMetadata> {
        if self.tracks.is_empty() {
            return None;
        }
        let Some(anchor) = anchor else {
            return self.first_in(mode);
        };

        match mode {
            PlayMode::Single => Some(anchor.clone()),
            PlayMode::Sequence => {
                let next = match self.position_of(anchor.media_id()) {
                    Some(index) if index + 1 < self.tracks.len() => index + 1,
                    _ => 0,
                };
                self.tracks.get(next).cloned()
            }
            PlayMode::Shuffle => match self.shuffle_position(anchor.media_id()) {
                None => self.shuffle_track(0),
                Some(index) if index + 1 == self.shuffle_order.len() => {
                    self.regenerate_shuffle_order();
                    self.shuffle_track(0)
                }
                Some(index) => self.shuffle_track(index + 1),
            },
        }
    }

    /// Track that plays before `anchor` under `mode`
    ///
    /// Mirror of [`PlayQueue::get_next`]. An anchor missing from the shuffle
    /// order restarts at the first shuffled track, as it does going forward.
    pub fn get_previous(
        &mut self,
        anchor: Option<&MusicMetadata>,
        mode: PlayMode,
    ) -> Option<MusicMetadata> {
        if self.tracks.is_empty() {
            return None;
        }
        let Some(anchor) = anchor else {
            return self.last_in(mode);
        };

        match mode {
            PlayMode::Single => Some(anchor.clone()),
            PlayMode::Sequence => {
                let previous = match self.position_of(anchor.media_id()) {
                    Some(index) if index > 0 => index - 1,
                    _ => self.tracks.len() - 1,
                };
                self.tracks.get(previous).cloned()
            }
            PlayMode::Shuffle => match self.shuffle_position(anchor.media_id()) {
                None => self.shuffle_track(0),
                Some(0) => {
                    self.regenerate_shuffle_order();
                    self.last_in(PlayMode::Shuffle)
                }
                Some(index) => self.shuffle_track(index - 1),
            },
        }
    }

    /// Insert `track` after `anchor_media_id` (or at the end)
    ///
    /// The track goes right after the anchor in both the natural and the
    /// shuffle order; a missing or unknown anchor appends to both. A track
    /// whose id is already queued replaces the old entry. When the anchor is
    /// the track itself, the entry is updated in place.
    ///
    /// Returns false (and leaves the queue untouched) for an empty media id.
    pub fn add(&mut self, track: MusicMetadata, anchor_media_id: Option<&str>) -> bool {
        if track.media_id().is_empty() {
            warn!("Ignoring track with empty media id");
            return false;
        }

        let media_id = track.media_id().to_owned();

        if anchor_media_id == Some(media_id.as_str()) {
            if let Some(index) = self.position_of(&media_id) {
                debug!("Updated track {} in queue '{}'", media_id, self.queue_id);
                self.tracks[index] = track;
                self.notify_changed();
                return true;
            }
        }

        self.detach(&media_id);

        let positions = anchor_media_id.and_then(|anchor| {
            Some((self.position_of(anchor)?, self.shuffle_position(anchor)?))
        });
        let (natural_at, shuffle_at) = match positions {
            Some((natural, shuffled)) => (natural + 1, shuffled + 1),
            None => (self.tracks.len(), self.shuffle_order.len()),
        };

        self.tracks.insert(natural_at, track);
        self.shuffle_order.insert(shuffle_at, media_id.clone());

        debug!(
            "Added track {} to queue '{}' at {} (shuffle {})",
            media_id, self.queue_id, natural_at, shuffle_at
        );
        self.notify_changed();
        true
    }

    /// Remove every entry with `media_id` from both orders
    ///
    /// Returns false, without notifying, if nothing was removed.
    pub fn remove(&mut self, media_id: &str) -> bool {
        if !self.detach(media_id) {
            return false;
        }

        debug!("Removed track {} from queue '{}'", media_id, self.queue_id);
        self.notify_changed();
        true
    }

    fn detach(&mut self, media_id: &str) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.media_id() != media_id);
        self.shuffle_order.retain(|id| id != media_id);
        self.tracks.len() != before
    }

    /// Draw a new shuffle order over the current tracks
    pub fn regenerate_shuffle_order(&mut self) {
        self.shuffle_order = shuffle::shuffled_ids(&self.tracks, &mut self.rng);
        debug!(
            "Regenerated shuffle order for queue '{}' ({} tracks)",
            self.queue_id,
            self.shuffle_order.len()
        );
        self.notify_changed();
    }

    /// Register a change listener
    pub fn add_listener(&mut self, listener: Arc<dyn QueueListener>) -> ListenerId {
        self.listeners.register(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unregister(id)
    }

    fn notify_changed(&self) {
        self.listeners.notify_all(|l| l.on_queue_changed());
    }

    /// Serialized form
    pub fn to_record(&self) -> QueueRecord {
        QueueRecord {
            queue_id: Some(self.queue_id.clone()),
            queue_title: self.title.clone(),
            queue: self.tracks.clone(),
            shuffle_queue: Some(self.shuffle_order.clone()),
            extras: self.extras.clone(),
        }
    }

    /// Serialized form as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        self.to_record().to_json()
    }
}

impl Default for PlayQueue {
    fn default() -> Self {
        Self::empty()
    }
}
