//! Player session
//!
//! Owns one [`PlayQueue`], the current track and the play mode, and fans
//! session events out to every registered [`SessionCallback`]. All calls are
//! expected from a single owner; the session does no locking of its own.

use crate::config::SessionConfig;
use crate::events::{SessionCallback, SessionEvent};
use crate::listeners::{ListenerId, Listeners};
use crate::queue::PlayQueue;
use quiet_core::{MusicMetadata, PlayMode, QueueRecord, QuietError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Playback controller around a play queue
#[derive(Debug)]
pub struct PlayerSession {
    config: SessionConfig,
    queue: PlayQueue,
    current: Option<MusicMetadata>,
    play_mode: PlayMode,
    callbacks: Listeners<dyn SessionCallback>,

    /// Set by the queue listener, drained after every queue call
    queue_dirty: Arc<AtomicBool>,
}

impl PlayerSession {
    /// Create a session with an empty queue
    pub fn new(config: SessionConfig) -> Self {
        Self::with_queue(config, PlayQueue::empty())
    }

    /// Create a session around an existing queue
    pub fn with_queue(config: SessionConfig, queue: PlayQueue) -> Self {
        let mut session = Self {
            play_mode: config.play_mode,
            config,
            queue: PlayQueue::empty(),
            current: None,
            callbacks: Listeners::new(),
            queue_dirty: Arc::new(AtomicBool::new(false)),
        };
        session.attach(queue);
        session
    }

    fn attach(&mut self, mut queue: PlayQueue) {
        if let Some(seed) = self.config.shuffle_seed {
            queue.reseed(seed);
        }
        let dirty = Arc::clone(&self.queue_dirty);
        queue.add_listener(Arc::new(move || dirty.store(true, Ordering::SeqCst)));
        self.queue = queue;
        self.queue_dirty.store(false, Ordering::SeqCst);
    }

    pub fn queue(&self) -> &PlayQueue {
        &self.queue
    }

    pub fn current(&self) -> Option<&MusicMetadata> {
        self.current.as_ref()
    }

    pub fn play_mode(&self) -> PlayMode {
        self.play_mode
    }

    /// Serialized form of the owned queue
    pub fn snapshot(&self) -> QueueRecord {
        self.queue.to_record()
    }

    /// Subscribe to session events
    pub fn register_callback(&mut self, callback: Arc<dyn SessionCallback>) -> ListenerId {
        self.callbacks.register(callback)
    }

    pub fn unregister_callback(&mut self, id: ListenerId) -> bool {
        self.callbacks.unregister(id)
    }

    fn emit(&self, event: &SessionEvent) {
        self.callbacks.notify_all(|c| c.on_event(event));
    }

    fn flush_queue_changes(&self) {
        if self.queue_dirty.swap(false, Ordering::SeqCst) {
            self.emit(&SessionEvent::QueueChanged {
                length: self.queue.len(),
            });
        }
    }

    fn set_current(&mut self, track: Option<MusicMetadata>) {
        let media_id = track.as_ref().map(|t| t.media_id().to_owned());
        self.current = track;
        self.emit(&SessionEvent::MetadataChanged { media_id });
    }

    /// Replace the queue
    ///
    /// The current track survives if the new queue contains it. When the new
    /// queue carries different metadata for it, the current track is
    /// refreshed and `MetadataChanged` is emitted, as for
    /// [`PlayerSession::add_to_queue`].
    pub fn set_queue(&mut self, queue: PlayQueue) {
        info!(
            "Switching to queue '{}' ({} tracks)",
            queue.queue_id(),
            queue.len()
        );
        self.attach(queue);
        self.emit(&SessionEvent::QueueChanged {
            length: self.queue.len(),
        });

        let Some(current_id) = self.current.as_ref().map(|t| t.media_id().to_owned()) else {
            return;
        };
        match self.queue.find_by_media_id(&current_id).cloned() {
            Some(found) if self.current.as_ref().is_some_and(|c| c.same_details(&found)) => {}
            Some(found) => self.set_current(Some(found)),
            None => self.set_current(None),
        }
    }

    /// Change the play mode; returns false if it was already `mode`
    pub fn set_play_mode(&mut self, mode: PlayMode) -> bool {
        if self.play_mode == mode {
            return false;
        }
        debug!("Play mode {} -> {}", self.play_mode, mode);
        self.play_mode = mode;
        self.emit(&SessionEvent::PlayModeChanged { mode });
        true
    }

    /// Advance to the next mode in the cycle and return it
    pub fn cycle_play_mode(&mut self) -> PlayMode {
        let mode = self.play_mode.next();
        self.set_play_mode(mode);
        mode
    }

    /// Move to the next track; `None` when the queue is empty
    pub fn skip_to_next(&mut self) -> Option<MusicMetadata> {
        let anchor = self.current.clone();
        let next = self.queue.get_next(anchor.as_ref(), self.play_mode);
        self.flush_queue_changes();
        self.advance_to(next)
    }

    /// Move to the previous track; `None` when the queue is empty
    pub fn skip_to_previous(&mut self) -> Option<MusicMetadata> {
        let anchor = self.current.clone();
        let previous = self.queue.get_previous(anchor.as_ref(), self.play_mode);
        self.flush_queue_changes();
        self.advance_to(previous)
    }

    fn advance_to(&mut self, track: Option<MusicMetadata>) -> Option<MusicMetadata> {
        let track = track?;
        debug!("Now playing {}", track.media_id());
        self.set_current(Some(track.clone()));
        Some(track)
    }

    /// Jump to a queued track
    pub fn play_from_media_id(&mut self, media_id: &str) -> Result<MusicMetadata> {
        let track = self
            .queue
            .find_by_media_id(media_id)
            .cloned()
            .ok_or_else(|| QuietError::not_found("Track", media_id))?;
        self.set_current(Some(track.clone()));
        Ok(track)
    }

    /// Insert a track after `anchor_media_id` (or at the end)
    ///
    /// Re-adding the current track refreshes its metadata.
    pub fn add_to_queue(&mut self, track: MusicMetadata, anchor_media_id: Option<&str>) -> bool {
        let refreshes_current = self.current.as_ref() == Some(&track);
        let replacement = track.clone();
        let changed = self.queue.add(track, anchor_media_id);
        self.flush_queue_changes();

        if changed && refreshes_current {
            self.set_current(Some(replacement));
        }
        changed
    }

    /// Remove a track from the queue
    ///
    /// Removing the current track keeps it as the anchor; the next skip
    /// resolves from the queue's unknown-anchor policy.
    pub fn remove_from_queue(&mut self, media_id: &str) -> bool {
        let changed = self.queue.remove(media_id);
        self.flush_queue_changes();
        changed
    }

    /// Redraw the shuffle order
    pub fn regenerate_shuffle_order(&mut self) {
        self.queue.regenerate_shuffle_order();
        self.flush_queue_changes();
    }
}

impl Default for PlayerSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
