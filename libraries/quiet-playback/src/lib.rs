//! Quiet Player - Play Queue
//!
//! Platform-agnostic play-order logic for the Quiet player. Every host
//! binding (Android, iOS, macOS, desktop) calls into this crate instead of
//! carrying its own copy of the queue rules.
//!
//! This crate provides:
//! - Play queue with natural and shuffle orders
//! - Next/previous resolution for Sequence, Single and Shuffle modes
//! - Anchor-relative insertion and removal that keep both orders in sync
//! - Change listeners and a session event fan-out
//! - A player session owning the current track and play mode
//!
//! # Architecture
//!
//! `quiet-playback` is completely platform-agnostic:
//! - No audio decoding or output
//! - No media session / notification code
//! - No transport; queues cross boundaries as [`quiet_core::QueueRecord`]
//!
//! Everything is synchronous. Listeners run inline on the mutating call.
//!
//! # Example: Queue
//!
//! ```rust
//! use quiet_playback::{MusicMetadata, PlayMode, PlayQueue};
//!
//! let tracks = vec![
//!     MusicMetadata::new("a").with_title("First"),
//!     MusicMetadata::new("b").with_title("Second"),
//!     MusicMetadata::new("c").with_title("Third"),
//! ];
//! let mut queue = PlayQueue::new("album-1", Some("Album".to_string()), tracks, None, None)?;
//!
//! let first = queue.get_next(None, PlayMode::Sequence).unwrap();
//! assert_eq!(first.media_id(), "a");
//!
//! // Sequence wraps around
//! let last = queue.get_previous(Some(&first), PlayMode::Sequence).unwrap();
//! assert_eq!(last.media_id(), "c");
//!
//! // Single repeats
//! assert_eq!(queue.get_next(Some(&last), PlayMode::Single), Some(last));
//!
//! queue.add(MusicMetadata::new("d"), Some("a"));
//! assert_eq!(queue.position_of("d"), Some(1));
//! # Ok::<(), quiet_playback::QuietError>(())
//! ```
//!
//! # Example: Session
//!
//! ```rust
//! use quiet_playback::{PlayerSession, SessionConfig, SessionEvent, PlayQueue, MusicMetadata};
//! use std::sync::Arc;
//!
//! let queue = PlayQueue::new("q", None, vec![MusicMetadata::new("a")], None, None)?;
//! let mut session = PlayerSession::with_queue(SessionConfig::default(), queue);
//!
//! session.register_callback(Arc::new(|event: &SessionEvent| {
//!     println!("session event: {event:?}");
//! }));
//!
//! session.skip_to_next();
//! assert_eq!(session.current().map(|t| t.media_id()), Some("a"));
//! # Ok::<(), quiet_playback::QuietError>(())
//! ```

mod config;
mod events;
mod listeners;
mod queue;
mod session;
mod shuffle;

// Public exports
pub use config::SessionConfig;
pub use events::{SessionCallback, SessionEvent};
pub use listeners::{ListenerId, Listeners};
pub use queue::{PlayQueue, QueueListener};
pub use session::PlayerSession;

pub use quiet_core::{MusicMetadata, PlayMode, QueueRecord, QuietError, Result};
