//! Quiet Core
//!
//! Platform-agnostic types and error handling shared by the Quiet play-queue
//! crates and the host bindings that call into them.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `MusicMetadata`, `PlayMode`
//! - **Wire Format**: `QueueRecord`, the map a queue crosses a boundary as
//! - **Error Handling**: Unified `QuietError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use quiet_core::{MusicMetadata, PlayMode, QueueRecord};
//!
//! let track = MusicMetadata::new("track-1")
//!     .with_title("My Favorite Song")
//!     .with_duration_ms(215_000);
//!
//! let record = QueueRecord {
//!     queue_id: Some("favorites".to_string()),
//!     queue: vec![track],
//!     ..Default::default()
//! };
//!
//! assert!(record.to_json().unwrap().contains("\"mediaId\": \"track-1\""));
//! assert_eq!(PlayMode::default().next(), PlayMode::Shuffle);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{QuietError, Result};
pub use types::{MusicMetadata, PlayMode, QueueRecord};
