//! Session Events
//!
//! Event-based communication between a [`crate::PlayerSession`] and the
//! host surfaces that mirror it (media session, notification, UI channel).
//! Events are emitted at key points:
//! - Current track changes (skip, explicit play, metadata refresh)
//! - Play mode changes
//! - Queue structure changes (add/remove, shuffle regeneration, replacement)

use quiet_core::PlayMode;
use serde::{Deserialize, Serialize};

/// Events emitted by the player session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Current track changed
    MetadataChanged {
        /// Media id of the new current track, `None` when cleared
        media_id: Option<String>,
    },

    /// Play mode changed
    PlayModeChanged {
        /// The new mode
        mode: PlayMode,
    },

    /// Queue changed (tracks added/removed, shuffle order redrawn, queue replaced)
    QueueChanged {
        /// New queue length
        length: usize,
    },
}

/// Subscriber to session events
///
/// Any `Fn(&SessionEvent) + Send + Sync` closure is a callback.
pub trait SessionCallback: Send + Sync {
    fn on_event(&self, event: &SessionEvent);
}

impl<F> SessionCallback for F
where
    F: Fn(&SessionEvent) + Send + Sync,
{
    fn on_event(&self, event: &SessionEvent) {
        self(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn events_serialize_with_variant_name() {
        let event = SessionEvent::PlayModeChanged {
            mode: PlayMode::Shuffle,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"PlayModeChanged":{"mode":"shuffle"}}"#);

        let back: SessionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn closures_are_callbacks() {
        let seen = std::sync::Arc::new(Mutex::new(Vec::new()));
        let sink = std::sync::Arc::clone(&seen);
        let callback = move |event: &SessionEvent| sink.lock().unwrap().push(event.clone());

        callback.on_event(&SessionEvent::QueueChanged { length: 3 });

        assert_eq!(
            *seen.lock().unwrap(),
            vec![SessionEvent::QueueChanged { length: 3 }]
        );
    }
}
