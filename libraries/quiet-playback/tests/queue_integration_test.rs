//! Queue integration tests
//!
//! Real-world scenarios: a host hands over a queue map, the user presses
//! next/previous, toggles play modes and edits the queue while playing.

use quiet_playback::{
    MusicMetadata, PlayMode, PlayQueue, PlayerSession, QueueRecord, SessionConfig, SessionEvent,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ===== Test Helpers =====

fn create_track(id: &str, title: &str, duration_ms: u64) -> MusicMetadata {
    MusicMetadata::new(id)
        .with_title(title)
        .with_subtitle("Test Artist")
        .with_media_uri(format!("https://example.invalid/{id}.mp3"))
        .with_duration_ms(duration_ms)
}

fn host_payload() -> String {
    json!({
        "queueId": "playlist-42",
        "queueTitle": "Evening",
        "queue": [
            { "mediaId": "1", "title": "One", "duration": 180000 },
            { "mediaId": "2", "title": "Two", "duration": 200000 },
            { "mediaId": "3", "title": "Three", "duration": 210000 }
        ],
        "shuffleQueue": ["2", "3", "1"],
        "extras": { "origin": "playlist" }
    })
    .to_string()
}

fn media_ids(queue: &PlayQueue) -> Vec<&str> {
    queue.tracks().iter().map(MusicMetadata::media_id).collect()
}

// ===== Boundary Tests =====

#[test]
fn test_queue_from_host_payload() {
    let queue = PlayQueue::from_json(&host_payload()).unwrap();

    assert_eq!(queue.queue_id(), "playlist-42");
    assert_eq!(queue.title(), Some("Evening"));
    assert_eq!(media_ids(&queue), vec!["1", "2", "3"]);
    assert_eq!(queue.shuffle_order(), ["2", "3", "1"]);
    assert_eq!(queue.extras(), Some(&json!({ "origin": "playlist" })));
    assert_eq!(queue.find_by_media_id("2").unwrap().duration_ms(), Some(200_000));
}

#[test]
fn test_payload_without_shuffle_order_gets_one() {
    let payload = json!({
        "queueId": "p",
        "queue": [{ "mediaId": "a" }, { "mediaId": "b" }]
    })
    .to_string();

    let queue = PlayQueue::from_json(&payload).unwrap();
    let mut order = queue.shuffle_order().to_vec();
    order.sort();
    assert_eq!(order, ["a", "b"]);
}

#[test]
fn test_payload_with_bad_shuffle_order_is_rejected() {
    let payload = json!({
        "queueId": "p",
        "queue": [{ "mediaId": "a" }, { "mediaId": "b" }],
        "shuffleQueue": ["a", "a"]
    })
    .to_string();

    let err = PlayQueue::from_json(&payload).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_payload_with_duplicate_tracks_is_rejected() {
    let payload = json!({
        "queueId": "p",
        "queue": [{ "mediaId": "a" }, { "mediaId": "a" }]
    })
    .to_string();

    assert!(PlayQueue::from_json(&payload).unwrap_err().is_invalid_argument());
}

#[test]
fn test_payload_without_queue_id_is_rejected() {
    let payload = json!({ "queue": [{ "mediaId": "a" }] }).to_string();
    assert!(PlayQueue::from_json(&payload).unwrap_err().is_invalid_argument());
}

#[test]
fn test_serialized_form_matches_payload_shape() {
    let queue = PlayQueue::from_json(&host_payload()).unwrap();
    let value = serde_json::to_value(queue.to_record()).unwrap();

    assert_eq!(value["queueId"], "playlist-42");
    assert_eq!(value["queueTitle"], "Evening");
    assert_eq!(value["queue"][0]["mediaId"], "1");
    assert_eq!(value["queue"][0]["duration"], 180_000);
    assert_eq!(value["shuffleQueue"], json!(["2", "3", "1"]));
}

// ===== Navigation Tests =====

#[test]
fn test_next_previous_buttons_in_sequence() {
    let mut queue = PlayQueue::new(
        "album",
        None,
        vec![
            create_track("A", "Track A", 180_000),
            create_track("B", "Track B", 180_000),
            create_track("C", "Track C", 180_000),
        ],
        None,
        None,
    )
    .unwrap();

    let a = queue.get_next(None, PlayMode::Sequence).unwrap();
    let b = queue.get_next(Some(&a), PlayMode::Sequence).unwrap();
    let c = queue.get_next(Some(&b), PlayMode::Sequence).unwrap();
    assert_eq!(
        [a.media_id(), b.media_id(), c.media_id()],
        ["A", "B", "C"]
    );

    // Wraps both ways
    assert_eq!(queue.get_next(Some(&c), PlayMode::Sequence), Some(a.clone()));
    assert_eq!(queue.get_previous(Some(&a), PlayMode::Sequence), Some(c.clone()));
    assert_eq!(queue.get_previous(None, PlayMode::Sequence), Some(c));
}

#[test]
fn test_empty_queue_has_no_next_or_previous() {
    let mut queue = PlayQueue::empty();
    for mode in PlayMode::ALL {
        assert_eq!(queue.get_next(None, mode), None);
        assert_eq!(queue.get_previous(None, mode), None);
    }
}

#[test]
fn test_shuffle_follows_host_order_then_redraws() {
    let mut queue = PlayQueue::from_record_seeded(
        QueueRecord::from_json(&host_payload()).unwrap(),
        1234,
    )
    .unwrap();
    let changes = Arc::new(AtomicUsize::new(0));
    let hits = Arc::clone(&changes);
    queue.add_listener(Arc::new(move || {
        hits.fetch_add(1, Ordering::SeqCst);
    }));

    let mut played = Vec::new();
    let mut current = None;
    for _ in 0..3 {
        current = queue.get_next(current.as_ref(), PlayMode::Shuffle);
        played.push(current.as_ref().unwrap().media_id().to_string());
    }
    assert_eq!(played, ["2", "3", "1"]);
    assert_eq!(changes.load(Ordering::SeqCst), 0);

    // Past the end: a new order is drawn and playback continues from its head
    let next = queue.get_next(current.as_ref(), PlayMode::Shuffle).unwrap();
    assert_eq!(changes.load(Ordering::SeqCst), 1);
    assert_eq!(next.media_id(), queue.shuffle_order()[0]);
}

#[test]
fn test_mode_switch_mid_playback() {
    let mut queue = PlayQueue::from_json(&host_payload()).unwrap();
    let current = queue.find_by_media_id("1").cloned().unwrap();

    assert_eq!(queue.get_next(Some(&current), PlayMode::Single), Some(current.clone()));
    assert_eq!(
        queue.get_next(Some(&current), PlayMode::Sequence).unwrap().media_id(),
        "2"
    );
    // "1" is last in the shuffle order ["2", "3", "1"]; going back gives "3"
    assert_eq!(
        queue.get_previous(Some(&current), PlayMode::Shuffle).unwrap().media_id(),
        "3"
    );
}

// ===== Editing Tests =====

#[test]
fn test_play_next_inserts_after_current() {
    let mut queue = PlayQueue::from_json(&host_payload()).unwrap();

    queue.add(create_track("9", "Nine", 100_000), Some("1"));

    assert_eq!(media_ids(&queue), vec!["1", "9", "2", "3"]);
    assert_eq!(queue.shuffle_order(), ["2", "3", "1", "9"]);
    assert_eq!(
        queue.shuffle_order().iter().filter(|id| *id == "9").count(),
        1
    );
    let current = queue.find_by_media_id("1").cloned().unwrap();
    assert_eq!(
        queue.get_next(Some(&current), PlayMode::Sequence).unwrap().media_id(),
        "9"
    );
}

#[test]
fn test_remove_then_navigate_from_removed_track() {
    let mut queue = PlayQueue::from_json(&host_payload()).unwrap();
    let removed = queue.find_by_media_id("2").cloned().unwrap();

    assert!(queue.remove("2"));
    assert_eq!(media_ids(&queue), vec!["1", "3"]);
    assert_eq!(queue.shuffle_order(), ["3", "1"]);

    // The removed track is now an unknown anchor
    assert_eq!(
        queue.get_next(Some(&removed), PlayMode::Sequence).unwrap().media_id(),
        "1"
    );
    assert_eq!(
        queue.get_previous(Some(&removed), PlayMode::Sequence).unwrap().media_id(),
        "3"
    );
    assert_eq!(
        queue.get_next(Some(&removed), PlayMode::Shuffle).unwrap().media_id(),
        "3"
    );
}

// ===== Session Tests =====

#[test]
fn test_session_round_trip_through_host() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);

    let queue = PlayQueue::from_json(&host_payload()).unwrap();
    let mut session = PlayerSession::with_queue(SessionConfig::default(), queue);
    session.register_callback(Arc::new(move |event: &SessionEvent| {
        sink.lock().unwrap().push(event.clone());
    }));

    session.play_from_media_id("3").unwrap();
    session.skip_to_next();
    session.set_play_mode(PlayMode::Single);
    session.skip_to_next();
    session.add_to_queue(create_track("4", "Four", 1_000), Some("1"));

    assert_eq!(session.current().unwrap().media_id(), "1");
    assert_eq!(
        *events.lock().unwrap(),
        vec![
            SessionEvent::MetadataChanged {
                media_id: Some("3".to_string())
            },
            SessionEvent::MetadataChanged {
                media_id: Some("1".to_string())
            },
            SessionEvent::PlayModeChanged {
                mode: PlayMode::Single
            },
            SessionEvent::MetadataChanged {
                media_id: Some("1".to_string())
            },
            SessionEvent::QueueChanged { length: 4 },
        ]
    );

    // The host re-reads the queue after a change
    let snapshot = PlayQueue::from_record(session.snapshot()).unwrap();
    assert_eq!(media_ids(&snapshot), vec!["1", "4", "2", "3"]);
}
