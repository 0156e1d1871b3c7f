//! Command implementations
//!
//! Each command loads the queue file, works on a [`PlayQueue`] and returns the
//! text to print. Commands that change the queue write it back. Reading
//! commands write it back too when the shuffle order had to be generated or
//! redrawn, so later runs resolve against the same order.

use crate::cli::Commands;
use crate::config::CliConfig;
use crate::error::{CliError, Result};
use quiet_core::{MusicMetadata, PlayMode, QueueRecord};
use quiet_playback::{PlayQueue, SessionConfig};
use std::fmt::Write as _;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Run one command and return its output
pub fn run(command: Commands, config: &CliConfig) -> Result<String> {
    let session = &config.session;

    match command {
        Commands::New { file, id, title } => {
            let record = QueueRecord {
                queue_id: Some(id),
                queue_title: title,
                ..Default::default()
            };
            let queue = PlayQueue::from_record(record)?;
            save_queue(&file, &queue)?;
            Ok(format!("Created {}", file.display()))
        }
        Commands::Show { file, mode } => {
            let (queue, generated) = load_queue(&file, session)?;
            if generated {
                save_queue(&file, &queue)?;
            }
            Ok(render_queue(&queue, mode.unwrap_or(session.play_mode)))
        }
        Commands::Next { file, anchor, mode } => step(
            &file,
            anchor.as_deref(),
            mode.unwrap_or(session.play_mode),
            Direction::Next,
            session,
        ),
        Commands::Previous { file, anchor, mode } => step(
            &file,
            anchor.as_deref(),
            mode.unwrap_or(session.play_mode),
            Direction::Previous,
            session,
        ),
        Commands::Add {
            file,
            media_id,
            title,
            subtitle,
            uri,
            duration,
            after,
        } => {
            let mut track = MusicMetadata::new(media_id);
            if let Some(title) = title {
                track = track.with_title(title);
            }
            if let Some(subtitle) = subtitle {
                track = track.with_subtitle(subtitle);
            }
            if let Some(uri) = uri {
                track = track.with_media_uri(uri);
            }
            if let Some(duration) = duration {
                track = track.with_duration_ms(duration);
            }

            let (mut queue, _) = load_queue(&file, session)?;
            let line = render_track(&track);
            if !queue.add(track, after.as_deref()) {
                return Err(CliError::Queue(quiet_core::QuietError::invalid_argument(
                    "media id must not be empty",
                )));
            }
            save_queue(&file, &queue)?;
            Ok(format!("Added {line}"))
        }
        Commands::Remove { file, media_id } => {
            let (mut queue, _) = load_queue(&file, session)?;
            if queue.remove(&media_id) {
                save_queue(&file, &queue)?;
                Ok(format!("Removed {media_id}"))
            } else {
                Ok(format!("{media_id} is not queued"))
            }
        }
        Commands::Shuffle { file } => {
            let (mut queue, _) = load_queue(&file, session)?;
            queue.regenerate_shuffle_order();
            save_queue(&file, &queue)?;
            Ok(render_queue(&queue, PlayMode::Shuffle))
        }
        Commands::Mode { mode } => {
            let mode = mode.unwrap_or(session.play_mode);
            Ok(mode.next().to_string())
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Next,
    Previous,
}

fn step(
    file: &Path,
    anchor: Option<&str>,
    mode: PlayMode,
    direction: Direction,
    session: &SessionConfig,
) -> Result<String> {
    let (mut queue, generated) = load_queue(file, session)?;

    let redrawn = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&redrawn);
    queue.add_listener(Arc::new(move || flag.store(true, Ordering::SeqCst)));

    // Unknown anchors still resolve, through the queue's fallback policy
    let anchor = anchor.map(|id| {
        queue
            .find_by_media_id(id)
            .cloned()
            .unwrap_or_else(|| MusicMetadata::new(id))
    });

    let track = match direction {
        Direction::Next => queue.get_next(anchor.as_ref(), mode),
        Direction::Previous => queue.get_previous(anchor.as_ref(), mode),
    };
    debug!(
        "{:?} from {:?} in {} mode",
        direction,
        anchor.as_ref().map(MusicMetadata::media_id),
        mode
    );

    if generated || redrawn.load(Ordering::SeqCst) {
        info!("Shuffle order changed; saving {}", file.display());
        save_queue(file, &queue)?;
    }

    Ok(track.map_or_else(|| "(no track)".to_string(), |t| render_track(&t)))
}

/// Read a queue file, applying the configured shuffle seed
///
/// The flag is true when the file had no shuffle order and one was generated.
pub fn load_queue(path: &Path, session: &SessionConfig) -> Result<(PlayQueue, bool)> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let record = QueueRecord::from_json(&text)?;
    let generated = record.shuffle_queue.is_none();
    let queue = match session.shuffle_seed {
        Some(seed) => PlayQueue::from_record_seeded(record, seed)?,
        None => PlayQueue::from_record(record)?,
    };
    debug!("Loaded {} tracks from {}", queue.len(), path.display());
    Ok((queue, generated))
}

/// Write a queue file as pretty JSON
pub fn save_queue(path: &Path, queue: &PlayQueue) -> Result<()> {
    let text = queue.to_json()?;
    std::fs::write(path, text + "\n").map_err(|e| CliError::io(path, e))
}

/// One line per track, in the order `mode` plays them
pub fn render_queue(queue: &PlayQueue, mode: PlayMode) -> String {
    let mut out = String::new();
    let name = if queue.queue_id().is_empty() {
        "(anonymous)"
    } else {
        queue.queue_id()
    };
    let _ = write!(out, "{name}");
    if let Some(title) = queue.title() {
        let _ = write!(out, " - {title}");
    }
    let _ = write!(out, " [{mode}, {} tracks]", queue.len());

    for (index, track) in queue.ordered(mode).into_iter().enumerate() {
        let _ = write!(out, "\n{:>3}. {}", index + 1, render_track(track));
    }
    out
}

/// `id  title - subtitle  (m:ss)`
pub fn render_track(track: &MusicMetadata) -> String {
    let mut line = format!("{}  {}", track.media_id(), track.display_title());
    if let Some(subtitle) = track.subtitle() {
        let _ = write!(line, " - {subtitle}");
    }
    if let Some(ms) = track.duration_ms() {
        let _ = write!(line, "  ({})", format_duration(ms));
    }
    line
}

fn format_duration(ms: u64) -> String {
    let seconds = ms / 1000;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
