/// Command-line interface definition
use clap::{Parser, Subcommand};
use quiet_core::PlayMode;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "quiet")]
#[command(about = "Inspect and edit Quiet play-queue files", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: ./quiet.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an empty queue file
    New {
        /// Queue file to create
        file: PathBuf,
        /// Queue id
        #[arg(long, default_value = "")]
        id: String,
        /// Queue title
        #[arg(long)]
        title: Option<String>,
    },
    /// Print the queue in play order
    Show {
        file: PathBuf,
        /// Play mode whose order to print (default: configured mode)
        #[arg(short, long)]
        mode: Option<PlayMode>,
    },
    /// Print the track after an anchor
    Next {
        file: PathBuf,
        /// Media id of the current track
        #[arg(short, long)]
        anchor: Option<String>,
        #[arg(short, long)]
        mode: Option<PlayMode>,
    },
    /// Print the track before an anchor
    Previous {
        file: PathBuf,
        /// Media id of the current track
        #[arg(short, long)]
        anchor: Option<String>,
        #[arg(short, long)]
        mode: Option<PlayMode>,
    },
    /// Add a track, optionally right after another one
    Add {
        file: PathBuf,
        #[arg(long)]
        media_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        subtitle: Option<String>,
        /// Media URI
        #[arg(long)]
        uri: Option<String>,
        /// Duration in milliseconds
        #[arg(long)]
        duration: Option<u64>,
        /// Insert after this media id
        #[arg(long)]
        after: Option<String>,
    },
    /// Remove a track
    Remove { file: PathBuf, media_id: String },
    /// Draw a new shuffle order
    Shuffle { file: PathBuf },
    /// Print the mode that follows MODE (default: configured mode)
    Mode { mode: Option<PlayMode> },
}
