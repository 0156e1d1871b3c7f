mod metadata;
mod play_mode;
mod record;

pub use metadata::MusicMetadata;
pub use play_mode::PlayMode;
pub use record::QueueRecord;
