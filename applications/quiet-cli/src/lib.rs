//! Quiet CLI
//!
//! Command-line access to Quiet play-queue files (the JSON queue map hosts
//! exchange). Useful for inspecting what a host persisted and for checking
//! next/previous resolution without a device.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Commands};
pub use commands::run;
pub use config::CliConfig;
pub use error::{CliError, Result};
