//! Command-line interface
//!
//! Argument definitions live in [`args`]; [`run`] loads configuration,
//! builds the client and dispatches one subcommand.

pub mod args;
pub mod run;

pub use args::{Cli, Commands, PlayerCommand, ThumbnailCommand, VideoCommand};
pub use run::{execute, run};
