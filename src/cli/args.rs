//! clap argument definitions for the `jwplatform` binary

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::signing::ParameterSet;

/// Command-line client for the JW Platform v1 API
#[derive(Debug, Parser)]
#[command(name = "jwplatform", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Account API key
    #[arg(long, global = true, env = "JWPLATFORM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Account API secret
    #[arg(long, global = true, env = "JWPLATFORM_API_SECRET", hide_env_values = true)]
    pub api_secret: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage videos
    #[command(subcommand)]
    Videos(VideoCommand),
    /// Manage video thumbnails
    #[command(subcommand)]
    Thumbnails(ThumbnailCommand),
    /// Manage players
    #[command(subcommand)]
    Players(PlayerCommand),
}

#[derive(Debug, Subcommand)]
pub enum VideoCommand {
    /// List videos
    List(FieldArgs),
    /// Show one video
    Show { key: String },
    /// Create a video from a download URL
    Create {
        url: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Upload a local file as a new video
    Upload {
        file: PathBuf,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Update a video's fields
    Update {
        key: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a video
    Delete { key: String },
    /// Create videos from a JSON file of `{downloadUrl, title?, tags?}` entries
    Batch { file: PathBuf },
}

#[derive(Debug, Subcommand)]
pub enum ThumbnailCommand {
    /// Use a frame of the video as its thumbnail
    Frame {
        key: String,
        /// Position of the frame, in seconds
        #[arg(long)]
        position: Option<f64>,
    },
    /// Upload an image as the video's thumbnail
    Upload { key: String, image: PathBuf },
}

#[derive(Debug, Subcommand)]
pub enum PlayerCommand {
    /// List players
    List(FieldArgs),
    /// Show one player
    Show { key: String },
    /// Create a player
    Create(FieldArgs),
    /// Update a player's fields
    Update {
        key: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a player
    Delete { key: String },
}

/// Free-form request fields
#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
    /// Request field, repeatable
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
}

impl FieldArgs {
    pub fn to_params(&self) -> ParameterSet {
        self.params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect()
    }

    /// `None` when no field was given
    pub fn to_optional_params(&self) -> Option<ParameterSet> {
        (!self.params.is_empty()).then(|| self.to_params())
    }
}

/// Parse a `key=value` pair; the value may itself contain `=`
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got `{}`", raw)),
    }
}
