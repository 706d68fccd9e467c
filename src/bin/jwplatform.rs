//! Command-line client for the JW Platform v1 API
//!
//! # Usage
//!
//! ```bash
//! jwplatform videos list --param result_limit=10
//! jwplatform videos create https://example.com/clip.mp4 -p title=Clip
//! jwplatform thumbnails frame abc123 --position 12.5
//! jwplatform players show p1
//! ```
//!
//! Credentials come from `--api-key`/`--api-secret` or the
//! `JWPLATFORM_API_KEY`/`JWPLATFORM_API_SECRET` environment variables.
//! Results are printed to stdout as JSON; logs go to stderr.

use clap::Parser;

use jwplatform_api::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run(Cli::parse()).await
}
