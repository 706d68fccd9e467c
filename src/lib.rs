//! JW Platform API client
//!
//! A signed-request client for the JW Platform v1 management API. It covers
//! videos, thumbnails and players and ships a `jwplatform` command-line tool
//! over the same facade.
//!
//! # Architecture
//!
//! - [`signing`]: parameter sets, the nonce generator, the canonical query
//!   codec, the SHA-1 signer and the merger that re-signs a base query per call
//! - [`shaping`]: pure transforms from raw API entities to the public field
//!   naming, with derived thumbnail, preview and player links
//! - [`client`]: the [`JwPlayerApi`] facade and its [`Transport`] seam
//! - [`config`]: TOML and environment configuration
//!
//! # Usage
//!
//! ```bash
//! export JWPLATFORM_API_KEY=... JWPLATFORM_API_SECRET=...
//! jwplatform videos show abc123
//! ```
//!
//! # Examples
//!
//! ```rust
//! use jwplatform_api::{Credentials, JwPlayerApi, Settings};
//!
//! # fn example() -> jwplatform_api::Result<()> {
//! let credentials = Credentials::new("api-key", "api-secret")?;
//! let api = JwPlayerApi::new(credentials, Settings::default())?;
//! assert_eq!(api.api_key(), "api-key");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod shaping;
pub mod signing;
pub mod types;
pub mod utils;

pub use client::{JwPlayerApi, JwPlayerApiGeneric, ReqwestTransport, Transport};
pub use config::Settings;
pub use error::{Error, Result};
pub use shaping::Shaped;
pub use signing::{Credentials, ParamValue, ParameterSet, SignedQuery};
pub use types::{
    BatchContent, PlayerParams, StatusResponse, ThumbnailOptions, UploadFile, UploadTarget,
    VideoParams,
};
