//! Client facade for the JW Platform v1 API
//!
//! [`JwPlayerApi`] exposes video, thumbnail and player operations. Each call
//! validates its arguments before any I/O, signs a fresh query through the
//! merger, goes through a [`Transport`] and shapes the JSON that comes back.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use jwplatform_api::{Credentials, JwPlayerApi, Settings};
//!
//! # tokio_test::block_on(async {
//! let credentials = Credentials::from_env()?;
//! let api = JwPlayerApi::new(credentials, Settings::default())?;
//!
//! let video = api.get_video("abc123").await?;
//! println!("{}", video["thumbnail"]);
//! # Ok::<(), jwplatform_api::Error>(())
//! # });
//! ```

pub mod api;
pub mod players;
pub mod thumbnails;
pub mod transport;
pub mod videos;

pub use api::{JwPlayerApi, JwPlayerApiGeneric};
pub use transport::{ApiRequest, HttpMethod, ReqwestTransport, Transport};
