//! Request signing for the JW Platform v1 API
//!
//! Every outbound request carries `api_format`, `api_key`, `api_nonce`,
//! `api_timestamp` and a trailing `api_signature`, the hex SHA-1 of the
//! serialized parameters immediately followed by the account secret.
//!
//! ## Pipeline
//!
//! 1. [`ParameterSet`] holds the fields in insertion order
//! 2. [`codec::stringify`] serializes them without sorting
//! 3. [`signer::sign`] hashes the serialized text and appends the signature
//! 4. [`merger::with_params`] layers call-specific fields onto an already
//!    signed account-level base, stripping the stale signature and stamping a
//!    fresh nonce and timestamp
//!
//! ## Examples
//!
//! ```rust
//! use jwplatform_api::signing::{Credentials, NonceGenerator, ParameterSet, signer};
//!
//! let credentials = Credentials::new("key", "secret")?;
//! let nonce = NonceGenerator::new();
//! let extra = ParameterSet::new().with("video_key", "abc123");
//!
//! let query = signer::generate_params(
//!     credentials.api_key(),
//!     credentials.secret_key(),
//!     &nonce,
//!     Some(&extra),
//! );
//! assert!(signer::verify(query.as_str(), credentials.secret_key()));
//! # Ok::<(), jwplatform_api::Error>(())
//! ```

pub mod case;
pub mod codec;
pub mod merger;
pub mod nonce;
pub mod params;
pub mod signer;

pub use merger::{ParamMerger, with_params};
pub use nonce::NonceGenerator;
pub use params::{ParamValue, ParameterSet};
pub use signer::{Credentials, SignedQuery};
