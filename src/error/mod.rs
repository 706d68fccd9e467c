//! Error handling for the JW Platform client
//!
//! This module defines the error type shared by the signing pipeline,
//! the response shapers and the client facade.

pub mod types;

pub use types::{Error, Result};
