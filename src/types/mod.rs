//! Type definitions for the JW Platform client
//!
//! This module contains the typed inputs accepted by the facade and the small
//! response structures it returns besides shaped entities.

pub mod request;
pub mod response;

pub use request::{BatchContent, PlayerParams, ThumbnailOptions, UploadFile, VideoParams};
pub use response::{StatusResponse, UploadTarget};
