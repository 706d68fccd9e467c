//! Utility functions and helpers

pub mod version;

pub use version::{VERSION, default_user_agent, get_version};
