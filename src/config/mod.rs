//! Configuration management for the JW Platform client
//!
//! This module handles loading endpoint, HTTP, signing and polling settings
//! from defaults, a TOML file and the environment.

pub mod loader;
pub mod settings;

pub use loader::{ConfigLoader, default_config_path};
pub use settings::Settings;
