//! Version information

/// Crate version, as set in Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the crate version
pub fn get_version() -> &'static str {
    VERSION
}

/// `User-Agent` sent when the configuration does not override it
pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), VERSION)
}
