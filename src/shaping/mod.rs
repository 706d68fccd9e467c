//! Response shaping
//!
//! Turns raw API entities into the client's public field naming, adding
//! links derived from each entity's key. Shapers are pure: no I/O, no caching.

pub mod player;
pub mod video;

pub use player::{shape_player, shape_player_summary, shape_players};
pub use video::{shape_video, shape_videos};

use serde_json::{Map, Value};

use crate::{Error, Result};

/// A shaped entity, keys in their original order
pub type Shaped = Map<String, Value>;

/// Link templates over the content host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentUrls {
    base: String,
}

impl ContentUrls {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn thumbnail(&self, key: &str) -> String {
        format!("{}/thumbs/{}.jpg", self.base, key)
    }

    pub fn preview(&self, key: &str) -> String {
        format!("{}/previews/{}", self.base, key)
    }

    pub fn embed(&self, key: &str) -> String {
        format!("{}/players/{}.html", self.base, key)
    }

    pub fn player_library(&self, key: &str) -> String {
        format!("{}/libraries/{}.js", self.base, key)
    }
}

impl Default for ContentUrls {
    fn default() -> Self {
        Self::new("https://content.jwplatform.com")
    }
}

/// The entity's `key`, which every derived link needs
fn entity_key<'a>(entity: &'a Map<String, Value>, kind: &str) -> Result<&'a str> {
    entity
        .get("key")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::encoding(format!("{} object has no string key", kind)))
}

/// Apply `shape` to an object, or element-wise to an array of objects
fn shape_each(
    value: Value,
    kind: &str,
    shape: impl Fn(&Map<String, Value>) -> Result<Shaped>,
) -> Result<Value> {
    match value {
        Value::Object(map) => shape(&map).map(Value::Object),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => shape(&map).map(Value::Object),
                other => Err(Error::encoding(format!("expected a {} object, got {}", kind, other))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        other => Err(Error::encoding(format!(
            "expected a {} object or array, got {}",
            kind, other
        ))),
    }
}
