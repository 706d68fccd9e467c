//! Player projections
//!
//! List results get a fixed summary of fields; a single player keeps every
//! field, camelCased. Both carry `cloudHostedPlayer`, the library URL.

use serde_json::{Map, Value};

use super::{ContentUrls, Shaped, entity_key, shape_each};
use crate::Result;
use crate::signing::case::{recase_keys, to_camel_case};

/// Summary fields, in output order; `cloudHostedPlayer` follows `height`
const SUMMARY_FIELDS: [&str; 10] = [
    "views",
    "height",
    "key",
    "skin",
    "responsive",
    "playlist",
    "name",
    "custom",
    "width",
    "version",
];

const CLOUD_HOSTED_PLAYER: &str = "cloudHostedPlayer";

/// Summary projection used for list results; absent fields become `null`
pub fn shape_player_summary(player: &Map<String, Value>, urls: &ContentUrls) -> Result<Shaped> {
    let key = entity_key(player, "player")?;
    let mut shaped = Map::new();

    for field in SUMMARY_FIELDS {
        shaped.insert(
            field.to_string(),
            player.get(field).cloned().unwrap_or(Value::Null),
        );
        if field == "height" {
            shaped.insert(
                CLOUD_HOSTED_PLAYER.to_string(),
                Value::String(urls.player_library(key)),
            );
        }
    }

    Ok(shaped)
}

/// Full projection used for a single player
pub fn shape_player(player: &Map<String, Value>, urls: &ContentUrls) -> Result<Shaped> {
    let key = entity_key(player, "player")?;
    let mut shaped = player.clone();
    shaped.insert(
        CLOUD_HOSTED_PLAYER.to_string(),
        Value::String(urls.player_library(key)),
    );
    Ok(recase_keys(shaped, to_camel_case))
}

/// Arrays get the summary projection element-wise, a single object the full one
pub fn shape_players(value: Value, urls: &ContentUrls) -> Result<Value> {
    match value {
        Value::Array(_) => shape_each(value, "player", |p| shape_player_summary(p, urls)),
        other => shape_each(other, "player", |p| shape_player(p, urls)),
    }
}
