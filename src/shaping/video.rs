//! Video projection
//!
//! Every raw field is kept and camelCased; `thumbnail`, `preview` and `video`
//! (the embed page) are derived from the key.

use serde_json::{Map, Value};

use super::{ContentUrls, Shaped, entity_key, shape_each};
use crate::Result;
use crate::signing::case::{recase_keys, to_camel_case};

/// JavaScript-style falsiness, which decides when defaults apply
fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f == 0.0),
        Some(_) => false,
    }
}

/// Shape one raw video object
pub fn shape_video(video: &Map<String, Value>, urls: &ContentUrls) -> Result<Shaped> {
    let key = entity_key(video, "video")?.to_string();
    let mut shaped = video.clone();

    if is_falsy(video.get("description")) {
        shaped.insert("description".to_string(), Value::String(String::new()));
    }
    shaped.insert("thumbnail".to_string(), Value::String(urls.thumbnail(&key)));
    if is_falsy(video.get("tags")) {
        shaped.insert("tags".to_string(), Value::Array(Vec::new()));
    }
    shaped.insert("preview".to_string(), Value::String(urls.preview(&key)));
    shaped.insert("video".to_string(), Value::String(urls.embed(&key)));

    Ok(recase_keys(shaped, to_camel_case))
}

/// Shape a raw video object, or each video of an array
pub fn shape_videos(value: Value, urls: &ContentUrls) -> Result<Value> {
    shape_each(value, "video", |video| shape_video(video, urls))
}
