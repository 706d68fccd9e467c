//! Key casing transforms
//!
//! The wire format uses snake_case keys while the client works with camelCase
//! internally. Conversions only touch keys at the top level; the API never
//! nests parameters.

use serde_json::{Map, Value};

use crate::{Error, Result};

/// Split an identifier into lowercase words
///
/// Boundaries are non-alphanumeric characters, a lowercase letter or digit
/// followed by an uppercase letter, and the last capital of an acronym that
/// starts a new word (`APIKey` -> `api`, `key`). Digits stay attached to the
/// word before them, so wire names such as `md5` and `h264` survive a round
/// trip unchanged (`sourceUrl2` -> `source_url2`).
fn words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `videoKey` -> `video_key`
pub fn to_snake_case(input: &str) -> String {
    words(input).join("_")
}

/// `video_key` -> `videoKey`
pub fn to_camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, word) in words(input).iter().enumerate() {
        if i == 0 {
            out.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

fn recase(value: Value, convert: fn(&str) -> String) -> Result<Value> {
    match value {
        Value::Object(map) => Ok(Value::Object(recase_keys(map, convert))),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(Value::String(convert(&s))),
                other => Err(Error::encoding(format!(
                    "cannot change the case of array element {}",
                    other
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Value::String(s) => Ok(Value::String(convert(&s))),
        other => Err(Error::encoding(format!(
            "expected a mapping, array or string, got {}",
            other
        ))),
    }
}

/// Convert the keys of one mapping level, keeping values and order
pub fn recase_keys(map: Map<String, Value>, convert: fn(&str) -> String) -> Map<String, Value> {
    map.into_iter().map(|(k, v)| (convert(&k), v)).collect()
}

/// camelCase the keys of a mapping, each string of an array, or a string
pub fn camelize(value: Value) -> Result<Value> {
    recase(value, to_camel_case)
}

/// snake_case the keys of a mapping, each string of an array, or a string
pub fn snakeize(value: Value) -> Result<Value> {
    recase(value, to_snake_case)
}
