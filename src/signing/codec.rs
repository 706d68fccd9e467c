//! Query string codec
//!
//! Serialization keeps insertion order and encodes strictly: everything but
//! `A-Z a-z 0-9 - _ . ~` is percent-encoded, so a space becomes `%20`.
//! Lists are written as repeated keys.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use url::form_urlencoded;

use super::params::{ParamValue, ParameterSet};
use crate::{Error, Result};

const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Reject queries whose percent-escapes decode to invalid UTF-8
///
/// Separators are ASCII, so checking the whole query checks every component.
fn check_utf8(query: &str) -> Result<()> {
    percent_decode_str(query)
        .decode_utf8()
        .map(|_| ())
        .map_err(|e| Error::encoding(format!("invalid UTF-8 in query component: {}", e)))
}

fn push_pairs(out: &mut Vec<String>, key: &str, value: &ParamValue) {
    match value {
        ParamValue::List(items) => {
            for item in items {
                push_pairs(out, key, item);
            }
        }
        scalar => out.push(format!("{}={}", encode(key), encode(&scalar.as_text()))),
    }
}

/// Serialize a parameter set to a query string, in insertion order
pub fn stringify(params: &ParameterSet) -> String {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params.iter() {
        push_pairs(&mut pairs, key, value);
    }
    pairs.join("&")
}

/// Parse a query string back into a parameter set
///
/// Values come back as text. A key seen more than once becomes a list.
pub fn parse(query: &str) -> Result<ParameterSet> {
    let query = query.strip_prefix('?').unwrap_or(query);
    check_utf8(query)?;
    let mut params = ParameterSet::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let value = ParamValue::Text(value.into_owned());
        let merged = match params.get(&key).cloned() {
            Some(ParamValue::List(mut items)) => {
                items.push(value);
                ParamValue::List(items)
            }
            Some(existing) => ParamValue::List(vec![existing, value]),
            None => value,
        };
        params.insert(key.into_owned(), merged);
    }

    Ok(params)
}
