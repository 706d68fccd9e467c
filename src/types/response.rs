//! Response type definitions
//!
//! Small typed views over API responses that are not shaped entities.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Status envelope returned by delete calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// `ok` or `error`
    pub status: String,

    /// Whatever else the API reported (counts, rate limits, ...)
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl StatusResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// One-time key and token for posting a file to the upload host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadTarget {
    pub key: String,
    pub token: String,
}

impl UploadTarget {
    /// Read `link.query.{key,token}` from a create or thumbnail update response
    pub fn from_response(body: &Value, context: &str) -> Result<Self> {
        let query = body.pointer("/link/query");
        let field = |name: &str| {
            query
                .and_then(|q| q.get(name))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        match (field("key"), field("token")) {
            (Some(key), Some(token)) => Ok(Self { key, token }),
            _ => Err(Error::remote_rejection(
                context,
                "response carries no upload link",
            )),
        }
    }
}
