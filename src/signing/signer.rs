//! Signed query construction
//!
//! The signature is the hex SHA-1 digest of the serialized parameters
//! concatenated with the account secret, appended as `api_signature`.

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use std::fmt;

use super::codec;
use super::nonce::NonceGenerator;
use super::params::ParameterSet;
use crate::{Error, Result};

/// Name of the trailing signature field
pub const SIGNATURE_KEY: &str = "api_signature";

/// Account credentials; the secret never leaves this process
#[derive(Debug)]
pub struct Credentials {
    api_key: String,
    secret_key: SecretString,
}

impl Credentials {
    /// Create credentials, rejecting blank values
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let secret_key = secret_key.into();

        if api_key.trim().is_empty() {
            return Err(Error::invalid_argument("You must provide an api key"));
        }
        if secret_key.trim().is_empty() {
            return Err(Error::invalid_argument("You must provide a secret key"));
        }

        Ok(Self {
            api_key,
            secret_key: SecretString::from(secret_key),
        })
    }

    /// Read `JWPLATFORM_API_KEY` and `JWPLATFORM_API_SECRET`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("JWPLATFORM_API_KEY")
            .map_err(|_| Error::config("JWPLATFORM_API_KEY is not set"))?;
        let secret_key = std::env::var("JWPLATFORM_API_SECRET")
            .map_err(|_| Error::config("JWPLATFORM_API_SECRET is not set"))?;
        Self::new(api_key, secret_key)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn secret_key(&self) -> &SecretString {
        &self.secret_key
    }
}

/// A query string ending in `&api_signature=<hex>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedQuery(String);

impl SignedQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The hex signature carried by this query
    pub fn signature(&self) -> Option<&str> {
        split_signature(&self.0).map(|(_, signature)| signature)
    }

    /// Decode the query, signature included
    pub fn params(&self) -> Result<ParameterSet> {
        codec::parse(&self.0)
    }
}

impl fmt::Display for SignedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn split_signature(query: &str) -> Option<(&str, &str)> {
    let marker = format!("{}=", SIGNATURE_KEY);
    if let Some(signature) = query.strip_prefix(&marker) {
        return Some(("", signature));
    }
    let marker = format!("&{}", marker);
    query
        .rfind(&marker)
        .map(|idx| (&query[..idx], &query[idx + marker.len()..]))
}

fn digest(query: &str, secret: &SecretString) -> String {
    let mut hasher = Sha1::new();
    hasher.update(query.as_bytes());
    hasher.update(secret.expose_secret().as_bytes());
    hex::encode(hasher.finalize())
}

/// Serialize `params` in insertion order and append their signature
///
/// An empty set signs the empty string and yields `api_signature=<hex>` alone.
pub fn sign(params: &ParameterSet, secret: &SecretString) -> SignedQuery {
    let query = codec::stringify(params);
    let signature = digest(&query, secret);
    if query.is_empty() {
        return SignedQuery(format!("{}={}", SIGNATURE_KEY, signature));
    }
    SignedQuery(format!("{}&{}={}", query, SIGNATURE_KEY, signature))
}

/// Check that a signed query's signature matches the text before it
pub fn verify(signed: &str, secret: &SecretString) -> bool {
    split_signature(signed).is_some_and(|(query, signature)| digest(query, secret) == signature)
}

/// Build and sign the authentication fields plus optional caller fields
///
/// Caller fields win on key collision but keep the slot of the field they
/// replace, so `api_*` stay first.
pub fn generate_params(
    api_key: &str,
    secret: &SecretString,
    nonce: &NonceGenerator,
    custom: Option<&ParameterSet>,
) -> SignedQuery {
    let mut params = ParameterSet::new()
        .with("api_format", "json")
        .with("api_key", api_key)
        .with("api_nonce", nonce.next())
        .with("api_timestamp", chrono::Utc::now().timestamp());

    if let Some(custom) = custom {
        params.extend(custom);
    }

    sign(&params, secret)
}
