//! Client construction and the request plumbing shared by every resource

use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

use super::transport::{ApiRequest, HttpMethod, ReqwestTransport, Transport};
use crate::{
    Error, Result,
    config::Settings,
    shaping::ContentUrls,
    signing::{Credentials, NonceGenerator, ParameterSet, SignedQuery, codec, merger, signer},
    types::{UploadFile, UploadTarget},
};

/// Convenience type alias for the client over the default reqwest transport
pub type JwPlayerApi = JwPlayerApiGeneric<ReqwestTransport>;

/// JW Platform client, generic over its transport
#[derive(Debug)]
pub struct JwPlayerApiGeneric<T: Transport = ReqwestTransport> {
    /// Configuration settings
    settings: Arc<Settings>,
    /// Account credentials
    credentials: Credentials,
    /// HTTP transport
    transport: Arc<T>,
    /// Nonce source shared by every call on this client
    nonce: NonceGenerator,
    /// Account-level fields signed at construction
    base: SignedQuery,
    /// Link templates for shaping
    urls: ContentUrls,
}

impl JwPlayerApiGeneric<ReqwestTransport> {
    /// Creates a client over `reqwest`, validating the settings first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jwplatform_api::{Credentials, JwPlayerApi, Settings};
    ///
    /// let credentials = Credentials::new("api-key", "api-secret")?;
    /// let api = JwPlayerApi::new(credentials, Settings::default())?;
    /// assert_eq!(api.api_key(), "api-key");
    /// # Ok::<(), jwplatform_api::Error>(())
    /// ```
    pub fn new(credentials: Credentials, settings: Settings) -> Result<Self> {
        settings.validate()?;
        let transport = ReqwestTransport::new(&settings.http)?;
        Ok(Self::with_transport(credentials, settings, transport))
    }
}

impl<T: Transport> JwPlayerApiGeneric<T> {
    /// Creates a client over any transport
    pub fn with_transport(credentials: Credentials, settings: Settings, transport: T) -> Self {
        let nonce = NonceGenerator::with_digits(settings.signing.nonce_digits);
        let base = signer::generate_params(
            credentials.api_key(),
            credentials.secret_key(),
            &nonce,
            None,
        );
        let urls = ContentUrls::new(settings.api.content_base_url.clone());

        Self {
            settings: Arc::new(settings),
            credentials,
            transport: Arc::new(transport),
            nonce,
            base,
            urls,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) fn urls(&self) -> &ContentUrls {
        &self.urls
    }

    /// Sign the account base plus `extra` with a fresh nonce
    pub fn signed_query(&self, extra: &ParameterSet) -> Result<SignedQuery> {
        let merger = merger::with_params(&self.base, self.credentials.secret_key(), &self.nonce)?;
        Ok(merger.merge(extra))
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.settings.api.base_url.trim_end_matches('/'), path)
    }

    fn upload_url(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.settings.api.upload_base_url.trim_end_matches('/'),
            path
        )
    }

    /// Issue one signed call against the management API
    pub(crate) async fn call(
        &self,
        method: HttpMethod,
        path: &str,
        extra: &ParameterSet,
    ) -> Result<Value> {
        let query = self.signed_query(extra)?;
        debug!(?method, path, "calling JW Platform API");
        self.transport
            .execute(ApiRequest::new(method, self.api_url(path), query.into_string()))
            .await
    }

    /// POST a file to the upload host with a one-time key and token
    pub(crate) async fn upload(
        &self,
        path: &str,
        target: &UploadTarget,
        file: UploadFile,
    ) -> Result<Value> {
        let query = codec::stringify(
            &ParameterSet::new()
                .with("api_format", "json")
                .with("key", &target.key)
                .with("token", &target.token),
        );
        debug!(path, bytes = file.bytes.len(), "uploading file");
        self.transport
            .execute(ApiRequest::post(self.upload_url(path), query).with_file(file))
            .await
    }
}

/// Reject a blank required argument before any request is made
pub(crate) fn require<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::invalid_argument(format!("You must provide a {}", name)));
    }
    Ok(value)
}

/// Fail with a remote rejection when the body reports `status: "error"`
pub(crate) fn ensure_ok(body: &Value, key: &str) -> Result<()> {
    if body.get("status").and_then(Value::as_str) != Some("error") {
        return Ok(());
    }
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("the API reported an error");
    Err(Error::remote_rejection(key, message))
}

/// Pull the named entity object out of a response
pub(crate) fn take_entity(mut body: Value, field: &str, key: &str) -> Result<Map<String, Value>> {
    ensure_ok(&body, key)?;
    match body.get_mut(field).map(Value::take) {
        Some(Value::Object(entity)) => Ok(entity),
        _ => Err(Error::remote_rejection(
            key,
            format!("response contains no {}", field),
        )),
    }
}

/// Pull an array of entity objects out of a response
pub(crate) fn take_entities(
    mut body: Value,
    field: &str,
    context: &str,
) -> Result<Vec<Map<String, Value>>> {
    ensure_ok(&body, context)?;
    match body.get_mut(field).map(Value::take) {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(entity) => Ok(entity),
                other => Err(Error::encoding(format!(
                    "expected {} entries to be objects, got {}",
                    field, other
                ))),
            })
            .collect(),
        _ => Err(Error::remote_rejection(
            context,
            format!("response contains no {} list", field),
        )),
    }
}

/// Key of a freshly created entity, e.g. `video.key` or `media.key`
pub(crate) fn created_key(body: &Value, field: &str, context: &str) -> Result<String> {
    ensure_ok(body, context)?;
    body.get(field)
        .and_then(|entity| entity.get("key"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            Error::remote_rejection(context, format!("response carries no {}.key", field))
        })
}
