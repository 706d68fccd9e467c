//! HTTP transport seam
//!
//! The facade only needs "send this request, give me the JSON body". The
//! trait keeps tests free of sockets; [`ReqwestTransport`] is the real thing.

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, CONTENT_TYPE},
    multipart::{Form, Part},
};
use serde_json::Value;

use crate::{Error, Result, config::settings::HttpSettings, types::UploadFile};

/// Longest slice of an error body quoted in a transport error
const ERROR_BODY_LIMIT: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// One outbound request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Endpoint URL without query string
    pub url: String,
    /// Encoded query string, without the leading `?`
    pub query: String,
    /// Multipart `file` part, for uploads
    pub file: Option<UploadFile>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: query.into(),
            file: None,
        }
    }

    pub fn get(url: impl Into<String>, query: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url, query)
    }

    pub fn post(url: impl Into<String>, query: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url, query)
    }

    pub fn with_file(mut self, file: UploadFile) -> Self {
        self.file = Some(file);
        self
    }

    /// URL with the query string attached
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            self.url.clone()
        } else {
            format!("{}?{}", self.url, self.query)
        }
    }
}

/// Something that can execute an [`ApiRequest`] and return its JSON body
///
/// Implementations fail on network errors, non-2xx statuses and bodies that
/// are not JSON. They never retry.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn execute(&self, request: ApiRequest) -> Result<Value>;
}

/// [`Transport`] over a pooled `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a client with the configured timeout and user agent
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(settings.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let full_url = request.full_url();
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&full_url),
            HttpMethod::Post => self.client.post(&full_url),
        }
        .header(ACCEPT, "application/json");

        builder = match request.file {
            Some(file) => {
                let mut part = Part::bytes(file.bytes).file_name(file.file_name);
                if let Some(content_type) = file.content_type.as_deref() {
                    part = part.mime_str(content_type)?;
                }
                builder.multipart(Form::new().part("file", part))
            }
            None => builder.header(CONTENT_TYPE, "application/x-www-form-urlencoded"),
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let snippet: String = body.chars().take(ERROR_BODY_LIMIT).collect();
            return Err(Error::transport(format!(
                "HTTP {} from {}: {}",
                status, request.url, snippet
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            Error::transport(format!("non-JSON response from {}: {}", request.url, e))
        })
    }
}
