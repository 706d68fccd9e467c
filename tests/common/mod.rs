//! Common test utilities and helpers
//!
//! Shared setup for integration tests: a client pointed at a wiremock server
//! and a matcher that checks request signatures independently of the crate.

#![allow(dead_code)]

/// Test helper functions
pub mod helpers {
    use jwplatform_api::{Credentials, JwPlayerApi, Settings};
    use sha1::{Digest, Sha1};
    use wiremock::{Match, MockServer, Request};

    pub const API_KEY: &str = "integration-key";
    pub const API_SECRET: &str = "integration-secret";

    /// Settings with both API hosts on the mock server and no poll delay
    pub fn create_test_settings(server: &MockServer) -> Settings {
        let mut settings = Settings::with_base_url(&server.uri());
        settings.thumbnails.poll_interval_ms = 0;
        settings.thumbnails.max_attempts = 3;
        settings
    }

    /// A reqwest-backed client talking to the mock server
    pub fn create_test_client(server: &MockServer) -> JwPlayerApi {
        let credentials = Credentials::new(API_KEY, API_SECRET).unwrap();
        JwPlayerApi::new(credentials, create_test_settings(server)).unwrap()
    }

    /// Matches requests whose `api_signature` is the SHA-1 of the rest of
    /// the query followed by the secret
    pub struct SignedWith(pub &'static str);

    impl Match for SignedWith {
        fn matches(&self, request: &Request) -> bool {
            let Some(query) = request.url.query() else {
                return false;
            };
            let Some((unsigned, signature)) = query.rsplit_once("&api_signature=") else {
                return false;
            };

            let mut hasher = Sha1::new();
            hasher.update(unsigned.as_bytes());
            hasher.update(self.0.as_bytes());
            hex::encode(hasher.finalize()) == signature
        }
    }

    /// Matcher for the test account's secret
    pub fn signed() -> SignedWith {
        SignedWith(API_SECRET)
    }
}
