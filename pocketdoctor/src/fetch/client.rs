//! HTTP client abstraction for testability.

use std::time::Duration;

use super::error::FetchError;

/// Default timeout for tile package requests in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Raw outcome of a GET request: status code plus payload bytes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP transfer operations.
///
/// The fetcher, not the client, decides what to do with a non-success
/// status, so the client reports the status code and payload as-is and
/// fails only on transport-level errors. This abstraction allows mock
/// clients in tests.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// Real HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new client with the default timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new client with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                reason: format!("failed to read response body: {}", e),
            })?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
pub mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Mock HTTP client for testing.
    ///
    /// Replays a canned response (or transport failure) and counts how many
    /// requests were actually issued.
    pub struct MockHttpClient {
        status: u16,
        body: Vec<u8>,
        transport_failure: Option<String>,
        calls: AtomicUsize,
    }

    impl MockHttpClient {
        /// A client answering every request with `status` and `body`.
        pub fn with_response(status: u16, body: impl Into<Vec<u8>>) -> Self {
            Self {
                status,
                body: body.into(),
                transport_failure: None,
                calls: AtomicUsize::new(0),
            }
        }

        /// A client failing every request at the transport level.
        pub fn with_transport_failure(reason: impl Into<String>) -> Self {
            Self {
                status: 0,
                body: Vec::new(),
                transport_failure: Some(reason.into()),
                calls: AtomicUsize::new(0),
            }
        }

        /// Number of GET requests issued so far.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.transport_failure {
                Some(reason) => Err(FetchError::Transport {
                    url: url.to_string(),
                    reason: reason.clone(),
                }),
                None => Ok(HttpResponse {
                    status: self.status,
                    body: self.body.clone(),
                }),
            }
        }
    }

    #[test]
    fn test_mock_client_success() {
        let mock = MockHttpClient::with_response(200, vec![1, 2, 3, 4]);

        let response = mock.get("http://example.com").unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, vec![1, 2, 3, 4]);
        assert_eq!(mock.calls(), 1);
    }

    #[test]
    fn test_mock_client_transport_failure() {
        let mock = MockHttpClient::with_transport_failure("connection refused");

        let result = mock.get("http://example.com");
        assert!(matches!(result, Err(FetchError::Transport { .. })));
    }

    #[test]
    fn test_response_is_success_bounds() {
        assert!(HttpResponse { status: 200, body: vec![] }.is_success());
        assert!(HttpResponse { status: 204, body: vec![] }.is_success());
        assert!(!HttpResponse { status: 199, body: vec![] }.is_success());
        assert!(!HttpResponse { status: 301, body: vec![] }.is_success());
        assert!(!HttpResponse { status: 404, body: vec![] }.is_success());
    }
}
