//! HTTP client trait abstraction.
//!
//! Provides a trait-based abstraction for the streaming POST the completion
//! client issues, enabling dependency injection and mocking in tests.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::collections::HashMap;
use std::pin::Pin;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// Response body delivered as chunks of bytes in transport order.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, HttpError>> + Send>>;

/// Response whose body has not been read yet.
///
/// The body is `None` when the transport has nothing readable to offer
/// (for example a `204 No Content` reply).
pub struct StreamingResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body, if readable
    pub body: Option<ByteStream>,
}

impl StreamingResponse {
    /// Create a response with a readable body.
    pub fn new(status: u16, body: ByteStream) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Some(body),
        }
    }

    /// Create a response without a body.
    pub fn without_body(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Attach response headers.
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl std::fmt::Debug for StreamingResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamingResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("has_body", &self.body.is_some())
            .finish()
    }
}

/// HTTP client errors.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpError {
    /// Connection failed
    ConnectionFailed(String),
    /// Request timeout
    Timeout(String),
    /// IO error while reading the body
    Io(String),
    /// Invalid URL
    InvalidUrl(String),
    /// Other error
    Other(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            HttpError::Timeout(msg) => write!(f, "Request timeout: {}", msg),
            HttpError::Io(msg) => write!(f, "IO error: {}", msg),
            HttpError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            HttpError::Other(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// Trait for the HTTP transport used by the completion client.
///
/// Implementations include the production reqwest-based client and the
/// scripted mock client used in tests.
///
/// # Example
///
/// ```ignore
/// use chat_widget::traits::{Headers, HttpClient};
///
/// async fn status_of<C: HttpClient>(client: &C) -> u16 {
///     let response = client
///         .post_stream("http://localhost:8080/v1/chat/completions", "{}", &Headers::new())
///         .await
///         .unwrap();
///     response.status
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a POST request and return as soon as the response head arrives.
    ///
    /// The status is reported as-is; deciding what a non-success status
    /// means is left to the caller. The body is read incrementally through
    /// [`StreamingResponse::body`].
    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<StreamingResponse, HttpError>;
}
