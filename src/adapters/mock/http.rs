//! Mock HTTP client for testing.
//!
//! Provides a configurable mock transport that replays scripted response
//! bodies chunk by chunk, so tests can control exactly where chunk
//! boundaries fall.

use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{ByteStream, Headers, HttpClient, HttpError, StreamingResponse};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Respond with the given status and body chunks
    Stream { status: u16, chunks: Vec<Bytes> },
    /// Deliver the chunks, then fail the body read
    StreamThenError(Vec<Bytes>, HttpError),
    /// Deliver the chunks, then never yield again or end
    Stalled { status: u16, chunks: Vec<Bytes> },
    /// Respond with the given status and no body
    NoBody(u16),
    /// Fail before any response arrives
    Error(HttpError),
}

impl MockResponse {
    /// A 200 response streaming `chunks` in order.
    pub fn stream(chunks: Vec<Bytes>) -> Self {
        MockResponse::Stream {
            status: 200,
            chunks,
        }
    }

    /// A response with status `status` and a single-chunk body.
    pub fn status(status: u16, body: &str) -> Self {
        MockResponse::Stream {
            status,
            chunks: vec![Bytes::from(body.to_string())],
        }
    }
}

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```ignore
/// use chat_widget::adapters::mock::{MockHttpClient, MockResponse};
/// use bytes::Bytes;
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://localhost/v1/chat/completions",
///     MockResponse::stream(vec![Bytes::from("data: [DONE]\n\n")]),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured responses by URL pattern
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a response for a specific URL.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        let default = self.default_response.lock().unwrap();
        default.clone()
    }

    fn body_from(chunks: Vec<Bytes>, error: Option<HttpError>) -> ByteStream {
        let items = chunks
            .into_iter()
            .map(Ok)
            .chain(error.into_iter().map(Err))
            .collect::<Vec<Result<Bytes, HttpError>>>();
        Box::pin(futures::stream::iter(items))
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<StreamingResponse, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));

        match self.get_response(url) {
            Some(MockResponse::Stream { status, chunks }) => {
                Ok(StreamingResponse::new(status, Self::body_from(chunks, None)))
            }
            Some(MockResponse::StreamThenError(chunks, err)) => {
                Ok(StreamingResponse::new(200, Self::body_from(chunks, Some(err))))
            }
            Some(MockResponse::Stalled { status, chunks }) => {
                let body = Self::body_from(chunks, None).chain(futures::stream::pending());
                Ok(StreamingResponse::new(status, Box::pin(body)))
            }
            Some(MockResponse::NoBody(status)) => Ok(StreamingResponse::without_body(status)),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}
