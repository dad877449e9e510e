//! Reqwest-based HTTP client adapter.
//!
//! This module provides the production transport, implementing the
//! [`HttpClient`] trait from `crate::traits`.

use async_trait::async_trait;
use futures_util::StreamExt;

use crate::traits::{Headers, HttpClient, HttpError, StreamingResponse};

/// HTTP client implementation using reqwest.
///
/// # Example
///
/// ```ignore
/// use chat_widget::adapters::ReqwestHttpClient;
/// use chat_widget::traits::{Headers, HttpClient};
///
/// let client = ReqwestHttpClient::new();
/// let url = "https://api.example.com/v1/chat/completions";
/// let response = client.post_stream(url, "{}", &Headers::new()).await?;
/// println!("Status: {}", response.status);
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new ReqwestHttpClient with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a new ReqwestHttpClient with a custom reqwest::Client.
    ///
    /// This allows for advanced configuration like custom timeouts,
    /// proxies, or TLS settings.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying reqwest::Client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    /// Convert reqwest error to HttpError.
    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }

    /// Convert an error raised while reading the body.
    fn convert_body_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else {
            HttpError::Io(err.to_string())
        }
    }

    /// Convert reqwest headers to our Headers type.
    fn convert_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    /// Apply headers to a request builder.
    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        let mut builder = builder;
        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        builder
    }

    /// Statuses that carry no body by definition.
    fn has_no_body(status: reqwest::StatusCode) -> bool {
        status == reqwest::StatusCode::NO_CONTENT || status == reqwest::StatusCode::RESET_CONTENT
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<StreamingResponse, HttpError> {
        let builder = self.client.post(url).body(body.to_string());
        let builder = Self::apply_headers(builder, headers);

        let response = builder.send().await.map_err(Self::convert_error)?;

        let status = response.status();
        let response_headers = Self::convert_headers(response.headers());

        if Self::has_no_body(status) {
            return Ok(
                StreamingResponse::without_body(status.as_u16()).with_headers(response_headers)
            );
        }

        let stream = response
            .bytes_stream()
            .map(|result| result.map_err(Self::convert_body_error));

        Ok(StreamingResponse::new(status.as_u16(), Box::pin(stream)).with_headers(response_headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reqwest_http_client_new() {
        let client = ReqwestHttpClient::new();
        let _inner = client.inner();
    }

    #[test]
    fn test_reqwest_http_client_default() {
        let client = ReqwestHttpClient::default();
        let _ = client.inner();
    }

    #[test]
    fn test_reqwest_http_client_with_custom_client() {
        let custom = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap();
        let client = ReqwestHttpClient::with_client(custom);
        let _ = client.inner();
    }

    #[test]
    fn test_convert_headers() {
        let mut header_map = reqwest::header::HeaderMap::new();
        header_map.insert(
            reqwest::header::CONTENT_TYPE,
            "text/event-stream".parse().unwrap(),
        );

        let headers = ReqwestHttpClient::convert_headers(&header_map);
        assert_eq!(
            headers.get("content-type"),
            Some(&"text/event-stream".to_string())
        );
    }

    #[test]
    fn test_has_no_body() {
        assert!(ReqwestHttpClient::has_no_body(reqwest::StatusCode::NO_CONTENT));
        assert!(ReqwestHttpClient::has_no_body(reqwest::StatusCode::RESET_CONTENT));
        assert!(!ReqwestHttpClient::has_no_body(reqwest::StatusCode::OK));
        assert!(!ReqwestHttpClient::has_no_body(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_post_stream_invalid_url() {
        let client = ReqwestHttpClient::new();
        let result = client
            .post_stream("not-a-valid-url", "{}", &Headers::new())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_post_stream_connection_refused() {
        let client = ReqwestHttpClient::new();
        let result = client
            .post_stream("http://127.0.0.1:59999/v1/chat/completions", "{}", &Headers::new())
            .await;
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(matches!(
                e,
                HttpError::ConnectionFailed(_) | HttpError::Other(_)
            ));
        }
    }
}
