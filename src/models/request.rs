use serde::{Deserialize, Serialize};

use crate::traits::Headers;

/// Role of a chat message author. Every query is a single user turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
}

/// One message of the conversation sent to the completion endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

/// JSON body of a streaming chat completion call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

/// Everything needed to issue one query. Immutable once built.
#[derive(Clone, PartialEq)]
pub struct StreamRequest {
    /// Completion endpoint URL
    pub url: String,
    /// Model identifier passed through to the endpoint
    pub model: String,
    /// Sent verbatim as `Authorization: Bearer <token>` when present
    pub bearer_token: Option<String>,
    /// The user's question
    pub query: String,
}

impl StreamRequest {
    /// Create a request without authentication
    pub fn new(url: impl Into<String>, model: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            model: model.into(),
            bearer_token: None,
            query: query.into(),
        }
    }

    /// Attach a bearer token. Empty tokens are treated as absent.
    pub fn with_bearer_token(mut self, token: Option<String>) -> Self {
        self.bearer_token = token.filter(|t| !t.is_empty());
        self
    }

    /// Request headers: JSON content type, plus `Authorization` only when a token is set
    pub fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if let Some(token) = &self.bearer_token {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    /// Single-turn streaming body for this query
    pub fn body(&self) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: MessageRole::User,
                content: self.query.clone(),
            }],
            stream: true,
        }
    }
}

impl std::fmt::Debug for StreamRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamRequest")
            .field("url", &self.url)
            .field("model", &self.model)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "<redacted>"))
            .field("query", &self.query)
            .finish()
    }
}
