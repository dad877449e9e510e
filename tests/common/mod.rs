//! Common test utilities for integration tests.
//!
//! Provides SSE body builders and a config pointed at a wiremock server.

#![allow(dead_code)]

use chat_widget::config::WidgetConfig;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token-12345";
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// One SSE frame carrying a content delta.
pub fn delta_frame(content: &str) -> String {
    let chunk = serde_json::json!({
        "choices": [{"delta": {"content": content}, "finish_reason": null}]
    });
    format!("data: {}\n\n", chunk)
}

/// A complete SSE body: one frame per fragment, then the sentinel.
pub fn sse_body(fragments: &[&str]) -> String {
    let mut body: String = fragments.iter().map(|f| delta_frame(f)).collect();
    body.push_str("data: [DONE]\n\n");
    body
}

pub fn completions_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), COMPLETIONS_PATH)
}

/// Config pointed at `server` with a bearer token.
pub fn test_config(server: &MockServer) -> WidgetConfig {
    WidgetConfig {
        url: completions_url(server),
        model: "test-model".to_string(),
        bearer_token: Some(TEST_TOKEN.to_string()),
        ..Default::default()
    }
}
