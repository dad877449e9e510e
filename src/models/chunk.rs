//! Typed shape of one streamed chat completion chunk.
//!
//! Only the path `choices[0].delta.content` is consumed. Every level is
//! optional so that role-only deltas, finish frames and usage frames
//! deserialize cleanly and simply yield no text.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ChatCompletionChunk {
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ChunkChoice {
    #[serde(default)]
    pub delta: Option<ChunkDelta>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ChunkDelta {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionChunk {
    /// Content of the first choice's delta, if present and non-empty.
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta)
            .and_then(|delta| delta.content)
            .filter(|content| !content.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_delta() {
        let chunk: ChatCompletionChunk = serde_json::from_str(
            r#"{"id":"c1","object":"chat.completion.chunk","choices":[{"index":0,"delta":{"content":"Hel"},"finish_reason":null}]}"#,
        )
        .unwrap();
        assert_eq!(chunk.first_content(), Some("Hel".to_string()));
    }

    #[test]
    fn test_role_only_delta() {
        let chunk: ChatCompletionChunk =
            serde_json::from_str(r#"{"choices":[{"delta":{"role":"assistant"}}]}"#).unwrap();
        assert_eq!(chunk.choices[0].delta.as_ref().unwrap().role.as_deref(), Some("assistant"));
        assert_eq!(chunk.first_content(), None);
    }

    #[test]
    fn test_finish_frame() {
        let chunk: ChatCompletionChunk =
            serde_json::from_str(r#"{"choices":[{"delta":{},"finish_reason":"stop"}]}"#).unwrap();
        assert_eq!(chunk.choices[0].finish_reason.as_deref(), Some("stop"));
        assert_eq!(chunk.first_content(), None);
    }

    #[test]
    fn test_missing_and_empty_fields() {
        for raw in [
            r#"{}"#,
            r#"{"choices":[]}"#,
            r#"{"choices":[{}]}"#,
            r#"{"choices":[{"delta":null}]}"#,
            r#"{"choices":[{"delta":{"content":null}}]}"#,
            r#"{"choices":[{"delta":{"content":""}}]}"#,
        ] {
            let chunk: ChatCompletionChunk = serde_json::from_str(raw).unwrap();
            assert_eq!(chunk.first_content(), None, "payload: {}", raw);
        }
    }

    #[test]
    fn test_only_first_choice_is_used() {
        let chunk: ChatCompletionChunk = serde_json::from_str(
            r#"{"choices":[{"delta":{}},{"delta":{"content":"second"}}]}"#,
        )
        .unwrap();
        assert_eq!(chunk.first_content(), None);
    }
}
