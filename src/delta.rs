//! Text extraction from chat completion chunks.
//!
//! Parsing happens in two steps so that the two ways a payload can fail to
//! produce text stay distinct: text that is not JSON at all is an error
//! that ends the stream, while valid JSON of an unexpected shape is just a
//! frame without text.

use crate::error::StreamError;
use crate::models::ChatCompletionChunk;
use crate::traits::DeltaExtractor;

/// Extractor for the OpenAI chat completion streaming schema
/// (`choices[0].delta.content`), also spoken by most compatible servers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAiDeltaExtractor;

impl OpenAiDeltaExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DeltaExtractor for OpenAiDeltaExtractor {
    fn extract(&self, payload: &str) -> Result<Option<String>, StreamError> {
        let value: serde_json::Value =
            serde_json::from_str(payload).map_err(|e| StreamError::MalformedJson {
                message: e.to_string(),
            })?;

        match serde_json::from_value::<ChatCompletionChunk>(value) {
            Ok(chunk) => Ok(chunk.first_content()),
            Err(e) => {
                tracing::debug!("Skipping payload with unexpected shape: {}", e);
                Ok(None)
            }
        }
    }
}
