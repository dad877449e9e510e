//! Streaming chat completion: request issuing and response consumption.
//!
//! [`CompletionClient::stream`] yields the answer's text fragments;
//! [`CompletionClient::events`] wraps the same work in the
//! `Start → Chunk* → (Done | Error)` lifecycle consumed by the UI layer.

mod client;
mod pipeline;

pub use client::{CompletionClient, EventStream, FragmentStream};
pub use pipeline::{FragmentPipeline, PipelineOutput};

/// Lifecycle event of one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// Emitted before any I/O; the caller clears the previous reply and error
    Start,
    /// Next non-empty text fragment, in arrival order
    Chunk(String),
    /// Terminal failure with a human-readable message
    Error(String),
    /// Terminal success (sentinel seen or body closed)
    Done,
}

impl StreamEvent {
    /// True for `Done` and `Error`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Done | StreamEvent::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_events() {
        assert!(!StreamEvent::Start.is_terminal());
        assert!(!StreamEvent::Chunk("x".to_string()).is_terminal());
        assert!(StreamEvent::Error("boom".to_string()).is_terminal());
        assert!(StreamEvent::Done.is_terminal());
    }
}
