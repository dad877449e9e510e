//! SSE line and event types.

/// Payload the provider sends to mark the end of a completion stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// A single classified line inside an SSE frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseLine {
    /// `data:` line (value with the single optional leading space removed)
    Data(String),
    /// `event:` line
    Event(String),
    /// Comment, or any field this client does not use (`id`, `retry`, unknown)
    Comment(String),
    /// Blank line
    Empty,
}

/// One decoded SSE frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseEvent {
    /// Frame carrying a payload for the delta extractor
    Data(String),
    /// End-of-stream marker
    Sentinel,
    /// Comment, ping, unknown field, or a blank payload
    Ignorable,
}

impl SseEvent {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            SseEvent::Data(_) => "data",
            SseEvent::Sentinel => "sentinel",
            SseEvent::Ignorable => "ignorable",
        }
    }
}
