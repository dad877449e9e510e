//! Frame-to-event decoding.
//!
//! Decoding never fails. Anything that does not look like a data frame
//! degrades to [`SseEvent::Ignorable`] so that unknown fields and
//! keep-alive comments from the provider pass through harmlessly.

use crate::sse::events::{SseEvent, SseLine, DONE_SENTINEL};

/// Parse a single SSE line into its component type
pub fn parse_sse_line(line: &str) -> SseLine {
    if line.is_empty() {
        return SseLine::Empty;
    }

    if let Some(stripped) = line.strip_prefix(':') {
        return SseLine::Comment(stripped.trim().to_string());
    }

    let (field, value) = match line.split_once(':') {
        Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
        None => (line, ""),
    };

    match field {
        "data" => SseLine::Data(value.to_string()),
        "event" => SseLine::Event(value.trim().to_string()),
        // id, retry and anything unknown
        _ => SseLine::Comment(line.to_string()),
    }
}

/// Decode one complete frame (the text between two blank lines).
///
/// All `data:` lines are joined with `\n` in order. The joined payload is
/// then classified: the `[DONE]` marker becomes [`SseEvent::Sentinel`], a
/// blank payload becomes [`SseEvent::Ignorable`], everything else is
/// [`SseEvent::Data`].
pub fn decode_frame(frame: &str) -> SseEvent {
    let mut data_lines: Vec<String> = Vec::new();

    for line in frame.split('\n') {
        if let SseLine::Data(value) = parse_sse_line(line) {
            data_lines.push(value);
        }
    }

    if data_lines.is_empty() {
        return SseEvent::Ignorable;
    }

    let payload = data_lines.join("\n");
    let trimmed = payload.trim();

    if trimmed.is_empty() {
        SseEvent::Ignorable
    } else if trimmed == DONE_SENTINEL {
        SseEvent::Sentinel
    } else {
        SseEvent::Data(payload)
    }
}
