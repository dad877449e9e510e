//! SSE (Server-Sent Events) stream parsing
//!
//! Turns the decoded text of a streaming completion response into events.
//! SSE format consists of:
//! - `data: <json>` - data payload line(s)
//! - `event:`, `id:`, `retry:` - other fields (ignored here)
//! - Lines starting with `:` - comments (ignored)
//! - Empty line - ends the frame
//!
//! # Module structure
//! - `utf8` - incremental byte-to-text decoding
//! - `buffer` - frame reassembly across chunk boundaries
//! - `decoder` - line classification and frame-to-event decoding
//! - `events` - event type definitions

mod buffer;
mod decoder;
mod events;
mod utf8;

pub use buffer::FrameBuffer;
pub use decoder::{decode_frame, parse_sse_line};
pub use events::{SseEvent, SseLine, DONE_SENTINEL};
pub use utf8::Utf8Decoder;
