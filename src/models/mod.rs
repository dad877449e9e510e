mod chunk;
mod request;

pub use chunk::{ChatCompletionChunk, ChunkChoice, ChunkDelta};
pub use request::{ChatCompletionRequest, ChatMessage, MessageRole, StreamRequest};
