//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - streaming HTTP POST
//! - [`DeltaExtractor`] - provider-specific text extraction from SSE payloads

pub mod extractor;
pub mod http;

pub use extractor::DeltaExtractor;
pub use http::{ByteStream, Headers, HttpClient, HttpError, StreamingResponse};
