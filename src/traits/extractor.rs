//! Delta extraction trait abstraction.
//!
//! A provider's streaming schema decides where the incremental text lives
//! inside each `data:` payload. Supporting another schema means adding
//! another implementation of this trait.

use crate::error::StreamError;

/// Trait for pulling one text increment out of an SSE data payload.
///
/// # Returns
/// - `Ok(Some(text))` - the payload carried a non-empty fragment
/// - `Ok(None)` - the payload is well-formed but carries no text (role-only
///   deltas, usage frames, unknown shapes); skip it
/// - `Err(StreamError::MalformedJson)` - the payload is not valid JSON
pub trait DeltaExtractor: Send + Sync {
    fn extract(&self, payload: &str) -> Result<Option<String>, StreamError>;
}
