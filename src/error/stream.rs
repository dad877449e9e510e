//! Streaming-related error types.
//!
//! These are the failures that end a query: the request could not be
//! built or sent, the endpoint refused it, or a data frame could not be
//! decoded. Unknown frames and empty deltas are not errors and never
//! reach this type.

use thiserror::Error;

use crate::traits::HttpError;

/// Terminal failure of one streamed query.
///
/// The `Display` text is what the caller shows to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StreamError {
    /// The request body could not be serialized.
    #[error("failed to build request: {message}")]
    Request { message: String },

    /// Network failure before or while reading the body.
    #[error("{0}")]
    Transport(#[from] HttpError),

    /// The endpoint answered with a non-2xx status.
    #[error("response not ok: {status}")]
    Status { status: u16 },

    /// The response had no readable body.
    #[error("no reader found")]
    NoBody,

    /// A data frame carried a payload that is not valid JSON.
    #[error("invalid JSON in stream data: {message}")]
    MalformedJson { message: String },
}

impl StreamError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StreamError::Request { .. } => "E_STREAM_REQUEST",
            StreamError::Transport(_) => "E_STREAM_TRANSPORT",
            StreamError::Status { .. } => "E_STREAM_STATUS",
            StreamError::NoBody => "E_STREAM_NO_BODY",
            StreamError::MalformedJson { .. } => "E_STREAM_JSON",
        }
    }
}
