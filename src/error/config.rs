//! Configuration and command-line errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A flag that takes a value was the last argument.
    #[error("missing value for {flag}")]
    MissingValue { flag: String },

    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    /// A query-string parameter could not be percent-decoded.
    #[error("invalid query string parameter '{key}': {message}")]
    InvalidQueryString { key: String, message: String },

    /// The terminal host needs a bearer token to talk to the endpoint.
    #[error("please include a token via --token, CHAT_WIDGET_TOKEN or ?token=XXX")]
    MissingToken,
}
