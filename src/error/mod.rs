//! Error types for the chat widget.
//!
//! | Error | Raised by | Surfaced as |
//! |-------|-----------|-------------|
//! | [`StreamError`] | completion client, pipeline | one terminal `Error` event per query |
//! | [`ConfigError`] | config resolution, argument parsing | process exit in the terminal host |
//!
//! Parsing anomalies that are not failures (unknown frames, comment lines,
//! deltas without text) are absorbed where they occur and never become
//! errors.

mod config;
mod stream;

pub use config::ConfigError;
pub use stream::StreamError;
