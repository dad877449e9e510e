//! chat-widget - streaming chat completion consumer
//!
//! Turns a chunked Server-Sent-Events response from an OpenAI-compatible
//! chat completion endpoint into an ordered stream of text fragments, and
//! manages single-flight query sessions on top of it.
//!
//! This library exposes modules for use in the binary and integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod completion;
pub mod config;
pub mod delta;
pub mod error;
pub mod models;
pub mod sse;
pub mod traits;
