//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP transport using reqwest
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - scripted chunked responses

pub mod mock;
pub mod reqwest_http;

pub use mock::MockHttpClient;
pub use reqwest_http::ReqwestHttpClient;
