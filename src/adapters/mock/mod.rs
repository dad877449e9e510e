//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - scripted streaming responses and request recording

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
