//! Streaming completion client.

use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::Arc;

use futures_util::stream::{self, Stream};
use futures_util::StreamExt;

use crate::adapters::ReqwestHttpClient;
use crate::completion::pipeline::{FragmentPipeline, PipelineOutput};
use crate::completion::StreamEvent;
use crate::delta::OpenAiDeltaExtractor;
use crate::error::StreamError;
use crate::models::StreamRequest;
use crate::traits::{ByteStream, DeltaExtractor, HttpClient};

/// Ordered text fragments of one answer. Ends after the sentinel, at end
/// of body, or right after the first error.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, StreamError>> + Send>>;

/// Lifecycle events of one answer: `Start`, any number of `Chunk`s, then
/// exactly one of `Done` or `Error`.
pub type EventStream = Pin<Box<dyn Stream<Item = StreamEvent> + Send>>;

/// Client for OpenAI-compatible streaming chat completion endpoints.
///
/// Cheap to clone; clones share the transport and the extractor.
#[derive(Clone)]
pub struct CompletionClient {
    http: Arc<dyn HttpClient>,
    extractor: Arc<dyn DeltaExtractor>,
}

impl CompletionClient {
    /// Create a client over the given transport using the OpenAI chunk schema.
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            extractor: Arc::new(OpenAiDeltaExtractor::new()),
        }
    }

    /// Swap in a different provider schema.
    pub fn with_extractor(mut self, extractor: Arc<dyn DeltaExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Send the request and return the answer as a stream of fragments.
    ///
    /// Fails before any fragment when the request cannot be sent, the status
    /// is not 2xx, or the response has no body.
    pub async fn stream(&self, request: &StreamRequest) -> Result<FragmentStream, StreamError> {
        let body = serde_json::to_string(&request.body()).map_err(|e| StreamError::Request {
            message: e.to_string(),
        })?;

        tracing::info!("Opening completion stream to {} (model {})", request.url, request.model);
        let response = self
            .http
            .post_stream(&request.url, &body, &request.headers())
            .await?;

        // The error body is never read; it may be held open indefinitely
        if !response.is_success() {
            let status = response.status;
            tracing::warn!("Completion endpoint returned {}", status);
            return Err(StreamError::Status { status });
        }

        let Some(body) = response.body else {
            return Err(StreamError::NoBody);
        };

        Ok(fragments(body, FragmentPipeline::new(Arc::clone(&self.extractor))))
    }

    /// Pull-based lifecycle for one query.
    ///
    /// `Start` is yielded before any I/O happens; the request is only sent
    /// when the second item is polled.
    pub fn events(&self, request: StreamRequest) -> EventStream {
        let client = self.clone();
        let events = stream::unfold(Phase::Start(request), move |phase| {
            let client = client.clone();
            async move {
                let mut phase = phase;
                loop {
                    match phase {
                        Phase::Start(request) => {
                            return Some((StreamEvent::Start, Phase::Open(request)));
                        }
                        Phase::Open(request) => match client.stream(&request).await {
                            Ok(fragments) => phase = Phase::Streaming(fragments),
                            Err(e) => {
                                tracing::warn!("[{}] {}", e.error_code(), e);
                                return Some((StreamEvent::Error(e.to_string()), Phase::Finished));
                            }
                        },
                        Phase::Streaming(mut fragments) => {
                            return match fragments.next().await {
                                Some(Ok(text)) => {
                                    Some((StreamEvent::Chunk(text), Phase::Streaming(fragments)))
                                }
                                Some(Err(e)) => {
                                    tracing::warn!("[{}] {}", e.error_code(), e);
                                    Some((StreamEvent::Error(e.to_string()), Phase::Finished))
                                }
                                None => Some((StreamEvent::Done, Phase::Finished)),
                            };
                        }
                        Phase::Finished => return None,
                    }
                }
            }
        });
        Box::pin(events)
    }
}

impl Default for CompletionClient {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new()))
    }
}

enum Phase {
    Start(StreamRequest),
    Open(StreamRequest),
    Streaming(FragmentStream),
    Finished,
}

/// Drive `pipeline` over `body`, yielding fragments as soon as their frame closes.
fn fragments(body: ByteStream, pipeline: FragmentPipeline) -> FragmentStream {
    let state = (body, pipeline, VecDeque::<PipelineOutput>::new());
    let fragments = stream::unfold(state, |(mut body, mut pipeline, mut ready)| async move {
        loop {
            if let Some(output) = ready.pop_front() {
                match output {
                    PipelineOutput::Fragment(text) => {
                        return Some((Ok(text), (body, pipeline, ready)));
                    }
                    PipelineOutput::Failed(e) => {
                        ready.clear();
                        return Some((Err(e), (body, pipeline, ready)));
                    }
                    PipelineOutput::Completed => {
                        tracing::info!("Completion stream finished");
                        return None;
                    }
                }
            }

            if pipeline.is_finished() {
                return None;
            }

            match body.next().await {
                Some(Ok(chunk)) => ready.extend(pipeline.feed(&chunk)),
                Some(Err(e)) => {
                    // Nothing may follow a transport failure
                    let _ = pipeline.finish();
                    return Some((Err(StreamError::Transport(e)), (body, pipeline, ready)));
                }
                None => ready.extend(pipeline.finish()),
            }
        }
    });
    Box::pin(fragments)
}
