//! Bytes-to-fragments pipeline for one response body.
//!
//! UTF-8 decoding, frame reassembly, event decoding and delta extraction
//! run synchronously between reads, so the order of fragments always
//! matches the order of the bytes that produced them.

use std::sync::Arc;

use crate::error::StreamError;
use crate::sse::{decode_frame, FrameBuffer, SseEvent, Utf8Decoder};
use crate::traits::DeltaExtractor;

/// What one pass over incoming bytes produced.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutput {
    /// A non-empty text increment
    Fragment(String),
    /// The sentinel was seen or the body ended
    Completed,
    /// A payload could not be decoded; nothing follows
    Failed(StreamError),
}

/// Stateful pipeline owned by exactly one response body.
///
/// Once it has produced [`PipelineOutput::Completed`] or
/// [`PipelineOutput::Failed`] it ignores any further input.
pub struct FragmentPipeline {
    decoder: Utf8Decoder,
    frames: FrameBuffer,
    extractor: Arc<dyn DeltaExtractor>,
    finished: bool,
}

impl FragmentPipeline {
    pub fn new(extractor: Arc<dyn DeltaExtractor>) -> Self {
        Self {
            decoder: Utf8Decoder::new(),
            frames: FrameBuffer::new(),
            extractor,
            finished: false,
        }
    }

    /// True after the terminal output has been produced.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Feed the next chunk of the body.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<PipelineOutput> {
        let mut outputs = Vec::new();
        if self.finished {
            return outputs;
        }

        let text = self.decoder.decode(chunk);
        for frame in self.frames.ingest(&text) {
            let event = decode_frame(&frame);
            match event {
                SseEvent::Data(ref payload) => match self.extractor.extract(payload) {
                    Ok(Some(fragment)) => outputs.push(PipelineOutput::Fragment(fragment)),
                    Ok(None) => tracing::debug!("Skipping {} frame without text", event.kind()),
                    Err(e) => {
                        self.finished = true;
                        outputs.push(PipelineOutput::Failed(e));
                        return outputs;
                    }
                },
                SseEvent::Sentinel => {
                    self.finished = true;
                    outputs.push(PipelineOutput::Completed);
                    return outputs;
                }
                SseEvent::Ignorable => tracing::debug!("Skipping {} frame", event.kind()),
            }
        }
        outputs
    }

    /// The body ended without a sentinel.
    ///
    /// Unterminated residue cannot form a frame and is dropped.
    pub fn finish(&mut self) -> Vec<PipelineOutput> {
        if self.finished {
            return Vec::new();
        }
        self.finished = true;

        let dropped_bytes = self.decoder.finish();
        if dropped_bytes > 0 {
            tracing::debug!("Dropped {} bytes of truncated UTF-8 at end of body", dropped_bytes);
        }
        if let Some(residue) = self.frames.discard_residue() {
            tracing::debug!("Dropped unterminated frame at end of body ({} bytes)", residue.len());
        }
        vec![PipelineOutput::Completed]
    }
}
