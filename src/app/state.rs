//! Caller-visible state of the current query.

use crate::completion::StreamEvent;

/// Loading flag, the reply accumulated so far, and the last error.
///
/// Mutated only by applying lifecycle events of the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamState {
    pub loading: bool,
    pub reply: String,
    pub error: Option<String>,
}

impl StreamState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one lifecycle event.
    pub fn apply(&mut self, event: &StreamEvent) {
        match event {
            StreamEvent::Start => {
                self.loading = true;
                self.reply.clear();
                self.error = None;
            }
            StreamEvent::Chunk(text) => self.reply.push_str(text),
            StreamEvent::Error(message) => {
                self.error = Some(message.clone());
                self.loading = false;
            }
            StreamEvent::Done => self.loading = false,
        }
    }
}
