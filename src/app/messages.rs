//! AppMessage and session tagging for async communication within the application.

use std::fmt;

use crate::completion::StreamEvent;

/// Monotonically increasing identifier of one submitted query.
///
/// Session 0 is never handed out; it is the "nothing submitted yet" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SessionId(u64);

impl SessionId {
    /// Wrap a raw session number.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The session after this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle event received from a stream task, tagged with its session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppMessage {
    pub session: SessionId,
    pub event: StreamEvent,
}

impl AppMessage {
    pub fn new(session: SessionId, event: StreamEvent) -> Self {
        Self { session, event }
    }
}
