//! Message handling for the App.

use crate::completion::StreamEvent;

use super::{App, AppMessage};

impl App {
    /// Handle an incoming stream message.
    ///
    /// Messages from a superseded session are dropped. Returns the event
    /// when it was applied to [`App::state`].
    pub fn handle_message(&mut self, msg: AppMessage) -> Option<StreamEvent> {
        if !self.controller.is_current(msg.session) {
            tracing::debug!(
                "Dropping {:?} from stale session {} (current {})",
                msg.event,
                msg.session,
                self.controller.current_session()
            );
            return None;
        }

        match &msg.event {
            StreamEvent::Error(message) => {
                tracing::warn!("Session {} failed: {}", msg.session, message);
            }
            StreamEvent::Done => {
                tracing::info!(
                    "Session {} complete ({} bytes)",
                    msg.session,
                    self.state.reply.len()
                );
            }
            _ => {}
        }

        self.state.apply(&msg.event);
        Some(msg.event)
    }
}
