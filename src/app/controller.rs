//! Single-flight stream controller.
//!
//! Every submitted query gets a fresh [`SessionId`] and its own task that
//! forwards the query's lifecycle events, tagged with that session, to the
//! app's message channel. Submitting again bumps the session and aborts the
//! previous task; events that were already queued by the old task still
//! carry the old session and are dropped by the receiver.

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::completion::CompletionClient;
use crate::models::StreamRequest;

use super::{AppMessage, SessionId};

pub struct StreamController {
    client: CompletionClient,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    current: SessionId,
    in_flight: Option<JoinHandle<()>>,
}

impl StreamController {
    pub fn new(client: CompletionClient, message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self {
            client,
            message_tx,
            current: SessionId::default(),
            in_flight: None,
        }
    }

    /// The session of the most recently submitted query.
    pub fn current_session(&self) -> SessionId {
        self.current
    }

    pub fn is_current(&self, session: SessionId) -> bool {
        session == self.current
    }

    /// Start streaming `request` as a new session, superseding any previous one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, request: StreamRequest) -> SessionId {
        self.cancel();

        self.current = self.current.next();
        let session = self.current;
        let tx = self.message_tx.clone();
        let mut events = self.client.events(request);

        let task = async move {
            while let Some(event) = events.next().await {
                let terminal = event.is_terminal();
                if tx.send(AppMessage::new(session, event)).is_err() {
                    tracing::debug!("Message channel closed, dropping stream");
                    break;
                }
                if terminal {
                    break;
                }
            }
            tracing::info!("Stream task finished");
        };

        let handle = tokio::spawn(task.instrument(tracing::info_span!(
            "stream",
            session = session.as_u64()
        )));
        self.in_flight = Some(handle);
        session
    }

    /// Abort the in-flight task, if any. The current session is left as is.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                tracing::warn!("Superseding in-flight stream (session {})", self.current);
                handle.abort();
            }
        }
    }
}

impl Drop for StreamController {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
