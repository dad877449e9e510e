//! Application state and logic.
//!
//! [`App`] owns the caller side of a query: it submits queries through the
//! [`StreamController`] and applies the tagged lifecycle events it receives
//! back on its message channel to [`StreamState`].

mod controller;
mod handlers;
mod messages;
mod state;

pub use controller::StreamController;
pub use messages::{AppMessage, SessionId};
pub use state::StreamState;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::completion::{CompletionClient, StreamEvent};
use crate::config::WidgetConfig;
use crate::traits::HttpClient;

pub struct App {
    pub config: WidgetConfig,
    pub state: StreamState,
    /// Receiver for stream messages; taken by the event loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub should_quit: bool,
    controller: StreamController,
}

impl App {
    pub fn new(config: WidgetConfig, client: CompletionClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let controller = StreamController::new(client, message_tx.clone());
        Self {
            config,
            state: StreamState::new(),
            message_rx: Some(message_rx),
            message_tx,
            should_quit: false,
            controller,
        }
    }

    /// Create an app over the given transport.
    pub fn with_http(config: WidgetConfig, http: Arc<dyn HttpClient>) -> Self {
        Self::new(config, CompletionClient::new(http))
    }

    /// Submit a query, superseding any reply still streaming.
    ///
    /// Caller-visible state is reset right away. Blank queries are ignored
    /// and return `None`; anything else is sent exactly as typed.
    pub fn submit(&mut self, query: &str) -> Option<SessionId> {
        if query.trim().is_empty() {
            return None;
        }

        let request = self.config.request(query);
        let session = self.controller.submit(request);
        self.state.apply(&StreamEvent::Start);
        tracing::info!("Submitted session {}", session);
        Some(session)
    }

    pub fn current_session(&self) -> SessionId {
        self.controller.current_session()
    }

    pub fn is_streaming(&self) -> bool {
        self.state.loading
    }

    pub fn quit(&mut self) {
        self.controller.cancel();
        self.should_quit = true;
    }
}
