use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Outcome of a list toggle, rendered to the user as e.g.
/// "Dune added to Favorites".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    Added { title: String, list: &'static str },
    Removed { title: String, list: &'static str },
}

impl fmt::Display for ListEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListEvent::Added { title, list } => write!(f, "{} added to {}", title, list),
            ListEvent::Removed { title, list } => write!(f, "{} removed from {}", title, list),
        }
    }
}

/// Where notifications end up: a toast layer, the CLI, or a test
/// recorder.
pub trait NotificationSink: Send + Sync {
    fn publish(&self, event: ListEvent);
}

/// Debounces notifications so rapid repeated toggles surface only the
/// latest outcome. Each publish aborts the predecessor's pending
/// emission before scheduling its own.
pub struct Notifier {
    sink: Arc<dyn NotificationSink>,
    debounce: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Notifier {
    pub fn new(sink: Arc<dyn NotificationSink>, debounce: Duration) -> Self {
        Self {
            sink,
            debounce,
            pending: None,
        }
    }

    /// No debounce window: events reach the sink inline. Suits one-shot
    /// callers that exit right after the toggle.
    pub fn immediate(sink: Arc<dyn NotificationSink>) -> Self {
        Self::new(sink, Duration::ZERO)
    }

    pub fn publish(&mut self, event: ListEvent) {
        if self.debounce.is_zero() {
            self.sink.publish(event);
            return;
        }

        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let sink = Arc::clone(&self.sink);
        let debounce = self.debounce;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            sink.publish(event);
        }));
    }
}
