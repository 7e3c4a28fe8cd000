//! Pipeline events
//!
//! The pipeline raises typed signals instead of performing navigation or
//! UI work itself. An outer controller subscribes and decides what a
//! notice or an expired session means for its surface.

use tokio::sync::broadcast;

/// Signals raised by the request pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// The server ended the session; the credential has already been cleared
    SessionExpired,
    /// User-visible notification text
    Notice(String),
}

/// Broadcast bus carrying [`ClientEvent`]s to any number of subscribers
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ClientEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Create a bus. Events emitted while nobody is subscribed are dropped.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(64);
        Self { sender }
    }

    /// Subscribe to all events emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.sender.subscribe()
    }

    /// Emit an event.
    pub fn emit(&self, event: ClientEvent) {
        let _ = self.sender.send(event);
    }

    /// Emit a user-visible notice.
    pub fn notify(&self, message: impl Into<String>) {
        self.emit(ClientEvent::Notice(message.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_receive_events() {
        let bus = EventBus::new();
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        bus.notify("saved");
        bus.emit(ClientEvent::SessionExpired);

        assert_eq!(
            first.recv().await.expect("event"),
            ClientEvent::Notice("saved".to_string())
        );
        assert_eq!(
            first.recv().await.expect("event"),
            ClientEvent::SessionExpired
        );
        assert_eq!(
            second.recv().await.expect("event"),
            ClientEvent::Notice("saved".to_string())
        );
    }

    #[test]
    fn test_emit_without_subscribers_is_dropped() {
        let bus = EventBus::new();
        // Must not panic or error.
        bus.notify("nobody listening");
    }
}
