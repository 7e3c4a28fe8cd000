//! Session expiry handling
//!
//! The pipeline raises [`ClientEvent::SessionExpired`] and nothing more;
//! what happens next (typically navigation to the login route) belongs to
//! the controller that owns the UI. This guard is that controller's hook.

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use incilab_http_client::ClientEvent;

/// Delay between a session-expired signal and the login redirect.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(1_500);

/// Spawn a task invoking `on_expired` a fixed delay after every
/// session-expired signal. The task ends when the event bus is dropped.
pub fn spawn_session_guard<F>(
    mut events: broadcast::Receiver<ClientEvent>,
    on_expired: F,
) -> JoinHandle<()>
where
    F: Fn() + Send + 'static,
{
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(ClientEvent::SessionExpired) => {
                    tokio::time::sleep(LOGIN_REDIRECT_DELAY).await;
                    on_expired();
                }
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("session guard lagged, skipped {} events", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
