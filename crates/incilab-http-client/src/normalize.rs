//! Response normalization
//!
//! Terminal outcomes only; nothing here retries or mutates the request.
//! The stage may clear the stored credential and raise events, and every
//! failure branch emits a user-visible notice before rejecting.

use async_trait::async_trait;

use incilab_common::error::status_message;
use incilab_common::{Envelope, Error, SessionStore};

use crate::events::{ClientEvent, EventBus};
use crate::middleware::{Flow, Middleware, Payload};
use crate::request::RequestDescriptor;

/// Notice shown when the server signals an expired session.
pub const SESSION_EXPIRED_NOTICE: &str = "login expired, please log in again";

/// Rejection fallback for an expired session without a server message.
const SESSION_EXPIRED_DEFAULT: &str = "login expired";

/// Notice fallback for a failed envelope without a message.
const SERVER_ERROR_NOTICE: &str = "server error";

/// Rejection fallback for a failed envelope without a message.
const UNKNOWN_ERROR: &str = "unknown error";

/// Inbound stage normalizing every reply into an envelope, raw bytes, or a
/// classified error.
#[derive(Debug, Clone)]
pub struct EnvelopeNormalizer {
    session: SessionStore,
    events: EventBus,
}

impl EnvelopeNormalizer {
    /// Stage over the given session store and event bus.
    pub fn new(session: SessionStore, events: EventBus) -> Self {
        Self { session, events }
    }

    async fn expire_session(&self) {
        if let Err(err) = self.session.clear_credential().await {
            tracing::warn!("failed to clear credential: {}", err);
        }
        self.events.emit(ClientEvent::SessionExpired);
    }
}

#[async_trait]
impl Middleware for EnvelopeNormalizer {
    async fn on_response(&self, request: &RequestDescriptor, flow: Flow) -> Result<Flow, Error> {
        let reply = match flow {
            Flow::Continue(reply) => reply,
            resolved => return Ok(resolved),
        };

        // HTTP-level failures never reach envelope inspection.
        if !(200..300).contains(&reply.status) {
            let message = status_message(reply.status);
            tracing::warn!(status = reply.status, path = %request.path, "request failed: {}", message);
            if reply.status == 401 {
                self.expire_session().await;
            }
            self.events.notify(message);
            return Err(Error::Status {
                status: reply.status,
            });
        }

        // Binary payloads are returned as-is.
        if request.binary {
            return Ok(Flow::Resolved(Payload::Binary(reply.body)));
        }

        let envelope: Envelope = serde_json::from_slice(&reply.body)
            .inspect_err(|err| tracing::warn!("unparsable response body: {}", err))?;

        if envelope.success {
            return Ok(Flow::Resolved(Payload::Envelope(envelope)));
        }

        if envelope.code == Some(401) {
            self.events.notify(SESSION_EXPIRED_NOTICE);
            self.expire_session().await;
            return Err(Error::SessionExpired(
                envelope
                    .message
                    .unwrap_or_else(|| SESSION_EXPIRED_DEFAULT.to_string()),
            ));
        }

        self.events.notify(
            envelope
                .message
                .clone()
                .unwrap_or_else(|| SERVER_ERROR_NOTICE.to_string()),
        );
        Err(Error::Api {
            code: envelope.code,
            message: envelope
                .message
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        })
    }
}
