//! Bearer credential injection

use async_trait::async_trait;

use incilab_common::{Error, SessionStore};

use crate::middleware::Middleware;
use crate::request::RequestDescriptor;

/// Outbound stage attaching `Authorization: Bearer <token>` when a
/// credential is stored. Without a stored credential the request carries
/// no authorization header at all.
#[derive(Debug, Clone)]
pub struct BearerAuth {
    session: SessionStore,
}

impl BearerAuth {
    /// Stage over the given session store.
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Middleware for BearerAuth {
    async fn on_request(&self, request: &mut RequestDescriptor) -> Result<(), Error> {
        if let Some(token) = self.session.credential().await? {
            request
                .headers
                .push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            query = ?request.query,
            body = ?request.body,
            "sending request"
        );

        Ok(())
    }
}
