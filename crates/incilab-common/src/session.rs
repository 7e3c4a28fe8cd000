//! Session credential storage

use std::sync::Arc;

use crate::error::Error;
use crate::kvstore::{KVStore, TOKEN_KEY};

/// Typed accessor for the persisted bearer credential.
///
/// The credential is written by the login flow, read on every outbound
/// request, and cleared when the server signals an expired session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    store: Arc<dyn KVStore>,
}

impl SessionStore {
    /// Create a store over the given key-value backend.
    pub fn new(store: Arc<dyn KVStore>) -> Self {
        Self { store }
    }

    /// Stored credential, if any.
    pub async fn credential(&self) -> Result<Option<String>, Error> {
        self.store.read(TOKEN_KEY).await
    }

    /// Persist a credential.
    pub async fn set_credential(&self, token: &str) -> Result<(), Error> {
        self.store.write(TOKEN_KEY, token).await
    }

    /// Remove the stored credential.
    pub async fn clear_credential(&self) -> Result<(), Error> {
        self.store.remove(TOKEN_KEY).await
    }
}
