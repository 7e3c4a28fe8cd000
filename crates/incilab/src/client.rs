//! Platform API client

use std::sync::Arc;

use tokio::sync::broadcast;

use incilab_common::{Error, KVStore, ServerConfigStore, SessionStore};
use incilab_http_client::{BearerAuth, ClientEvent, EnvelopeNormalizer, EventBus, HttpClient};

use crate::environment::{Environment, DEV_BASE_URL};

/// Client for the incilab platform API.
///
/// Owns the request pipeline plus the typed session and server-config
/// stores. The API modules under [`crate::api`] add one method per
/// endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    session: SessionStore,
    config: ServerConfigStore,
    environment: Environment,
}

impl ApiClient {
    /// Create a client over the given key-value backend.
    ///
    /// Development uses the fixed local backend address; Production
    /// computes the base URL from the persisted server configuration.
    pub async fn new(environment: Environment, store: Arc<dyn KVStore>) -> Result<Self, Error> {
        let session = SessionStore::new(store.clone());
        let config = ServerConfigStore::new(store);
        let base_url = match environment {
            Environment::Development => DEV_BASE_URL.to_string(),
            Environment::Production => config.base_url().await?,
        };

        let events = EventBus::new();
        let http = HttpClient::builder(base_url)
            .events(events.clone())
            .with(BearerAuth::new(session.clone()))
            .with(EnvelopeNormalizer::new(session.clone(), events))
            .build()?;

        Ok(Self {
            http,
            session,
            config,
            environment,
        })
    }

    /// Re-read the server configuration and point the live client at it.
    ///
    /// No-op in Development. Requests already in flight keep the base URL
    /// they started with.
    pub async fn update_base_url(&self) -> Result<(), Error> {
        if self.environment == Environment::Production {
            self.http.set_base_url(self.config.base_url().await?);
        }
        Ok(())
    }

    /// Subscribe to pipeline events (notices, session expiry).
    pub fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.http.events().subscribe()
    }

    /// Session credential store.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Server configuration store.
    pub fn server_config(&self) -> &ServerConfigStore {
        &self.config
    }

    /// Environment the client was built for.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }
}

#[cfg(test)]
mod tests {
    use incilab_common::MemoryStore;

    use super::*;

    #[tokio::test]
    async fn test_development_uses_fixed_base_url() {
        let client = ApiClient::new(Environment::Development, Arc::new(MemoryStore::new()))
            .await
            .expect("client");
        assert_eq!(client.http().base_url(), DEV_BASE_URL);
    }

    #[tokio::test]
    async fn test_production_uses_configured_base_url() {
        let client = ApiClient::new(Environment::Production, Arc::new(MemoryStore::new()))
            .await
            .expect("client");
        // Default record composes the same address the dev build hardcodes.
        assert_eq!(client.http().base_url(), "http://localhost:8080/api");
    }

    #[tokio::test]
    async fn test_update_base_url_is_noop_in_development() {
        let store = Arc::new(MemoryStore::new());
        let client = ApiClient::new(Environment::Development, store)
            .await
            .expect("client");

        client
            .server_config()
            .set(incilab_common::ServerConfigUpdate {
                host: Some("skin.example.com".to_string()),
                ..Default::default()
            })
            .await
            .expect("set");
        client.update_base_url().await.expect("update");

        assert_eq!(client.http().base_url(), DEV_BASE_URL);
    }
}
