//! Server address configuration
//!
//! A single persisted record controls the base URL of every outbound
//! request in production builds. The record is merged over hardcoded
//! defaults on every write, so all four fields are always present.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::kvstore::{KVStore, SERVER_CONFIG_KEY};

/// Scheme for the composed base URL
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Plain HTTP
    #[default]
    Http,
    /// HTTP over TLS
    Https,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Http => write!(f, "http"),
            Protocol::Https => write!(f, "https"),
        }
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            _ => Err(Error::Client(format!("unknown protocol: {s}"))),
        }
    }
}

/// Server address record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// URL scheme
    pub protocol: Protocol,
    /// Hostname or IP
    pub host: String,
    /// Port; an empty string omits the port segment entirely
    #[serde(default)]
    pub port: String,
    /// Path prefix, e.g. `/api`
    pub prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            protocol: Protocol::Http,
            host: "localhost".to_string(),
            port: "8080".to_string(),
            prefix: "/api".to_string(),
        }
    }
}

impl ServerConfig {
    /// Compose `protocol://host[:port]prefix`.
    pub fn base_url(&self) -> String {
        if self.port.is_empty() {
            format!("{}://{}{}", self.protocol, self.host, self.prefix)
        } else {
            format!(
                "{}://{}:{}{}",
                self.protocol, self.host, self.port, self.prefix
            )
        }
    }
}

/// Partial update for the server address record.
///
/// Fields omitted here take the default value, not the previously stored
/// one: every write starts from [`ServerConfig::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfigUpdate {
    /// URL scheme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
    /// Hostname or IP
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Port
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Path prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl ServerConfigUpdate {
    fn over_default(self) -> ServerConfig {
        let base = ServerConfig::default();
        ServerConfig {
            protocol: self.protocol.unwrap_or(base.protocol),
            host: self.host.unwrap_or(base.host),
            port: self.port.unwrap_or(base.port),
            prefix: self.prefix.unwrap_or(base.prefix),
        }
    }
}

/// Typed accessor for the persisted server configuration
#[derive(Debug, Clone)]
pub struct ServerConfigStore {
    store: Arc<dyn KVStore>,
}

impl ServerConfigStore {
    /// Create a store over the given key-value backend.
    pub fn new(store: Arc<dyn KVStore>) -> Self {
        Self { store }
    }

    /// Current configuration.
    ///
    /// Absent or unparsable stored data yields the default record; a
    /// malformed value is logged and discarded rather than surfaced.
    pub async fn get(&self) -> Result<ServerConfig, Error> {
        let stored = self.store.read(SERVER_CONFIG_KEY).await?;
        Ok(stored
            .and_then(|raw| {
                serde_json::from_str(&raw)
                    .inspect_err(|err| {
                        tracing::warn!("discarding malformed server config: {}", err);
                    })
                    .ok()
            })
            .unwrap_or_default())
    }

    /// Merge the partial over the default record, persist and return it.
    pub async fn set(&self, update: ServerConfigUpdate) -> Result<ServerConfig, Error> {
        let merged = update.over_default();
        self.store
            .write(SERVER_CONFIG_KEY, &serde_json::to_string(&merged)?)
            .await?;
        Ok(merged)
    }

    /// Remove the persisted record, reverting to the default.
    pub async fn reset(&self) -> Result<ServerConfig, Error> {
        self.store.remove(SERVER_CONFIG_KEY).await?;
        Ok(ServerConfig::default())
    }

    /// Base URL composed from the current configuration.
    pub async fn base_url(&self) -> Result<String, Error> {
        Ok(self.get().await?.base_url())
    }
}

#[cfg(test)]
mod tests {
    use crate::kvstore::MemoryStore;

    use super::*;

    fn store() -> ServerConfigStore {
        ServerConfigStore::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_base_url_with_port() {
        let config = ServerConfig::default();
        assert_eq!(config.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_base_url_without_port() {
        let config = ServerConfig {
            protocol: Protocol::Https,
            host: "example.com".to_string(),
            port: String::new(),
            prefix: "/api".to_string(),
        };
        assert_eq!(config.base_url(), "https://example.com/api");
    }

    #[test]
    fn test_protocol_from_str() {
        assert_eq!("http".parse::<Protocol>().expect("http"), Protocol::Http);
        assert_eq!("HTTPS".parse::<Protocol>().expect("https"), Protocol::Https);
        assert!("gopher".parse::<Protocol>().is_err());
    }

    #[tokio::test]
    async fn test_get_returns_default_when_absent() {
        let config = store().get().await.expect("get");
        assert_eq!(config, ServerConfig::default());
    }

    #[tokio::test]
    async fn test_set_merges_over_default_not_over_current() {
        let store = store();

        store
            .set(ServerConfigUpdate {
                host: Some("skin.example.com".to_string()),
                port: Some("9000".to_string()),
                ..Default::default()
            })
            .await
            .expect("first set");

        // A later partial update must not keep the previously stored host:
        // omitted fields fall back to the default record.
        let merged = store
            .set(ServerConfigUpdate {
                protocol: Some(Protocol::Https),
                ..Default::default()
            })
            .await
            .expect("second set");

        assert_eq!(merged.protocol, Protocol::Https);
        assert_eq!(merged.host, "localhost");
        assert_eq!(merged.port, "8080");
        assert_eq!(merged.prefix, "/api");

        let read_back = store.get().await.expect("get");
        assert_eq!(read_back, merged);
    }

    #[tokio::test]
    async fn test_all_fields_populated_after_partial_update() {
        let store = store();
        let merged = store
            .set(ServerConfigUpdate {
                port: Some(String::new()),
                ..Default::default()
            })
            .await
            .expect("set");

        assert_eq!(merged.host, "localhost");
        assert_eq!(merged.prefix, "/api");
        assert_eq!(store.base_url().await.expect("base url"), "http://localhost/api");
    }

    #[tokio::test]
    async fn test_reset_reverts_to_default() {
        let store = store();
        store
            .set(ServerConfigUpdate {
                host: Some("skin.example.com".to_string()),
                ..Default::default()
            })
            .await
            .expect("set");

        let config = store.reset().await.expect("reset");
        assert_eq!(config, ServerConfig::default());
        assert_eq!(store.get().await.expect("get"), ServerConfig::default());
    }

    #[tokio::test]
    async fn test_malformed_stored_record_falls_back_to_default() {
        let kv = Arc::new(MemoryStore::new());
        kv.write(SERVER_CONFIG_KEY, "{ not json").await.expect("write");

        let store = ServerConfigStore::new(kv);
        assert_eq!(store.get().await.expect("get"), ServerConfig::default());
    }
}
