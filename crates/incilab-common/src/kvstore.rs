//! Client-local key-value storage
//!
//! The durable store behind the two persisted records: the bearer credential
//! (`token`) and the server address configuration (`serverConfig`). Absence
//! of a key is not an error; callers decide what a missing value means.

use std::collections::HashMap;
use std::fmt::Debug;
use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Error;

/// Key under which the bearer credential is persisted.
pub const TOKEN_KEY: &str = "token";

/// Key under which the server configuration record is persisted.
pub const SERVER_CONFIG_KEY: &str = "serverConfig";

/// Valid ASCII characters for storage keys
pub const KEY_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_-";

/// Maximum length for storage keys
pub const KEY_MAX_LEN: usize = 120;

/// Validates that a key is within length limits and uses only the allowed
/// alphabet. The file-backed store relies on this to keep keys path-safe.
pub fn validate_key(key: &str) -> Result<(), Error> {
    if key.is_empty() || key.len() > KEY_MAX_LEN {
        return Err(Error::InvalidKey(format!(
            "key must be 1 to {KEY_MAX_LEN} characters"
        )));
    }

    if !key.chars().all(|c| KEY_ALPHABET.contains(c)) {
        return Err(Error::InvalidKey(
            "key contains invalid characters. Only ASCII letters, numbers, underscore, and hyphen are allowed"
                .to_string(),
        ));
    }

    Ok(())
}

/// Key-value store trait
#[async_trait]
pub trait KVStore: Debug + Send + Sync {
    /// Read the value stored under a key
    async fn read(&self, key: &str) -> Result<Option<String>, Error>;

    /// Write a value under a key, replacing any previous value
    async fn write(&self, key: &str, value: &str) -> Result<(), Error>;

    /// Remove a key; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<(), Error>;
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KVStore for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<String>, Error> {
        validate_key(key)?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), Error> {
        validate_key(key)?;
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), Error> {
        validate_key(key)?;
        self.values.write().await.remove(key);
        Ok(())
    }
}

/// File-backed store, one file per key under a directory
#[derive(Debug, Clone)]
pub struct FsStore {
    dir: PathBuf,
}

impl FsStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, Error> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| Error::Storage(e.to_string()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

#[async_trait]
impl KVStore for FsStore {
    async fn read(&self, key: &str) -> Result<Option<String>, Error> {
        validate_key(key)?;
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Storage(e.to_string())),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), Error> {
        validate_key(key)?;
        tokio::fs::write(self.path_for(key), value)
            .await
            .map_err(|e| Error::Storage(e.to_string()))
    }

    async fn remove(&self, key: &str) -> Result<(), Error> {
        validate_key(key)?;
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Storage(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_persisted_keys() {
        assert!(validate_key(TOKEN_KEY).is_ok());
        assert!(validate_key(SERVER_CONFIG_KEY).is_ok());
    }

    #[test]
    fn test_validate_key_rejects_bad_keys() {
        assert!(validate_key("").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key("white space").is_err());
        assert!(validate_key(&"k".repeat(KEY_MAX_LEN + 1)).is_err());
    }

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();

        assert!(store.read("token").await.expect("read").is_none());

        store.write("token", "abc123").await.expect("write");
        assert_eq!(
            store.read("token").await.expect("read").as_deref(),
            Some("abc123")
        );

        store.remove("token").await.expect("remove");
        assert!(store.read("token").await.expect("read").is_none());
    }

    #[tokio::test]
    async fn test_memory_store_remove_absent_key_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("token").await.is_ok());
    }

    #[tokio::test]
    async fn test_fs_store_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FsStore::new(dir.path()).expect("store");

        assert!(store.read("serverConfig").await.expect("read").is_none());

        store
            .write("serverConfig", r#"{"host":"example.com"}"#)
            .await
            .expect("write");
        assert_eq!(
            store.read("serverConfig").await.expect("read").as_deref(),
            Some(r#"{"host":"example.com"}"#)
        );

        store.remove("serverConfig").await.expect("remove");
        assert!(store.read("serverConfig").await.expect("read").is_none());
    }

    #[tokio::test]
    async fn test_fs_store_rejects_path_escapes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FsStore::new(dir.path()).expect("store");

        assert!(store.write("../outside", "x").await.is_err());
    }
}
