//! Shared types for the incilab client SDK
//!
//! This crate holds everything the request pipeline and the API surface have
//! in common: the error taxonomy, the server's response envelope, the
//! client-local key-value store, and the typed accessors for the two
//! persisted records (bearer credential and server address configuration).

pub mod envelope;
pub mod error;
pub mod kvstore;
pub mod server_config;
pub mod session;

pub use envelope::Envelope;
pub use error::Error;
pub use kvstore::{FsStore, KVStore, MemoryStore, SERVER_CONFIG_KEY, TOKEN_KEY};
pub use server_config::{Protocol, ServerConfig, ServerConfigStore, ServerConfigUpdate};
pub use session::SessionStore;
