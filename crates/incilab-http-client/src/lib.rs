//! HTTP request pipeline for the incilab client SDK
//!
//! A single shared [`HttpClient`] runs every request through an ordered
//! list of [`Middleware`] stages. The built-in stages attach the stored
//! bearer credential on the way out ([`BearerAuth`]) and normalize every
//! reply into an envelope, raw bytes, or a classified error on the way in
//! ([`EnvelopeNormalizer`]). Session teardown and user-visible messages are
//! raised as [`ClientEvent`]s; the pipeline itself never navigates and
//! never retries.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use incilab_common::{Error, MemoryStore, SessionStore};
//! use incilab_http_client::{BearerAuth, EnvelopeNormalizer, EventBus, HttpClient};
//!
//! async fn example() -> Result<(), Error> {
//!     let session = SessionStore::new(Arc::new(MemoryStore::new()));
//!     let events = EventBus::new();
//!     let client = HttpClient::builder("http://localhost:8080/api")
//!         .events(events.clone())
//!         .with(BearerAuth::new(session.clone()))
//!         .with(EnvelopeNormalizer::new(session, events))
//!         .build()?;
//!
//!     let envelope = client.get("/brand/all", &[]).await?;
//!     println!("{:?}", envelope.data);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod events;
pub mod middleware;
pub mod normalize;
pub mod request;

pub use auth::BearerAuth;
pub use client::{HttpClient, HttpClientBuilder, REQUEST_TIMEOUT};
pub use events::{ClientEvent, EventBus};
pub use middleware::{Flow, Middleware, Payload, Reply};
pub use normalize::{EnvelopeNormalizer, SESSION_EXPIRED_NOTICE};
pub use request::{Method, RequestDescriptor};
