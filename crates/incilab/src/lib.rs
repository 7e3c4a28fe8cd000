//! Client SDK for the incilab skincare-ingredient platform
//!
//! [`ApiClient`] wraps the request pipeline from `incilab-http-client` and
//! exposes the platform's API surface as thin async methods: ingredients,
//! products, brands, reviews, review posts with comments and likes,
//! favorites, search history, and knowledge articles.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use incilab::{ApiClient, Environment};
//! use incilab_common::{Error, MemoryStore};
//!
//! async fn example() -> Result<(), Error> {
//!     let client = ApiClient::new(Environment::from_env(), Arc::new(MemoryStore::new())).await?;
//!
//!     let brands = client.brand_list(1, 10, Some("cerave")).await?;
//!     println!("{:?}", brands.data);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod environment;
pub mod session;

pub use client::ApiClient;
pub use environment::{Environment, DEV_BASE_URL};
pub use incilab_common::{Envelope, Error};
pub use incilab_http_client::ClientEvent;
pub use session::{spawn_session_guard, LOGIN_REDIRECT_DELAY};
