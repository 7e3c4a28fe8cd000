//! Server response envelope

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// The server's uniform JSON response wrapper.
///
/// Resolved calls receive the whole envelope; the payload stays under
/// [`Envelope::data`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Whether the operation succeeded
    pub success: bool,
    /// Domain error code, set on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload
    #[serde(default)]
    pub data: Option<Value>,
}

impl Envelope {
    /// Deserialize the payload into a concrete type.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<Option<T>, Error> {
        match &self.data {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }
}
