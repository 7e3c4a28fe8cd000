//! Request descriptor

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use incilab_common::Error;

/// HTTP verb of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl Method {
    /// Verb name in upper case
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound request.
///
/// Built once by an API module, optionally extended by outbound pipeline
/// stages, then consumed exactly once by the client.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP verb
    pub method: Method,
    /// Path relative to the client's base URL
    pub path: String,
    /// Query string pairs
    pub query: Vec<(String, String)>,
    /// JSON body
    pub body: Option<Value>,
    /// Headers attached by outbound pipeline stages
    pub headers: Vec<(String, String)>,
    /// Whether the caller wants the raw payload instead of an envelope
    pub binary: bool,
}

impl RequestDescriptor {
    /// Descriptor with the given verb and path
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
            binary: false,
        }
    }

    /// GET descriptor
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// POST descriptor
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// PUT descriptor
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// DELETE descriptor
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Append a query pair
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a query pair when the value is present
    pub fn query_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Attach a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Request the raw payload, skipping envelope inspection
    pub fn binary(mut self) -> Self {
        self.binary = true;
        self
    }

    /// Attach a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}
