//! Errors

use thiserror::Error;

/// incilab error
#[derive(Debug, Error)]
pub enum Error {
    /// Session expired, signalled by envelope code 401 or HTTP status 401
    #[error("{0}")]
    SessionExpired(String),
    /// Envelope reported failure with a code other than 401
    #[error("{message}")]
    Api {
        /// Domain error code from the envelope
        code: Option<i64>,
        /// Server-supplied message
        message: String,
    },
    /// Non-2xx HTTP status reached the client without envelope inspection
    #[error("{}", status_message(*status))]
    Status {
        /// HTTP status code
        status: u16,
    },
    /// Request was sent but no response arrived
    #[error("server did not respond")]
    NoResponse,
    /// Request never left the client
    #[error("{0}")]
    Client(String),
    /// JSON error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Key-value storage failure
    #[error("storage error: {0}")]
    Storage(String),
    /// Invalid key-value storage key
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
    /// Pipeline misconfiguration
    #[error("{0}")]
    Pipeline(String),
}

/// Human-readable message for an HTTP status that reached the client
/// without a usable envelope.
pub fn status_message(status: u16) -> String {
    match status {
        401 => "unauthorized, please log in again".to_string(),
        403 => "access denied".to_string(),
        404 => "requested resource not found".to_string(),
        500 => "internal server error".to_string(),
        _ => format!("request error ({status})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_fixed_messages() {
        assert_eq!(
            Error::Status { status: 401 }.to_string(),
            "unauthorized, please log in again"
        );
        assert_eq!(Error::Status { status: 403 }.to_string(), "access denied");
        assert_eq!(
            Error::Status { status: 404 }.to_string(),
            "requested resource not found"
        );
        assert_eq!(
            Error::Status { status: 500 }.to_string(),
            "internal server error"
        );
    }

    #[test]
    fn test_status_display_generic_message() {
        assert_eq!(Error::Status { status: 418 }.to_string(), "request error (418)");
        assert_eq!(Error::Status { status: 502 }.to_string(), "request error (502)");
    }

    #[test]
    fn test_api_display_is_server_message() {
        let error = Error::Api {
            code: Some(1001),
            message: "ingredient not found".to_string(),
        };
        assert_eq!(error.to_string(), "ingredient not found");
    }

    #[test]
    fn test_session_expired_display() {
        let error = Error::SessionExpired("expired".to_string());
        assert_eq!(error.to_string(), "expired");
    }

    #[test]
    fn test_no_response_display() {
        assert_eq!(Error::NoResponse.to_string(), "server did not respond");
    }

    #[test]
    fn test_from_serde_json_error() {
        let result: Result<String, _> = serde_json::from_str("not valid json");
        let json_error = result.expect_err("invalid JSON should produce an error");
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
