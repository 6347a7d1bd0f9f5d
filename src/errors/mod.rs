//! Error handling module for the IdHub console client.
//!
//! Every failure a caller can observe funnels into [`ApiError`]: transport
//! failures, body-decode failures, and backend-reported non-2xx responses.
//! API modules never catch — errors propagate unchanged to the view layer.

use serde_json::Value;

/// Client-side API error.
#[derive(Debug)]
pub enum ApiError {
    /// Network/transport failure (connect, timeout, TLS).
    Network(String),
    /// Response body could not be decoded into the expected shape.
    Decode(String),
    /// Backend-reported error: non-2xx status with a message.
    Server { status: u16, message: String },
}

impl ApiError {
    /// HTTP status code, if the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is a 401 from the backend (stale or missing token).
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Network(msg) => msg,
            ApiError::Decode(msg) => msg,
            ApiError::Server { message, .. } => message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "decode error: {}", msg),
            ApiError::Server { status, message } => {
                write!(f, "server error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            tracing::error!("Response decode error: {:?}", err);
            ApiError::Decode(err.to_string())
        } else {
            tracing::error!("Transport error: {:?}", err);
            ApiError::Network(err.to_string())
        }
    }
}

/// Extract a message from a backend error body.
///
/// The backend is not uniform: DRF emits `{"detail": ...}`, the action
/// endpoints emit `{"message": ...}`, and a few views emit `{"error": ...}`.
/// Falls back to the raw body, or the status text when the body is empty.
pub fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["detail", "message", "error"] {
            if let Some(msg) = value.get(key).and_then(Value::as_str) {
                return msg.to_string();
            }
        }
    }
    if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        body.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_drf_detail() {
        let msg = extract_error_message(401, r#"{"detail": "Invalid token."}"#);
        assert_eq!(msg, "Invalid token.");
    }

    #[test]
    fn test_extract_action_message() {
        let msg = extract_error_message(400, r#"{"message": "connection failed"}"#);
        assert_eq!(msg, "connection failed");
    }

    #[test]
    fn test_extract_plain_body() {
        assert_eq!(extract_error_message(500, "boom"), "boom");
    }

    #[test]
    fn test_extract_empty_body() {
        assert_eq!(extract_error_message(502, ""), "HTTP 502");
    }

    #[test]
    fn test_unauthorized_predicate() {
        let err = ApiError::Server {
            status: 401,
            message: "nope".to_string(),
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(401));
        assert!(!ApiError::Network("down".to_string()).is_unauthorized());
    }
}
