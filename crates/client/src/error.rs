//! Error taxonomy for the remote collection client.
//!
//! Every non-2xx response and every transport failure is classified into
//! one [`ApiError`] variant so callers can branch on meaning rather than
//! raw status codes. There is no automatic retry anywhere in the stack.

use serde::Deserialize;

/// Convenience alias for client-layer results.
pub type ApiResult<T> = Result<T, ApiError>;

/// Classified client error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 401 — missing or rejected credentials. The session has already
    /// been cleared by the time this propagates.
    #[error("Authentication required")]
    AuthRequired,

    /// 403 — authenticated but not allowed.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 404.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 405.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// 400 from the backend, or a client-side pre-send validation
    /// failure (the request is never sent in that case).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// 5xx. The backend message is passed through when present.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Transport-level failure: connect, timeout, or body decode. The
    /// message says which.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Any other non-2xx status.
    #[error("Unexpected response ({status}): {body}")]
    Unexpected { status: u16, body: String },
}

/// Strapi error envelope: `{ "error": { "message": "..." } }`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// Classify a non-2xx response into a taxonomy variant.
    ///
    /// The body is parsed as a Strapi error envelope when possible;
    /// plain-text bodies pass through unchanged.
    pub fn classify(status: u16, body: &str) -> Self {
        let message = extract_message(body);
        match status {
            400 => ApiError::Validation(message),
            401 => ApiError::AuthRequired,
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            405 => ApiError::MethodNotAllowed(message),
            500..=599 => ApiError::Server { status, message },
            _ => ApiError::Unexpected {
                status,
                body: message,
            },
        }
    }
}

/// Pull the human-readable message out of a Strapi error envelope,
/// falling back to the raw body.
fn extract_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.to_string(),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("could not reach host: {err}")
        } else if err.is_decode() {
            format!("failed to decode response body: {err}")
        } else {
            err.to_string()
        };
        ApiError::Network { message }
    }
}
