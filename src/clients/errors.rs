//! HTTP-specific error types for outbound catalog calls.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: a non-2xx response from the catalog API, including
//!   a second consecutive `401 Unauthorized` after the single refresh
//! - [`HttpError`]: unified error type encompassing all fetch failures
//!
//! Errors stay local to the field resolution that produced them; the schema
//! attaches them to that field while sibling fields still resolve.
//!
//! # Example
//!
//! ```rust,ignore
//! use spotify_graphql::clients::HttpError;
//!
//! match client.fetch("/albums/unknown", &QueryParams::new()).await {
//!     Ok(json) => println!("{json}"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Auth(e)) => println!("Token refresh failed: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::Decode(e)) => println!("Unexpected payload: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::auth::AuthError;

/// Error returned when the catalog API answers with a non-successful status.
///
/// The message is the upstream-supplied one, taken from the JSON error
/// payload (`{"error": {"status": 404, "message": "..."}}`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The upstream error message.
    pub message: String,
}

impl HttpResponseError {
    /// Builds the error from a response status and its (possibly empty) body.
    ///
    /// The message is looked up in `error.message`, then `error_description`,
    /// then a plain string `error`, and finally falls back to the status.
    #[must_use]
    pub fn from_body(code: u16, body: &Value) -> Self {
        let message = body
            .pointer("/error/message")
            .and_then(Value::as_str)
            .or_else(|| body.get("error_description").and_then(Value::as_str))
            .or_else(|| body.get("error").and_then(Value::as_str))
            .map_or_else(|| format!("Request failed with status {code}"), String::from);

        Self { code, message }
    }

    /// Returns whether this is a `401 Unauthorized` response.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.code == 401
    }
}

/// Unified error type for outbound catalog calls.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response from the catalog API.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The token refresh triggered by an unauthorized response failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not have the expected shape.
    #[error("Unexpected response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
