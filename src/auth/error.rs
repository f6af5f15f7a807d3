//! Error types for the client-credentials exchange.
//!
//! # Example
//!
//! ```rust
//! use spotify_graphql::auth::AuthError;
//!
//! let error = AuthError::ClientCredentialsFailed {
//!     status: 400,
//!     message: "invalid_client".to_string(),
//! };
//! assert!(error.to_string().contains("400"));
//! ```

use thiserror::Error;

/// Errors that can occur while obtaining an access token.
///
/// At startup these are fatal. Mid-process they fail the outbound fetch that
/// triggered the refresh; the next unauthorized fetch attempts a fresh exchange.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The identity endpoint rejected the exchange or could not be reached.
    ///
    /// `status` is 0 when the request never produced a response.
    #[error("Client credentials exchange failed with status {status}: {message}")]
    ClientCredentialsFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The error message from the response.
        message: String,
    },

    /// The identity endpoint answered successfully but without a token.
    #[error("Client credentials exchange returned no access token")]
    MissingAccessToken,
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};
