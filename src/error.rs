//! Error types for gateway configuration.
//!
//! This module contains the error type returned while building a
//! [`SpotifyConfig`](crate::SpotifyConfig), either through the builder or
//! from the process environment.
//!
//! # Example
//!
//! ```rust
//! use spotify_graphql::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the gateway.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide a valid Spotify client ID.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide a valid Spotify client secret.")]
    EmptyClientSecret,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A base URL is invalid.
    #[error("Invalid URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://api.spotify.com/v1').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The listen port is not a valid port number.
    #[error("Invalid port '{value}'. Expected a number between 0 and 65535.")]
    InvalidPort {
        /// The value that failed to parse.
        value: String,
    },
}
