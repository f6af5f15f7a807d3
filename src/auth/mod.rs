//! Credential management for outbound catalog calls.
//!
//! This module provides:
//!
//! - [`request_access_token`]: the client-credentials exchange against the
//!   identity endpoint
//! - [`Credentials`]: the single, shared owner of the current [`AccessToken`]
//!   with a serialized refresh path
//! - [`AuthError`]: failures of the exchange
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use spotify_graphql::SpotifyConfig;
//! use spotify_graphql::auth::Credentials;
//!
//! let config = SpotifyConfig::from_env()?;
//! let credentials = Arc::new(Credentials::obtain(config, reqwest::Client::new()).await?);
//! ```

mod client_credentials;
mod credentials;
mod error;

pub use client_credentials::request_access_token;
pub use credentials::{AccessToken, Credentials};
pub use error::AuthError;
