//! Configuration types for the gateway.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`SpotifyConfig`]: The configuration struct holding all gateway settings
//! - [`SpotifyConfigBuilder`]: A builder for constructing [`SpotifyConfig`] instances
//! - [`ClientId`]: A validated client ID newtype
//! - [`ClientSecret`]: A validated client secret newtype with masked debug output
//! - [`BaseUrl`]: A validated absolute base URL
//!
//! # Example
//!
//! ```rust
//! use spotify_graphql::{SpotifyConfig, ClientId, ClientSecret};
//!
//! let config = SpotifyConfig::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .port(8080)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.port(), 8080);
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, ClientId, ClientSecret};

use std::time::Duration;

use crate::error::ConfigError;

/// Default base URL of the catalog API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Default identity endpoint for the client-credentials exchange.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 4000;

/// Default window during which audio-feature lookups are coalesced.
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_millis(1);

/// Largest number of ids the multi-id audio features endpoint accepts.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 100;

/// Environment variable holding the client ID.
pub const CLIENT_ID_VAR: &str = "CLIENT_ID";

/// Environment variable holding the client secret.
pub const CLIENT_SECRET_VAR: &str = "CLIENT_SECRET";

/// Environment variable holding the listen port.
pub const PORT_VAR: &str = "PORT";

/// Configuration for the gateway.
///
/// Holds the application credentials, the upstream endpoints and the
/// batching knobs of the audio features loader.
///
/// # Thread Safety
///
/// `SpotifyConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct SpotifyConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    api_base_url: BaseUrl,
    token_url: BaseUrl,
    port: u16,
    batch_delay: Duration,
    max_batch_size: usize,
}

impl SpotifyConfig {
    /// Creates a new builder for constructing a `SpotifyConfig`.
    #[must_use]
    pub fn builder() -> SpotifyConfigBuilder {
        SpotifyConfigBuilder::new()
    }

    /// Loads the configuration from the process environment.
    ///
    /// Reads `CLIENT_ID`, `CLIENT_SECRET` and `PORT` (defaulting to 4000).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a credential is missing or empty, or if
    /// `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`SpotifyConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = lookup(CLIENT_ID_VAR).ok_or(ConfigError::MissingRequiredField {
            field: CLIENT_ID_VAR,
        })?;
        let client_secret = lookup(CLIENT_SECRET_VAR).ok_or(ConfigError::MissingRequiredField {
            field: CLIENT_SECRET_VAR,
        })?;

        let mut builder = Self::builder()
            .client_id(ClientId::new(client_id)?)
            .client_secret(ClientSecret::new(client_secret)?);

        if let Some(port) = lookup(PORT_VAR) {
            let parsed = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: port.clone() })?;
            builder = builder.port(parsed);
        }

        builder.build()
    }

    /// Returns the client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the catalog API base URL.
    #[must_use]
    pub const fn api_base_url(&self) -> &BaseUrl {
        &self.api_base_url
    }

    /// Returns the identity endpoint URL.
    #[must_use]
    pub const fn token_url(&self) -> &BaseUrl {
        &self.token_url
    }

    /// Returns the listen port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the batch window of the audio features loader.
    #[must_use]
    pub const fn batch_delay(&self) -> Duration {
        self.batch_delay
    }

    /// Returns the largest batch the audio features loader dispatches.
    #[must_use]
    pub const fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }
}

// Verify SpotifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SpotifyConfig>();
};

/// Builder for constructing [`SpotifyConfig`] instances.
///
/// Required fields are `client_id` and `client_secret`.
///
/// # Defaults
///
/// - `api_base_url`: `https://api.spotify.com/v1`
/// - `token_url`: `https://accounts.spotify.com/api/token`
/// - `port`: 4000
/// - `batch_delay`: 1ms
/// - `max_batch_size`: 100
#[derive(Debug, Default)]
pub struct SpotifyConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    api_base_url: Option<BaseUrl>,
    token_url: Option<BaseUrl>,
    port: Option<u16>,
    batch_delay: Option<Duration>,
    max_batch_size: Option<usize>,
}

impl SpotifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client ID (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Overrides the catalog API base URL.
    #[must_use]
    pub fn api_base_url(mut self, url: BaseUrl) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Overrides the identity endpoint URL.
    #[must_use]
    pub fn token_url(mut self, url: BaseUrl) -> Self {
        self.token_url = Some(url);
        self
    }

    /// Sets the listen port.
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the window during which audio-feature lookups are coalesced.
    #[must_use]
    pub const fn batch_delay(mut self, delay: Duration) -> Self {
        self.batch_delay = Some(delay);
        self
    }

    /// Sets the largest batch the audio features loader dispatches.
    #[must_use]
    pub const fn max_batch_size(mut self, size: usize) -> Self {
        self.max_batch_size = Some(size);
        self
    }

    /// Builds the [`SpotifyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` are not set, or [`ConfigError::InvalidUrl`] if a
    /// default URL fails validation.
    pub fn build(self) -> Result<SpotifyConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        let api_base_url = match self.api_base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_API_BASE_URL)?,
        };
        let token_url = match self.token_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_TOKEN_URL)?,
        };

        Ok(SpotifyConfig {
            client_id,
            client_secret,
            api_base_url,
            token_url,
            port: self.port.unwrap_or(DEFAULT_PORT),
            batch_delay: self.batch_delay.unwrap_or(DEFAULT_BATCH_DELAY),
            max_batch_size: self.max_batch_size.unwrap_or(DEFAULT_MAX_BATCH_SIZE).max(1),
        })
    }
}
