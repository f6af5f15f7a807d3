//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Spotify application client ID.
///
/// # Example
///
/// ```rust
/// use spotify_graphql::ClientId;
///
/// let id = ClientId::new("my-client-id").unwrap();
/// assert_eq!(id.as_ref(), "my-client-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Spotify application client secret.
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ClientSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use spotify_graphql::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// A validated absolute `http`/`https` base URL.
///
/// Trailing slashes are trimmed so resource paths (which always start with
/// `/`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use spotify_graphql::BaseUrl;
///
/// let url = BaseUrl::new("https://api.spotify.com/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.spotify.com/v1");
/// assert_eq!(url.join("/albums/1"), "https://api.spotify.com/v1/albums/1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .ok_or_else(|| ConfigError::InvalidUrl { url: url.clone() })?;

        if host.is_empty() || host.starts_with('/') {
            return Err(ConfigError::InvalidUrl { url });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Appends an absolute path to this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{path}", self.0)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_rejects_empty() {
        assert!(matches!(ClientId::new(""), Err(ConfigError::EmptyClientId)));
        assert!(matches!(ClientId::new("   "), Err(ConfigError::EmptyClientId)));
    }

    #[test]
    fn test_client_secret_rejects_empty() {
        assert!(matches!(
            ClientSecret::new(""),
            Err(ConfigError::EmptyClientSecret)
        ));
    }

    #[test]
    fn test_client_secret_debug_is_masked() {
        let secret = ClientSecret::new("super-secret").unwrap();
        let debug = format!("{secret:?}");
        assert!(!debug.contains("super-secret"));
        assert_eq!(debug, "ClientSecret(*****)");
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let url = BaseUrl::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_base_url_rejects_missing_scheme() {
        assert!(matches!(
            BaseUrl::new("api.spotify.com/v1"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::new("ftp://api.spotify.com"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_rejects_missing_host() {
        assert!(matches!(
            BaseUrl::new("https://"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_join() {
        let url = BaseUrl::new("https://api.spotify.com/v1").unwrap();
        assert_eq!(url.join("/tracks"), "https://api.spotify.com/v1/tracks");
    }
}
