//! The process-wide bearer token and its refresh path.
//!
//! [`Credentials`] is the single owner of the current [`AccessToken`]. It is
//! created once at startup and shared (behind an `Arc`) with every component
//! that issues outbound calls. Only [`Credentials::refresh`] replaces the
//! token, and refreshes are serialized: when several fetches fail with
//! `401 Unauthorized` at the same time, the first one performs the exchange
//! and the others pick up its result instead of starting their own.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{Mutex, RwLock};

use crate::auth::{request_access_token, AuthError};
use crate::config::SpotifyConfig;

/// An opaque bearer token for the catalog API.
///
/// The `Debug` implementation masks the value.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// Owner of the shared access token.
///
/// # Thread Safety
///
/// `Credentials` is `Send + Sync`; share it with `Arc<Credentials>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use spotify_graphql::auth::Credentials;
///
/// let http = reqwest::Client::new();
/// let credentials = Arc::new(Credentials::obtain(config, http).await?);
/// let token = credentials.current().await;
/// ```
pub struct Credentials {
    config: SpotifyConfig,
    http: reqwest::Client,
    token: RwLock<AccessToken>,
    refresh_guard: Mutex<()>,
    refreshes: AtomicU64,
}

// Verify Credentials is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credentials>();
};

impl Credentials {
    /// Performs the initial exchange and returns the populated credentials.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthError`] of the exchange. The server must not start
    /// serving when this fails.
    pub async fn obtain(config: SpotifyConfig, http: reqwest::Client) -> Result<Self, AuthError> {
        let token = request_access_token(&http, &config).await?;
        tracing::info!("obtained initial access token");
        Ok(Self::with_token(config, http, token))
    }

    /// Creates credentials around an already known token.
    #[must_use]
    pub fn with_token(config: SpotifyConfig, http: reqwest::Client, token: AccessToken) -> Self {
        Self {
            config,
            http,
            token: RwLock::new(token),
            refresh_guard: Mutex::new(()),
            refreshes: AtomicU64::new(0),
        }
    }

    /// Returns a copy of the current token.
    pub async fn current(&self) -> AccessToken {
        self.token.read().await.clone()
    }

    /// Replaces `stale` with a freshly exchanged token.
    ///
    /// If another caller already replaced `stale` while this one waited for
    /// the refresh guard, the replacement is returned and no exchange is made.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthError`] of the exchange; the current token is left
    /// untouched in that case.
    pub async fn refresh(&self, stale: &AccessToken) -> Result<AccessToken, AuthError> {
        let _guard = self.refresh_guard.lock().await;

        {
            let current = self.token.read().await;
            if *current != *stale {
                tracing::debug!("access token already refreshed by a concurrent request");
                return Ok(current.clone());
            }
        }

        tracing::debug!("refreshing access token");
        let fresh = request_access_token(&self.http, &self.config).await?;
        *self.token.write().await = fresh.clone();
        self.refreshes.fetch_add(1, Ordering::Relaxed);

        Ok(fresh)
    }

    /// Returns how many times the token has been replaced since startup.
    #[must_use]
    pub fn refresh_count(&self) -> u64 {
        self.refreshes.load(Ordering::Relaxed)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token_url", self.config.token_url())
            .field("refreshes", &self.refresh_count())
            .finish_non_exhaustive()
    }
}
