//! HTTP client for catalog API communication.
//!
//! This module provides the [`HttpClient`] type, the single choke point for
//! outbound resource fetches and the only place that retries after an
//! authorization failure.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::{AccessToken, Credentials};
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::query::QueryParams;
use crate::config::{BaseUrl, SpotifyConfig};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for GET requests against the catalog API.
///
/// The client handles:
/// - URL construction from the base URL, a resource path and query parameters
/// - The `Authorization: Bearer` header from the shared [`Credentials`]
/// - Exactly one token refresh and retry on `401 Unauthorized`
/// - Extraction of the upstream error message on failures
///
/// # Thread Safety
///
/// `HttpClient` is `Clone`, `Send` and `Sync`; clones share the connection
/// pool and the credentials.
///
/// # Example
///
/// ```rust,ignore
/// use spotify_graphql::clients::{HttpClient, QueryParams};
///
/// let client = HttpClient::new(&config, credentials, reqwest::Client::new());
/// let album = client
///     .fetch("/albums/4aawyAB9vmqN3uQ7FjRGTy", &QueryParams::new().param("market", Some("US")))
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: BaseUrl,
    credentials: Arc<Credentials>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client sharing `credentials`.
    #[must_use]
    pub fn new(config: &SpotifyConfig, credentials: Arc<Credentials>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: config.api_base_url().clone(),
            credentials,
        }
    }

    /// Builds the reqwest client used for all outbound traffic.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn build_reqwest() -> Result<reqwest::Client, HttpError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(format!("spotify-graphql/{SDK_VERSION}"))
            .build()?;
        Ok(client)
    }

    /// Returns the base URL of this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the shared credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Arc<Credentials> {
        &self.credentials
    }

    /// Fetches `path` with `params` and decodes the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::fetch`], plus [`HttpError::Decode`] if the body
    /// does not match `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> Result<T, HttpError> {
        let body = self.fetch(path, params).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Fetches `path` with `params` and returns the parsed JSON body.
    ///
    /// On `401 Unauthorized` the shared token is refreshed once and the
    /// request is repeated once. A second `401` is returned as
    /// [`HttpError::Response`] with code 401.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Non-2xx response received (`Response`)
    /// - The token refresh failed (`Auth`)
    /// - Network error occurs (`Network`)
    /// - The body is not JSON (`Decode`)
    pub async fn fetch(&self, path: &str, params: &QueryParams) -> Result<Value, HttpError> {
        let url = self.base_url.join(&params.apply_to(path));

        let mut token = self.credentials.current().await;
        let mut allow_retry = true;
        loop {
            tracing::debug!(%url, "fetching catalog resource");
            let (code, body) = self.send(&url, &token).await?;

            if (200..300).contains(&code) {
                return Ok(body);
            }

            let error = HttpResponseError::from_body(code, &body);

            if error.is_unauthorized() && allow_retry {
                tracing::debug!(%url, "unauthorized response, refreshing access token");
                token = self.credentials.refresh(&token).await?;
                allow_retry = false;
                continue;
            }

            if error.is_unauthorized() {
                tracing::warn!(%url, "still unauthorized after refreshing the access token");
            } else {
                tracing::warn!(%url, code, message = %error.message, "catalog request failed");
            }
            return Err(error.into());
        }
    }

    /// Sends one GET and returns the status code and JSON body.
    async fn send(&self, url: &str, token: &AccessToken) -> Result<(u16, Value), HttpError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::AUTHORIZATION, token.bearer())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let code = response.status().as_u16();
        let body_text = response.text().await?;

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else if (200..300).contains(&code) {
            serde_json::from_str(&body_text)?
        } else {
            // Error bodies are best effort; the status alone still describes the failure
            serde_json::from_str(&body_text).unwrap_or_else(|_| serde_json::json!({}))
        };

        Ok((code, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientId, ClientSecret};

    fn create_client(base_url: &str) -> HttpClient {
        let config = SpotifyConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .api_base_url(BaseUrl::new(base_url).unwrap())
            .build()
            .unwrap();
        let http = reqwest::Client::new();
        let credentials = Arc::new(Credentials::with_token(
            config.clone(),
            http.clone(),
            AccessToken::new("token"),
        ));
        HttpClient::new(&config, credentials, http)
    }

    #[test]
    fn test_client_uses_configured_base_url() {
        let client = create_client("https://api.example.com/v1/");
        assert_eq!(client.base_url().as_ref(), "https://api.example.com/v1");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[test]
    fn test_build_reqwest_succeeds() {
        assert!(HttpClient::build_reqwest().is_ok());
    }

    #[test]
    fn test_clones_share_credentials() {
        let client = create_client("https://api.example.com/v1");
        let clone = client.clone();
        assert!(Arc::ptr_eq(client.credentials(), clone.credentials()));
    }
}
