//! OAuth 2.0 Client Credentials Grant against the Spotify accounts service.
//!
//! The gateway never acts on behalf of a user, so the only grant it needs is
//! the server-to-server client credentials flow: the client ID and secret are
//! sent as HTTP basic authentication and the identity endpoint answers with a
//! bearer token for the catalog API.
//!
//! This function performs exactly one exchange. Retry policy lives in the
//! HTTP client, which calls back into [`Credentials`](super::Credentials)
//! when the catalog API answers `401 Unauthorized`.
//!
//! # Example
//!
//! ```rust,ignore
//! use spotify_graphql::auth::request_access_token;
//!
//! let http = reqwest::Client::new();
//! let token = request_access_token(&http, &config).await?;
//! ```

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

use crate::auth::{AccessToken, AuthError};
use crate::config::SpotifyConfig;

/// Grant type for client credentials.
const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// Successful response from the identity endpoint.
#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: Option<String>,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Builds the `Authorization` header value for the exchange.
fn basic_authorization(config: &SpotifyConfig) -> String {
    let credentials = format!(
        "{}:{}",
        config.client_id().as_ref(),
        config.client_secret().as_ref()
    );
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Exchanges the configured client credentials for an access token.
///
/// # Errors
///
/// - [`AuthError::ClientCredentialsFailed`] if the request cannot be sent or
///   the identity endpoint returns a non-success status
/// - [`AuthError::MissingAccessToken`] if the response carries no token
pub async fn request_access_token(
    http: &reqwest::Client,
    config: &SpotifyConfig,
) -> Result<AccessToken, AuthError> {
    let response = http
        .post(config.token_url().as_ref())
        .header(reqwest::header::AUTHORIZATION, basic_authorization(config))
        .form(&[("grant_type", CLIENT_CREDENTIALS_GRANT_TYPE)])
        .send()
        .await
        .map_err(|e| AuthError::ClientCredentialsFailed {
            status: 0,
            message: format!("Network error: {e}"),
        })?;

    let status = response.status().as_u16();

    if !response.status().is_success() {
        let error_body = response.text().await.unwrap_or_default();
        tracing::warn!(status, "client credentials exchange rejected");
        return Err(AuthError::ClientCredentialsFailed {
            status,
            message: error_body,
        });
    }

    let token_response: AccessTokenResponse =
        response
            .json()
            .await
            .map_err(|e| AuthError::ClientCredentialsFailed {
                status,
                message: format!("Failed to parse token response: {e}"),
            })?;

    let token = token_response
        .access_token
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingAccessToken)?;

    tracing::debug!(
        token_type = token_response.token_type.as_deref().unwrap_or("unknown"),
        expires_in = token_response.expires_in,
        "obtained access token"
    );

    Ok(AccessToken::new(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, ClientId, ClientSecret};
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_config(token_url: &str) -> SpotifyConfig {
        SpotifyConfig::builder()
            .client_id(ClientId::new("test-client-id").unwrap())
            .client_secret(ClientSecret::new("test-client-secret").unwrap())
            .token_url(BaseUrl::new(token_url).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_basic_authorization_encodes_id_and_secret() {
        let config = create_config("https://accounts.example.com/api/token");
        // base64("test-client-id:test-client-secret")
        assert_eq!(
            basic_authorization(&config),
            "Basic dGVzdC1jbGllbnQtaWQ6dGVzdC1jbGllbnQtc2VjcmV0"
        );
    }

    #[tokio::test]
    async fn test_successful_exchange_returns_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/token"))
            .and(header(
                "authorization",
                "Basic dGVzdC1jbGllbnQtaWQ6dGVzdC1jbGllbnQtc2VjcmV0",
            ))
            .and(body_string("grant_type=client_credentials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "fresh-token",
                "token_type": "Bearer",
                "expires_in": 3600
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = create_config(&format!("{}/api/token", mock_server.uri()));
        let token = request_access_token(&reqwest::Client::new(), &config)
            .await
            .unwrap();

        assert_eq!(token.as_ref(), "fresh-token");
    }

    #[tokio::test]
    async fn test_rejected_exchange_maps_to_client_credentials_failed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "invalid_client",
                "error_description": "Invalid client secret"
            })))
            .mount(&mock_server)
            .await;

        let config = create_config(&format!("{}/api/token", mock_server.uri()));
        let result = request_access_token(&reqwest::Client::new(), &config).await;

        match result {
            Err(AuthError::ClientCredentialsFailed { status, message }) => {
                assert_eq!(status, 400);
                assert!(message.contains("Invalid client secret"));
            }
            other => panic!("Expected ClientCredentialsFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_response_without_token_is_missing_access_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "token_type": "Bearer" })),
            )
            .mount(&mock_server)
            .await;

        let config = create_config(&format!("{}/api/token", mock_server.uri()));
        let result = request_access_token(&reqwest::Client::new(), &config).await;

        assert!(matches!(result, Err(AuthError::MissingAccessToken)));
    }

    #[tokio::test]
    async fn test_network_errors_map_to_status_zero() {
        // Nothing listens on port 9 of the loopback interface
        let config = create_config("http://127.0.0.1:9/api/token");
        let result = request_access_token(&reqwest::Client::new(), &config).await;

        assert!(matches!(
            result,
            Err(AuthError::ClientCredentialsFailed { status: 0, .. })
        ));
    }
}
