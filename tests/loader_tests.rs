//! Integration tests for the audio features batch loader.
//!
//! These tests verify batching, key alignment, request-scoped memoization
//! and batch size limits against a mock catalog server.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use spotify_graphql::auth::{AccessToken, Credentials};
use spotify_graphql::catalog::CatalogClient;
use spotify_graphql::clients::{HttpClient, HttpError};
use spotify_graphql::loader::{audio_features_loader, AudioFeaturesDataLoader};
use spotify_graphql::{BaseUrl, ClientId, ClientSecret, SpotifyConfig};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn create_config(server: &MockServer, max_batch_size: usize) -> SpotifyConfig {
    SpotifyConfig::builder()
        .client_id(ClientId::new("id").unwrap())
        .client_secret(ClientSecret::new("secret").unwrap())
        .api_base_url(BaseUrl::new(format!("{}/v1", server.uri())).unwrap())
        .batch_delay(Duration::from_millis(5))
        .max_batch_size(max_batch_size)
        .build()
        .unwrap()
}

fn create_loader(server: &MockServer, max_batch_size: usize) -> AudioFeaturesDataLoader {
    let config = create_config(server, max_batch_size);
    let http = reqwest::Client::new();
    let credentials = Arc::new(Credentials::with_token(
        config.clone(),
        http.clone(),
        AccessToken::new("token"),
    ));
    let catalog = CatalogClient::new(HttpClient::new(&config, credentials, http));
    audio_features_loader(catalog, &config)
}

fn features(id: &str) -> Value {
    json!({"id": id, "tempo": 120.0, "type": "audio_features"})
}

/// Answers the multi-id endpoint with the requested ids in reverse order.
fn reversed_features(request: &Request) -> ResponseTemplate {
    let ids = request
        .url
        .query_pairs()
        .find(|(name, _)| name == "ids")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default();
    let items: Vec<Value> = ids.split(',').rev().map(features).collect();
    ResponseTemplate::new(200).set_body_json(json!({ "audio_features": items }))
}

/// Answers the single-resource endpoint with the id from the path.
fn single_features(request: &Request) -> ResponseTemplate {
    let id = request.url.path().rsplit('/').next().unwrap_or_default();
    ResponseTemplate::new(200).set_body_json(features(id))
}

// === Batching ===

#[tokio::test]
async fn test_sibling_loads_are_coalesced_into_one_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/audio-features"))
        .respond_with(reversed_features)
        .expect(1)
        .mount(&server)
        .await;

    let loader = create_loader(&server, 100);
    let (t3, t1, t2) = tokio::join!(
        loader.load_one("t3".to_string()),
        loader.load_one("t1".to_string()),
        loader.load_one("t2".to_string()),
    );

    assert_eq!(t3.unwrap().unwrap().id, "t3");
    assert_eq!(t1.unwrap().unwrap().id, "t1");
    assert_eq!(t2.unwrap().unwrap().id, "t2");
}

#[tokio::test]
async fn test_single_key_uses_single_resource_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/audio-features/t1"))
        .respond_with(single_features)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/audio-features"))
        .respond_with(reversed_features)
        .expect(0)
        .mount(&server)
        .await;

    let loader = create_loader(&server, 100);
    let value = loader.load_one("t1".to_string()).await.unwrap();

    assert_eq!(value.unwrap().id, "t1");
}

#[tokio::test]
async fn test_batches_respect_max_batch_size() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/audio-features"))
        .respond_with(reversed_features)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/v1/audio-features/t[0-9]$"))
        .respond_with(single_features)
        .expect(1)
        .mount(&server)
        .await;

    let loader = create_loader(&server, 2);
    let (a, b, c) = tokio::join!(
        loader.load_one("t1".to_string()),
        loader.load_one("t2".to_string()),
        loader.load_one("t3".to_string()),
    );

    assert_eq!(a.unwrap().unwrap().id, "t1");
    assert_eq!(b.unwrap().unwrap().id, "t2");
    assert_eq!(c.unwrap().unwrap().id, "t3");
}

// === Memoization ===

#[tokio::test]
async fn test_repeated_key_is_served_from_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/audio-features/t1"))
        .respond_with(single_features)
        .expect(1)
        .mount(&server)
        .await;

    let loader = create_loader(&server, 100);
    let first = loader.load_one("t1".to_string()).await.unwrap();
    let second = loader.load_one("t1".to_string()).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_separate_loaders_do_not_share_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/audio-features/t1"))
        .respond_with(single_features)
        .expect(2)
        .mount(&server)
        .await;

    let first_request = create_loader(&server, 100);
    let second_request = create_loader(&server, 100);

    first_request.load_one("t1".to_string()).await.unwrap();
    second_request.load_one("t1".to_string()).await.unwrap();
}

// === Missing and Failed Keys ===

#[tokio::test]
async fn test_null_entry_resolves_to_absent_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/audio-features"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "audio_features": [null, features("t1")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let loader = create_loader(&server, 100);
    let (known, unknown) = tokio::join!(
        loader.load_one("t1".to_string()),
        loader.load_one("unknown".to_string()),
    );

    assert_eq!(known.unwrap().unwrap().id, "t1");
    assert_eq!(unknown.unwrap(), None);
}

#[tokio::test]
async fn test_unknown_single_key_resolves_to_absent_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/audio-features/unknown"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"status": 404, "message": "Not found."}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let loader = create_loader(&server, 100);
    let value = loader.load_one("unknown".to_string()).await.unwrap();

    assert_eq!(value, None);
}

#[tokio::test]
async fn test_single_key_failure_other_than_not_found_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/audio-features/t1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let loader = create_loader(&server, 100);
    let error = loader.load_one("t1".to_string()).await.unwrap_err();

    assert!(matches!(&*error, HttpError::Response(e) if e.code == 500));
}

#[tokio::test]
async fn test_upstream_failure_is_reported_to_every_caller() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/audio-features"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let loader = create_loader(&server, 100);
    let (a, b) = tokio::join!(
        loader.load_one("t1".to_string()),
        loader.load_one("t2".to_string()),
    );

    for result in [a, b] {
        let error = result.unwrap_err();
        assert!(matches!(&*error, HttpError::Response(e) if e.code == 502));
    }
}
