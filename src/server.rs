//! HTTP surface of the gateway.
//!
//! | Route           | Purpose                                        |
//! |-----------------|------------------------------------------------|
//! | `POST /graphql` | execute a query with a fresh batch loader      |
//! | `GET /graphql`  | GraphiQL explorer                              |
//! | `GET /health`   | liveness probe                                 |
//!
//! [`run`] is the whole process lifecycle: it obtains the first access token
//! before binding, so a gateway that cannot authenticate never serves.

use std::net::SocketAddr;
use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use axum::extract::Extension;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use thiserror::Error;
use tokio::net::TcpListener;

use crate::auth::{AuthError, Credentials};
use crate::catalog::CatalogClient;
use crate::clients::{HttpClient, HttpError};
use crate::config::SpotifyConfig;
use crate::loader::audio_features_loader;
use crate::schema::{build_schema, SpotifySchema};

/// Errors that stop the gateway from starting or serving.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The initial client-credentials exchange failed.
    #[error("Failed to obtain the initial access token: {0}")]
    Auth(#[from] AuthError),

    /// The outbound HTTP client could not be built.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Binding the listener or serving failed.
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything a request handler needs, shared across requests.
#[derive(Clone)]
pub struct Gateway {
    schema: SpotifySchema,
    catalog: CatalogClient,
    config: Arc<SpotifyConfig>,
}

impl Gateway {
    /// Creates the gateway state and builds the schema.
    #[must_use]
    pub fn new(config: SpotifyConfig, catalog: CatalogClient) -> Self {
        Self {
            schema: build_schema(catalog.clone()),
            catalog,
            config: Arc::new(config),
        }
    }

    /// Returns the schema.
    #[must_use]
    pub const fn schema(&self) -> &SpotifySchema {
        &self.schema
    }

    /// Executes one GraphQL request with its own audio features loader.
    pub async fn execute(&self, request: async_graphql::Request) -> async_graphql::Response {
        let loader = audio_features_loader(self.catalog.clone(), &self.config);
        self.schema.execute(request.data(loader)).await
    }
}

/// Builds the router for `gateway`.
#[must_use]
pub fn router(gateway: Gateway) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .route("/health", get(health))
        .layer(Extension(gateway))
}

async fn graphql_handler(
    Extension(gateway): Extension<Gateway>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(gateway.execute(request).await)
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Serves `gateway` on an already bound listener until the process stops.
///
/// # Errors
///
/// Returns [`ServeError::Io`] if serving fails.
pub async fn serve(listener: TcpListener, gateway: Gateway) -> Result<(), ServeError> {
    axum::serve(listener, router(gateway)).await?;
    Ok(())
}

/// Authenticates, binds `0.0.0.0:{port}` and serves.
///
/// # Errors
///
/// Returns [`ServeError`] if the initial token exchange fails (nothing is
/// bound in that case), or if binding or serving fails.
pub async fn run(config: SpotifyConfig) -> Result<(), ServeError> {
    let http = HttpClient::build_reqwest()?;

    let credentials = Credentials::obtain(config.clone(), http.clone()).await?;

    let client = HttpClient::new(&config, Arc::new(credentials), http);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port()));
    let gateway = Gateway::new(config, CatalogClient::new(client));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "serving GraphQL on /graphql");
    serve(listener, gateway).await
}
