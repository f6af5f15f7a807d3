//! # Spotify GraphQL Gateway
//!
//! A GraphQL gateway over the Spotify Web API catalog. Incoming graph queries
//! are translated into REST calls against the catalog API, with one shared,
//! self-refreshing access token and request-scoped batching of per-track
//! lookups.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`SpotifyConfig`] and [`SpotifyConfigBuilder`]
//! - The client-credentials exchange and the shared token cell in [`auth`]
//! - An HTTP client that refreshes the token and retries once on `401` in [`clients`]
//! - Typed catalog resources, paging edges and request translation in [`catalog`]
//! - Batched audio features lookups in [`loader`]
//! - The GraphQL schema in [`schema`] and its HTTP surface in [`server`]
//!
//! ## Quick Start
//!
//! ```rust
//! use spotify_graphql::{ClientId, ClientSecret, SpotifyConfig};
//!
//! let config = SpotifyConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-client-secret").unwrap())
//!     .port(4000)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base_url().as_ref(), "https://api.spotify.com/v1");
//! ```
//!
//! ## Running the Gateway
//!
//! ```rust,ignore
//! use spotify_graphql::{server, SpotifyConfig};
//!
//! let config = SpotifyConfig::from_env()?;
//! server::run(config).await?;
//! ```
//!
//! ## Querying
//!
//! ```graphql
//! {
//!   album(id: "4aawyAB9vmqN3uQ7FjRGTy") {
//!     name
//!     tracks { items { name } paging { total } }
//!   }
//!   search(q: "daft punk", type: [ARTIST]) {
//!     artists { items { name top_tracks(market: "US") { name audio_features { tempo } } } }
//!   }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **One token owner**: only [`auth::Credentials`] replaces the access token
//! - **One retry choke point**: only [`clients::HttpClient`] retries, once, after `401`
//! - **Request-scoped caching**: loaders never outlive the request that built them
//! - **Thread-safe**: shared types are `Send + Sync`

pub mod auth;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod error;
pub mod loader;
pub mod schema;
pub mod server;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, ClientId, ClientSecret, SpotifyConfig, SpotifyConfigBuilder};
pub use error::ConfigError;

pub use auth::{AccessToken, AuthError, Credentials};
pub use catalog::{to_edge, CatalogClient, Edge, Paging};
pub use clients::{HttpClient, HttpError, HttpResponseError, QueryParams};
pub use schema::{build_schema, SpotifySchema};
