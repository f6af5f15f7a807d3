//! HTTP client types for catalog API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async client every outbound resource fetch goes through
//! - [`QueryParams`]: ordered query parameters that drop absent values
//! - [`HttpError`]: unified fetch error
//!
//! # Retry Behavior
//!
//! The client retries exactly once, and only after a `401 Unauthorized`: it
//! refreshes the shared access token and repeats the request. Every other
//! non-2xx status is returned immediately as [`HttpError::Response`].

mod errors;
mod http_client;
mod query;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use query::{join_ids, QueryParams};
