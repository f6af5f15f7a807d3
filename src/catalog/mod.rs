//! Catalog resources: paths, models, paging and the request translation layer.
//!
//! # Overview
//!
//! - [`CatalogClient`]: one method per outbound resource operation
//! - [`ResourcePath`]: `/{kind}/{id}/{sub}` paths below the API base URL
//! - [`Paging`] and [`Edge`]: paged listings and their schema shape
//! - [`key_value_pairs`]: external id/URL maps as ordered pair lists
//! - [`models`]: typed resource objects
//!
//! # Sub-resources
//!
//! Parents such as albums and playlists embed the first page of their
//! children. A sub-resource field with no arguments reuses that page
//! ([`SubResourceStrategy::UseEmbedded`]); any argument forces a fresh fetch
//! scoped under the parent id ([`SubResourceStrategy::FetchFresh`]). An
//! argument written as `null` counts as supplied.

mod client;
mod edge;
mod external;
pub mod models;
mod path;

pub use client::CatalogClient;
pub use edge::{to_edge, Edge, Paging};
pub use external::{key_value_pairs, ExternalMap, KeyValuePair};
pub use path::{ResourceKind, ResourcePath};

/// How a nested sub-resource field obtains its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubResourceStrategy {
    /// Return the listing already embedded in the parent object.
    UseEmbedded,
    /// Fetch the listing under the parent id with the given arguments.
    FetchFresh,
}

impl SubResourceStrategy {
    /// Picks the strategy from the number of arguments present in the query,
    /// explicit `null`s included.
    #[must_use]
    pub const fn select(supplied_arguments: usize) -> Self {
        if supplied_arguments > 0 {
            Self::FetchFresh
        } else {
            Self::UseEmbedded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_embedded_listing() {
        assert_eq!(SubResourceStrategy::select(0), SubResourceStrategy::UseEmbedded);
    }

    #[test]
    fn test_any_argument_fetches_fresh() {
        assert_eq!(SubResourceStrategy::select(1), SubResourceStrategy::FetchFresh);
        assert_eq!(SubResourceStrategy::select(3), SubResourceStrategy::FetchFresh);
    }
}
