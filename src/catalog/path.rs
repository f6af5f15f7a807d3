//! Resource paths of the catalog API.
//!
//! A [`ResourcePath`] is built from a [`ResourceKind`], an optional identifier
//! and optional sub-resource segments, and is immutable once built.
//!
//! # Example
//!
//! ```rust
//! use spotify_graphql::catalog::{ResourceKind, ResourcePath};
//!
//! assert_eq!(ResourcePath::collection(ResourceKind::Albums).as_str(), "/albums");
//! assert_eq!(ResourcePath::item(ResourceKind::Albums, "4aaw").as_str(), "/albums/4aaw");
//! assert_eq!(
//!     ResourcePath::item(ResourceKind::Artists, "0TnO").sub("top-tracks").as_str(),
//!     "/artists/0TnO/top-tracks"
//! );
//! ```

use std::fmt;

/// Kinds of resources the gateway reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// `/albums`
    Albums,
    /// `/artists`
    Artists,
    /// `/tracks`
    Tracks,
    /// `/playlists`
    Playlists,
    /// `/users`
    Users,
    /// `/browse/categories`
    Categories,
    /// `/browse/featured-playlists`
    FeaturedPlaylists,
    /// `/browse/new-releases`
    NewReleases,
    /// `/audio-features`
    AudioFeatures,
    /// `/audio-analysis`
    AudioAnalysis,
    /// `/search`
    Search,
}

impl ResourceKind {
    /// Returns the collection path segment(s) of this kind.
    #[must_use]
    pub const fn segment(&self) -> &'static str {
        match self {
            Self::Albums => "albums",
            Self::Artists => "artists",
            Self::Tracks => "tracks",
            Self::Playlists => "playlists",
            Self::Users => "users",
            Self::Categories => "browse/categories",
            Self::FeaturedPlaylists => "browse/featured-playlists",
            Self::NewReleases => "browse/new-releases",
            Self::AudioFeatures => "audio-features",
            Self::AudioAnalysis => "audio-analysis",
            Self::Search => "search",
        }
    }
}

/// An absolute path below the catalog API base URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath(String);

impl ResourcePath {
    /// Path of a whole collection, e.g. `/albums`.
    #[must_use]
    pub fn collection(kind: ResourceKind) -> Self {
        Self(format!("/{}", kind.segment()))
    }

    /// Path of one resource, e.g. `/albums/{id}`.
    ///
    /// The identifier is percent-encoded so it always stays one segment.
    #[must_use]
    pub fn item(kind: ResourceKind, id: &str) -> Self {
        Self(format!("/{}/{}", kind.segment(), urlencoding::encode(id)))
    }

    /// Appends a literal sub-resource segment, e.g. `tracks` or `followers/contains`.
    #[must_use]
    pub fn sub(self, segment: &str) -> Self {
        Self(format!("{}/{segment}", self.0))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ResourcePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_kinds_are_nested_under_browse() {
        assert_eq!(
            ResourcePath::collection(ResourceKind::Categories).as_str(),
            "/browse/categories"
        );
        assert_eq!(
            ResourcePath::item(ResourceKind::Categories, "toplists")
                .sub("playlists")
                .as_str(),
            "/browse/categories/toplists/playlists"
        );
        assert_eq!(
            ResourcePath::collection(ResourceKind::FeaturedPlaylists).as_str(),
            "/browse/featured-playlists"
        );
        assert_eq!(
            ResourcePath::collection(ResourceKind::NewReleases).as_str(),
            "/browse/new-releases"
        );
    }

    #[test]
    fn test_item_identifier_is_one_segment() {
        assert_eq!(
            ResourcePath::item(ResourceKind::Users, "a/b").as_str(),
            "/users/a%2Fb"
        );
    }

    #[test]
    fn test_audio_paths() {
        assert_eq!(
            ResourcePath::item(ResourceKind::AudioFeatures, "t1").as_str(),
            "/audio-features/t1"
        );
        assert_eq!(
            ResourcePath::item(ResourceKind::AudioAnalysis, "t1").as_str(),
            "/audio-analysis/t1"
        );
    }

    #[test]
    fn test_nested_segments() {
        assert_eq!(
            ResourcePath::item(ResourceKind::Playlists, "p1")
                .sub("followers/contains")
                .to_string(),
            "/playlists/p1/followers/contains"
        );
    }
}
