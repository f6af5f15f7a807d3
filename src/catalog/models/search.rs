//! Search categories and the aggregate search result.

use std::fmt;

use async_graphql::{Enum, SimpleObject};
use serde::Deserialize;

use super::{Artist, SimplifiedAlbum, SimplifiedPlaylist, Track};
use crate::catalog::{to_edge, Edge, Paging};

/// A resource kind that can be searched for.
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchCategory {
    Album,
    Artist,
    Playlist,
    Track,
}

impl SearchCategory {
    /// Returns the value of this category in the `type` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Artist => "artist",
            Self::Playlist => "playlist",
            Self::Track => "track",
        }
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a `/search` response; only requested categories are present.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SearchResponse {
    pub albums: Option<Paging<SimplifiedAlbum>>,
    pub artists: Option<Paging<Artist>>,
    pub playlists: Option<Paging<SimplifiedPlaylist>>,
    pub tracks: Option<Paging<Track>>,
}

/// Search results with one edge per category present in the response.
#[derive(SimpleObject, Clone, Debug, Default, PartialEq)]
pub struct SearchResult {
    pub albums: Option<Edge<SimplifiedAlbum>>,
    pub artists: Option<Edge<Artist>>,
    pub playlists: Option<Edge<SimplifiedPlaylist>>,
    pub tracks: Option<Edge<Track>>,
}

impl From<SearchResponse> for SearchResult {
    fn from(response: SearchResponse) -> Self {
        Self {
            albums: response.albums.map(to_edge),
            artists: response.artists.map(to_edge),
            playlists: response.playlists.map(to_edge),
            tracks: response.tracks.map(to_edge),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_renders_lowercase() {
        assert_eq!(SearchCategory::Album.to_string(), "album");
        assert_eq!(SearchCategory::Playlist.as_str(), "playlist");
    }

    #[test]
    fn test_only_present_sections_become_edges() {
        let response: SearchResponse = serde_json::from_value(json!({
            "albums": {"items": [{"id": "a1", "name": "Discovery"}], "total": 1},
            "tracks": {"items": [], "total": 0}
        }))
        .unwrap();

        let result = SearchResult::from(response);

        let albums = result.albums.unwrap();
        assert_eq!(albums.items.len(), 1);
        assert_eq!(albums.items[0].id, "a1");
        assert_eq!(albums.paging.total, Some(1));
        assert!(result.tracks.unwrap().items.is_empty());
        assert!(result.artists.is_none());
        assert!(result.playlists.is_none());
    }
}
