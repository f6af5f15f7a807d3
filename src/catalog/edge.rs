//! Paged listings and the uniform edge shape exposed by the schema.
//!
//! Every paged listing of the catalog API has the shape
//! `{href, items, limit, next, offset, previous, total}`. The schema exposes
//! such listings as an [`Edge`]: the items, plus the untouched paging object
//! (items included) so all paging metadata passes through as-is.

use async_graphql::{OutputType, SimpleObject};
use serde::{Deserialize, Deserializer};

use crate::catalog::models::{
    Artist, Category, PlaylistTrackItem, SimplifiedAlbum, SimplifiedPlaylist, SimplifiedTrack,
    Track,
};

/// A paged listing as returned by the catalog API.
#[derive(SimpleObject, Deserialize, Clone, Debug, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
#[graphql(rename_fields = "snake_case")]
#[graphql(concrete(name = "SimplifiedAlbumPaging", params(SimplifiedAlbum)))]
#[graphql(concrete(name = "SimplifiedTrackPaging", params(SimplifiedTrack)))]
#[graphql(concrete(name = "SimplifiedPlaylistPaging", params(SimplifiedPlaylist)))]
#[graphql(concrete(name = "PlaylistTrackItemPaging", params(PlaylistTrackItem)))]
#[graphql(concrete(name = "ArtistPaging", params(Artist)))]
#[graphql(concrete(name = "TrackPaging", params(Track)))]
#[graphql(concrete(name = "CategoryPaging", params(Category)))]
pub struct Paging<T: OutputType> {
    /// Link to the full listing.
    #[serde(default)]
    pub href: Option<String>,
    /// The items of this page. `null` entries sent upstream are skipped.
    #[serde(default = "Vec::new", deserialize_with = "skip_null_items")]
    pub items: Vec<T>,
    /// Maximum number of items in the page.
    #[serde(default)]
    pub limit: Option<i32>,
    /// Link to the next page.
    #[serde(default)]
    pub next: Option<String>,
    /// Offset of the first item of the page.
    #[serde(default)]
    pub offset: Option<i32>,
    /// Link to the previous page.
    #[serde(default)]
    pub previous: Option<String>,
    /// Total number of items available.
    #[serde(default)]
    pub total: Option<i32>,
}

impl<T: OutputType> Default for Paging<T> {
    fn default() -> Self {
        Self {
            href: None,
            items: Vec::new(),
            limit: None,
            next: None,
            offset: None,
            previous: None,
            total: None,
        }
    }
}

/// The `{items, paging}` shape of every paged field of the schema.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(concrete(name = "SimplifiedAlbumEdge", params(SimplifiedAlbum)))]
#[graphql(concrete(name = "SimplifiedTrackEdge", params(SimplifiedTrack)))]
#[graphql(concrete(name = "SimplifiedPlaylistEdge", params(SimplifiedPlaylist)))]
#[graphql(concrete(name = "PlaylistTrackItemEdge", params(PlaylistTrackItem)))]
#[graphql(concrete(name = "ArtistEdge", params(Artist)))]
#[graphql(concrete(name = "TrackEdge", params(Track)))]
#[graphql(concrete(name = "CategoryEdge", params(Category)))]
pub struct Edge<T: OutputType>
where
    Paging<T>: OutputType,
{
    /// The items of the page.
    pub items: Vec<T>,
    /// The whole paging object, items included.
    pub paging: Paging<T>,
}

/// Wraps a paged listing as an [`Edge`].
///
/// `items` is taken directly from the listing and `paging` is the entire
/// listing, not a copy with items removed.
#[must_use]
pub fn to_edge<T>(paging: Paging<T>) -> Edge<T>
where
    T: OutputType + Clone,
    Paging<T>: OutputType,
{
    Edge {
        items: paging.items.clone(),
        paging,
    }
}

fn skip_null_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(items: &[Category]) -> Vec<&str> {
        items.iter().map(|category| category.name.as_str()).collect()
    }

    #[test]
    fn test_to_edge_keeps_whole_paging_object() {
        let paging: Paging<Category> = serde_json::from_value(json!({
            "items": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
            "total": 2,
            "limit": 20
        }))
        .unwrap();

        let edge = to_edge(paging);

        assert_eq!(names(&edge.items), vec!["A", "B"]);
        assert_eq!(names(&edge.paging.items), vec!["A", "B"]);
        assert_eq!(edge.paging.total, Some(2));
        assert_eq!(edge.paging.limit, Some(20));
        assert_eq!(edge.paging.offset, None);
    }

    #[test]
    fn test_paging_metadata_passes_through() {
        let paging: Paging<Category> = serde_json::from_value(json!({
            "href": "https://api.spotify.com/v1/browse/categories?offset=0&limit=1",
            "items": [{"id": "party", "name": "Party"}],
            "limit": 1,
            "next": "https://api.spotify.com/v1/browse/categories?offset=1&limit=1",
            "offset": 0,
            "previous": null,
            "total": 11
        }))
        .unwrap();

        let edge = to_edge(paging.clone());

        assert_eq!(edge.paging, paging);
        assert!(edge.paging.next.as_deref().unwrap().contains("offset=1"));
        assert!(edge.paging.previous.is_none());
    }

    #[test]
    fn test_null_items_are_skipped() {
        let paging: Paging<Category> = serde_json::from_value(json!({
            "items": [{"id": "a", "name": "A"}, null, {"id": "b", "name": "B"}],
            "total": 3
        }))
        .unwrap();

        assert_eq!(names(&paging.items), vec!["A", "B"]);
        assert_eq!(paging.total, Some(3));
    }

    #[test]
    fn test_missing_items_decode_as_empty() {
        let paging: Paging<Category> = serde_json::from_value(json!({"total": 0})).unwrap();
        assert!(to_edge(paging).items.is_empty());
    }
}
