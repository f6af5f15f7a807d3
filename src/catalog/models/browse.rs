//! Responses of the browse endpoints.

use async_graphql::SimpleObject;
use serde::Deserialize;

use super::{null_as_default, Category, SimplifiedAlbum, SimplifiedPlaylist};
use crate::catalog::{to_edge, Edge, Paging};

/// Body of `/browse/featured-playlists`.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct FeaturedPlaylistsResponse {
    pub message: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub playlists: Paging<SimplifiedPlaylist>,
}

/// Featured playlists together with their editorial message.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct FeaturedPlaylists {
    pub message: Option<String>,
    pub playlists: Edge<SimplifiedPlaylist>,
}

impl From<FeaturedPlaylistsResponse> for FeaturedPlaylists {
    fn from(response: FeaturedPlaylistsResponse) -> Self {
        Self {
            message: response.message,
            playlists: to_edge(response.playlists),
        }
    }
}

/// Body of `/browse/new-releases`.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct NewReleasesResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub albums: Paging<SimplifiedAlbum>,
}

/// Body of `/browse/categories`.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct CategoriesResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Paging<Category>,
}

/// Body of `/browse/categories/{id}/playlists`.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct CategoryPlaylistsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub playlists: Paging<SimplifiedPlaylist>,
}
