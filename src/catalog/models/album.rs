//! Album objects.

use async_graphql::SimpleObject;
use serde::Deserialize;

use super::{null_as_default, Copyright, Image, Restrictions, SimplifiedArtist, SimplifiedTrack};
use crate::catalog::{ExternalMap, Paging};

/// A full album, as returned by `/albums/{id}`.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Album {
    #[serde(deserialize_with = "null_as_default")]
    pub album_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(deserialize_with = "null_as_default")]
    pub available_markets: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub copyrights: Vec<Copyright>,
    #[graphql(skip)]
    #[serde(deserialize_with = "null_as_default")]
    pub external_ids: ExternalMap,
    #[graphql(skip)]
    #[serde(deserialize_with = "null_as_default")]
    pub external_urls: ExternalMap,
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    pub label: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub popularity: Option<i32>,
    #[serde(deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub release_date_precision: String,
    pub restrictions: Option<Restrictions>,
    pub total_tracks: Option<i32>,
    /// First page of tracks embedded in the album response.
    #[graphql(skip)]
    #[serde(deserialize_with = "null_as_default")]
    pub tracks: Paging<SimplifiedTrack>,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    #[graphql(name = "type")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}

/// An album as embedded in tracks, artist discographies and listings.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct SimplifiedAlbum {
    /// Relation to the artist, only set in artist discographies.
    pub album_group: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub album_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(deserialize_with = "null_as_default")]
    pub available_markets: Vec<String>,
    #[graphql(skip)]
    #[serde(deserialize_with = "null_as_default")]
    pub external_urls: ExternalMap,
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub release_date_precision: String,
    pub restrictions: Option<Restrictions>,
    pub total_tracks: Option<i32>,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    #[graphql(name = "type")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}
