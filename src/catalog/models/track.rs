//! Track objects, including the sparse shape of local files.

use async_graphql::SimpleObject;
use serde::Deserialize;

use super::{null_as_default, Restrictions, SimplifiedAlbum, SimplifiedArtist};
use crate::catalog::ExternalMap;

/// A full catalog track, as returned by `/tracks/{id}`.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Track {
    #[serde(deserialize_with = "null_as_default")]
    pub album: SimplifiedAlbum,
    #[serde(deserialize_with = "null_as_default")]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(deserialize_with = "null_as_default")]
    pub available_markets: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub disc_number: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub duration_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub explicit: bool,
    #[graphql(skip)]
    #[serde(deserialize_with = "null_as_default")]
    pub external_ids: ExternalMap,
    #[graphql(skip)]
    #[serde(deserialize_with = "null_as_default")]
    pub external_urls: ExternalMap,
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_local: bool,
    pub is_playable: Option<bool>,
    pub linked_from: Option<LinkedTrack>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub popularity: Option<i32>,
    pub preview_url: Option<String>,
    pub restrictions: Option<Restrictions>,
    #[serde(deserialize_with = "null_as_default")]
    pub track_number: i32,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    #[graphql(name = "type")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}

/// A track as embedded in album track listings.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct SimplifiedTrack {
    #[serde(deserialize_with = "null_as_default")]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(deserialize_with = "null_as_default")]
    pub available_markets: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub disc_number: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub duration_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub explicit: bool,
    #[graphql(skip)]
    #[serde(deserialize_with = "null_as_default")]
    pub external_urls: ExternalMap,
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_local: bool,
    pub is_playable: Option<bool>,
    pub linked_from: Option<LinkedTrack>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub preview_url: Option<String>,
    pub restrictions: Option<Restrictions>,
    #[serde(deserialize_with = "null_as_default")]
    pub track_number: i32,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    #[graphql(name = "type")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}

/// The original track a relinked track stands in for.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct LinkedTrack {
    #[graphql(skip)]
    #[serde(deserialize_with = "null_as_default")]
    pub external_urls: ExternalMap,
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    #[graphql(name = "type")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}

/// A file from the playlist owner's device; it has no catalog id.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
#[graphql(rename_fields = "snake_case")]
pub struct LocalTrack {
    pub album: Option<LocalAlbum>,
    #[serde(deserialize_with = "null_as_default")]
    pub artists: Vec<LocalArtist>,
    pub duration_ms: Option<i64>,
    pub name: Option<String>,
    pub uri: Option<String>,
}

/// Album tag of a local file.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LocalAlbum {
    pub name: Option<String>,
}

/// Artist tag of a local file.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LocalArtist {
    pub name: Option<String>,
}
