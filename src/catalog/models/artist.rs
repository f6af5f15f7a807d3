//! Artist objects.

use async_graphql::SimpleObject;
use serde::Deserialize;

use super::{null_as_default, Followers, Image};
use crate::catalog::ExternalMap;

/// A full artist, as returned by `/artists/{id}`.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Artist {
    #[graphql(skip)]
    #[serde(deserialize_with = "null_as_default")]
    pub external_urls: ExternalMap,
    pub followers: Option<Followers>,
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub popularity: Option<i32>,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    #[graphql(name = "type")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}

/// An artist as embedded in albums and tracks.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct SimplifiedArtist {
    #[graphql(skip)]
    #[serde(deserialize_with = "null_as_default")]
    pub external_urls: ExternalMap,
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    #[graphql(name = "type")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}
