//! Public user profiles.

use async_graphql::SimpleObject;
use serde::Deserialize;

use super::{null_as_default, Followers, Image};
use crate::catalog::ExternalMap;

/// A public user profile, as returned by `/users/{id}` and embedded as playlist owner.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct PublicUser {
    pub display_name: Option<String>,
    #[graphql(skip)]
    #[serde(deserialize_with = "null_as_default")]
    pub external_urls: ExternalMap,
    pub followers: Option<Followers>,
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    #[graphql(name = "type")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}
