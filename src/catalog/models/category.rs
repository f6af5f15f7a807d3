//! Browse categories.

use async_graphql::SimpleObject;
use serde::Deserialize;

use super::{null_as_default, Image};

/// A browse category, as returned by `/browse/categories/{id}`.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
#[graphql(complex)]
pub struct Category {
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icons: Vec<Image>,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}
