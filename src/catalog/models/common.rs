//! Small objects shared by several resource kinds.

use async_graphql::SimpleObject;
use serde::{Deserialize, Deserializer};

/// Decodes an explicit `null` the same way as a missing key.
///
/// `#[serde(default)]` only covers absent keys; the catalog API also sends
/// `null` for empty image lists, links and dates on several shapes.
pub(super) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Cover art or profile image.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Image {
    /// Height in pixels, if known.
    pub height: Option<i32>,
    /// Source URL of the image.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Width in pixels, if known.
    pub width: Option<i32>,
}

/// Copyright statement of an album.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Copyright {
    /// The copyright text.
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    /// `C` for copyright, `P` for sound recording copyright.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    #[graphql(name = "type")]
    pub kind: String,
}

/// Follower information of an artist, playlist or user.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Followers {
    /// Always `null` upstream; kept for completeness.
    pub href: Option<String>,
    /// Total number of followers.
    #[serde(deserialize_with = "null_as_default")]
    pub total: i64,
}

/// Why content is unavailable for the requested market.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Restrictions {
    /// `market`, `product` or `explicit`.
    #[serde(deserialize_with = "null_as_default")]
    pub reason: String,
}
