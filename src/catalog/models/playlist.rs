//! Playlist objects and the two kinds of playlist entries.

use async_graphql::{SimpleObject, Union};
use serde::Deserialize;
use serde_json::Value;

use super::{null_as_default, Followers, Image, LocalTrack, PublicUser, Track};
use crate::catalog::{ExternalMap, Paging};

/// A full playlist, as returned by `/playlists/{id}`.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Playlist {
    #[serde(deserialize_with = "null_as_default")]
    pub collaborative: bool,
    pub description: Option<String>,
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
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub owner: PublicUser,
    pub public: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub snapshot_id: String,
    /// First page of entries embedded in the playlist response.
    #[graphql(skip)]
    #[serde(deserialize_with = "null_as_default")]
    pub tracks: Paging<PlaylistTrackItem>,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    #[graphql(name = "type")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}

/// A playlist as embedded in listings.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct SimplifiedPlaylist {
    #[serde(deserialize_with = "null_as_default")]
    pub collaborative: bool,
    pub description: Option<String>,
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
    pub owner: PublicUser,
    pub public: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub snapshot_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tracks: PlaylistTracksRef,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    #[graphql(name = "type")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}

/// Where to fetch the entries of a simplified playlist, and how many there are.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PlaylistTracksRef {
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total: i32,
}

/// A playlist entry pointing at a catalog track.
#[derive(SimpleObject, Clone, Debug, Default, PartialEq)]
#[graphql(rename_fields = "snake_case")]
pub struct PlaylistTrack {
    pub added_at: Option<String>,
    pub added_by: Option<PublicUser>,
    pub is_local: bool,
    /// `null` when the track was removed from the catalog.
    pub track: Option<Track>,
}

/// A playlist entry pointing at a local file.
#[derive(SimpleObject, Clone, Debug, Default, PartialEq)]
#[graphql(rename_fields = "snake_case")]
pub struct LocalPlaylistTrack {
    pub added_at: Option<String>,
    pub added_by: Option<PublicUser>,
    pub is_local: bool,
    pub track: Option<LocalTrack>,
}

/// Which variant a playlist entry decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackItemKind {
    /// A catalog track.
    Catalog,
    /// A local file.
    Local,
}

impl TrackItemKind {
    /// Selects the variant from the `is_local` marker; absent means catalog.
    #[must_use]
    pub const fn from_marker(is_local: Option<bool>) -> Self {
        match is_local {
            Some(true) => Self::Local,
            Some(false) | None => Self::Catalog,
        }
    }
}

/// One entry of a playlist, discriminated once at decode time by `is_local`.
#[derive(Union, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RawPlaylistTrackItem")]
pub enum PlaylistTrackItem {
    Catalog(PlaylistTrack),
    Local(LocalPlaylistTrack),
}

impl PlaylistTrackItem {
    /// Returns the variant of this entry.
    #[must_use]
    pub const fn kind(&self) -> TrackItemKind {
        match self {
            Self::Catalog(_) => TrackItemKind::Catalog,
            Self::Local(_) => TrackItemKind::Local,
        }
    }
}

/// Wire shape of a playlist entry before the variant is chosen.
#[derive(Deserialize)]
struct RawPlaylistTrackItem {
    #[serde(default)]
    added_at: Option<String>,
    #[serde(default)]
    added_by: Option<PublicUser>,
    #[serde(default)]
    is_local: Option<bool>,
    #[serde(default)]
    track: Value,
}

impl TryFrom<RawPlaylistTrackItem> for PlaylistTrackItem {
    type Error = serde_json::Error;

    fn try_from(raw: RawPlaylistTrackItem) -> Result<Self, Self::Error> {
        Ok(match TrackItemKind::from_marker(raw.is_local) {
            TrackItemKind::Local => Self::Local(LocalPlaylistTrack {
                added_at: raw.added_at,
                added_by: raw.added_by,
                is_local: true,
                track: serde_json::from_value(raw.track)?,
            }),
            TrackItemKind::Catalog => Self::Catalog(PlaylistTrack {
                added_at: raw.added_at,
                added_by: raw.added_by,
                is_local: false,
                track: serde_json::from_value(raw.track)?,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_marker_selects_variant() {
        assert_eq!(TrackItemKind::from_marker(Some(true)), TrackItemKind::Local);
        assert_eq!(TrackItemKind::from_marker(Some(false)), TrackItemKind::Catalog);
        assert_eq!(TrackItemKind::from_marker(None), TrackItemKind::Catalog);
    }

    #[test]
    fn test_local_entry_decodes_to_local_variant() {
        let item: PlaylistTrackItem = serde_json::from_value(json!({
            "added_at": "2020-01-01T00:00:00Z",
            "is_local": true,
            "track": {
                "id": null,
                "name": "demo.mp3",
                "uri": "spotify:local:::demo:180",
                "duration_ms": 180_000,
                "album": {"name": "Demos"},
                "artists": [{"name": "Me"}]
            }
        }))
        .unwrap();

        assert_eq!(item.kind(), TrackItemKind::Local);
        match item {
            PlaylistTrackItem::Local(entry) => {
                let track = entry.track.unwrap();
                assert_eq!(track.name.as_deref(), Some("demo.mp3"));
                assert_eq!(track.album.unwrap().name.as_deref(), Some("Demos"));
            }
            PlaylistTrackItem::Catalog(_) => panic!("expected a local entry"),
        }
    }

    #[test]
    fn test_catalog_entry_decodes_to_catalog_variant() {
        let item: PlaylistTrackItem = serde_json::from_value(json!({
            "is_local": false,
            "track": {"id": "t1", "name": "One", "type": "track"}
        }))
        .unwrap();

        match item {
            PlaylistTrackItem::Catalog(entry) => {
                assert!(!entry.is_local);
                assert_eq!(entry.track.unwrap().id, "t1");
            }
            PlaylistTrackItem::Local(_) => panic!("expected a catalog entry"),
        }
    }

    #[test]
    fn test_missing_marker_decodes_to_catalog_variant() {
        let item: PlaylistTrackItem =
            serde_json::from_value(json!({"track": {"id": "t2"}})).unwrap();
        assert_eq!(item.kind(), TrackItemKind::Catalog);
    }

    #[test]
    fn test_removed_track_decodes_to_empty_catalog_entry() {
        let item: PlaylistTrackItem =
            serde_json::from_value(json!({"is_local": false, "track": null})).unwrap();

        assert_eq!(
            item,
            PlaylistTrackItem::Catalog(PlaylistTrack {
                added_at: None,
                added_by: None,
                is_local: false,
                track: None,
            })
        );
    }

    #[test]
    fn test_playlist_without_cover_decodes() {
        let playlist: SimplifiedPlaylist = serde_json::from_value(json!({
            "id": "p1",
            "name": "No cover",
            "images": null,
            "href": null,
            "owner": {"id": "u1", "display_name": null, "images": null},
            "tracks": {"href": null, "total": 3}
        }))
        .unwrap();

        assert_eq!(playlist.id, "p1");
        assert!(playlist.images.is_empty());
        assert!(playlist.href.is_empty());
        assert_eq!(playlist.owner.id, "u1");
        assert_eq!(playlist.tracks.total, 3);
    }

    #[test]
    fn test_entry_with_null_track_links_decodes() {
        let item: PlaylistTrackItem = serde_json::from_value(json!({
            "is_local": false,
            "track": {
                "id": "t3",
                "href": null,
                "uri": null,
                "album": {"id": "a1", "images": null, "release_date": null},
                "artists": null,
                "available_markets": null
            }
        }))
        .unwrap();

        match item {
            PlaylistTrackItem::Catalog(entry) => {
                let track = entry.track.unwrap();
                assert_eq!(track.id, "t3");
                assert!(track.href.is_empty());
                assert!(track.artists.is_empty());
                assert!(track.album.images.is_empty());
            }
            PlaylistTrackItem::Local(_) => panic!("expected a catalog entry"),
        }
    }
}
