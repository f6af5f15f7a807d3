//! Typed resource models decoded from catalog API responses.
//!
//! Each model is both a serde target and a GraphQL output type. Fields that
//! need more than a plain projection (external id maps, embedded listings)
//! are skipped here and resolved in [`crate::schema`].

mod album;
mod artist;
mod audio;
mod browse;
mod category;
mod common;
mod playlist;
mod search;
mod track;
mod user;

use common::null_as_default;

pub use album::{Album, SimplifiedAlbum};
pub use artist::{Artist, SimplifiedArtist};
pub use audio::{AudioAnalysis, AudioFeatures, Section, Segment, TimeInterval};
pub use browse::{
    CategoriesResponse, CategoryPlaylistsResponse, FeaturedPlaylists, FeaturedPlaylistsResponse,
    NewReleasesResponse,
};
pub use category::Category;
pub use common::{Copyright, Followers, Image, Restrictions};
pub use playlist::{
    LocalPlaylistTrack, Playlist, PlaylistTrack, PlaylistTrackItem, PlaylistTracksRef,
    SimplifiedPlaylist, TrackItemKind,
};
pub use search::{SearchCategory, SearchResponse, SearchResult};
pub use track::{LinkedTrack, LocalAlbum, LocalArtist, LocalTrack, SimplifiedTrack, Track};
pub use user::PublicUser;
