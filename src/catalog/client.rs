//! Request translation for catalog resources.
//!
//! [`CatalogClient`] turns each resource operation into exactly one call to
//! [`HttpClient::get`]: it builds the [`ResourcePath`], passes arguments
//! through as [`QueryParams`], and unwraps list responses to their named
//! array field.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::catalog::models::{
    Album, Artist, AudioAnalysis, AudioFeatures, CategoriesResponse, Category,
    CategoryPlaylistsResponse, FeaturedPlaylists, FeaturedPlaylistsResponse, NewReleasesResponse,
    Playlist, PlaylistTrackItem, PublicUser, SearchResponse, SimplifiedAlbum, SimplifiedPlaylist,
    SimplifiedTrack, Track,
};
use crate::catalog::{Paging, ResourceKind, ResourcePath};
use crate::clients::{HttpClient, HttpError, QueryParams};

/// Typed access to the catalog API.
///
/// Cloning is cheap; clones share the underlying [`HttpClient`].
///
/// # Example
///
/// ```rust,ignore
/// use spotify_graphql::catalog::CatalogClient;
///
/// let catalog = CatalogClient::new(http);
/// let album = catalog.album("4aawyAB9vmqN3uQ7FjRGTy", Some("US")).await?;
/// println!("{} has {} tracks", album.name, album.tracks.items.len());
/// ```
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: HttpClient,
}

// Verify CatalogClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CatalogClient>();
};

impl CatalogClient {
    /// Creates a catalog client on top of `http`.
    #[must_use]
    pub const fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }

    /// `GET /albums/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn album(&self, id: &str, market: Option<&str>) -> Result<Album, HttpError> {
        let path = ResourcePath::item(ResourceKind::Albums, id);
        self.http
            .get(path.as_str(), &QueryParams::new().param("market", market))
            .await
    }

    /// `GET /albums?ids=...`; unknown ids yield `None`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn albums(
        &self,
        ids: &[String],
        market: Option<&str>,
    ) -> Result<Vec<Option<Album>>, HttpError> {
        let params = QueryParams::new().ids(ids).param("market", market);
        self.several(ResourceKind::Albums, ids, &params, "albums").await
    }

    /// `GET /albums/{id}/tracks` with `market`, `limit` and `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn album_tracks(
        &self,
        id: &str,
        params: &QueryParams,
    ) -> Result<Paging<SimplifiedTrack>, HttpError> {
        let path = ResourcePath::item(ResourceKind::Albums, id).sub("tracks");
        self.http.get(path.as_str(), params).await
    }

    /// `GET /artists/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn artist(&self, id: &str) -> Result<Artist, HttpError> {
        let path = ResourcePath::item(ResourceKind::Artists, id);
        self.http.get(path.as_str(), &QueryParams::new()).await
    }

    /// `GET /artists?ids=...`; unknown ids yield `None`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn artists(&self, ids: &[String]) -> Result<Vec<Option<Artist>>, HttpError> {
        let params = QueryParams::new().ids(ids);
        self.several(ResourceKind::Artists, ids, &params, "artists").await
    }

    /// `GET /artists/{id}/albums` with `include_groups`, `market`, `limit` and `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn artist_albums(
        &self,
        id: &str,
        params: &QueryParams,
    ) -> Result<Paging<SimplifiedAlbum>, HttpError> {
        let path = ResourcePath::item(ResourceKind::Artists, id).sub("albums");
        self.http.get(path.as_str(), params).await
    }

    /// `GET /artists/{id}/top-tracks`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn artist_top_tracks(
        &self,
        id: &str,
        market: Option<&str>,
    ) -> Result<Vec<Track>, HttpError> {
        let path = ResourcePath::item(ResourceKind::Artists, id).sub("top-tracks");
        let body = self
            .http
            .fetch(path.as_str(), &QueryParams::new().param("market", market))
            .await?;
        Ok(unwrap_list::<Track>(body, "tracks")?.into_iter().flatten().collect())
    }

    /// `GET /artists/{id}/related-artists`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn related_artists(&self, id: &str) -> Result<Vec<Artist>, HttpError> {
        let path = ResourcePath::item(ResourceKind::Artists, id).sub("related-artists");
        let body = self.http.fetch(path.as_str(), &QueryParams::new()).await?;
        Ok(unwrap_list::<Artist>(body, "artists")?.into_iter().flatten().collect())
    }

    /// `GET /tracks/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn track(&self, id: &str, market: Option<&str>) -> Result<Track, HttpError> {
        let path = ResourcePath::item(ResourceKind::Tracks, id);
        self.http
            .get(path.as_str(), &QueryParams::new().param("market", market))
            .await
    }

    /// `GET /tracks?ids=...`; unknown ids yield `None`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn tracks(
        &self,
        ids: &[String],
        market: Option<&str>,
    ) -> Result<Vec<Option<Track>>, HttpError> {
        let params = QueryParams::new().ids(ids).param("market", market);
        self.several(ResourceKind::Tracks, ids, &params, "tracks").await
    }

    /// `GET /audio-analysis/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn audio_analysis(&self, id: &str) -> Result<AudioAnalysis, HttpError> {
        let path = ResourcePath::item(ResourceKind::AudioAnalysis, id);
        self.http.get(path.as_str(), &QueryParams::new()).await
    }

    /// `GET /audio-features/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn audio_features(&self, id: &str) -> Result<AudioFeatures, HttpError> {
        let path = ResourcePath::item(ResourceKind::AudioFeatures, id);
        self.http.get(path.as_str(), &QueryParams::new()).await
    }

    /// `GET /audio-features?ids=...`, in upstream order; unknown ids yield `None`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn several_audio_features(
        &self,
        ids: &[String],
    ) -> Result<Vec<Option<AudioFeatures>>, HttpError> {
        let params = QueryParams::new().ids(ids);
        self.several(ResourceKind::AudioFeatures, ids, &params, "audio_features")
            .await
    }

    /// `GET /search` with `q`, `type`, `market`, `limit`, `offset` and `include_external`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn search(&self, params: &QueryParams) -> Result<SearchResponse, HttpError> {
        let path = ResourcePath::collection(ResourceKind::Search);
        self.http.get(path.as_str(), params).await
    }

    /// `GET /playlists/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn playlist(&self, id: &str, market: Option<&str>) -> Result<Playlist, HttpError> {
        let path = ResourcePath::item(ResourceKind::Playlists, id);
        self.http
            .get(path.as_str(), &QueryParams::new().param("market", market))
            .await
    }

    /// `GET /playlists/{id}/tracks` with `market`, `limit` and `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn playlist_tracks(
        &self,
        id: &str,
        params: &QueryParams,
    ) -> Result<Paging<PlaylistTrackItem>, HttpError> {
        let path = ResourcePath::item(ResourceKind::Playlists, id).sub("tracks");
        self.http.get(path.as_str(), params).await
    }

    /// `GET /playlists/{id}/followers/contains?ids=...`, one flag per user id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn playlist_followers_contain(
        &self,
        id: &str,
        user_ids: &[String],
    ) -> Result<Vec<bool>, HttpError> {
        let path = ResourcePath::item(ResourceKind::Playlists, id).sub("followers/contains");
        self.http
            .get(path.as_str(), &QueryParams::new().ids(user_ids))
            .await
    }

    /// `GET /users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn user(&self, id: &str) -> Result<PublicUser, HttpError> {
        let path = ResourcePath::item(ResourceKind::Users, id);
        self.http.get(path.as_str(), &QueryParams::new()).await
    }

    /// `GET /users/{id}/playlists` with `limit` and `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn user_playlists(
        &self,
        id: &str,
        params: &QueryParams,
    ) -> Result<Paging<SimplifiedPlaylist>, HttpError> {
        let path = ResourcePath::item(ResourceKind::Users, id).sub("playlists");
        self.http.get(path.as_str(), params).await
    }

    /// `GET /browse/categories/{id}` with `country` and `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn category(&self, id: &str, params: &QueryParams) -> Result<Category, HttpError> {
        let path = ResourcePath::item(ResourceKind::Categories, id);
        self.http.get(path.as_str(), params).await
    }

    /// `GET /browse/categories` with `country`, `locale`, `limit` and `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn categories(&self, params: &QueryParams) -> Result<Paging<Category>, HttpError> {
        let path = ResourcePath::collection(ResourceKind::Categories);
        let response: CategoriesResponse = self.http.get(path.as_str(), params).await?;
        Ok(response.categories)
    }

    /// `GET /browse/categories/{id}/playlists` with `country`, `limit` and `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn category_playlists(
        &self,
        id: &str,
        params: &QueryParams,
    ) -> Result<Paging<SimplifiedPlaylist>, HttpError> {
        let path = ResourcePath::item(ResourceKind::Categories, id).sub("playlists");
        let response: CategoryPlaylistsResponse = self.http.get(path.as_str(), params).await?;
        Ok(response.playlists)
    }

    /// `GET /browse/featured-playlists` with `country`, `locale`, `timestamp`, `limit` and `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn featured_playlists(
        &self,
        params: &QueryParams,
    ) -> Result<FeaturedPlaylists, HttpError> {
        let path = ResourcePath::collection(ResourceKind::FeaturedPlaylists);
        let response: FeaturedPlaylistsResponse = self.http.get(path.as_str(), params).await?;
        Ok(response.into())
    }

    /// `GET /browse/new-releases` with `country`, `limit` and `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn new_releases(
        &self,
        params: &QueryParams,
    ) -> Result<Paging<SimplifiedAlbum>, HttpError> {
        let path = ResourcePath::collection(ResourceKind::NewReleases);
        let response: NewReleasesResponse = self.http.get(path.as_str(), params).await?;
        Ok(response.albums)
    }

    /// Fetches a multi-id endpoint and unwraps the array named `field`.
    ///
    /// An empty id list is answered locally without a fetch.
    async fn several<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        ids: &[String],
        params: &QueryParams,
        field: &str,
    ) -> Result<Vec<Option<T>>, HttpError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let path = ResourcePath::collection(kind);
        let body = self.http.fetch(path.as_str(), params).await?;
        Ok(unwrap_list(body, field)?)
    }
}

/// Takes the array named `field` out of a response body.
///
/// A missing field decodes as an empty list; `null` entries stay `None`.
fn unwrap_list<T: DeserializeOwned>(
    mut body: Value,
    field: &str,
) -> Result<Vec<Option<T>>, serde_json::Error> {
    match body.get_mut(field).map(Value::take) {
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(list) => serde_json::from_value(list),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_list_keeps_null_entries_in_place() {
        let body = json!({"albums": [{"id": "a1"}, null, {"id": "a3"}]});

        let albums: Vec<Option<Album>> = unwrap_list(body, "albums").unwrap();

        assert_eq!(albums.len(), 3);
        assert_eq!(albums[0].as_ref().unwrap().id, "a1");
        assert!(albums[1].is_none());
        assert_eq!(albums[2].as_ref().unwrap().id, "a3");
    }

    #[test]
    fn test_unwrap_list_of_missing_field_is_empty() {
        let tracks: Vec<Option<Track>> = unwrap_list(json!({}), "tracks").unwrap();
        assert!(tracks.is_empty());
    }

    #[test]
    fn test_unwrap_list_rejects_non_array() {
        let result: Result<Vec<Option<Track>>, _> = unwrap_list(json!({"tracks": 3}), "tracks");
        assert!(result.is_err());
    }
}
