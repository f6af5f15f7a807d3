//! Query root fields.

use async_graphql::{Context, Object, Result};

use super::catalog;
use crate::catalog::models::{
    Album, Artist, Category, FeaturedPlaylists, Playlist, PublicUser, SearchCategory,
    SearchResult, SimplifiedAlbum, Track,
};
use crate::catalog::{to_edge, Edge};
use crate::clients::QueryParams;

/// Entry points of the schema.
///
/// Every field performs exactly one outbound fetch.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryRoot;

#[Object(rename_fields = "snake_case", rename_args = "snake_case")]
impl QueryRoot {
    async fn album(
        &self,
        ctx: &Context<'_>,
        id: String,
        market: Option<String>,
    ) -> Result<Option<Album>> {
        Ok(Some(catalog(ctx)?.album(&id, market.as_deref()).await?))
    }

    /// Albums by id, in argument order; unknown ids resolve to `null`.
    async fn albums(
        &self,
        ctx: &Context<'_>,
        ids: Vec<String>,
        market: Option<String>,
    ) -> Result<Option<Vec<Option<Album>>>> {
        Ok(Some(catalog(ctx)?.albums(&ids, market.as_deref()).await?))
    }

    async fn artist(&self, ctx: &Context<'_>, id: String) -> Result<Option<Artist>> {
        Ok(Some(catalog(ctx)?.artist(&id).await?))
    }

    async fn artists(
        &self,
        ctx: &Context<'_>,
        ids: Vec<String>,
    ) -> Result<Option<Vec<Option<Artist>>>> {
        Ok(Some(catalog(ctx)?.artists(&ids).await?))
    }

    async fn track(
        &self,
        ctx: &Context<'_>,
        id: String,
        market: Option<String>,
    ) -> Result<Option<Track>> {
        Ok(Some(catalog(ctx)?.track(&id, market.as_deref()).await?))
    }

    async fn tracks(
        &self,
        ctx: &Context<'_>,
        ids: Vec<String>,
        market: Option<String>,
    ) -> Result<Option<Vec<Option<Track>>>> {
        Ok(Some(catalog(ctx)?.tracks(&ids, market.as_deref()).await?))
    }

    /// Searches the catalog. Only the requested categories carry an edge.
    #[allow(clippy::too_many_arguments)]
    async fn search(
        &self,
        ctx: &Context<'_>,
        q: String,
        #[graphql(name = "type")] categories: Vec<SearchCategory>,
        market: Option<String>,
        limit: Option<i32>,
        offset: Option<i32>,
        include_external: Option<String>,
    ) -> Result<Option<SearchResult>> {
        let kinds: Vec<&str> = categories.iter().map(|category| category.as_str()).collect();
        let params = QueryParams::new()
            .param("q", Some(q))
            .list("type", &kinds)
            .param("market", market)
            .param("limit", limit)
            .param("offset", offset)
            .param("include_external", include_external);
        let response = catalog(ctx)?.search(&params).await?;
        Ok(Some(response.into()))
    }

    async fn playlist(
        &self,
        ctx: &Context<'_>,
        id: String,
        market: Option<String>,
    ) -> Result<Option<Playlist>> {
        Ok(Some(catalog(ctx)?.playlist(&id, market.as_deref()).await?))
    }

    async fn user(&self, ctx: &Context<'_>, id: String) -> Result<Option<PublicUser>> {
        Ok(Some(catalog(ctx)?.user(&id).await?))
    }

    async fn category(
        &self,
        ctx: &Context<'_>,
        id: String,
        country: Option<String>,
        locale: Option<String>,
    ) -> Result<Option<Category>> {
        let params = QueryParams::new()
            .param("country", country)
            .param("locale", locale);
        Ok(Some(catalog(ctx)?.category(&id, &params).await?))
    }

    async fn categories(
        &self,
        ctx: &Context<'_>,
        country: Option<String>,
        locale: Option<String>,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> Result<Option<Edge<Category>>> {
        let params = QueryParams::new()
            .param("country", country)
            .param("locale", locale)
            .param("limit", limit)
            .param("offset", offset);
        Ok(Some(to_edge(catalog(ctx)?.categories(&params).await?)))
    }

    async fn featured_playlists(
        &self,
        ctx: &Context<'_>,
        country: Option<String>,
        locale: Option<String>,
        timestamp: Option<String>,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> Result<Option<FeaturedPlaylists>> {
        let params = QueryParams::new()
            .param("country", country)
            .param("locale", locale)
            .param("timestamp", timestamp)
            .param("limit", limit)
            .param("offset", offset);
        Ok(Some(catalog(ctx)?.featured_playlists(&params).await?))
    }

    async fn new_releases(
        &self,
        ctx: &Context<'_>,
        country: Option<String>,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> Result<Option<Edge<SimplifiedAlbum>>> {
        let params = QueryParams::new()
            .param("country", country)
            .param("limit", limit)
            .param("offset", offset);
        Ok(Some(to_edge(catalog(ctx)?.new_releases(&params).await?)))
    }
}
