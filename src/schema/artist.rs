//! Artist field resolutions.

use async_graphql::{ComplexObject, Context, Result};

use super::catalog;
use crate::catalog::models::{Artist, SimplifiedAlbum, SimplifiedArtist, Track};
use crate::catalog::{key_value_pairs, to_edge, Edge, KeyValuePair};
use crate::clients::{join_ids, QueryParams};

#[ComplexObject]
impl Artist {
    /// The artist's discography, optionally filtered by album group.
    async fn albums(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "include_groups")] include_groups: Option<Vec<String>>,
        market: Option<String>,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> Result<Option<Edge<SimplifiedAlbum>>> {
        let params = QueryParams::new()
            .param("include_groups", include_groups.map(|groups| join_ids(&groups)))
            .param("market", market)
            .param("limit", limit)
            .param("offset", offset);
        let paging = catalog(ctx)?.artist_albums(&self.id, &params).await?;
        Ok(Some(to_edge(paging)))
    }

    #[graphql(name = "top_tracks")]
    async fn top_tracks(
        &self,
        ctx: &Context<'_>,
        market: Option<String>,
    ) -> Result<Option<Vec<Track>>> {
        let tracks = catalog(ctx)?
            .artist_top_tracks(&self.id, market.as_deref())
            .await?;
        Ok(Some(tracks))
    }

    #[graphql(name = "related_artists")]
    async fn related_artists(&self, ctx: &Context<'_>) -> Result<Option<Vec<Artist>>> {
        Ok(Some(catalog(ctx)?.related_artists(&self.id).await?))
    }

    #[graphql(name = "external_urls")]
    async fn external_urls(&self) -> Vec<KeyValuePair> {
        key_value_pairs(&self.external_urls)
    }
}

#[ComplexObject]
impl SimplifiedArtist {
    #[graphql(name = "external_urls")]
    async fn external_urls(&self) -> Vec<KeyValuePair> {
        key_value_pairs(&self.external_urls)
    }
}
