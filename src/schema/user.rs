//! Public user field resolutions: owned playlists and external URLs.

use async_graphql::{ComplexObject, Context, Result};

use super::catalog;
use crate::catalog::models::{PublicUser, SimplifiedPlaylist};
use crate::catalog::{key_value_pairs, to_edge, Edge, KeyValuePair};
use crate::clients::QueryParams;

#[ComplexObject]
impl PublicUser {
    /// Public playlists of the user.
    async fn playlists(
        &self,
        ctx: &Context<'_>,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> Result<Option<Edge<SimplifiedPlaylist>>> {
        let params = QueryParams::new()
            .param("limit", limit)
            .param("offset", offset);
        let paging = catalog(ctx)?.user_playlists(&self.id, &params).await?;
        Ok(Some(to_edge(paging)))
    }

    #[graphql(name = "external_urls")]
    async fn external_urls(&self) -> Vec<KeyValuePair> {
        key_value_pairs(&self.external_urls)
    }
}
