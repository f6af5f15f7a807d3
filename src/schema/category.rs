//! Category playlists.

use async_graphql::{ComplexObject, Context, Result};

use super::catalog;
use crate::catalog::models::{Category, SimplifiedPlaylist};
use crate::catalog::{to_edge, Edge};
use crate::clients::QueryParams;

#[ComplexObject]
impl Category {
    /// Playlists tagged with this category.
    async fn playlists(
        &self,
        ctx: &Context<'_>,
        country: Option<String>,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> Result<Option<Edge<SimplifiedPlaylist>>> {
        let params = QueryParams::new()
            .param("country", country)
            .param("limit", limit)
            .param("offset", offset);
        let paging = catalog(ctx)?.category_playlists(&self.id, &params).await?;
        Ok(Some(to_edge(paging)))
    }
}
