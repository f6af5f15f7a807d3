//! Album field resolutions: the track listing and external id pairs.

use async_graphql::{ComplexObject, Context, MaybeUndefined, Result};

use super::{catalog, sub_resource_params};
use crate::catalog::models::{Album, SimplifiedAlbum, SimplifiedTrack};
use crate::catalog::{key_value_pairs, to_edge, Edge, KeyValuePair, SubResourceStrategy};

#[ComplexObject]
impl Album {
    /// Tracks of the album. Without arguments the page embedded in the album is returned.
    async fn tracks(
        &self,
        ctx: &Context<'_>,
        market: MaybeUndefined<String>,
        limit: MaybeUndefined<i32>,
        offset: MaybeUndefined<i32>,
    ) -> Result<Option<Edge<SimplifiedTrack>>> {
        let (strategy, params) = sub_resource_params(market, limit, offset);
        let paging = match strategy {
            SubResourceStrategy::UseEmbedded => self.tracks.clone(),
            SubResourceStrategy::FetchFresh => {
                catalog(ctx)?.album_tracks(&self.id, &params).await?
            }
        };
        Ok(Some(to_edge(paging)))
    }

    #[graphql(name = "external_ids")]
    async fn external_ids(&self) -> Vec<KeyValuePair> {
        key_value_pairs(&self.external_ids)
    }

    #[graphql(name = "external_urls")]
    async fn external_urls(&self) -> Vec<KeyValuePair> {
        key_value_pairs(&self.external_urls)
    }
}

#[ComplexObject]
impl SimplifiedAlbum {
    #[graphql(name = "external_urls")]
    async fn external_urls(&self) -> Vec<KeyValuePair> {
        key_value_pairs(&self.external_urls)
    }
}
