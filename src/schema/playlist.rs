//! Playlist field resolutions: entries, follower checks and external URLs.

use async_graphql::{ComplexObject, Context, MaybeUndefined, Result};

use super::{catalog, sub_resource_params};
use crate::catalog::models::{Playlist, PlaylistTrackItem, SimplifiedPlaylist};
use crate::catalog::{key_value_pairs, to_edge, Edge, KeyValuePair, SubResourceStrategy};

#[ComplexObject]
impl Playlist {
    /// Entries of the playlist. Without arguments the page embedded in the playlist is returned.
    async fn tracks(
        &self,
        ctx: &Context<'_>,
        market: MaybeUndefined<String>,
        limit: MaybeUndefined<i32>,
        offset: MaybeUndefined<i32>,
    ) -> Result<Option<Edge<PlaylistTrackItem>>> {
        let (strategy, params) = sub_resource_params(market, limit, offset);
        let paging = match strategy {
            SubResourceStrategy::UseEmbedded => self.tracks.clone(),
            SubResourceStrategy::FetchFresh => {
                catalog(ctx)?.playlist_tracks(&self.id, &params).await?
            }
        };
        Ok(Some(to_edge(paging)))
    }

    /// Whether each of the given users follows the playlist, in argument order.
    #[graphql(name = "contains_followers")]
    async fn contains_followers(
        &self,
        ctx: &Context<'_>,
        ids: Vec<String>,
    ) -> Result<Option<Vec<bool>>> {
        let flags = catalog(ctx)?
            .playlist_followers_contain(&self.id, &ids)
            .await?;
        Ok(Some(flags))
    }

    #[graphql(name = "external_urls")]
    async fn external_urls(&self) -> Vec<KeyValuePair> {
        key_value_pairs(&self.external_urls)
    }
}

#[ComplexObject]
impl SimplifiedPlaylist {
    #[graphql(name = "external_urls")]
    async fn external_urls(&self) -> Vec<KeyValuePair> {
        key_value_pairs(&self.external_urls)
    }
}
