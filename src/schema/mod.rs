//! The GraphQL schema served by the gateway.
//!
//! Models from [`crate::catalog::models`] are the output types; the field
//! resolutions that go beyond plain projections live here, one file per
//! resource kind. Resolutions read two values from the context:
//!
//! - [`CatalogClient`], registered once when the schema is built
//! - [`AudioFeaturesDataLoader`], attached to every request (see
//!   [`crate::server`])
//!
//! Failed resolutions surface as field errors; sibling fields still resolve.

mod album;
mod artist;
mod category;
mod playlist;
mod query;
mod track;
mod user;

use async_graphql::{Context, EmptyMutation, EmptySubscription, MaybeUndefined, Result, Schema};

pub use query::QueryRoot;

use crate::catalog::{CatalogClient, SubResourceStrategy};
use crate::clients::QueryParams;
use crate::loader::AudioFeaturesDataLoader;

/// The executable schema.
pub type SpotifySchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Builds the schema with `catalog` in its context.
#[must_use]
pub fn build_schema(catalog: CatalogClient) -> SpotifySchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(catalog)
        .finish()
}

fn catalog<'a>(ctx: &Context<'a>) -> Result<&'a CatalogClient> {
    ctx.data::<CatalogClient>()
}

fn audio_features_loader<'a>(ctx: &Context<'a>) -> Result<&'a AudioFeaturesDataLoader> {
    ctx.data::<AudioFeaturesDataLoader>()
}

/// `market`, `limit` and `offset` of an embedded sub-resource.
///
/// Arguments written as `null` count towards the strategy but are left out
/// of the query.
fn sub_resource_params(
    market: MaybeUndefined<String>,
    limit: MaybeUndefined<i32>,
    offset: MaybeUndefined<i32>,
) -> (SubResourceStrategy, QueryParams) {
    let supplied = [
        market.is_undefined(),
        limit.is_undefined(),
        offset.is_undefined(),
    ]
    .into_iter()
    .filter(|undefined| !undefined)
    .count();
    let params = QueryParams::new()
        .param("market", market.take())
        .param("limit", limit.take())
        .param("offset", offset.take());
    (SubResourceStrategy::select(supplied), params)
}
