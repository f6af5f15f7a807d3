//! Track field resolutions, including batched audio features.

use async_graphql::{ComplexObject, Context, Result};

use super::{audio_features_loader, catalog};
use crate::catalog::models::{
    AudioAnalysis, AudioFeatures, LinkedTrack, SimplifiedTrack, Track,
};
use crate::catalog::{key_value_pairs, KeyValuePair};

#[ComplexObject]
impl Track {
    #[graphql(name = "audio_analysis")]
    async fn audio_analysis(&self, ctx: &Context<'_>) -> Result<Option<AudioAnalysis>> {
        if self.id.is_empty() {
            return Ok(None);
        }
        Ok(Some(catalog(ctx)?.audio_analysis(&self.id).await?))
    }

    /// Audio features of the track. Lookups from the whole response are batched.
    #[graphql(name = "audio_features")]
    async fn audio_features(&self, ctx: &Context<'_>) -> Result<Option<AudioFeatures>> {
        if self.id.is_empty() {
            return Ok(None);
        }
        Ok(audio_features_loader(ctx)?.load_one(self.id.clone()).await?)
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
impl SimplifiedTrack {
    #[graphql(name = "external_urls")]
    async fn external_urls(&self) -> Vec<KeyValuePair> {
        key_value_pairs(&self.external_urls)
    }
}

#[ComplexObject]
impl LinkedTrack {
    #[graphql(name = "external_urls")]
    async fn external_urls(&self) -> Vec<KeyValuePair> {
        key_value_pairs(&self.external_urls)
    }
}
