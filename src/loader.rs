//! Request-scoped batching of audio features lookups.
//!
//! Every [`Track`](crate::catalog::models::Track) in a response may ask for
//! its audio features. [`AudioFeaturesLoader`] collects those lookups for one
//! batch window and answers them with a single outbound call: the
//! single-resource endpoint when only one id is pending, the multi-id endpoint
//! otherwise. Results are memoized for the lifetime of the loader, so a fresh
//! loader must be created per inbound request (see [`audio_features_loader`]).

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dataloader::{DataLoader, HashMapCache, Loader};

use crate::catalog::models::AudioFeatures;
use crate::catalog::CatalogClient;
use crate::clients::HttpError;
use crate::config::SpotifyConfig;

/// The request-scoped data loader placed in the GraphQL context.
pub type AudioFeaturesDataLoader = DataLoader<AudioFeaturesLoader, HashMapCache>;

/// Batch loader for `/audio-features`, keyed by track id.
#[derive(Clone, Debug)]
pub struct AudioFeaturesLoader {
    catalog: CatalogClient,
}

impl AudioFeaturesLoader {
    /// Creates a loader fetching through `catalog`.
    #[must_use]
    pub const fn new(catalog: CatalogClient) -> Self {
        Self { catalog }
    }
}

impl Loader<String> for AudioFeaturesLoader {
    type Value = AudioFeatures;
    type Error = Arc<HttpError>;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        tracing::debug!(keys = keys.len(), "dispatching audio features batch");

        let items = match keys {
            [] => Vec::new(),
            [id] => match self.catalog.audio_features(id).await {
                Ok(features) => vec![Some(features)],
                // Unknown ids resolve to an absent value, as in a multi-id batch.
                Err(HttpError::Response(error)) if error.code == 404 => vec![None],
                Err(error) => return Err(Arc::new(error)),
            },
            _ => self.catalog.several_audio_features(keys).await?,
        };

        let aligned = align_by_key(keys, items, |features| features.id.as_str());
        Ok(keys
            .iter()
            .cloned()
            .zip(aligned)
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .collect())
    }
}

/// Reorders `items` so that position `i` holds the item whose id is `keys[i]`.
///
/// The upstream order is ignored. Keys with no matching item (including
/// `null` entries upstream) get `None`; items matching no key are dropped.
#[must_use]
pub fn align_by_key<V, F>(keys: &[String], items: Vec<Option<V>>, id_of: F) -> Vec<Option<V>>
where
    V: Clone,
    F: Fn(&V) -> &str,
{
    let by_id: HashMap<String, V> = items
        .into_iter()
        .flatten()
        .map(|item| (id_of(&item).to_string(), item))
        .collect();

    keys.iter().map(|key| by_id.get(key).cloned()).collect()
}

/// Builds a fresh loader for one inbound request.
///
/// Lookups are collected for [`SpotifyConfig::batch_delay`] and split into
/// batches of at most [`SpotifyConfig::max_batch_size`] ids.
#[must_use]
pub fn audio_features_loader(
    catalog: CatalogClient,
    config: &SpotifyConfig,
) -> AudioFeaturesDataLoader {
    DataLoader::with_cache(
        AudioFeaturesLoader::new(catalog),
        tokio::spawn,
        HashMapCache::default(),
    )
    .delay(config.batch_delay())
    .max_batch_size(config.max_batch_size())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(id: &str) -> Option<AudioFeatures> {
        Some(AudioFeatures {
            id: id.to_string(),
            ..AudioFeatures::default()
        })
    }

    fn keys(ids: &[&str]) -> Vec<String> {
        ids.iter().map(ToString::to_string).collect()
    }

    fn ids(aligned: &[Option<AudioFeatures>]) -> Vec<Option<&str>> {
        aligned
            .iter()
            .map(|item| item.as_ref().map(|f| f.id.as_str()))
            .collect()
    }

    #[test]
    fn test_items_follow_key_order() {
        let aligned = align_by_key(
            &keys(&["t3", "t1", "t2"]),
            vec![features("t1"), features("t2"), features("t3")],
            |f| f.id.as_str(),
        );

        assert_eq!(ids(&aligned), vec![Some("t3"), Some("t1"), Some("t2")]);
    }

    #[test]
    fn test_missing_item_yields_none_without_shifting_others() {
        let aligned = align_by_key(
            &keys(&["t1", "t2", "t3"]),
            vec![features("t3"), None, features("t1")],
            |f| f.id.as_str(),
        );

        assert_eq!(ids(&aligned), vec![Some("t1"), None, Some("t3")]);
    }

    #[test]
    fn test_unrequested_items_are_dropped() {
        let aligned = align_by_key(
            &keys(&["t1"]),
            vec![features("t9"), features("t1")],
            |f| f.id.as_str(),
        );

        assert_eq!(ids(&aligned), vec![Some("t1")]);
    }

    #[test]
    fn test_repeated_keys_resolve_to_the_same_item() {
        let aligned = align_by_key(&keys(&["t1", "t1"]), vec![features("t1")], |f| {
            f.id.as_str()
        });

        assert_eq!(ids(&aligned), vec![Some("t1"), Some("t1")]);
    }
}
