//! Audio features and audio analysis of catalog tracks.

use async_graphql::SimpleObject;
use serde::Deserialize;

use super::null_as_default;

/// High-level audio features of a track, as returned by `/audio-features/{id}`.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
#[graphql(rename_fields = "snake_case")]
pub struct AudioFeatures {
    #[serde(deserialize_with = "null_as_default")]
    pub acousticness: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub analysis_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub danceability: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub duration_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub energy: f64,
    /// Identifier of the track these features describe.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub instrumentalness: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub key: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub liveness: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub loudness: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub mode: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub speechiness: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tempo: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub time_signature: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub track_href: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    #[graphql(name = "type")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub valence: f64,
}

/// Low-level analysis of a track's structure and musical content.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct AudioAnalysis {
    #[serde(deserialize_with = "null_as_default")]
    pub bars: Vec<TimeInterval>,
    #[serde(deserialize_with = "null_as_default")]
    pub beats: Vec<TimeInterval>,
    #[serde(deserialize_with = "null_as_default")]
    pub sections: Vec<Section>,
    #[serde(deserialize_with = "null_as_default")]
    pub segments: Vec<Segment>,
    #[serde(deserialize_with = "null_as_default")]
    pub tatums: Vec<TimeInterval>,
}

/// A bar, beat or tatum.
#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct TimeInterval {
    #[serde(deserialize_with = "null_as_default")]
    pub start: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub confidence: f64,
}

#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
#[graphql(rename_fields = "snake_case")]
pub struct Section {
    #[serde(deserialize_with = "null_as_default")]
    pub start: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub confidence: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub loudness: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tempo: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tempo_confidence: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub key: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub key_confidence: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub mode: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub mode_confidence: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub time_signature: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub time_signature_confidence: f64,
}

#[derive(SimpleObject, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
#[graphql(rename_fields = "snake_case")]
pub struct Segment {
    #[serde(deserialize_with = "null_as_default")]
    pub start: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub confidence: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub loudness_start: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub loudness_max: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub loudness_max_time: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub loudness_end: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub pitches: Vec<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub timbre: Vec<f64>,
}
