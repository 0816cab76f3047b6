//! # Track Data Model
//!
//! Plain data handed to the core by external catalog and cache collaborators.
//! Tracks and their features are immutable inputs: nothing in the crate
//! mutates them after construction except the discovery/gem flags set while
//! candidates are being gathered.

use serde::{Deserialize, Serialize};

/// A track from the user's library or from an external discovery search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub artist_id: String,
    pub album: String,
    pub uri: String,
    pub duration_ms: u64,
    /// Catalog popularity in `0..=100`, when the catalog reports one.
    #[serde(default)]
    pub popularity: Option<u8>,
    #[serde(default)]
    pub is_discovery: bool,
    #[serde(default)]
    pub is_forgotten_gem: bool,
}

impl Track {
    /// Duration in minutes, used for journey length accounting.
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        self.duration_ms as f64 / 60_000.0
    }
}

/// Perceptual feature vector for one track.
///
/// `energy`, `valence` and `danceability` live in `[0, 1]`; `tempo` is in BPM.
/// `key` is a pitch class (`0..=11`, C = 0) and `mode` is 0 for minor, 1 for
/// major. Estimated features leave key and mode unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFeatures {
    pub id: String,
    pub energy: f64,
    pub valence: f64,
    pub tempo: f64,
    pub danceability: f64,
    #[serde(default)]
    pub key: Option<u8>,
    #[serde(default)]
    pub mode: Option<u8>,
    /// Loudness in dB, typically within `[-60, 0]`.
    #[serde(default)]
    pub loudness: Option<f64>,
}

/// A track paired with the features the scorers read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackWithFeatures {
    pub track: Track,
    pub features: AudioFeatures,
}

impl TrackWithFeatures {
    #[must_use]
    pub fn new(track: Track, features: AudioFeatures) -> Self {
        Self { track, features }
    }

    /// Track identifier, shorthand for `self.track.id`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.track.id
    }

    #[must_use]
    pub fn energy(&self) -> f64 {
        self.features.energy
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_minutes() {
        let track = fixtures::track("a");
        assert!((track.duration_minutes() - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_track_deserializes_from_catalog_json() {
        let json = r#"{
            "id": "t1", "title": "Song", "artist": "Band", "artistId": "b1",
            "album": "LP", "uri": "spotify:track:t1", "durationMs": 180000,
            "popularity": 64
        }"#;
        let track: Track = serde_json::from_str(json).expect("valid track json");

        assert_eq!(track.artist_id, "b1");
        assert_eq!(track.popularity, Some(64));
        assert!(!track.is_discovery, "flags default to false");
        assert!(!track.is_forgotten_gem);
    }
}
