//! # Mood Matching
//!
//! Six fixed target moods, each described by feature thresholds. A track's fit
//! is a weighted average of per-criterion range scores: energy and valence are
//! always scored (weight 1.0), tempo and danceability only when the mood
//! defines them (weight 0.5).

use crate::genre_map::FeatureRange;
use crate::track::{AudioFeatures, TrackWithFeatures};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance outside a range at which a criterion scores zero.
pub const RANGE_FALLOFF: f64 = 0.3;

/// Tempo is divided by this before range scoring so the shared falloff
/// spans a musically meaningful 60 BPM.
pub const TEMPO_SCALE: f64 = 200.0;

const PRIMARY_WEIGHT: f64 = 1.0;
const SECONDARY_WEIGHT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Energetic,
    Chill,
    Melancholic,
    Focused,
    Uplifting,
    Dark,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Energetic,
        Mood::Chill,
        Mood::Melancholic,
        Mood::Focused,
        Mood::Uplifting,
        Mood::Dark,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Mood::Energetic => "energetic",
            Mood::Chill => "chill",
            Mood::Melancholic => "melancholic",
            Mood::Focused => "focused",
            Mood::Uplifting => "uplifting",
            Mood::Dark => "dark",
        }
    }

    /// Feature thresholds defining this mood.
    #[must_use]
    pub const fn thresholds(&self) -> MoodThresholds {
        match self {
            Mood::Energetic => MoodThresholds {
                energy: FeatureRange::new(0.7, 1.0),
                valence: FeatureRange::new(0.5, 1.0),
                tempo: Some(FeatureRange::new(118.0, 180.0)),
                danceability: Some(FeatureRange::new(0.6, 1.0)),
            },
            Mood::Chill => MoodThresholds {
                energy: FeatureRange::new(0.0, 0.45),
                valence: FeatureRange::new(0.3, 0.7),
                tempo: Some(FeatureRange::new(60.0, 110.0)),
                danceability: None,
            },
            Mood::Melancholic => MoodThresholds {
                energy: FeatureRange::new(0.0, 0.5),
                valence: FeatureRange::new(0.0, 0.35),
                tempo: Some(FeatureRange::new(55.0, 110.0)),
                danceability: None,
            },
            Mood::Focused => MoodThresholds {
                energy: FeatureRange::new(0.25, 0.6),
                valence: FeatureRange::new(0.25, 0.6),
                tempo: Some(FeatureRange::new(80.0, 125.0)),
                danceability: Some(FeatureRange::new(0.3, 0.7)),
            },
            Mood::Uplifting => MoodThresholds {
                energy: FeatureRange::new(0.5, 0.85),
                valence: FeatureRange::new(0.6, 1.0),
                tempo: None,
                danceability: Some(FeatureRange::new(0.5, 1.0)),
            },
            Mood::Dark => MoodThresholds {
                energy: FeatureRange::new(0.4, 0.95),
                valence: FeatureRange::new(0.0, 0.3),
                tempo: None,
                danceability: None,
            },
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Mood::ALL.iter().map(Mood::as_str).collect();
                anyhow::anyhow!("Unknown mood '{s}'. Expected one of: {}", known.join(", "))
            })
    }
}

/// Required feature ranges for a mood. Energy and valence are mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoodThresholds {
    pub energy: FeatureRange,
    pub valence: FeatureRange,
    /// Tempo range in BPM.
    pub tempo: Option<FeatureRange>,
    pub danceability: Option<FeatureRange>,
}

/// 1 inside `[min, max]`, decaying linearly to 0 at [`RANGE_FALLOFF`] outside.
#[must_use]
pub fn range_score(value: f64, min: f64, max: f64) -> f64 {
    if value >= min && value <= max {
        return 1.0;
    }
    let distance = if value < min { min - value } else { value - max };
    (1.0 - distance / RANGE_FALLOFF).max(0.0)
}

/// How well a feature vector fits the given thresholds, in `[0, 1]`.
#[must_use]
pub fn score_features(features: &AudioFeatures, thresholds: &MoodThresholds) -> f64 {
    let mut weighted = PRIMARY_WEIGHT * range_score(features.energy, thresholds.energy.min, thresholds.energy.max)
        + PRIMARY_WEIGHT * range_score(features.valence, thresholds.valence.min, thresholds.valence.max);
    let mut total_weight = 2.0 * PRIMARY_WEIGHT;

    if let Some(tempo) = thresholds.tempo {
        weighted += SECONDARY_WEIGHT
            * range_score(features.tempo / TEMPO_SCALE, tempo.min / TEMPO_SCALE, tempo.max / TEMPO_SCALE);
        total_weight += SECONDARY_WEIGHT;
    }
    if let Some(danceability) = thresholds.danceability {
        weighted += SECONDARY_WEIGHT * range_score(features.danceability, danceability.min, danceability.max);
        total_weight += SECONDARY_WEIGHT;
    }

    weighted / total_weight
}

/// Mood fit of one track.
#[must_use]
pub fn score(track: &TrackWithFeatures, mood: Mood) -> f64 {
    score_features(&track.features, &mood.thresholds())
}

/// Tracks scoring at least `threshold`, best first.
///
/// Ties keep their input order.
#[must_use]
pub fn filter_tracks_by_mood(tracks: &[TrackWithFeatures], mood: Mood, threshold: f64) -> Vec<TrackWithFeatures> {
    rank_tracks_by_mood(tracks, mood, threshold)
        .into_iter()
        .map(|(track, _)| track)
        .collect()
}

/// Like [`filter_tracks_by_mood`] but keeps each track's score.
#[must_use]
pub fn rank_tracks_by_mood(tracks: &[TrackWithFeatures], mood: Mood, threshold: f64) -> Vec<(TrackWithFeatures, f64)> {
    let thresholds = mood.thresholds();
    let mut ranked: Vec<(TrackWithFeatures, f64)> = tracks
        .iter()
        .map(|track| (track.clone(), score_features(&track.features, &thresholds)))
        .filter(|(_, s)| *s >= threshold)
        .collect();

    ranked.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    log::trace!("{} of {} tracks match mood {mood} at {threshold:.2}", ranked.len(), tracks.len());
    ranked
}
