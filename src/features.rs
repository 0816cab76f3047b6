//! # Feature Estimation
//!
//! Derives a synthetic [`AudioFeatures`] vector for a track from indirect
//! signals: the artist's genre tags, the track's popularity relative to the
//! rest of the artist's catalog, and the track's duration.
//!
//! ## Model
//!
//! ```text
//! baseline   = mean over genres of the genre range midpoints
//! pop_delta  = ((popularity - mean_artist_popularity) / 100) * 0.1
//! dur_delta  = clamp((1 - duration_ms / 210_000) * 0.05, -0.05, 0.05)
//!
//! energy       = clamp(baseline.energy + pop_delta + dur_delta, 0, 1)
//! danceability = clamp(baseline.danceability + pop_delta, 0, 1)
//! valence      = clamp(baseline.valence + pop_delta * 0.5, 0, 1)
//! tempo, loudness pass through; key and mode stay unknown
//! ```
//!
//! Estimation is pure: the same inputs always yield bit-identical output,
//! which is what lets callers cache the result.

use crate::genre_map::{self, GenreFeatureEstimate, DEFAULT_ESTIMATE};
use crate::track::{AudioFeatures, Track};
use anyhow::{bail, Result};
use log::{debug, warn};
use rayon::prelude::*;
use std::collections::HashMap;

/// Reference duration (3.5 minutes) against which tracks skew shorter/longer.
pub const REFERENCE_DURATION_MS: f64 = 210_000.0;

const POPULARITY_WEIGHT: f64 = 0.1;
const DURATION_WEIGHT: f64 = 0.05;
const MIN_POPULARITY_SAMPLES: usize = 2;

/// Midpoint vector averaged over several genre estimates.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Baseline {
    energy: f64,
    tempo: f64,
    valence: f64,
    danceability: f64,
    loudness: f64,
}

impl From<&GenreFeatureEstimate> for Baseline {
    fn from(estimate: &GenreFeatureEstimate) -> Self {
        Self {
            energy: estimate.energy.midpoint(),
            tempo: estimate.tempo.midpoint(),
            valence: estimate.valence.midpoint(),
            danceability: estimate.danceability.midpoint(),
            loudness: estimate.loudness.midpoint(),
        }
    }
}

fn baseline(artist_genres: &[String]) -> Baseline {
    if artist_genres.is_empty() {
        return Baseline::from(&DEFAULT_ESTIMATE);
    }

    let count = artist_genres.len() as f64;
    let sum = artist_genres
        .iter()
        .map(|genre| Baseline::from(&genre_map::lookup(genre)))
        .fold(
            Baseline { energy: 0.0, tempo: 0.0, valence: 0.0, danceability: 0.0, loudness: 0.0 },
            |acc, b| Baseline {
                energy: acc.energy + b.energy,
                tempo: acc.tempo + b.tempo,
                valence: acc.valence + b.valence,
                danceability: acc.danceability + b.danceability,
                loudness: acc.loudness + b.loudness,
            },
        );

    Baseline {
        energy: sum.energy / count,
        tempo: sum.tempo / count,
        valence: sum.valence / count,
        danceability: sum.danceability / count,
        loudness: sum.loudness / count,
    }
}

/// Popularity relative to the artist's mean, scaled to a small nudge.
///
/// Zero unless the track has a popularity and at least two catalog tracks do.
#[must_use]
pub fn popularity_delta(track: &Track, artist_catalog: Option<&[Track]>) -> f64 {
    let (Some(popularity), Some(catalog)) = (track.popularity, artist_catalog) else {
        return 0.0;
    };

    let known: Vec<f64> = catalog
        .iter()
        .filter_map(|t| t.popularity)
        .map(f64::from)
        .collect();
    if known.len() < MIN_POPULARITY_SAMPLES {
        return 0.0;
    }

    let mean = known.iter().sum::<f64>() / known.len() as f64;
    ((f64::from(popularity) - mean) / 100.0) * POPULARITY_WEIGHT
}

/// Shorter tracks skew slightly more energetic, longer ones slightly less.
#[must_use]
pub fn duration_delta(duration_ms: u64) -> f64 {
    ((1.0 - duration_ms as f64 / REFERENCE_DURATION_MS) * DURATION_WEIGHT)
        .clamp(-DURATION_WEIGHT, DURATION_WEIGHT)
}

/// Estimate features for one track.
///
/// `artist_catalog` is the set of the artist's tracks used for the popularity
/// comparison; it may include `track` itself.
#[must_use]
pub fn estimate(track: &Track, artist_genres: &[String], artist_catalog: Option<&[Track]>) -> AudioFeatures {
    let base = baseline(artist_genres);
    let pop = popularity_delta(track, artist_catalog);
    let dur = duration_delta(track.duration_ms);

    AudioFeatures {
        id: track.id.clone(),
        energy: (base.energy + pop + dur).clamp(0.0, 1.0),
        valence: (base.valence + pop * 0.5).clamp(0.0, 1.0),
        tempo: base.tempo,
        danceability: (base.danceability + pop).clamp(0.0, 1.0),
        key: None,
        mode: None,
        loudness: Some(base.loudness),
    }
}

/// Estimate every track of a catalog in parallel.
///
/// The artist catalog for each track is every input track sharing its
/// `artist_id`. Output order matches input order.
#[must_use]
pub fn estimate_catalog(tracks: &[Track], artist_genres: &HashMap<String, Vec<String>>) -> Vec<AudioFeatures> {
    let mut by_artist: HashMap<&str, Vec<Track>> = HashMap::new();
    for track in tracks {
        by_artist.entry(track.artist_id.as_str()).or_default().push(track.clone());
    }

    let features: Vec<AudioFeatures> = tracks
        .par_iter()
        .map(|track| {
            let genres = artist_genres
                .get(&track.artist_id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let catalog = by_artist.get(track.artist_id.as_str()).map(Vec::as_slice);
            estimate(track, genres, catalog)
        })
        .collect();

    debug!("Estimated features for {} tracks across {} artists", features.len(), by_artist.len());
    features
}

/// Storage for previously computed features, keyed by track id.
pub trait FeatureCache {
    fn get(&self, track_id: &str) -> Option<AudioFeatures>;
    fn put(&mut self, features: AudioFeatures);
}

/// In-process [`FeatureCache`].
#[derive(Debug, Default, Clone)]
pub struct MemoryFeatureCache {
    entries: HashMap<String, AudioFeatures>,
}

impl MemoryFeatureCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FeatureCache for MemoryFeatureCache {
    fn get(&self, track_id: &str) -> Option<AudioFeatures> {
        self.entries.get(track_id).cloned()
    }

    fn put(&mut self, features: AudioFeatures) {
        self.entries.insert(features.id.clone(), features);
    }
}

/// Estimation that refuses out-of-range popularity or non-finite results.
fn checked_estimate(track: &Track, artist_genres: &[String], artist_catalog: Option<&[Track]>) -> Result<AudioFeatures> {
    if let Some(popularity) = track.popularity.filter(|&p| p > 100) {
        bail!("track {} has popularity {popularity} outside 0..=100", track.id);
    }

    let features = estimate(track, artist_genres, artist_catalog);
    let finite = [features.energy, features.valence, features.tempo, features.danceability]
        .iter()
        .chain(features.loudness.iter())
        .all(|v| v.is_finite());
    if !finite {
        bail!("estimation for track {} produced non-finite values", track.id);
    }
    Ok(features)
}

/// Estimate through a cache.
///
/// Fresh estimates are written back to `cache`. When estimation fails, the
/// previously cached features are returned instead (or `None` if there are
/// none); the failure is logged and never propagated.
pub fn estimate_or_cached(
    track: &Track,
    artist_genres: &[String],
    artist_catalog: Option<&[Track]>,
    cache: &mut dyn FeatureCache,
) -> Option<AudioFeatures> {
    match checked_estimate(track, artist_genres, artist_catalog) {
        Ok(features) => {
            cache.put(features.clone());
            Some(features)
        }
        Err(e) => {
            warn!("Feature estimation failed, using cached features: {e}");
            cache.get(&track.id)
        }
    }
}
