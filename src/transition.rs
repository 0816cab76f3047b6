//! # Transition Scoring
//!
//! Scores how naturally track B follows track A, in `[0, 1]`.
//!
//! | dimension | weight | full score | zero score |
//! |-----------|--------|------------|------------|
//! | tempo     | 0.30   | ≤ 5 BPM    | ≥ 30 BPM   |
//! | key       | 0.25   | distance 0 | distance ≥ 3 |
//! | energy    | 0.20   | ≤ 0.05     | ≥ 0.4      |
//! | valence   | 0.15   | ≤ 0.1      | ≥ 0.5      |
//! | loudness  | 0.10   | ≤ 0.1      | ≥ 0.5      |
//!
//! Tempo differences are half/double-time aware. Missing key, mode or
//! loudness on either side scores a neutral 0.5 for that dimension.

use crate::camelot::{self, camelot_distance};
use crate::track::AudioFeatures;
use serde::Serialize;

pub const TEMPO_WEIGHT: f64 = 0.30;
pub const KEY_WEIGHT: f64 = 0.25;
pub const ENERGY_WEIGHT: f64 = 0.20;
pub const VALENCE_WEIGHT: f64 = 0.15;
pub const LOUDNESS_WEIGHT: f64 = 0.10;

const NEUTRAL: f64 = 0.5;
const LOUDNESS_FLOOR_DB: f64 = -60.0;

/// Per-dimension sub-scores for one transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitionBreakdown {
    pub tempo: f64,
    pub key: f64,
    pub energy: f64,
    pub valence: f64,
    pub loudness: f64,
}

impl TransitionBreakdown {
    /// Weighted sum of the sub-scores.
    #[must_use]
    pub fn total(&self) -> f64 {
        let total = TEMPO_WEIGHT * self.tempo
            + KEY_WEIGHT * self.key
            + ENERGY_WEIGHT * self.energy
            + VALENCE_WEIGHT * self.valence
            + LOUDNESS_WEIGHT * self.loudness;
        total.clamp(0.0, 1.0)
    }
}

/// 1 at or below `full`, 0 at or above `zero`, linear in between.
fn linear_falloff(diff: f64, full: f64, zero: f64) -> f64 {
    if diff <= full {
        1.0
    } else if diff >= zero {
        0.0
    } else {
        1.0 - (diff - full) / (zero - full)
    }
}

/// Smallest BPM gap considering half- and double-time mixing.
#[must_use]
pub fn tempo_difference(a: f64, b: f64) -> f64 {
    (a - b).abs().min((a - 2.0 * b).abs()).min((2.0 * a - b).abs())
}

#[must_use]
pub fn tempo_score(a: f64, b: f64) -> f64 {
    linear_falloff(tempo_difference(a, b), 5.0, 30.0)
}

#[must_use]
pub fn key_score(a: &AudioFeatures, b: &AudioFeatures) -> f64 {
    match (camelot::from_features(a), camelot::from_features(b)) {
        (Some(from), Some(to)) => match camelot_distance(from, to) {
            0 => 1.0,
            1 => 0.75,
            2 => 0.35,
            _ => 0.0,
        },
        _ => NEUTRAL,
    }
}

#[must_use]
pub fn energy_score(a: f64, b: f64) -> f64 {
    linear_falloff((a - b).abs(), 0.05, 0.4)
}

#[must_use]
pub fn valence_score(a: f64, b: f64) -> f64 {
    linear_falloff((a - b).abs(), 0.1, 0.5)
}

fn normalize_loudness(db: f64) -> f64 {
    ((db - LOUDNESS_FLOOR_DB) / -LOUDNESS_FLOOR_DB).clamp(0.0, 1.0)
}

#[must_use]
pub fn loudness_score(a: Option<f64>, b: Option<f64>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => linear_falloff((normalize_loudness(a) - normalize_loudness(b)).abs(), 0.1, 0.5),
        _ => NEUTRAL,
    }
}

/// All five sub-scores for the transition `a -> b`.
#[must_use]
pub fn breakdown(a: &AudioFeatures, b: &AudioFeatures) -> TransitionBreakdown {
    TransitionBreakdown {
        tempo: tempo_score(a.tempo, b.tempo),
        key: key_score(a, b),
        energy: energy_score(a.energy, b.energy),
        valence: valence_score(a.valence, b.valence),
        loudness: loudness_score(a.loudness, b.loudness),
    }
}

/// Overall quality of playing `b` right after `a`, in `[0, 1]`.
#[must_use]
pub fn score_transition(a: &AudioFeatures, b: &AudioFeatures) -> f64 {
    breakdown(a, b).total()
}
