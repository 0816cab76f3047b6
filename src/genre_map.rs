//! # Genre Feature Map
//!
//! Static knowledge base mapping free-text genre labels (as reported by the
//! catalog for an artist) to coarse ranges for each perceptual feature.
//!
//! ## Lookup
//!
//! 1. Case-insensitive exact match against the table.
//! 2. Substring match in either direction; the longest matching table key wins.
//!    Keys of equal length are resolved by table order: the first one declared
//!    wins.
//! 3. Otherwise [`DEFAULT_ESTIMATE`], a mid-range guess for every feature.
//!
//! Lookup never fails. The ranges are informed guesses meant to drive relative
//! comparisons, not ground truth.

use serde::Serialize;
use std::collections::HashMap;

/// Closed interval `[min, max]` over one feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
}

impl FeatureRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Intersection length divided by the shorter range's length.
    ///
    /// Returns 0 for disjoint ranges. A zero-length range that lies inside the
    /// other counts as full overlap.
    #[must_use]
    pub fn overlap(&self, other: &FeatureRange) -> f64 {
        let low = self.min.max(other.min);
        let high = self.max.min(other.max);
        if high < low {
            return 0.0;
        }
        let shorter = self.length().min(other.length());
        if shorter <= 0.0 {
            return 1.0;
        }
        ((high - low) / shorter).clamp(0.0, 1.0)
    }
}

/// Feature ranges estimated for one genre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenreFeatureEstimate {
    pub energy: FeatureRange,
    pub tempo: FeatureRange,
    pub valence: FeatureRange,
    pub danceability: FeatureRange,
    /// Loudness in dB.
    pub loudness: FeatureRange,
}

/// Returned when no table key matches the query.
pub const DEFAULT_ESTIMATE: GenreFeatureEstimate = GenreFeatureEstimate {
    energy: FeatureRange::new(0.3, 0.7),
    tempo: FeatureRange::new(90.0, 130.0),
    valence: FeatureRange::new(0.3, 0.7),
    danceability: FeatureRange::new(0.3, 0.7),
    loudness: FeatureRange::new(-12.0, -6.0),
};

type Range = (f64, f64);

const fn genre(
    name: &'static str,
    energy: Range,
    tempo: Range,
    valence: Range,
    danceability: Range,
    loudness: Range,
) -> (&'static str, GenreFeatureEstimate) {
    (
        name,
        GenreFeatureEstimate {
            energy: FeatureRange::new(energy.0, energy.1),
            tempo: FeatureRange::new(tempo.0, tempo.1),
            valence: FeatureRange::new(valence.0, valence.1),
            danceability: FeatureRange::new(danceability.0, danceability.1),
            loudness: FeatureRange::new(loudness.0, loudness.1),
        },
    )
}

// (name, energy, tempo, valence, danceability, loudness dB)
static GENRE_TABLE: &[(&str, GenreFeatureEstimate)] = &[
    // Pop
    genre("pop", (0.55, 0.80), (95.0, 130.0), (0.45, 0.80), (0.55, 0.80), (-8.0, -4.0)),
    genre("dance pop", (0.65, 0.90), (110.0, 130.0), (0.55, 0.85), (0.65, 0.90), (-7.0, -3.0)),
    genre("electropop", (0.60, 0.85), (105.0, 130.0), (0.45, 0.80), (0.60, 0.85), (-7.0, -4.0)),
    genre("synthpop", (0.55, 0.80), (100.0, 130.0), (0.40, 0.75), (0.55, 0.80), (-9.0, -5.0)),
    genre("indie pop", (0.45, 0.75), (95.0, 130.0), (0.40, 0.75), (0.50, 0.75), (-9.0, -5.0)),
    genre("art pop", (0.35, 0.70), (85.0, 125.0), (0.30, 0.65), (0.40, 0.70), (-10.0, -6.0)),
    genre("dream pop", (0.30, 0.60), (80.0, 120.0), (0.25, 0.55), (0.35, 0.60), (-12.0, -7.0)),
    genre("bedroom pop", (0.30, 0.60), (80.0, 120.0), (0.30, 0.65), (0.50, 0.75), (-12.0, -7.0)),
    genre("chamber pop", (0.30, 0.60), (80.0, 125.0), (0.30, 0.65), (0.35, 0.60), (-11.0, -7.0)),
    genre("baroque pop", (0.35, 0.65), (85.0, 125.0), (0.35, 0.70), (0.35, 0.60), (-11.0, -7.0)),
    genre("power pop", (0.65, 0.90), (120.0, 150.0), (0.55, 0.85), (0.45, 0.70), (-7.0, -4.0)),
    genre("teen pop", (0.60, 0.85), (100.0, 130.0), (0.60, 0.90), (0.60, 0.85), (-6.0, -3.0)),
    genre("k-pop", (0.70, 0.92), (100.0, 135.0), (0.55, 0.85), (0.65, 0.88), (-5.0, -2.0)),
    genre("j-pop", (0.65, 0.90), (110.0, 150.0), (0.55, 0.85), (0.55, 0.80), (-6.0, -3.0)),
    genre("c-pop", (0.45, 0.75), (85.0, 125.0), (0.35, 0.70), (0.50, 0.75), (-8.0, -5.0)),
    genre("mandopop", (0.40, 0.70), (75.0, 120.0), (0.30, 0.65), (0.45, 0.70), (-8.0, -5.0)),
    genre("europop", (0.70, 0.90), (115.0, 135.0), (0.60, 0.90), (0.65, 0.85), (-6.0, -3.0)),
    genre("britpop", (0.60, 0.85), (100.0, 140.0), (0.45, 0.75), (0.40, 0.65), (-8.0, -5.0)),
    genre("hyperpop", (0.75, 0.98), (130.0, 170.0), (0.40, 0.80), (0.50, 0.75), (-5.0, -2.0)),
    genre("bubblegum pop", (0.65, 0.85), (110.0, 135.0), (0.70, 0.95), (0.65, 0.85), (-7.0, -4.0)),
    genre("sophisti-pop", (0.40, 0.65), (90.0, 120.0), (0.45, 0.75), (0.55, 0.75), (-11.0, -7.0)),
    genre("city pop", (0.50, 0.75), (100.0, 125.0), (0.55, 0.85), (0.60, 0.80), (-10.0, -6.0)),
    genre("latin pop", (0.60, 0.85), (90.0, 130.0), (0.55, 0.85), (0.65, 0.85), (-7.0, -4.0)),
    genre("pop rap", (0.60, 0.85), (85.0, 115.0), (0.45, 0.75), (0.65, 0.85), (-7.0, -4.0)),
    genre("pop punk", (0.80, 0.97), (150.0, 190.0), (0.45, 0.75), (0.40, 0.60), (-5.0, -3.0)),
    genre("pop rock", (0.60, 0.85), (100.0, 140.0), (0.45, 0.75), (0.45, 0.65), (-7.0, -4.0)),
    genre("adult contemporary", (0.35, 0.60), (75.0, 115.0), (0.35, 0.65), (0.45, 0.65), (-10.0, -6.0)),
    genre("singer-songwriter", (0.20, 0.50), (70.0, 120.0), (0.25, 0.60), (0.40, 0.60), (-13.0, -8.0)),
    genre("soft rock", (0.35, 0.60), (80.0, 120.0), (0.40, 0.70), (0.45, 0.65), (-11.0, -7.0)),
    // Rock
    genre("rock", (0.65, 0.90), (100.0, 145.0), (0.35, 0.70), (0.40, 0.60), (-8.0, -4.0)),
    genre("classic rock", (0.60, 0.85), (100.0, 140.0), (0.45, 0.75), (0.40, 0.60), (-10.0, -6.0)),
    genre("hard rock", (0.80, 0.97), (110.0, 150.0), (0.40, 0.70), (0.35, 0.55), (-7.0, -4.0)),
    genre("alternative rock", (0.60, 0.88), (100.0, 145.0), (0.30, 0.60), (0.40, 0.60), (-8.0, -4.0)),
    genre("alternative", (0.55, 0.85), (95.0, 140.0), (0.30, 0.60), (0.40, 0.60), (-8.0, -5.0)),
    genre("indie rock", (0.55, 0.85), (100.0, 145.0), (0.35, 0.65), (0.40, 0.60), (-8.0, -5.0)),
    genre("indie", (0.45, 0.75), (95.0, 135.0), (0.35, 0.65), (0.45, 0.65), (-9.0, -5.0)),
    genre("garage rock", (0.75, 0.95), (120.0, 160.0), (0.45, 0.75), (0.40, 0.60), (-7.0, -4.0)),
    genre("psychedelic rock", (0.50, 0.80), (90.0, 135.0), (0.35, 0.65), (0.35, 0.55), (-11.0, -7.0)),
    genre("progressive rock", (0.50, 0.80), (85.0, 140.0), (0.30, 0.60), (0.30, 0.50), (-11.0, -7.0)),
    genre("art rock", (0.45, 0.75), (85.0, 135.0), (0.30, 0.60), (0.35, 0.55), (-11.0, -7.0)),
    genre("post-rock", (0.35, 0.75), (80.0, 130.0), (0.15, 0.40), (0.20, 0.40), (-14.0, -8.0)),
    genre("math rock", (0.60, 0.85), (110.0, 160.0), (0.35, 0.60), (0.35, 0.55), (-9.0, -6.0)),
    genre("noise rock", (0.80, 0.98), (110.0, 160.0), (0.15, 0.40), (0.25, 0.45), (-7.0, -3.0)),
    genre("shoegaze", (0.55, 0.85), (90.0, 130.0), (0.20, 0.45), (0.25, 0.45), (-9.0, -5.0)),
    genre("grunge", (0.75, 0.95), (100.0, 140.0), (0.20, 0.45), (0.35, 0.55), (-7.0, -4.0)),
    genre("post-grunge", (0.75, 0.92), (100.0, 140.0), (0.30, 0.55), (0.40, 0.55), (-6.0, -4.0)),
    genre("southern rock", (0.60, 0.85), (100.0, 140.0), (0.50, 0.80), (0.45, 0.65), (-9.0, -6.0)),
    genre("blues rock", (0.60, 0.85), (90.0, 135.0), (0.45, 0.75), (0.40, 0.60), (-9.0, -6.0)),
    genre("folk rock", (0.45, 0.70), (90.0, 135.0), (0.45, 0.75), (0.40, 0.60), (-11.0, -7.0)),
    genre("country rock", (0.55, 0.80), (100.0, 140.0), (0.50, 0.80), (0.45, 0.65), (-9.0, -6.0)),
    genre("glam rock", (0.70, 0.90), (110.0, 145.0), (0.55, 0.85), (0.45, 0.65), (-9.0, -6.0)),
    genre("stoner rock", (0.70, 0.92), (80.0, 120.0), (0.25, 0.50), (0.35, 0.55), (-7.0, -4.0)),
    genre("surf rock", (0.65, 0.88), (120.0, 170.0), (0.60, 0.90), (0.45, 0.65), (-10.0, -6.0)),
    genre("space rock", (0.50, 0.80), (85.0, 130.0), (0.25, 0.55), (0.30, 0.50), (-11.0, -7.0)),
    genre("krautrock", (0.50, 0.80), (100.0, 140.0), (0.35, 0.60), (0.45, 0.65), (-12.0, -8.0)),
    genre("rockabilly", (0.65, 0.88), (140.0, 190.0), (0.65, 0.90), (0.50, 0.70), (-10.0, -7.0)),
    genre("heartland rock", (0.60, 0.85), (100.0, 140.0), (0.50, 0.80), (0.45, 0.60), (-9.0, -6.0)),
    genre("modern rock", (0.70, 0.92), (100.0, 145.0), (0.30, 0.60), (0.40, 0.60), (-6.0, -3.0)),
    genre("emo", (0.70, 0.92), (120.0, 170.0), (0.20, 0.45), (0.35, 0.55), (-6.0, -4.0)),
    genre("midwest emo", (0.55, 0.85), (110.0, 160.0), (0.25, 0.50), (0.35, 0.55), (-8.0, -5.0)),
    genre("post-punk", (0.60, 0.85), (110.0, 150.0), (0.20, 0.50), (0.45, 0.65), (-9.0, -6.0)),
    genre("new wave", (0.60, 0.85), (110.0, 140.0), (0.45, 0.75), (0.55, 0.75), (-10.0, -6.0)),
    genre("darkwave", (0.50, 0.80), (100.0, 135.0), (0.10, 0.35), (0.50, 0.70), (-9.0, -6.0)),
    genre("gothic rock", (0.55, 0.85), (100.0, 140.0), (0.10, 0.35), (0.40, 0.60), (-9.0, -6.0)),
    genre("slowcore", (0.15, 0.40), (60.0, 100.0), (0.10, 0.35), (0.25, 0.45), (-14.0, -9.0)),
    genre("lo-fi indie", (0.35, 0.65), (85.0, 125.0), (0.30, 0.60), (0.45, 0.65), (-12.0, -8.0)),
    genre("jangle pop", (0.55, 0.80), (110.0, 145.0), (0.55, 0.85), (0.45, 0.65), (-10.0, -7.0)),
    genre("britrock", (0.65, 0.88), (105.0, 145.0), (0.35, 0.65), (0.40, 0.60), (-8.0, -5.0)),
    // Metal
    genre("metal", (0.85, 0.99), (100.0, 180.0), (0.10, 0.40), (0.25, 0.50), (-6.0, -3.0)),
    genre("heavy metal", (0.85, 0.98), (100.0, 170.0), (0.20, 0.45), (0.30, 0.50), (-7.0, -4.0)),
    genre("thrash metal", (0.90, 0.99), (150.0, 210.0), (0.15, 0.40), (0.25, 0.45), (-6.0, -3.0)),
    genre("death metal", (0.92, 1.00), (120.0, 220.0), (0.05, 0.25), (0.20, 0.40), (-6.0, -3.0)),
    genre("black metal", (0.88, 1.00), (130.0, 220.0), (0.05, 0.20), (0.15, 0.35), (-8.0, -4.0)),
    genre("doom metal", (0.65, 0.90), (55.0, 90.0), (0.05, 0.25), (0.20, 0.40), (-8.0, -4.0)),
    genre("sludge metal", (0.80, 0.97), (70.0, 110.0), (0.05, 0.25), (0.25, 0.45), (-6.0, -3.0)),
    genre("power metal", (0.88, 0.99), (140.0, 200.0), (0.35, 0.65), (0.25, 0.45), (-6.0, -3.0)),
    genre("progressive metal", (0.80, 0.97), (100.0, 170.0), (0.15, 0.45), (0.25, 0.45), (-7.0, -4.0)),
    genre("symphonic metal", (0.80, 0.97), (100.0, 170.0), (0.15, 0.45), (0.25, 0.45), (-7.0, -4.0)),
    genre("nu metal", (0.85, 0.98), (90.0, 130.0), (0.20, 0.45), (0.40, 0.60), (-5.0, -3.0)),
    genre("metalcore", (0.90, 0.99), (110.0, 180.0), (0.15, 0.40), (0.30, 0.50), (-5.0, -3.0)),
    genre("deathcore", (0.93, 1.00), (100.0, 200.0), (0.05, 0.25), (0.30, 0.50), (-5.0, -2.0)),
    genre("djent", (0.85, 0.98), (100.0, 160.0), (0.15, 0.40), (0.35, 0.55), (-6.0, -3.0)),
    genre("industrial metal", (0.85, 0.98), (100.0, 140.0), (0.15, 0.40), (0.45, 0.65), (-6.0, -3.0)),
    genre("alternative metal", (0.85, 0.97), (95.0, 140.0), (0.20, 0.45), (0.35, 0.55), (-6.0, -3.0)),
    genre("gothic metal", (0.75, 0.93), (90.0, 140.0), (0.10, 0.35), (0.30, 0.50), (-7.0, -4.0)),
    genre("folk metal", (0.85, 0.97), (120.0, 180.0), (0.35, 0.65), (0.35, 0.55), (-6.0, -3.0)),
    genre("post-metal", (0.65, 0.92), (70.0, 120.0), (0.05, 0.30), (0.20, 0.40), (-8.0, -4.0)),
    genre("grindcore", (0.95, 1.00), (160.0, 240.0), (0.05, 0.25), (0.20, 0.40), (-6.0, -2.0)),
    genre("speed metal", (0.90, 0.99), (160.0, 220.0), (0.25, 0.50), (0.25, 0.45), (-7.0, -4.0)),
    genre("glam metal", (0.80, 0.95), (110.0, 150.0), (0.45, 0.75), (0.40, 0.60), (-7.0, -4.0)),
    // Punk and hardcore
    genre("punk", (0.85, 0.98), (150.0, 200.0), (0.40, 0.70), (0.35, 0.55), (-6.0, -3.0)),
    genre("punk rock", (0.85, 0.98), (150.0, 200.0), (0.40, 0.70), (0.35, 0.55), (-6.0, -3.0)),
    genre("hardcore punk", (0.92, 1.00), (160.0, 220.0), (0.25, 0.55), (0.30, 0.50), (-6.0, -3.0)),
    genre("hardcore", (0.90, 0.99), (150.0, 210.0), (0.20, 0.50), (0.30, 0.50), (-6.0, -3.0)),
    genre("post-hardcore", (0.82, 0.97), (120.0, 180.0), (0.20, 0.45), (0.30, 0.50), (-6.0, -3.0)),
    genre("skate punk", (0.88, 0.99), (170.0, 220.0), (0.45, 0.75), (0.35, 0.50), (-5.0, -3.0)),
    genre("ska punk", (0.82, 0.97), (150.0, 200.0), (0.60, 0.90), (0.50, 0.70), (-6.0, -3.0)),
    genre("folk punk", (0.60, 0.85), (120.0, 180.0), (0.40, 0.70), (0.40, 0.60), (-9.0, -6.0)),
    genre("crust punk", (0.92, 1.00), (150.0, 210.0), (0.10, 0.35), (0.25, 0.45), (-6.0, -3.0)),
    genre("riot grrrl", (0.85, 0.97), (140.0, 190.0), (0.35, 0.65), (0.35, 0.55), (-7.0, -4.0)),
    genre("screamo", (0.85, 0.98), (120.0, 190.0), (0.10, 0.35), (0.25, 0.45), (-6.0, -3.0)),
    // Hip hop
    genre("hip hop", (0.55, 0.80), (80.0, 110.0), (0.35, 0.70), (0.65, 0.88), (-7.0, -4.0)),
    genre("rap", (0.60, 0.85), (80.0, 150.0), (0.35, 0.65), (0.65, 0.88), (-7.0, -4.0)),
    genre("trap", (0.60, 0.85), (130.0, 160.0), (0.20, 0.50), (0.65, 0.85), (-6.0, -3.0)),
    genre("drill", (0.60, 0.85), (135.0, 150.0), (0.10, 0.35), (0.65, 0.85), (-6.0, -3.0)),
    genre("uk drill", (0.60, 0.85), (138.0, 146.0), (0.10, 0.35), (0.65, 0.85), (-6.0, -3.0)),
    genre("boom bap", (0.55, 0.78), (85.0, 98.0), (0.35, 0.65), (0.70, 0.88), (-8.0, -5.0)),
    genre("conscious hip hop", (0.50, 0.75), (80.0, 100.0), (0.35, 0.65), (0.65, 0.85), (-8.0, -5.0)),
    genre("gangster rap", (0.60, 0.85), (85.0, 105.0), (0.30, 0.60), (0.70, 0.90), (-6.0, -3.0)),
    genre("east coast hip hop", (0.55, 0.80), (85.0, 100.0), (0.35, 0.65), (0.70, 0.88), (-7.0, -4.0)),
    genre("west coast rap", (0.55, 0.80), (85.0, 105.0), (0.45, 0.75), (0.75, 0.92), (-7.0, -4.0)),
    genre("southern hip hop", (0.60, 0.85), (70.0, 150.0), (0.40, 0.70), (0.70, 0.90), (-6.0, -3.0)),
    genre("alternative hip hop", (0.50, 0.78), (80.0, 110.0), (0.35, 0.65), (0.60, 0.82), (-8.0, -5.0)),
    genre("underground hip hop", (0.50, 0.78), (80.0, 100.0), (0.30, 0.60), (0.65, 0.85), (-8.0, -5.0)),
    genre("abstract hip hop", (0.40, 0.70), (75.0, 100.0), (0.25, 0.55), (0.55, 0.78), (-9.0, -6.0)),
    genre("jazz rap", (0.45, 0.70), (80.0, 100.0), (0.45, 0.75), (0.70, 0.88), (-9.0, -6.0)),
    genre("lo-fi hip hop", (0.25, 0.50), (70.0, 95.0), (0.35, 0.65), (0.60, 0.80), (-13.0, -9.0)),
    genre("cloud rap", (0.40, 0.65), (60.0, 80.0), (0.20, 0.45), (0.55, 0.75), (-9.0, -6.0)),
    genre("emo rap", (0.50, 0.75), (70.0, 160.0), (0.15, 0.40), (0.55, 0.75), (-7.0, -4.0)),
    genre("melodic rap", (0.50, 0.78), (75.0, 160.0), (0.30, 0.60), (0.60, 0.82), (-7.0, -4.0)),
    genre("grime", (0.75, 0.95), (138.0, 142.0), (0.25, 0.55), (0.60, 0.80), (-6.0, -3.0)),
    genre("horrorcore", (0.70, 0.92), (80.0, 110.0), (0.05, 0.25), (0.60, 0.80), (-6.0, -3.0)),
    genre("crunk", (0.75, 0.95), (70.0, 80.0), (0.45, 0.75), (0.75, 0.92), (-5.0, -3.0)),
    genre("phonk", (0.65, 0.90), (120.0, 160.0), (0.15, 0.45), (0.70, 0.90), (-6.0, -3.0)),
    genre("drumless", (0.25, 0.50), (70.0, 95.0), (0.25, 0.55), (0.50, 0.70), (-11.0, -7.0)),
    genre("rage", (0.80, 0.97), (140.0, 170.0), (0.25, 0.55), (0.55, 0.75), (-5.0, -2.0)),
    genre("plugg", (0.45, 0.70), (140.0, 160.0), (0.40, 0.70), (0.65, 0.85), (-8.0, -5.0)),
    genre("hyphy", (0.75, 0.95), (95.0, 110.0), (0.55, 0.85), (0.75, 0.92), (-6.0, -3.0)),
    genre("latin hip hop", (0.60, 0.85), (85.0, 110.0), (0.45, 0.75), (0.70, 0.88), (-6.0, -4.0)),
    // R&B, soul, funk
    genre("r&b", (0.40, 0.70), (65.0, 110.0), (0.35, 0.70), (0.60, 0.82), (-8.0, -5.0)),
    genre("contemporary r&b", (0.40, 0.70), (65.0, 110.0), (0.35, 0.65), (0.60, 0.82), (-8.0, -5.0)),
    genre("alternative r&b", (0.30, 0.60), (60.0, 110.0), (0.20, 0.50), (0.55, 0.78), (-9.0, -6.0)),
    genre("neo soul", (0.35, 0.60), (70.0, 100.0), (0.40, 0.70), (0.60, 0.80), (-10.0, -6.0)),
    genre("soul", (0.45, 0.75), (80.0, 125.0), (0.50, 0.85), (0.55, 0.78), (-10.0, -6.0)),
    genre("classic soul", (0.45, 0.75), (80.0, 125.0), (0.55, 0.88), (0.55, 0.78), (-11.0, -7.0)),
    genre("northern soul", (0.65, 0.88), (110.0, 140.0), (0.65, 0.92), (0.60, 0.80), (-10.0, -7.0)),
    genre("motown", (0.55, 0.82), (100.0, 130.0), (0.65, 0.92), (0.60, 0.80), (-10.0, -7.0)),
    genre("quiet storm", (0.25, 0.50), (60.0, 90.0), (0.35, 0.65), (0.55, 0.75), (-11.0, -7.0)),
    genre("new jack swing", (0.65, 0.88), (100.0, 120.0), (0.55, 0.85), (0.70, 0.90), (-8.0, -5.0)),
    genre("funk", (0.60, 0.85), (95.0, 125.0), (0.65, 0.92), (0.70, 0.92), (-9.0, -6.0)),
    genre("p-funk", (0.60, 0.85), (95.0, 120.0), (0.65, 0.92), (0.70, 0.92), (-10.0, -6.0)),
    genre("g-funk", (0.55, 0.80), (85.0, 100.0), (0.55, 0.85), (0.75, 0.92), (-8.0, -5.0)),
    genre("disco", (0.65, 0.90), (110.0, 130.0), (0.70, 0.95), (0.70, 0.90), (-9.0, -6.0)),
    genre("nu disco", (0.60, 0.85), (110.0, 125.0), (0.60, 0.90), (0.70, 0.90), (-8.0, -5.0)),
    genre("boogie", (0.60, 0.85), (105.0, 125.0), (0.65, 0.92), (0.70, 0.90), (-9.0, -6.0)),
    genre("gospel", (0.50, 0.80), (70.0, 130.0), (0.55, 0.85), (0.45, 0.70), (-9.0, -6.0)),
    genre("doo-wop", (0.35, 0.60), (70.0, 130.0), (0.55, 0.85), (0.50, 0.70), (-12.0, -8.0)),
    // Electronic
    genre("electronic", (0.60, 0.88), (110.0, 140.0), (0.30, 0.65), (0.55, 0.80), (-8.0, -5.0)),
    genre("edm", (0.75, 0.97), (120.0, 135.0), (0.40, 0.75), (0.60, 0.82), (-5.0, -2.0)),
    genre("electro", (0.70, 0.92), (115.0, 135.0), (0.35, 0.70), (0.65, 0.85), (-7.0, -4.0)),
    genre("electro house", (0.80, 0.97), (125.0, 132.0), (0.40, 0.70), (0.65, 0.85), (-5.0, -3.0)),
    genre("house", (0.65, 0.88), (118.0, 130.0), (0.45, 0.80), (0.72, 0.92), (-8.0, -5.0)),
    genre("deep house", (0.50, 0.75), (118.0, 126.0), (0.35, 0.65), (0.72, 0.90), (-9.0, -6.0)),
    genre("tech house", (0.70, 0.90), (122.0, 130.0), (0.30, 0.60), (0.75, 0.92), (-7.0, -5.0)),
    genre("progressive house", (0.65, 0.90), (122.0, 130.0), (0.30, 0.65), (0.60, 0.80), (-7.0, -4.0)),
    genre("future house", (0.75, 0.92), (122.0, 128.0), (0.45, 0.75), (0.70, 0.88), (-5.0, -3.0)),
    genre("tropical house", (0.55, 0.78), (100.0, 120.0), (0.55, 0.85), (0.70, 0.88), (-7.0, -4.0)),
    genre("afro house", (0.65, 0.88), (118.0, 126.0), (0.45, 0.75), (0.75, 0.92), (-8.0, -5.0)),
    genre("acid house", (0.70, 0.90), (118.0, 130.0), (0.40, 0.70), (0.70, 0.88), (-9.0, -6.0)),
    genre("chicago house", (0.65, 0.88), (118.0, 128.0), (0.50, 0.80), (0.75, 0.92), (-9.0, -6.0)),
    genre("disco house", (0.65, 0.88), (118.0, 128.0), (0.65, 0.90), (0.75, 0.92), (-8.0, -5.0)),
    genre("funky house", (0.68, 0.88), (118.0, 128.0), (0.60, 0.88), (0.75, 0.92), (-8.0, -5.0)),
    genre("bass house", (0.80, 0.97), (124.0, 130.0), (0.35, 0.65), (0.72, 0.90), (-5.0, -3.0)),
    genre("melodic house", (0.55, 0.80), (115.0, 124.0), (0.25, 0.55), (0.65, 0.82), (-8.0, -5.0)),
    genre("organic house", (0.45, 0.70), (110.0, 122.0), (0.30, 0.60), (0.68, 0.85), (-10.0, -7.0)),
    genre("lo-fi house", (0.50, 0.75), (115.0, 125.0), (0.35, 0.65), (0.70, 0.88), (-10.0, -7.0)),
    genre("uk garage", (0.65, 0.88), (128.0, 136.0), (0.45, 0.75), (0.72, 0.90), (-7.0, -4.0)),
    genre("speed garage", (0.70, 0.90), (130.0, 138.0), (0.40, 0.70), (0.70, 0.88), (-7.0, -4.0)),
    genre("2-step", (0.60, 0.85), (128.0, 136.0), (0.45, 0.75), (0.72, 0.90), (-8.0, -5.0)),
    genre("techno", (0.75, 0.95), (125.0, 140.0), (0.15, 0.45), (0.65, 0.85), (-8.0, -5.0)),
    genre("minimal techno", (0.60, 0.82), (122.0, 130.0), (0.15, 0.40), (0.72, 0.90), (-10.0, -7.0)),
    genre("detroit techno", (0.70, 0.90), (125.0, 135.0), (0.25, 0.55), (0.65, 0.85), (-9.0, -6.0)),
    genre("hard techno", (0.88, 0.99), (140.0, 160.0), (0.10, 0.35), (0.60, 0.80), (-6.0, -3.0)),
    genre("industrial techno", (0.85, 0.98), (130.0, 150.0), (0.05, 0.30), (0.60, 0.80), (-7.0, -4.0)),
    genre("dub techno", (0.40, 0.65), (115.0, 128.0), (0.15, 0.40), (0.60, 0.80), (-12.0, -8.0)),
    genre("acid techno", (0.80, 0.95), (130.0, 145.0), (0.20, 0.45), (0.65, 0.85), (-8.0, -5.0)),
    genre("melodic techno", (0.65, 0.88), (120.0, 128.0), (0.15, 0.40), (0.62, 0.80), (-8.0, -5.0)),
    genre("trance", (0.75, 0.95), (130.0, 140.0), (0.30, 0.65), (0.55, 0.75), (-7.0, -4.0)),
    genre("progressive trance", (0.70, 0.90), (128.0, 136.0), (0.30, 0.60), (0.55, 0.75), (-7.0, -4.0)),
    genre("uplifting trance", (0.80, 0.97), (136.0, 140.0), (0.45, 0.75), (0.50, 0.70), (-6.0, -3.0)),
    genre("psytrance", (0.85, 0.98), (138.0, 148.0), (0.25, 0.55), (0.60, 0.80), (-6.0, -3.0)),
    genre("goa trance", (0.82, 0.97), (135.0, 150.0), (0.30, 0.60), (0.60, 0.80), (-7.0, -4.0)),
    genre("vocal trance", (0.75, 0.93), (130.0, 140.0), (0.35, 0.65), (0.50, 0.70), (-6.0, -3.0)),
    genre("drum and bass", (0.82, 0.98), (165.0, 178.0), (0.30, 0.60), (0.50, 0.70), (-6.0, -3.0)),
    genre("liquid funk", (0.65, 0.85), (168.0, 176.0), (0.40, 0.70), (0.50, 0.70), (-8.0, -5.0)),
    genre("neurofunk", (0.88, 0.99), (170.0, 178.0), (0.10, 0.35), (0.45, 0.65), (-5.0, -2.0)),
    genre("jungle", (0.80, 0.96), (160.0, 175.0), (0.30, 0.60), (0.50, 0.70), (-8.0, -5.0)),
    genre("jump up", (0.88, 0.99), (170.0, 176.0), (0.35, 0.65), (0.50, 0.70), (-5.0, -2.0)),
    genre("breakbeat", (0.75, 0.93), (125.0, 140.0), (0.35, 0.65), (0.60, 0.80), (-7.0, -4.0)),
    genre("big beat", (0.80, 0.95), (120.0, 140.0), (0.45, 0.75), (0.60, 0.80), (-6.0, -4.0)),
    genre("breakcore", (0.90, 1.00), (160.0, 200.0), (0.15, 0.45), (0.35, 0.55), (-6.0, -3.0)),
    genre("dubstep", (0.80, 0.97), (138.0, 142.0), (0.15, 0.45), (0.55, 0.75), (-5.0, -2.0)),
    genre("brostep", (0.88, 0.99), (140.0, 150.0), (0.15, 0.40), (0.50, 0.70), (-4.0, -2.0)),
    genre("riddim", (0.85, 0.98), (140.0, 150.0), (0.10, 0.35), (0.55, 0.75), (-4.0, -2.0)),
    genre("future bass", (0.65, 0.88), (130.0, 160.0), (0.45, 0.75), (0.55, 0.75), (-6.0, -3.0)),
    genre("trap edm", (0.80, 0.95), (135.0, 150.0), (0.30, 0.60), (0.60, 0.80), (-5.0, -2.0)),
    genre("hardstyle", (0.90, 0.99), (145.0, 160.0), (0.25, 0.55), (0.45, 0.65), (-5.0, -2.0)),
    genre("happy hardcore", (0.90, 0.99), (160.0, 180.0), (0.65, 0.92), (0.50, 0.70), (-5.0, -2.0)),
    genre("gabber", (0.95, 1.00), (160.0, 200.0), (0.10, 0.35), (0.40, 0.60), (-5.0, -2.0)),
    genre("big room", (0.85, 0.98), (126.0, 130.0), (0.40, 0.70), (0.55, 0.75), (-4.0, -2.0)),
    genre("moombahton", (0.75, 0.92), (108.0, 112.0), (0.50, 0.80), (0.72, 0.90), (-6.0, -3.0)),
    genre("electroclash", (0.70, 0.90), (120.0, 135.0), (0.35, 0.65), (0.65, 0.85), (-7.0, -4.0)),
    genre("idm", (0.40, 0.75), (90.0, 160.0), (0.20, 0.50), (0.35, 0.60), (-12.0, -7.0)),
    genre("glitch", (0.55, 0.82), (90.0, 160.0), (0.20, 0.50), (0.40, 0.65), (-10.0, -6.0)),
    genre("downtempo", (0.25, 0.55), (70.0, 105.0), (0.25, 0.55), (0.50, 0.72), (-12.0, -8.0)),
    genre("trip hop", (0.30, 0.60), (70.0, 100.0), (0.15, 0.45), (0.55, 0.75), (-11.0, -7.0)),
    genre("chillwave", (0.35, 0.60), (80.0, 120.0), (0.35, 0.65), (0.50, 0.72), (-11.0, -7.0)),
    genre("chillout", (0.20, 0.50), (70.0, 110.0), (0.30, 0.60), (0.45, 0.68), (-13.0, -8.0)),
    genre("chillstep", (0.40, 0.65), (70.0, 140.0), (0.25, 0.55), (0.45, 0.65), (-10.0, -6.0)),
    genre("lounge", (0.25, 0.50), (80.0, 115.0), (0.45, 0.75), (0.55, 0.75), (-13.0, -8.0)),
    genre("nu jazz", (0.40, 0.70), (90.0, 125.0), (0.40, 0.70), (0.60, 0.80), (-11.0, -7.0)),
    genre("ambient", (0.05, 0.30), (60.0, 100.0), (0.10, 0.40), (0.15, 0.40), (-22.0, -12.0)),
    genre("dark ambient", (0.05, 0.30), (50.0, 90.0), (0.02, 0.15), (0.10, 0.30), (-24.0, -14.0)),
    genre("drone", (0.05, 0.35), (50.0, 80.0), (0.05, 0.25), (0.05, 0.25), (-22.0, -12.0)),
    genre("new age", (0.05, 0.30), (60.0, 95.0), (0.20, 0.50), (0.20, 0.45), (-20.0, -12.0)),
    genre("space ambient", (0.05, 0.25), (50.0, 90.0), (0.10, 0.35), (0.10, 0.30), (-24.0, -14.0)),
    genre("vaporwave", (0.30, 0.55), (70.0, 110.0), (0.30, 0.60), (0.50, 0.72), (-12.0, -8.0)),
    genre("synthwave", (0.60, 0.85), (80.0, 120.0), (0.35, 0.65), (0.50, 0.72), (-9.0, -5.0)),
    genre("darksynth", (0.75, 0.95), (90.0, 130.0), (0.10, 0.35), (0.50, 0.70), (-7.0, -4.0)),
    genre("retrowave", (0.60, 0.85), (80.0, 120.0), (0.40, 0.70), (0.50, 0.72), (-9.0, -5.0)),
    genre("industrial", (0.75, 0.95), (100.0, 140.0), (0.05, 0.30), (0.45, 0.65), (-8.0, -4.0)),
    genre("ebm", (0.75, 0.93), (115.0, 135.0), (0.10, 0.35), (0.60, 0.80), (-8.0, -5.0)),
    genre("witch house", (0.40, 0.70), (60.0, 80.0), (0.02, 0.20), (0.40, 0.60), (-10.0, -6.0)),
    genre("electronica", (0.45, 0.78), (95.0, 135.0), (0.30, 0.60), (0.50, 0.72), (-10.0, -6.0)),
    genre("footwork", (0.75, 0.93), (155.0, 165.0), (0.30, 0.60), (0.60, 0.80), (-8.0, -5.0)),
    genre("amapiano", (0.50, 0.75), (110.0, 116.0), (0.45, 0.75), (0.75, 0.92), (-9.0, -6.0)),
    genre("gqom", (0.70, 0.90), (120.0, 128.0), (0.15, 0.40), (0.70, 0.88), (-7.0, -4.0)),
    genre("baile funk", (0.75, 0.93), (125.0, 135.0), (0.50, 0.80), (0.75, 0.92), (-6.0, -3.0)),
    genre("hyperdance", (0.88, 0.99), (140.0, 170.0), (0.50, 0.80), (0.60, 0.80), (-4.0, -2.0)),
    // Jazz and blues
    genre("jazz", (0.25, 0.55), (80.0, 160.0), (0.35, 0.70), (0.45, 0.70), (-14.0, -9.0)),
    genre("smooth jazz", (0.30, 0.55), (80.0, 110.0), (0.45, 0.75), (0.55, 0.75), (-12.0, -8.0)),
    genre("bebop", (0.45, 0.75), (160.0, 260.0), (0.45, 0.75), (0.45, 0.65), (-14.0, -9.0)),
    genre("hard bop", (0.50, 0.78), (120.0, 220.0), (0.45, 0.75), (0.45, 0.65), (-13.0, -9.0)),
    genre("cool jazz", (0.20, 0.45), (80.0, 150.0), (0.35, 0.65), (0.45, 0.65), (-16.0, -10.0)),
    genre("modal jazz", (0.25, 0.55), (80.0, 160.0), (0.30, 0.60), (0.40, 0.60), (-15.0, -10.0)),
    genre("free jazz", (0.50, 0.85), (60.0, 200.0), (0.15, 0.45), (0.20, 0.40), (-14.0, -8.0)),
    genre("jazz fusion", (0.55, 0.82), (90.0, 160.0), (0.40, 0.70), (0.45, 0.65), (-11.0, -7.0)),
    genre("acid jazz", (0.55, 0.80), (95.0, 120.0), (0.50, 0.80), (0.65, 0.85), (-10.0, -7.0)),
    genre("vocal jazz", (0.20, 0.45), (70.0, 140.0), (0.35, 0.65), (0.45, 0.65), (-14.0, -9.0)),
    genre("swing", (0.50, 0.78), (120.0, 200.0), (0.60, 0.90), (0.60, 0.80), (-13.0, -9.0)),
    genre("big band", (0.50, 0.80), (110.0, 200.0), (0.55, 0.85), (0.55, 0.75), (-12.0, -8.0)),
    genre("latin jazz", (0.50, 0.78), (100.0, 180.0), (0.55, 0.85), (0.60, 0.80), (-12.0, -8.0)),
    genre("bossa nova", (0.20, 0.45), (110.0, 145.0), (0.45, 0.75), (0.60, 0.78), (-16.0, -10.0)),
    genre("contemporary jazz", (0.30, 0.60), (80.0, 140.0), (0.35, 0.65), (0.45, 0.65), (-13.0, -9.0)),
    genre("jazz piano", (0.10, 0.35), (70.0, 140.0), (0.30, 0.60), (0.40, 0.60), (-18.0, -11.0)),
    genre("blues", (0.35, 0.65), (70.0, 130.0), (0.35, 0.65), (0.45, 0.65), (-11.0, -7.0)),
    genre("delta blues", (0.25, 0.50), (70.0, 120.0), (0.35, 0.65), (0.45, 0.65), (-15.0, -10.0)),
    genre("chicago blues", (0.45, 0.70), (80.0, 130.0), (0.45, 0.75), (0.50, 0.70), (-11.0, -7.0)),
    genre("electric blues", (0.50, 0.78), (80.0, 130.0), (0.40, 0.70), (0.45, 0.65), (-10.0, -7.0)),
    genre("soul blues", (0.40, 0.65), (70.0, 115.0), (0.45, 0.75), (0.50, 0.70), (-11.0, -7.0)),
    // Classical and soundtrack
    genre("classical", (0.05, 0.40), (60.0, 140.0), (0.10, 0.45), (0.15, 0.40), (-25.0, -12.0)),
    genre("baroque", (0.20, 0.50), (70.0, 140.0), (0.30, 0.65), (0.25, 0.45), (-22.0, -12.0)),
    genre("romantic era", (0.10, 0.45), (60.0, 130.0), (0.10, 0.45), (0.15, 0.35), (-25.0, -12.0)),
    genre("opera", (0.20, 0.55), (60.0, 130.0), (0.15, 0.50), (0.15, 0.35), (-20.0, -10.0)),
    genre("orchestral", (0.15, 0.55), (60.0, 130.0), (0.10, 0.45), (0.15, 0.35), (-22.0, -10.0)),
    genre("chamber music", (0.05, 0.35), (60.0, 130.0), (0.15, 0.50), (0.20, 0.40), (-25.0, -14.0)),
    genre("contemporary classical", (0.05, 0.35), (50.0, 120.0), (0.05, 0.35), (0.10, 0.35), (-26.0, -14.0)),
    genre("minimalism", (0.10, 0.40), (60.0, 140.0), (0.15, 0.45), (0.25, 0.45), (-22.0, -12.0)),
    genre("neoclassical", (0.05, 0.35), (60.0, 120.0), (0.05, 0.35), (0.15, 0.40), (-24.0, -13.0)),
    genre("piano", (0.02, 0.30), (60.0, 120.0), (0.10, 0.45), (0.25, 0.50), (-26.0, -14.0)),
    genre("choral", (0.05, 0.35), (55.0, 110.0), (0.15, 0.45), (0.10, 0.30), (-24.0, -13.0)),
    genre("soundtrack", (0.20, 0.60), (60.0, 140.0), (0.10, 0.45), (0.20, 0.45), (-18.0, -9.0)),
    genre("film score", (0.20, 0.60), (60.0, 140.0), (0.10, 0.45), (0.15, 0.40), (-20.0, -10.0)),
    genre("video game music", (0.40, 0.80), (90.0, 160.0), (0.30, 0.70), (0.40, 0.65), (-12.0, -6.0)),
    genre("epic", (0.65, 0.92), (80.0, 140.0), (0.15, 0.45), (0.20, 0.40), (-10.0, -5.0)),
    genre("show tunes", (0.40, 0.75), (80.0, 150.0), (0.45, 0.80), (0.40, 0.65), (-12.0, -7.0)),
    genre("broadway", (0.40, 0.75), (80.0, 150.0), (0.45, 0.80), (0.40, 0.65), (-11.0, -7.0)),
    // Folk, country, acoustic
    genre("folk", (0.15, 0.45), (70.0, 130.0), (0.30, 0.65), (0.40, 0.60), (-14.0, -9.0)),
    genre("indie folk", (0.20, 0.50), (75.0, 130.0), (0.25, 0.60), (0.40, 0.60), (-13.0, -8.0)),
    genre("contemporary folk", (0.20, 0.50), (75.0, 130.0), (0.30, 0.65), (0.40, 0.60), (-12.0, -8.0)),
    genre("traditional folk", (0.15, 0.45), (70.0, 130.0), (0.30, 0.65), (0.35, 0.55), (-16.0, -10.0)),
    genre("freak folk", (0.25, 0.55), (70.0, 130.0), (0.25, 0.55), (0.35, 0.55), (-13.0, -8.0)),
    genre("anti-folk", (0.30, 0.60), (80.0, 140.0), (0.30, 0.65), (0.40, 0.60), (-12.0, -8.0)),
    genre("chamber folk", (0.15, 0.40), (70.0, 120.0), (0.20, 0.50), (0.30, 0.50), (-15.0, -10.0)),
    genre("celtic", (0.40, 0.75), (90.0, 160.0), (0.45, 0.80), (0.40, 0.60), (-12.0, -8.0)),
    genre("americana", (0.35, 0.65), (80.0, 130.0), (0.35, 0.70), (0.45, 0.62), (-11.0, -7.0)),
    genre("bluegrass", (0.45, 0.75), (110.0, 180.0), (0.55, 0.85), (0.50, 0.68), (-12.0, -8.0)),
    genre("country", (0.45, 0.75), (80.0, 140.0), (0.45, 0.80), (0.50, 0.70), (-9.0, -5.0)),
    genre("contemporary country", (0.55, 0.82), (80.0, 140.0), (0.45, 0.80), (0.50, 0.70), (-7.0, -4.0)),
    genre("classic country", (0.35, 0.60), (80.0, 130.0), (0.45, 0.80), (0.50, 0.68), (-12.0, -8.0)),
    genre("outlaw country", (0.45, 0.70), (80.0, 130.0), (0.40, 0.75), (0.50, 0.68), (-11.0, -7.0)),
    genre("alt-country", (0.40, 0.68), (80.0, 130.0), (0.35, 0.65), (0.45, 0.62), (-11.0, -7.0)),
    genre("country pop", (0.55, 0.80), (85.0, 130.0), (0.50, 0.82), (0.55, 0.72), (-7.0, -4.0)),
    genre("bro-country", (0.65, 0.88), (90.0, 130.0), (0.55, 0.85), (0.55, 0.72), (-6.0, -3.0)),
    genre("honky tonk", (0.45, 0.70), (90.0, 150.0), (0.55, 0.85), (0.55, 0.72), (-12.0, -8.0)),
    genre("red dirt", (0.50, 0.75), (90.0, 140.0), (0.45, 0.75), (0.50, 0.68), (-9.0, -6.0)),
    genre("acoustic", (0.10, 0.40), (70.0, 125.0), (0.30, 0.65), (0.40, 0.60), (-15.0, -9.0)),
    genre("acoustic pop", (0.25, 0.55), (75.0, 125.0), (0.40, 0.70), (0.50, 0.68), (-12.0, -8.0)),
    genre("stomp and holler", (0.55, 0.80), (100.0, 140.0), (0.50, 0.80), (0.45, 0.62), (-9.0, -6.0)),
    // Latin
    genre("latin", (0.60, 0.85), (90.0, 130.0), (0.55, 0.88), (0.65, 0.88), (-7.0, -4.0)),
    genre("reggaeton", (0.65, 0.88), (88.0, 100.0), (0.50, 0.82), (0.75, 0.92), (-6.0, -3.0)),
    genre("urbano latino", (0.62, 0.85), (85.0, 105.0), (0.45, 0.78), (0.72, 0.90), (-6.0, -3.0)),
    genre("latin trap", (0.55, 0.80), (75.0, 150.0), (0.25, 0.55), (0.70, 0.88), (-6.0, -3.0)),
    genre("salsa", (0.65, 0.88), (150.0, 200.0), (0.65, 0.92), (0.65, 0.85), (-8.0, -5.0)),
    genre("bachata", (0.50, 0.72), (120.0, 140.0), (0.50, 0.80), (0.70, 0.85), (-8.0, -5.0)),
    genre("merengue", (0.75, 0.92), (140.0, 170.0), (0.70, 0.95), (0.70, 0.88), (-7.0, -4.0)),
    genre("cumbia", (0.60, 0.82), (85.0, 110.0), (0.65, 0.92), (0.72, 0.90), (-8.0, -5.0)),
    genre("regional mexican", (0.50, 0.78), (90.0, 180.0), (0.55, 0.88), (0.55, 0.78), (-8.0, -5.0)),
    genre("corridos tumbados", (0.50, 0.75), (110.0, 150.0), (0.35, 0.65), (0.60, 0.78), (-7.0, -4.0)),
    genre("banda", (0.65, 0.88), (100.0, 180.0), (0.60, 0.90), (0.60, 0.80), (-7.0, -4.0)),
    genre("mariachi", (0.50, 0.78), (90.0, 180.0), (0.55, 0.85), (0.45, 0.65), (-10.0, -6.0)),
    genre("tango", (0.35, 0.65), (110.0, 130.0), (0.25, 0.55), (0.55, 0.72), (-13.0, -8.0)),
    genre("samba", (0.65, 0.88), (90.0, 110.0), (0.70, 0.95), (0.70, 0.88), (-9.0, -6.0)),
    genre("mpb", (0.35, 0.62), (80.0, 130.0), (0.45, 0.78), (0.55, 0.75), (-12.0, -8.0)),
    genre("flamenco", (0.45, 0.78), (90.0, 200.0), (0.35, 0.65), (0.45, 0.65), (-12.0, -7.0)),
    genre("dembow", (0.75, 0.92), (110.0, 130.0), (0.55, 0.85), (0.78, 0.92), (-5.0, -3.0)),
    genre("bolero", (0.20, 0.45), (70.0, 110.0), (0.30, 0.60), (0.50, 0.68), (-13.0, -9.0)),
    // Reggae and caribbean
    genre("reggae", (0.45, 0.70), (70.0, 95.0), (0.55, 0.85), (0.70, 0.88), (-10.0, -6.0)),
    genre("roots reggae", (0.40, 0.65), (65.0, 90.0), (0.50, 0.80), (0.70, 0.88), (-11.0, -7.0)),
    genre("dub", (0.35, 0.60), (65.0, 90.0), (0.35, 0.65), (0.65, 0.85), (-11.0, -7.0)),
    genre("dancehall", (0.65, 0.88), (90.0, 110.0), (0.55, 0.85), (0.78, 0.92), (-6.0, -3.0)),
    genre("ska", (0.70, 0.90), (140.0, 180.0), (0.70, 0.95), (0.65, 0.85), (-9.0, -6.0)),
    genre("rocksteady", (0.45, 0.68), (75.0, 100.0), (0.60, 0.88), (0.70, 0.85), (-11.0, -7.0)),
    genre("soca", (0.80, 0.95), (150.0, 165.0), (0.75, 0.95), (0.75, 0.90), (-6.0, -3.0)),
    genre("calypso", (0.60, 0.82), (100.0, 130.0), (0.75, 0.95), (0.70, 0.88), (-11.0, -7.0)),
    genre("lovers rock", (0.35, 0.58), (70.0, 90.0), (0.50, 0.80), (0.68, 0.85), (-11.0, -7.0)),
    // African and world
    genre("afrobeats", (0.60, 0.85), (95.0, 115.0), (0.60, 0.88), (0.75, 0.92), (-7.0, -4.0)),
    genre("afrobeat", (0.65, 0.88), (100.0, 125.0), (0.60, 0.88), (0.70, 0.88), (-9.0, -6.0)),
    genre("afropop", (0.60, 0.85), (95.0, 120.0), (0.60, 0.90), (0.72, 0.90), (-7.0, -4.0)),
    genre("afro soul", (0.40, 0.65), (85.0, 110.0), (0.45, 0.75), (0.60, 0.80), (-9.0, -6.0)),
    genre("highlife", (0.55, 0.80), (100.0, 130.0), (0.70, 0.95), (0.70, 0.88), (-10.0, -7.0)),
    genre("soukous", (0.65, 0.88), (120.0, 150.0), (0.70, 0.95), (0.72, 0.90), (-9.0, -6.0)),
    genre("afroswing", (0.55, 0.78), (95.0, 110.0), (0.50, 0.80), (0.75, 0.90), (-7.0, -4.0)),
    genre("bongo flava", (0.55, 0.80), (90.0, 115.0), (0.60, 0.88), (0.72, 0.90), (-7.0, -4.0)),
    genre("world", (0.35, 0.70), (80.0, 140.0), (0.40, 0.75), (0.45, 0.70), (-12.0, -7.0)),
    genre("bollywood", (0.55, 0.82), (90.0, 130.0), (0.50, 0.82), (0.60, 0.80), (-8.0, -5.0)),
    genre("bhangra", (0.75, 0.93), (90.0, 110.0), (0.65, 0.92), (0.70, 0.88), (-6.0, -3.0)),
    genre("filmi", (0.50, 0.80), (85.0, 130.0), (0.45, 0.80), (0.55, 0.78), (-9.0, -5.0)),
    genre("qawwali", (0.45, 0.78), (80.0, 140.0), (0.40, 0.70), (0.45, 0.65), (-12.0, -7.0)),
    genre("hindustani classical", (0.10, 0.45), (50.0, 140.0), (0.20, 0.55), (0.25, 0.50), (-20.0, -11.0)),
    genre("carnatic", (0.20, 0.55), (60.0, 150.0), (0.30, 0.60), (0.30, 0.55), (-18.0, -10.0)),
    genre("arabic", (0.45, 0.78), (85.0, 130.0), (0.35, 0.70), (0.55, 0.75), (-10.0, -6.0)),
    genre("turkish pop", (0.55, 0.80), (90.0, 130.0), (0.40, 0.75), (0.55, 0.75), (-8.0, -5.0)),
    genre("fado", (0.15, 0.40), (60.0, 110.0), (0.15, 0.40), (0.35, 0.55), (-15.0, -10.0)),
    genre("chanson", (0.20, 0.50), (70.0, 130.0), (0.30, 0.65), (0.45, 0.65), (-14.0, -9.0)),
    genre("schlager", (0.60, 0.85), (110.0, 140.0), (0.65, 0.92), (0.60, 0.80), (-8.0, -5.0)),
    genre("polka", (0.65, 0.88), (110.0, 160.0), (0.75, 0.95), (0.60, 0.80), (-10.0, -7.0)),
    genre("klezmer", (0.50, 0.80), (90.0, 180.0), (0.45, 0.80), (0.50, 0.70), (-12.0, -8.0)),
    genre("enka", (0.25, 0.50), (70.0, 110.0), (0.25, 0.55), (0.45, 0.62), (-11.0, -7.0)),
    genre("anime", (0.65, 0.92), (120.0, 180.0), (0.45, 0.80), (0.45, 0.65), (-6.0, -3.0)),
    genre("vocaloid", (0.70, 0.92), (130.0, 190.0), (0.45, 0.80), (0.50, 0.70), (-6.0, -3.0)),
    genre("j-rock", (0.75, 0.95), (120.0, 180.0), (0.35, 0.70), (0.40, 0.60), (-5.0, -3.0)),
    genre("visual kei", (0.80, 0.96), (120.0, 190.0), (0.20, 0.50), (0.35, 0.55), (-5.0, -3.0)),
    genre("k-indie", (0.40, 0.70), (85.0, 130.0), (0.35, 0.65), (0.50, 0.70), (-9.0, -6.0)),
    genre("k-r&b", (0.35, 0.62), (70.0, 110.0), (0.30, 0.60), (0.60, 0.78), (-8.0, -5.0)),
    genre("gamelan", (0.20, 0.50), (60.0, 130.0), (0.35, 0.65), (0.35, 0.55), (-18.0, -10.0)),
    genre("throat singing", (0.25, 0.55), (60.0, 110.0), (0.15, 0.40), (0.25, 0.45), (-16.0, -10.0)),
    // Mood and function labels
    genre("lo-fi", (0.20, 0.45), (70.0, 95.0), (0.35, 0.65), (0.55, 0.78), (-14.0, -9.0)),
    genre("chill", (0.20, 0.50), (70.0, 110.0), (0.35, 0.65), (0.50, 0.72), (-12.0, -8.0)),
    genre("sleep", (0.01, 0.15), (50.0, 80.0), (0.05, 0.30), (0.05, 0.25), (-30.0, -18.0)),
    genre("meditation", (0.02, 0.20), (50.0, 80.0), (0.10, 0.40), (0.05, 0.25), (-28.0, -16.0)),
    genre("study", (0.10, 0.40), (70.0, 100.0), (0.30, 0.60), (0.40, 0.65), (-18.0, -10.0)),
    genre("workout", (0.80, 0.97), (120.0, 160.0), (0.50, 0.80), (0.65, 0.85), (-5.0, -2.0)),
    genre("party", (0.75, 0.95), (115.0, 132.0), (0.60, 0.90), (0.72, 0.92), (-5.0, -3.0)),
    genre("children's music", (0.45, 0.75), (90.0, 140.0), (0.70, 0.95), (0.55, 0.78), (-10.0, -6.0)),
    genre("christmas", (0.35, 0.65), (80.0, 140.0), (0.55, 0.88), (0.50, 0.70), (-11.0, -7.0)),
    genre("worship", (0.40, 0.72), (70.0, 130.0), (0.30, 0.65), (0.40, 0.60), (-9.0, -6.0)),
    genre("christian rock", (0.70, 0.90), (100.0, 145.0), (0.40, 0.70), (0.40, 0.58), (-6.0, -4.0)),
    genre("comedy", (0.40, 0.75), (80.0, 140.0), (0.50, 0.85), (0.45, 0.70), (-12.0, -7.0)),
    genre("spoken word", (0.15, 0.40), (70.0, 120.0), (0.30, 0.60), (0.45, 0.65), (-16.0, -10.0)),
    genre("experimental", (0.30, 0.75), (60.0, 160.0), (0.10, 0.45), (0.20, 0.50), (-16.0, -7.0)),
    genre("noise", (0.80, 1.00), (60.0, 180.0), (0.02, 0.20), (0.10, 0.30), (-10.0, -3.0)),
    genre("avant-garde", (0.25, 0.70), (60.0, 160.0), (0.10, 0.40), (0.15, 0.40), (-18.0, -8.0)),
    genre("singer", (0.30, 0.60), (75.0, 125.0), (0.30, 0.65), (0.45, 0.65), (-10.0, -6.0)),
    genre("easy listening", (0.20, 0.45), (70.0, 115.0), (0.45, 0.75), (0.45, 0.65), (-14.0, -9.0)),
    genre("exotica", (0.30, 0.55), (80.0, 130.0), (0.50, 0.80), (0.50, 0.70), (-15.0, -10.0)),
    genre("crooner", (0.20, 0.45), (70.0, 130.0), (0.40, 0.70), (0.45, 0.62), (-14.0, -9.0)),
    genre("cabaret", (0.35, 0.65), (80.0, 140.0), (0.40, 0.75), (0.45, 0.65), (-13.0, -8.0)),
];

lazy_static::lazy_static! {
    /// Table key → table position, for the exact-match fast path.
    static ref GENRE_INDEX: HashMap<&'static str, usize> = GENRE_TABLE
        .iter()
        .enumerate()
        .map(|(position, (name, _))| (*name, position))
        .collect();
}

/// Estimate feature ranges for a genre label.
#[must_use]
pub fn lookup(genre: &str) -> GenreFeatureEstimate {
    resolve(genre).map_or(DEFAULT_ESTIMATE, |(_, estimate)| estimate)
}

/// Table key that [`lookup`] would use for `genre`, if any.
#[must_use]
pub fn matched_key(genre: &str) -> Option<&'static str> {
    resolve(genre).map(|(name, _)| name)
}

fn resolve(genre: &str) -> Option<(&'static str, GenreFeatureEstimate)> {
    let query = genre.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    if let Some(&position) = GENRE_INDEX.get(query.as_str()) {
        let (name, estimate) = GENRE_TABLE[position];
        return Some((name, estimate));
    }

    let mut best: Option<(&'static str, GenreFeatureEstimate)> = None;
    for &(name, estimate) in GENRE_TABLE {
        if !(query.contains(name) || name.contains(query.as_str())) {
            continue;
        }
        // Strictly longer only: first declared key wins a tie.
        if best.map_or(true, |(current, _)| name.len() > current.len()) {
            best = Some((name, estimate));
        }
    }

    if let Some((name, _)) = best {
        log::trace!("Genre '{genre}' resolved by substring to '{name}'");
    }
    best
}

/// Number of genre labels in the knowledge base.
#[must_use]
pub fn genre_count() -> usize {
    GENRE_TABLE.len()
}
