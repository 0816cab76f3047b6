//! # Journey Generation
//!
//! Orchestrates validation, template selection, and per-phase sequencing into
//! a [`Journey`]. Generation is synchronous over data the caller has already
//! fetched; it performs no I/O and holds no state between calls.
//!
//! ```
//! use moodjourney::generator::JourneyGenerator;
//! use moodjourney::validator::JourneyInput;
//! use moodjourney::mood::Mood;
//!
//! let input = JourneyInput::new(Vec::new(), Mood::Chill, 45.into());
//! assert!(JourneyGenerator::default().generate(&input).is_err());
//! ```

use crate::arc::{self, Phase};
use crate::config::GenerationSettings;
use crate::error::Result;
use crate::mood::Mood;
use crate::sequencer;
use crate::track::TrackWithFeatures;
use crate::transition::score_transition;
use crate::validator::{self, JourneyInput};
use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A contiguous slice of a journey's tracks, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyPhase {
    pub phase: Phase,
    pub start_index: usize,
    pub end_index: usize,
}

impl JourneyPhase {
    #[must_use]
    pub const fn track_count(&self) -> usize {
        self.end_index - self.start_index + 1
    }
}

/// An ordered, phase-structured playlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    pub id: String,
    pub mood: Mood,
    pub template: String,
    pub created_at: DateTime<Utc>,
    /// Summed track length in minutes.
    pub actual_duration: f64,
    pub tracks: Vec<TrackWithFeatures>,
    pub phases: Vec<JourneyPhase>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl Journey {
    /// Tracks of the `index`-th phase.
    #[must_use]
    pub fn phase_tracks(&self, index: usize) -> Option<&[TrackWithFeatures]> {
        let phase = self.phases.get(index)?;
        self.tracks.get(phase.start_index..=phase.end_index)
    }

    /// Mean transition score over consecutive tracks; `None` below two tracks.
    #[must_use]
    pub fn average_transition_score(&self) -> Option<f64> {
        if self.tracks.len() < 2 {
            return None;
        }
        let total: f64 = self
            .tracks
            .windows(2)
            .map(|pair| score_transition(&pair[0].features, &pair[1].features))
            .sum();
        Some(total / (self.tracks.len() - 1) as f64)
    }
}

#[derive(Debug, Clone, Default)]
pub struct JourneyGenerator {
    settings: GenerationSettings,
}

impl JourneyGenerator {
    #[must_use]
    pub fn new(settings: GenerationSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Songs to aim for over `minutes`, before capping by availability.
    #[must_use]
    pub fn target_song_count(&self, minutes: u32) -> usize {
        let estimated = (f64::from(minutes) / self.settings.average_song_minutes).round() as usize;
        estimated.max(self.settings.min_songs)
    }

    /// Build a journey from `input`.
    ///
    /// # Errors
    ///
    /// Returns the validator's [`crate::error::JourneyError`]; no partial
    /// journey is produced.
    pub fn generate(&self, input: &JourneyInput) -> Result<Journey> {
        let outcome = validator::validate_with(input, &self.settings)?;
        let pool = self.candidate_pool(input, outcome.matching_tracks);

        let template = arc::select_template(input.duration);
        let minutes = input.duration.resolve(self.settings.open_ended_minutes);
        let target = self.target_song_count(minutes).min(pool.len());
        let counts = arc::calculate_phase_song_counts(template, target);
        debug!(
            "Template '{}' for {minutes} minutes: {target} songs split {counts:?}",
            template.name
        );

        let mut remaining = pool;
        let mut tracks: Vec<TrackWithFeatures> = Vec::with_capacity(target);
        let mut phases = Vec::with_capacity(counts.len());

        for (definition, count) in template.phases.iter().zip(counts) {
            let sequenced = sequencer::sequence_phase(&remaining, definition, count, &input.skip_penalties);
            if sequenced.is_empty() {
                debug!("No tracks left for {} phase, skipping it", definition.phase);
                continue;
            }

            let used: HashSet<&str> = sequenced.iter().map(TrackWithFeatures::id).collect();
            remaining.retain(|t| !used.contains(t.id()));

            let start_index = tracks.len();
            tracks.extend(sequenced);
            phases.push(JourneyPhase { phase: definition.phase, start_index, end_index: tracks.len() - 1 });
        }

        let actual_duration = tracks.iter().map(|t| t.track.duration_ms).sum::<u64>() as f64 / 60_000.0;
        let journey = Journey {
            id: new_journey_id(),
            mood: input.mood,
            template: template.name.to_string(),
            created_at: Utc::now(),
            actual_duration,
            tracks,
            phases,
            warnings: outcome.warnings,
        };

        info!(
            "Generated {} journey {} with {} tracks over {} phases ({:.1} min)",
            journey.mood,
            journey.id,
            journey.tracks.len(),
            journey.phases.len(),
            journey.actual_duration
        );
        Ok(journey)
    }

    /// Mood matches followed by discovery tracks and forgotten gems, deduplicated
    /// by id with exclusions applied. A duplicate keeps the first copy's
    /// position and features but adds the later copy's discovery/gem flags.
    fn candidate_pool(&self, input: &JourneyInput, matching: Vec<TrackWithFeatures>) -> Vec<TrackWithFeatures> {
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(matching.len());
        let mut pool: Vec<TrackWithFeatures> = Vec::with_capacity(matching.len());
        let extras = input.discovery_tracks.iter().chain(&input.forgotten_gems).cloned();

        for candidate in matching.into_iter().chain(extras) {
            if input.excluded_ids.contains(candidate.id()) {
                continue;
            }
            match positions.get(candidate.id()) {
                Some(&index) => {
                    let kept = &mut pool[index].track;
                    kept.is_discovery |= candidate.track.is_discovery;
                    kept.is_forgotten_gem |= candidate.track.is_forgotten_gem;
                }
                None => {
                    positions.insert(candidate.id().to_string(), pool.len());
                    pool.push(candidate);
                }
            }
        }

        let extra_count = pool.iter().filter(|t| t.track.is_discovery || t.track.is_forgotten_gem).count();
        debug!("Candidate pool: {} tracks ({extra_count} discovery or gems)", pool.len());
        pool
    }
}

fn new_journey_id() -> String {
    let suffix: u32 = rand::thread_rng().gen();
    format!("journey-{}-{suffix:08x}", Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arc::JourneyDuration;
    use crate::error::JourneyError;
    use crate::config::DiscoverySettings;
    use crate::library::LibraryFile;
    use crate::track::fixtures::with_features;

    fn library(n: usize) -> Vec<TrackWithFeatures> {
        (0..n)
            .map(|i| {
                let step = i as f64 / n as f64;
                with_features(&format!("t{i}"), 0.05 + 0.4 * step, 0.35 + 0.3 * step, 70.0 + 30.0 * step)
            })
            .collect()
    }

    fn assert_partition(journey: &Journey) {
        let mut expected_start = 0;
        for phase in &journey.phases {
            assert_eq!(phase.start_index, expected_start);
            assert!(phase.end_index >= phase.start_index);
            expected_start = phase.end_index + 1;
        }
        assert_eq!(expected_start, journey.tracks.len());
        let covered: usize = journey.phases.iter().map(JourneyPhase::track_count).sum();
        assert_eq!(covered, journey.tracks.len());
    }

    #[test]
    fn test_target_song_count() {
        let generator = JourneyGenerator::default();
        assert_eq!(generator.target_song_count(15), 10, "minimum applies");
        assert_eq!(generator.target_song_count(60), 17);
        assert_eq!(generator.target_song_count(180), 51);
    }

    #[test]
    fn test_generate_partitions_and_never_repeats() {
        for duration in [JourneyDuration::Minutes(20), 60.into(), 150.into(), JourneyDuration::OpenEnded] {
            let input = JourneyInput::new(library(80), Mood::Chill, duration);
            let journey = JourneyGenerator::default().generate(&input).unwrap();

            assert_partition(&journey);
            let ids: HashSet<&str> = journey.tracks.iter().map(|t| t.id()).collect();
            assert_eq!(ids.len(), journey.tracks.len(), "no track reused");
        }
    }

    #[test]
    fn test_generate_sizes_to_duration() {
        let input = JourneyInput::new(library(80), Mood::Chill, 60.into());
        let journey = JourneyGenerator::default().generate(&input).unwrap();

        assert_eq!(journey.template, "slow-build");
        assert_eq!(journey.tracks.len(), 17);
        assert_eq!(journey.phases.len(), 4);
        assert!((journey.actual_duration - 17.0 * 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_generate_caps_at_available_tracks() {
        let input = JourneyInput::new(library(12), Mood::Chill, 120.into());
        let journey = JourneyGenerator::default().generate(&input).unwrap();

        assert!(journey.tracks.len() <= 12);
        assert_partition(&journey);
        assert!(!journey.warnings.is_empty(), "12 matches is a warning");
    }

    #[test]
    fn test_discovery_and_gems_join_the_pool() {
        let mut input = JourneyInput::new(library(10), Mood::Chill, 60.into());
        let mut discovery = with_features("d0", 0.3, 0.5, 90.0);
        discovery.track.is_discovery = true;
        let mut gem = with_features("g0", 0.25, 0.5, 85.0);
        gem.track.is_forgotten_gem = true;
        input.discovery_tracks = vec![discovery, input.tracks[0].clone()];
        input.forgotten_gems = vec![gem];

        let journey = JourneyGenerator::default().generate(&input).unwrap();
        let ids: Vec<&str> = journey.tracks.iter().map(|t| t.id()).collect();
        assert_eq!(journey.tracks.len(), 12, "duplicate discovery entry is dropped");
        assert!(ids.contains(&"d0") && ids.contains(&"g0"));
    }

    #[test]
    fn test_gathered_gems_keep_their_flag() {
        let tracks = library(20);
        let catalog = LibraryFile {
            tracks: tracks.iter().map(|t| t.track.clone()).collect(),
            features: tracks.iter().map(|t| t.features.clone()).collect(),
            recently_played: Some((10..20).map(|i| format!("t{i}")).collect()),
            ..LibraryFile::default()
        };
        let input = catalog.journey_input(Mood::Chill, 75.into(), Some(&DiscoverySettings::default()));
        assert_eq!(input.forgotten_gems.len(), 10);

        let journey = JourneyGenerator::default().generate(&input).unwrap();
        assert_eq!(journey.tracks.len(), 20, "the whole library fits");
        let flagged: Vec<&str> = journey
            .tracks
            .iter()
            .filter(|t| t.track.is_forgotten_gem)
            .map(TrackWithFeatures::id)
            .collect();
        assert_eq!(flagged.len(), 10, "gems already in the mood matches stay flagged: {flagged:?}");
        assert!(journey.tracks.iter().filter(|t| t.id() == "t15").all(|t| !t.track.is_forgotten_gem));
    }

    #[test]
    fn test_generate_propagates_validation_errors() {
        let input = JourneyInput::new(library(30), Mood::Chill, 10.into());
        assert!(matches!(
            JourneyGenerator::default().generate(&input),
            Err(JourneyError::InvalidDuration { minutes: 10 })
        ));
    }

    #[test]
    fn test_journey_helpers_and_json() {
        let input = JourneyInput::new(library(40), Mood::Chill, 45.into());
        let journey = JourneyGenerator::default().generate(&input).unwrap();

        let first = journey.phase_tracks(0).unwrap();
        assert_eq!(first.len(), journey.phases[0].track_count());
        assert!(journey.phase_tracks(journey.phases.len()).is_none());

        let average = journey.average_transition_score().unwrap();
        assert!((0.0..=1.0).contains(&average));

        let json = serde_json::to_string(&journey).unwrap();
        assert!(json.contains("\"startIndex\""));
        let parsed: Journey = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.phases, journey.phases);
    }
}
