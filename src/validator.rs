//! # Input Validation
//!
//! Hard checks run before any sequencing, in order:
//! 1. the track list is not empty
//! 2. the resolved duration lies within the allowed window
//! 3. excluded tracks are removed
//! 4. tracks are stable-sorted by skip penalty, least skipped first
//! 5. enough tracks match the mood
//!
//! Skip penalties only reorder; they never remove a track.

use crate::arc::JourneyDuration;
use crate::config::GenerationSettings;
use crate::error::{JourneyError, Result};
use crate::mood::{self, Mood};
use crate::sequencer::SkipPenalties;
use crate::track::TrackWithFeatures;
use log::warn;
use serde::Deserialize;
use std::collections::HashSet;

/// Everything a journey is generated from.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyInput {
    pub tracks: Vec<TrackWithFeatures>,
    pub mood: Mood,
    pub duration: JourneyDuration,
    #[serde(default)]
    pub excluded_ids: HashSet<String>,
    #[serde(default)]
    pub skip_penalties: SkipPenalties,
    /// Pre-scored tracks from outside the library.
    #[serde(default)]
    pub discovery_tracks: Vec<TrackWithFeatures>,
    #[serde(default)]
    pub forgotten_gems: Vec<TrackWithFeatures>,
}

impl JourneyInput {
    #[must_use]
    pub fn new(tracks: Vec<TrackWithFeatures>, mood: Mood, duration: JourneyDuration) -> Self {
        Self {
            tracks,
            mood,
            duration,
            excluded_ids: HashSet::new(),
            skip_penalties: SkipPenalties::new(),
            discovery_tracks: Vec::new(),
            forgotten_gems: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    /// Mood matches, best first.
    pub matching_tracks: Vec<TrackWithFeatures>,
    pub warnings: Vec<String>,
}

/// Validate with the default limits.
///
/// # Errors
///
/// See [`validate_with`].
pub fn validate(input: &JourneyInput) -> Result<ValidationOutcome> {
    validate_with(input, &GenerationSettings::default())
}

/// Validate `input` against `settings`.
///
/// # Errors
///
/// - [`JourneyError::NoTracks`] for an empty track list
/// - [`JourneyError::InvalidDuration`] when the resolved duration is outside the window
/// - [`JourneyError::InsufficientSongs`] when fewer than `min_songs` tracks match the mood
pub fn validate_with(input: &JourneyInput, settings: &GenerationSettings) -> Result<ValidationOutcome> {
    if input.tracks.is_empty() {
        return Err(JourneyError::NoTracks);
    }

    let minutes = input.duration.resolve(settings.open_ended_minutes);
    if !(settings.min_duration_minutes..=settings.max_duration_minutes).contains(&minutes) {
        return Err(JourneyError::InvalidDuration { minutes });
    }

    let mut warnings = Vec::new();
    let mut available: Vec<TrackWithFeatures> = input
        .tracks
        .iter()
        .filter(|t| !input.excluded_ids.contains(t.id()))
        .cloned()
        .collect();

    let removed = input.tracks.len() - available.len();
    if removed > 0 {
        warnings.push(format!("{removed} excluded tracks were left out"));
    }

    available.sort_by_key(|t| input.skip_penalties.get(t.id()).copied().unwrap_or(0));

    let matching_tracks = mood::filter_tracks_by_mood(&available, input.mood, settings.mood_threshold);
    let found = matching_tracks.len();
    if found < settings.min_songs {
        return Err(JourneyError::InsufficientSongs { mood: input.mood, found, minimum: settings.min_songs });
    }
    if found < settings.comfortable_songs {
        warnings.push(format!(
            "Only {found} tracks match a {} mood; the journey may feel repetitive",
            input.mood
        ));
    }

    for warning in &warnings {
        warn!("{warning}");
    }
    Ok(ValidationOutcome { matching_tracks, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::fixtures::with_features;

    fn chill_tracks(n: usize) -> Vec<TrackWithFeatures> {
        (0..n).map(|i| with_features(&format!("c{i}"), 0.3, 0.5, 90.0)).collect()
    }

    fn loud_tracks(n: usize) -> Vec<TrackWithFeatures> {
        (0..n).map(|i| with_features(&format!("l{i}"), 0.98, 0.95, 175.0)).collect()
    }

    #[test]
    fn test_empty_library() {
        let input = JourneyInput::new(Vec::new(), Mood::Chill, 60.into());
        assert_eq!(validate(&input).unwrap_err(), JourneyError::NoTracks);
    }

    #[test]
    fn test_duration_window() {
        let input = JourneyInput::new(chill_tracks(30), Mood::Chill, 10.into());
        assert_eq!(validate(&input).unwrap_err(), JourneyError::InvalidDuration { minutes: 10 });

        let input = JourneyInput::new(chill_tracks(30), Mood::Chill, 241.into());
        assert!(matches!(validate(&input), Err(JourneyError::InvalidDuration { minutes: 241 })));

        for ok in [15, 240] {
            let input = JourneyInput::new(chill_tracks(30), Mood::Chill, ok.into());
            assert!(validate(&input).is_ok(), "{ok} minutes is allowed");
        }
        let input = JourneyInput::new(chill_tracks(30), Mood::Chill, JourneyDuration::OpenEnded);
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_insufficient_matches() {
        let mut tracks = chill_tracks(5);
        tracks.extend(loud_tracks(20));
        let input = JourneyInput::new(tracks, Mood::Chill, 60.into());

        assert_eq!(
            validate(&input).unwrap_err(),
            JourneyError::InsufficientSongs { mood: Mood::Chill, found: 5, minimum: 10 }
        );
    }

    #[test]
    fn test_exclusions_remove_and_warn() {
        let mut input = JourneyInput::new(chill_tracks(25), Mood::Chill, 60.into());
        input.excluded_ids = ["c0".to_string(), "c1".to_string()].into_iter().collect();

        let outcome = validate(&input).unwrap();
        assert_eq!(outcome.matching_tracks.len(), 23);
        assert!(outcome.matching_tracks.iter().all(|t| t.id() != "c0" && t.id() != "c1"));
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn test_exclusions_can_cause_insufficiency() {
        let mut input = JourneyInput::new(chill_tracks(12), Mood::Chill, 60.into());
        input.excluded_ids = (0..5).map(|i| format!("c{i}")).collect();
        assert!(matches!(validate(&input), Err(JourneyError::InsufficientSongs { found: 7, .. })));
    }

    #[test]
    fn test_small_match_set_warns() {
        let input = JourneyInput::new(chill_tracks(12), Mood::Chill, 60.into());
        let outcome = validate(&input).unwrap();
        assert_eq!(outcome.matching_tracks.len(), 12);
        assert!(outcome.warnings.iter().any(|w| w.contains("12 tracks")));
    }

    #[test]
    fn test_skip_penalties_reorder_but_keep() {
        let mut input = JourneyInput::new(chill_tracks(20), Mood::Chill, 60.into());
        input.skip_penalties.insert("c0".to_string(), 9);

        let outcome = validate(&input).unwrap();
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.matching_tracks.len(), 20);
        assert_eq!(outcome.matching_tracks.last().unwrap().id(), "c0", "equal scores keep penalty order");
        assert_eq!(outcome.matching_tracks[0].id(), "c1");
    }
}
