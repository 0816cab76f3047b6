//! # Integration Tests for moodjourney
//!
//! End-to-end checks through the public API (estimate, generate, crossfade)
//! and the `moodjourney` binary.

use anyhow::Result;
use moodjourney::arc::{self, JourneyDuration};
use moodjourney::camelot::{camelot_distance, CamelotCode, CamelotLetter};
use moodjourney::config::{CrossfadeSettings, GenerationSettings};
use moodjourney::crossfade::{fade_duration, CrossfadeEngine, CrossfadeState, PlaybackBackend, PlaybackState};
use moodjourney::error::JourneyError;
use moodjourney::features;
use moodjourney::generator::{Journey, JourneyGenerator};
use moodjourney::mood::{self, Mood};
use moodjourney::track::{AudioFeatures, Track, TrackWithFeatures};
use moodjourney::transition::score_transition;
use moodjourney::validator::{self, JourneyInput};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;
use tempfile::TempDir;

const GENRES: [&str; 5] = ["ambient", "deep house", "techno", "indie folk", "death metal"];

fn track(id: &str, artist_id: &str, duration_ms: u64, popularity: Option<u8>) -> Track {
    Track {
        id: id.to_string(),
        title: format!("Song {id}"),
        artist: format!("Artist {artist_id}"),
        artist_id: artist_id.to_string(),
        album: "Album".to_string(),
        uri: format!("uri:{id}"),
        duration_ms,
        popularity,
        is_discovery: false,
        is_forgotten_gem: false,
    }
}

/// 100 tracks over 10 artists, two artists per genre.
fn sample_catalog() -> (Vec<Track>, HashMap<String, Vec<String>>) {
    let tracks: Vec<Track> = (0..100u32)
        .map(|i| {
            let artist = format!("a{}", i % 10);
            track(&format!("t{i}"), &artist, 150_000 + u64::from(i) * 1_500, Some((i * 7 % 100) as u8))
        })
        .collect();
    let artist_genres = (0..10)
        .map(|a| (format!("a{a}"), vec![GENRES[a % GENRES.len()].to_string()]))
        .collect();
    (tracks, artist_genres)
}

fn estimated_library() -> Vec<TrackWithFeatures> {
    let (tracks, genres) = sample_catalog();
    let features = features::estimate_catalog(&tracks, &genres);
    tracks.into_iter().zip(features).map(|(t, f)| TrackWithFeatures::new(t, f)).collect()
}

fn synthetic(id: &str, energy: f64, valence: f64, tempo: f64) -> TrackWithFeatures {
    TrackWithFeatures::new(
        track(id, "x", 210_000, None),
        AudioFeatures {
            id: id.to_string(),
            energy,
            valence,
            tempo,
            danceability: 0.5,
            key: None,
            mode: None,
            loudness: None,
        },
    )
}

fn chill_pool(n: usize) -> Vec<TrackWithFeatures> {
    (0..n)
        .map(|i| {
            let x = i as f64 / n as f64;
            synthetic(&format!("c{i}"), 0.05 + 0.4 * x, 0.3 + 0.4 * x, 65.0 + 40.0 * x)
        })
        .collect()
}

fn assert_partition(journey: &Journey) {
    let mut next = 0;
    for phase in &journey.phases {
        assert_eq!(phase.start_index, next, "phases are contiguous");
        assert!(phase.end_index >= phase.start_index);
        next = phase.end_index + 1;
    }
    assert_eq!(next, journey.tracks.len(), "last phase ends at the last track");
}

#[cfg(test)]
mod estimation_tests {
    use super::*;

    #[test]
    fn test_estimation_is_deterministic_and_bounded() {
        let (tracks, genres) = sample_catalog();
        let first = features::estimate_catalog(&tracks, &genres);
        let second = features::estimate_catalog(&tracks, &genres);
        assert_eq!(first, second);

        for f in &first {
            for value in [f.energy, f.valence, f.danceability] {
                assert!((0.0..=1.0).contains(&value), "{} out of range in {}", value, f.id);
            }
            assert!(f.tempo > 0.0);
        }
    }

    #[test]
    fn test_single_estimate_matches_batch() {
        let (tracks, genres) = sample_catalog();
        let batch = features::estimate_catalog(&tracks, &genres);

        let artist_tracks: Vec<Track> = tracks.iter().filter(|t| t.artist_id == "a3").cloned().collect();
        let single = features::estimate(&artist_tracks[0], &genres["a3"], Some(&artist_tracks));
        let index = tracks.iter().position(|t| t.id == artist_tracks[0].id).unwrap();
        assert_eq!(single, batch[index]);
    }
}

#[cfg(test)]
mod scoring_property_tests {
    use super::*;

    #[test]
    fn test_camelot_distance_symmetry() {
        let codes: Vec<CamelotCode> = (1..=12)
            .flat_map(|n| [CamelotLetter::A, CamelotLetter::B].map(|l| CamelotCode::new(n, l).unwrap()))
            .collect();
        for &a in &codes {
            assert_eq!(camelot_distance(a, a), 0);
            for &b in &codes {
                assert_eq!(camelot_distance(a, b), camelot_distance(b, a));
            }
        }
    }

    #[test]
    fn test_transition_scores_are_bounded() {
        let library = estimated_library();
        let mut keyed = library[0].features.clone();
        keyed.key = Some(7);
        keyed.mode = Some(1);

        for a in library.iter().take(30) {
            for b in library.iter().skip(50).take(30) {
                let s = score_transition(&a.features, &b.features);
                assert!((0.0..=1.0).contains(&s));
            }
            let s = score_transition(&a.features, &keyed);
            assert!((0.0..=1.0).contains(&s), "mixed key presence stays bounded");
        }
    }

    #[test]
    fn test_mood_filter_monotonicity() {
        let library = estimated_library();
        for mood in Mood::ALL {
            let sizes: Vec<usize> = (0..=20)
                .map(|step| mood::filter_tracks_by_mood(&library, mood, f64::from(step) / 20.0).len())
                .collect();
            assert!(sizes.windows(2).all(|w| w[1] <= w[0]), "{mood}: {sizes:?}");
        }
    }

    #[test]
    fn test_template_selection() {
        assert_eq!(arc::select_template(30.into()).name, "intensity");
        assert_eq!(arc::select_template(60.into()).name, "slow-build");
        assert_eq!(arc::select_template(120.into()).name, "waves");
        assert_eq!(arc::select_template(JourneyDuration::OpenEnded).name, "waves");
    }
}

#[cfg(test)]
mod generation_tests {
    use super::*;

    #[test]
    fn test_validator_error_cases() {
        let mut five = chill_pool(5);
        five.extend((0..20).map(|i| synthetic(&format!("h{i}"), 0.99, 0.95, 178.0)));
        let err = validator::validate(&JourneyInput::new(five, Mood::Chill, 60.into())).unwrap_err();
        assert_eq!(err, JourneyError::InsufficientSongs { mood: Mood::Chill, found: 5, minimum: 10 });

        let err = validator::validate(&JourneyInput::new(chill_pool(30), Mood::Chill, 10.into())).unwrap_err();
        assert!(matches!(err, JourneyError::InvalidDuration { .. }));

        let err = validator::validate(&JourneyInput::new(Vec::new(), Mood::Chill, 60.into())).unwrap_err();
        assert_eq!(err, JourneyError::NoTracks);
    }

    #[test]
    fn test_journeys_partition_and_never_repeat() {
        let generator = JourneyGenerator::default();
        for duration in [JourneyDuration::Minutes(15), 30.into(), 75.into(), 200.into(), JourneyDuration::OpenEnded] {
            let journey = generator.generate(&JourneyInput::new(chill_pool(90), Mood::Chill, duration)).unwrap();
            assert_partition(&journey);

            let mut seen = HashSet::new();
            for (i, _) in journey.phases.iter().enumerate() {
                for t in journey.phase_tracks(i).unwrap() {
                    assert!(seen.insert(t.id().to_string()), "{} reused", t.id());
                }
            }
            assert_eq!(seen.len(), journey.tracks.len());
        }
    }

    #[test]
    fn test_generation_from_estimated_catalog() -> Result<()> {
        let library = estimated_library();
        let matching = mood::filter_tracks_by_mood(&library, Mood::Chill, 0.5).len();
        assert!(matching >= 10, "sample catalog should have enough calm tracks, got {matching}");

        let journey = JourneyGenerator::default().generate(&JourneyInput::new(library, Mood::Chill, 45.into()))?;
        assert_eq!(journey.template, "slow-build");
        assert_eq!(journey.tracks.len(), 13.min(matching));
        assert_partition(&journey);

        let expected: f64 = journey.tracks.iter().map(|t| t.track.duration_ms as f64).sum::<f64>() / 60_000.0;
        assert!((journey.actual_duration - expected).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_custom_settings_change_limits() {
        let settings = GenerationSettings { min_songs: 3, comfortable_songs: 3, ..GenerationSettings::default() };
        let generator = JourneyGenerator::new(settings);
        let journey = generator.generate(&JourneyInput::new(chill_pool(4), Mood::Chill, 20.into())).unwrap();

        assert!(journey.tracks.len() <= 4);
        assert!(journey.warnings.is_empty());
        assert_partition(&journey);
    }
}

#[cfg(test)]
mod crossfade_tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Player(Arc<Mutex<(Option<PlaybackState>, Vec<u8>)>>);

    impl Player {
        fn play(&self, id: &str, position_ms: u64, duration_ms: u64) {
            self.0.lock().unwrap().0 = Some(PlaybackState {
                position_ms,
                duration_ms,
                paused: false,
                current_track_id: Some(id.to_string()),
            });
        }
    }

    impl PlaybackBackend for Player {
        fn get_state(&mut self) -> Result<Option<PlaybackState>> {
            Ok(self.0.lock().unwrap().0.clone())
        }

        fn set_volume(&mut self, volume: u8) -> Result<()> {
            self.0.lock().unwrap().1.push(volume);
            Ok(())
        }
    }

    #[test]
    fn test_fade_duration_values() {
        assert_eq!(fade_duration(120.0), Duration::from_millis(3000));
        assert_eq!(fade_duration(60.0), Duration::from_millis(5000));
        assert_eq!(fade_duration(180.0), Duration::from_millis(1500));
    }

    #[test]
    fn test_double_destroy_leaves_no_timers() {
        let player = Player::default();
        player.play("a", 0, 200_000);
        let mut engine = CrossfadeEngine::new(player, CrossfadeSettings::default());
        engine.start_polling(Duration::ZERO);
        engine.advance_to(Duration::from_millis(250));

        engine.destroy();
        engine.destroy();
        assert_eq!(engine.active_timer_count(), 0);
        assert_eq!(engine.state(), CrossfadeState::Idle);
    }

    #[test]
    fn test_journey_playback_uses_track_tempos() {
        let journey = JourneyGenerator::default()
            .generate(&JourneyInput::new(chill_pool(40), Mood::Chill, 30.into()))
            .unwrap();
        let first = &journey.tracks[0];
        let player = Player::default();
        let mut engine = CrossfadeEngine::new(player.clone(), CrossfadeSettings::default());
        engine.load_journey(&journey);

        player.play(first.id(), 0, 210_000);
        engine.start_polling(Duration::ZERO);
        engine.advance_to(Duration::from_secs(2));
        assert_eq!(engine.state(), CrossfadeState::Idle);

        let lead = fade_duration(first.features.tempo) + Duration::from_millis(500);
        player.play(first.id(), 210_000 - lead.as_millis() as u64, 210_000);
        engine.advance_to(Duration::from_millis(2500));
        assert_eq!(engine.state(), CrossfadeState::FadingOut);
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    fn binary() -> Command {
        Command::new(env!("CARGO_BIN_EXE_moodjourney"))
    }

    fn write_library(dir: &TempDir) -> Result<PathBuf> {
        let (tracks, artist_genres) = sample_catalog();
        let library = serde_json::json!({
            "tracks": tracks,
            "artistGenres": artist_genres,
            "skipPenalties": { "t0": 4 },
            "excludedIds": ["t10"],
        });
        let path = dir.path().join("library.json");
        std::fs::write(&path, serde_json::to_string_pretty(&library)?)?;
        Ok(path)
    }

    #[test]
    fn test_cli_help_lists_commands() {
        let output = binary().arg("--help").output().expect("Failed to run help command");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("generate"));
        assert!(stdout.contains("templates"));
        assert!(stdout.contains("completion"));
    }

    #[test]
    fn test_cli_generate_json() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let library = write_library(&temp_dir)?;
        let output = binary()
            .args(["generate", "--mood", "chill", "--duration", "30", "--json", "--library"])
            .arg(&library)
            .env("MOODJOURNEY_CONFIG", temp_dir.path().join("none.toml"))
            .output()?;

        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        let journey: Journey = serde_json::from_slice(&output.stdout)?;
        assert_eq!(journey.mood, Mood::Chill);
        assert!(journey.tracks.iter().all(|t| t.id() != "t10"), "excluded track never appears");
        assert_partition(&journey);
        Ok(())
    }

    #[test]
    fn test_cli_reports_user_errors() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let library = write_library(&temp_dir)?;
        let output = binary()
            .args(["generate", "--mood", "chill", "--duration", "5", "--library"])
            .arg(&library)
            .output()?;

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("between 15 and 240 minutes"), "{stderr}");
        Ok(())
    }

    #[test]
    fn test_completion_generation() {
        let output = binary().args(["completion", "bash"]).output().expect("Failed to run completion command");
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("_moodjourney"));
        assert!(stdout.contains("complete"));
    }
}
