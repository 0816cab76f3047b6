//! # Library Files
//!
//! A JSON snapshot of everything the external collaborators would supply:
//! catalog tracks, known features, artist genres, skip penalties, exclusions,
//! recently played ids, and pre-fetched discovery tracks. The binary loads one
//! of these and feeds it through the same seams a live service would use.
//!
//! ```json
//! {
//!   "tracks": [{ "id": "t1", "title": "...", "artist": "...", "artistId": "a1",
//!                "album": "...", "uri": "...", "durationMs": 215000, "popularity": 61 }],
//!   "artistGenres": { "a1": ["deep house"] },
//!   "skipPenalties": { "t1": 2 },
//!   "excludedIds": ["t9"]
//! }
//! ```

use crate::arc::JourneyDuration;
use crate::config::DiscoverySettings;
use crate::mood::Mood;
use crate::sequencer::SkipPenalties;
use crate::sources::{self, DiscoverySource, RecentlyPlayedSource};
use crate::track::{AudioFeatures, Track, TrackWithFeatures};
use crate::validator::JourneyInput;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LibraryFile {
    pub tracks: Vec<Track>,
    /// Known features; tracks missing here are estimated.
    pub features: Vec<AudioFeatures>,
    pub artist_genres: HashMap<String, Vec<String>>,
    pub skip_penalties: SkipPenalties,
    pub excluded_ids: HashSet<String>,
    /// Omitted means unknown, so no forgotten gems are suggested.
    pub recently_played: Option<HashSet<String>>,
    /// Pre-fetched discovery results, tagged with the genre they were found under.
    pub discovery: Vec<DiscoveryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryEntry {
    pub genre: String,
    pub track: TrackWithFeatures,
}

impl LibraryFile {
    /// Read and parse a library file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read library file {}", path.display()))?;
        let library: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse library file {}", path.display()))?;
        log::info!(
            "Loaded {} tracks and {} artists from {}",
            library.tracks.len(),
            library.artist_genres.len(),
            path.display()
        );
        Ok(library)
    }

    /// Library tracks paired with known or estimated features.
    #[must_use]
    pub fn tracks_with_features(&self) -> Vec<TrackWithFeatures> {
        sources::attach_features(&self.tracks, &self.features, &self.artist_genres)
    }

    /// Assemble a generation input, optionally gathering discovery tracks and
    /// forgotten gems through the collaborator seams.
    #[must_use]
    pub fn journey_input(
        &self,
        mood: Mood,
        duration: JourneyDuration,
        discovery: Option<&DiscoverySettings>,
    ) -> JourneyInput {
        let tracks = self.tracks_with_features();
        let mut input = JourneyInput::new(tracks, mood, duration);
        input.excluded_ids = self.excluded_ids.clone();
        input.skip_penalties = self.skip_penalties.clone();

        if let Some(settings) = discovery {
            let candidates =
                sources::gather_candidates(&input.tracks, mood, &self.artist_genres, self, self, settings);
            input.discovery_tracks = candidates.discovery_tracks;
            input.forgotten_gems = candidates.forgotten_gems;
        }
        input
    }
}

impl DiscoverySource for LibraryFile {
    fn search(&self, genres: &[String], _mood: Mood, limit: usize) -> Result<Vec<TrackWithFeatures>> {
        let wanted: HashSet<String> = genres.iter().map(|g| g.to_lowercase()).collect();
        Ok(self
            .discovery
            .iter()
            .filter(|entry| wanted.contains(&entry.genre.trim().to_lowercase()))
            .map(|entry| entry.track.clone())
            .take(limit)
            .collect())
    }
}

impl RecentlyPlayedSource for LibraryFile {
    fn recently_played(&self) -> Result<HashSet<String>> {
        self.recently_played
            .clone()
            .context("Library file has no recently played list")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "tracks": [
            { "id": "t1", "title": "One", "artist": "A", "artistId": "a1", "album": "X",
              "uri": "u:1", "durationMs": 200000, "popularity": 40 },
            { "id": "t2", "title": "Two", "artist": "B", "artistId": "a2", "album": "Y",
              "uri": "u:2", "durationMs": 240000 }
        ],
        "features": [
            { "id": "t2", "energy": 0.9, "valence": 0.2, "tempo": 150.0, "danceability": 0.4, "key": 9, "mode": 0 }
        ],
        "artistGenres": { "a1": ["ambient"] },
        "skipPenalties": { "t1": 3 },
        "excludedIds": ["t9"]
    }"#;

    fn write_sample(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("library.json");
        fs::write(&path, SAMPLE).unwrap();
        path
    }

    #[test]
    fn test_load_and_attach_features() {
        let temp_dir = TempDir::new().unwrap();
        let library = LibraryFile::load(&write_sample(&temp_dir)).unwrap();

        assert_eq!(library.tracks.len(), 2);
        assert!(library.recently_played.is_none());
        let paired = library.tracks_with_features();
        assert_eq!(paired[1].features.key, Some(9), "known features win");
        assert!(paired[0].features.loudness.is_some(), "estimated features carry loudness");
    }

    #[test]
    fn test_journey_input_carries_preferences() {
        let temp_dir = TempDir::new().unwrap();
        let library = LibraryFile::load(&write_sample(&temp_dir)).unwrap();
        let input = library.journey_input(Mood::Chill, 30.into(), Some(&DiscoverySettings::default()));

        assert_eq!(input.skip_penalties.get("t1"), Some(&3));
        assert!(input.excluded_ids.contains("t9"));
        assert!(input.forgotten_gems.is_empty(), "unknown history yields no gems");
        assert!(input.discovery_tracks.is_empty());
    }

    #[test]
    fn test_offline_discovery_matches_genres() {
        let mut library: LibraryFile = serde_json::from_str(SAMPLE).unwrap();
        let found: TrackWithFeatures = TrackWithFeatures::new(
            Track { id: "d1".to_string(), ..library.tracks[0].clone() },
            AudioFeatures { id: "d1".to_string(), ..library.features[0].clone() },
        );
        library.discovery.push(DiscoveryEntry { genre: "Ambient".to_string(), track: found });

        let hits = library.search(&["ambient".to_string()], Mood::Chill, 5).unwrap();
        assert_eq!(hits.len(), 1);
        assert!(library.search(&["techno".to_string()], Mood::Chill, 5).unwrap().is_empty());
    }

    #[test]
    fn test_load_errors_are_reported() {
        let temp_dir = TempDir::new().unwrap();
        assert!(LibraryFile::load(&temp_dir.path().join("missing.json")).is_err());

        let bad = temp_dir.path().join("bad.json");
        fs::write(&bad, "{ not json").unwrap();
        let err = LibraryFile::load(&bad).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse"));
    }
}
