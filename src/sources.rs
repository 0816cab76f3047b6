//! # Collaborator Seams
//!
//! Traits for the external services that feed generation, plus the helpers
//! that turn their output into candidates. Every collaborator returns
//! `anyhow::Result`; a failure is logged and degrades to an empty result so
//! generation carries on with whatever data is available.

use crate::config::DiscoverySettings;
use crate::features;
use crate::mood::{self, Mood};
use crate::taste;
use crate::track::{AudioFeatures, Track, TrackWithFeatures};
use anyhow::Result;
use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};

/// Searches for tracks outside the user's library.
pub trait DiscoverySource {
    /// Tracks matching `mood` within `genres`, with features attached.
    ///
    /// # Errors
    ///
    /// Any search failure.
    fn search(&self, genres: &[String], mood: Mood, limit: usize) -> Result<Vec<TrackWithFeatures>>;
}

pub trait RecentlyPlayedSource {
    /// Ids of tracks the user played recently.
    ///
    /// # Errors
    ///
    /// Any fetch failure.
    fn recently_played(&self) -> Result<HashSet<String>>;
}

pub trait ArtistGenreSource {
    /// Free-text genre tags per artist id.
    ///
    /// # Errors
    ///
    /// Any fetch failure.
    fn artist_genres(&self, artist_ids: &[String]) -> Result<HashMap<String, Vec<String>>>;
}

/// A fixed artist-genre map, e.g. one loaded from a library file.
impl ArtistGenreSource for HashMap<String, Vec<String>> {
    fn artist_genres(&self, artist_ids: &[String]) -> Result<HashMap<String, Vec<String>>> {
        Ok(artist_ids
            .iter()
            .filter_map(|id| self.get(id).map(|genres| (id.clone(), genres.clone())))
            .collect())
    }
}

/// Discovery and gem candidates gathered for one generation.
#[derive(Debug, Clone, Default)]
pub struct Candidates {
    pub search_genres: Vec<String>,
    pub discovery_tracks: Vec<TrackWithFeatures>,
    pub forgotten_gems: Vec<TrackWithFeatures>,
}

/// Pair tracks with known features, estimating the ones without.
///
/// Estimation uses each artist's genres and the other library tracks by the
/// same artist. Output order follows `tracks`.
#[must_use]
pub fn attach_features(
    tracks: &[Track],
    known: &[AudioFeatures],
    artist_genres: &HashMap<String, Vec<String>>,
) -> Vec<TrackWithFeatures> {
    let known: HashMap<&str, &AudioFeatures> = known.iter().map(|f| (f.id.as_str(), f)).collect();
    let estimated = features::estimate_catalog(tracks, artist_genres);

    let paired: Vec<TrackWithFeatures> = tracks
        .iter()
        .zip(estimated)
        .map(|(track, estimate)| {
            let features = known.get(track.id.as_str()).map_or(estimate, |&f| f.clone());
            TrackWithFeatures::new(track.clone(), features)
        })
        .collect();

    debug!("Attached features to {} tracks ({} known)", paired.len(), known.len());
    paired
}

/// Library tracks not played recently that still fit `mood`, best first.
#[must_use]
pub fn find_forgotten_gems(
    library: &[TrackWithFeatures],
    recently_played: &HashSet<String>,
    mood: Mood,
    threshold: f64,
    limit: usize,
) -> Vec<TrackWithFeatures> {
    let unplayed: Vec<TrackWithFeatures> = library
        .iter()
        .filter(|t| !recently_played.contains(t.id()))
        .cloned()
        .collect();

    mood::filter_tracks_by_mood(&unplayed, mood, threshold)
        .into_iter()
        .take(limit)
        .map(|mut gem| {
            gem.track.is_forgotten_gem = true;
            gem
        })
        .collect()
}

/// Gather discovery tracks and forgotten gems for `mood`.
///
/// Genre tags come from `genre_source` for the library's artists; the taste
/// profile built from them picks the discovery search genres. Any
/// collaborator failure degrades that part to empty.
pub fn gather_candidates(
    library: &[TrackWithFeatures],
    mood: Mood,
    genre_source: &dyn ArtistGenreSource,
    discovery: &dyn DiscoverySource,
    recent: &dyn RecentlyPlayedSource,
    settings: &DiscoverySettings,
) -> Candidates {
    let mut artist_ids: Vec<String> = library.iter().map(|t| t.track.artist_id.clone()).collect();
    artist_ids.sort_unstable();
    artist_ids.dedup();

    let artist_genres = genre_source.artist_genres(&artist_ids).unwrap_or_else(|e| {
        warn!("Genre lookup failed, discovery will be skipped: {e:#}");
        HashMap::new()
    });

    let profile = taste::build_profile(&artist_genres);
    let mood_genres = taste::filter_genres_for_mood(&profile, &mood.thresholds());
    let search_genres = taste::select_search_genres(&mood_genres, settings.max_search_genres);

    let discovery_tracks = if search_genres.is_empty() {
        debug!("No search genres for {mood}, skipping discovery");
        Vec::new()
    } else {
        let owned: HashSet<&str> = library.iter().map(TrackWithFeatures::id).collect();
        match discovery.search(&search_genres, mood, settings.discovery_limit) {
            Ok(found) => found
                .into_iter()
                .filter(|t| !owned.contains(t.id()))
                .map(|mut t| {
                    t.track.is_discovery = true;
                    t
                })
                .collect(),
            Err(e) => {
                warn!("Discovery search failed, continuing without it: {e:#}");
                Vec::new()
            }
        }
    };

    let forgotten_gems = match recent.recently_played() {
        Ok(recently_played) => find_forgotten_gems(
            library,
            &recently_played,
            mood,
            settings.forgotten_gems_threshold,
            settings.forgotten_gems_limit,
        ),
        Err(e) => {
            warn!("Recently played fetch failed, skipping forgotten gems: {e:#}");
            Vec::new()
        }
    };

    info!(
        "Gathered {} discovery tracks from {:?} and {} forgotten gems",
        discovery_tracks.len(),
        search_genres,
        forgotten_gems.len()
    );
    Candidates { search_genres, discovery_tracks, forgotten_gems }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::fixtures::{features, track, with_features};
    use anyhow::bail;
    use std::cell::RefCell;

    struct FixedDiscovery {
        tracks: Vec<TrackWithFeatures>,
        seen_genres: RefCell<Vec<String>>,
    }

    impl DiscoverySource for FixedDiscovery {
        fn search(&self, genres: &[String], _mood: Mood, _limit: usize) -> Result<Vec<TrackWithFeatures>> {
            self.seen_genres.borrow_mut().extend(genres.iter().cloned());
            Ok(self.tracks.clone())
        }
    }

    struct Failing;

    impl DiscoverySource for Failing {
        fn search(&self, _: &[String], _: Mood, _: usize) -> Result<Vec<TrackWithFeatures>> {
            bail!("search offline")
        }
    }

    impl RecentlyPlayedSource for Failing {
        fn recently_played(&self) -> Result<HashSet<String>> {
            bail!("history offline")
        }
    }

    impl ArtistGenreSource for Failing {
        fn artist_genres(&self, _: &[String]) -> Result<HashMap<String, Vec<String>>> {
            bail!("genres offline")
        }
    }

    struct Recent(HashSet<String>);

    impl RecentlyPlayedSource for Recent {
        fn recently_played(&self) -> Result<HashSet<String>> {
            Ok(self.0.clone())
        }
    }

    fn chill_library() -> Vec<TrackWithFeatures> {
        (0..6).map(|i| with_features(&format!("c{i}"), 0.2 + 0.03 * f64::from(i), 0.5, 85.0)).collect()
    }

    fn genres_for(library: &[TrackWithFeatures], genre: &str) -> HashMap<String, Vec<String>> {
        library.iter().map(|t| (t.track.artist_id.clone(), vec![genre.to_string()])).collect()
    }

    #[test]
    fn test_forgotten_gems_skip_recent_and_flag() {
        let library = chill_library();
        let recent: HashSet<String> = ["c0".to_string(), "c1".to_string()].into_iter().collect();
        let gems = find_forgotten_gems(&library, &recent, Mood::Chill, 0.6, 3);

        assert_eq!(gems.len(), 3);
        assert!(gems.iter().all(|g| g.track.is_forgotten_gem));
        assert!(gems.iter().all(|g| g.id() != "c0" && g.id() != "c1"));
    }

    #[test]
    fn test_gather_uses_taste_profile_and_flags_discovery() {
        let library = chill_library();
        let genres = genres_for(&library, "ambient");
        let discovery = FixedDiscovery {
            tracks: vec![with_features("new", 0.3, 0.5, 80.0), library[0].clone()],
            seen_genres: RefCell::new(Vec::new()),
        };
        let recent = Recent(HashSet::new());

        let candidates =
            gather_candidates(&library, Mood::Chill, &genres, &discovery, &recent, &DiscoverySettings::default());

        assert_eq!(candidates.search_genres, vec!["ambient"]);
        assert_eq!(*discovery.seen_genres.borrow(), vec!["ambient"]);
        assert_eq!(candidates.discovery_tracks.len(), 1, "library tracks are not rediscovered");
        assert!(candidates.discovery_tracks[0].track.is_discovery);
        assert_eq!(candidates.forgotten_gems.len(), 6);
    }

    #[test]
    fn test_gather_degrades_on_failures() {
        let library = chill_library();
        let candidates =
            gather_candidates(&library, Mood::Chill, &Failing, &Failing, &Failing, &DiscoverySettings::default());

        assert!(candidates.search_genres.is_empty());
        assert!(candidates.discovery_tracks.is_empty());
        assert!(candidates.forgotten_gems.is_empty());
    }

    #[test]
    fn test_discovery_failure_keeps_gems() {
        let library = chill_library();
        let genres = genres_for(&library, "ambient");
        let candidates = gather_candidates(
            &library,
            Mood::Chill,
            &genres,
            &Failing,
            &Recent(HashSet::new()),
            &DiscoverySettings::default(),
        );

        assert!(candidates.discovery_tracks.is_empty());
        assert!(!candidates.forgotten_gems.is_empty());
    }

    #[test]
    fn test_attach_features_prefers_known() {
        let tracks = vec![track("a"), track("b")];
        let known = vec![features("b", 0.9, 0.1, 150.0)];
        let genres: HashMap<String, Vec<String>> = [("artist-a".to_string(), vec!["ambient".to_string()])].into();

        let paired = attach_features(&tracks, &known, &genres);
        assert_eq!(paired[0].id(), "a");
        assert_eq!(paired[0].features.id, "a");
        assert!(paired[0].features.energy < 0.5, "ambient estimate is calm");
        assert_eq!(paired[1].features, known[0]);
    }
}
