//! # Taste Profiling
//!
//! Ranks the genres a user's library leans towards and narrows them to the
//! ones compatible with a mood. The result seeds the external discovery
//! search; nothing here performs I/O.

use crate::genre_map;
use crate::mood::MoodThresholds;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

const MOOD_FIT_WEIGHT: f64 = 0.6;
const POPULARITY_WEIGHT: f64 = 0.4;

/// A genre and how many distinct library artists carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreAffinity {
    pub genre: String,
    pub artist_count: usize,
}

/// A genre that survived mood filtering, with its scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodGenre {
    pub genre: String,
    pub artist_count: usize,
    pub mood_fit: f64,
    pub combined: f64,
}

/// Count, per genre, the distinct artists listing it; most common first.
///
/// Genre labels are compared trimmed and lowercased. Equal counts are ordered
/// alphabetically so the profile does not depend on map iteration order.
#[must_use]
pub fn build_profile(artist_genres: &HashMap<String, Vec<String>>) -> Vec<GenreAffinity> {
    let mut artists_by_genre: HashMap<String, HashSet<&str>> = HashMap::new();
    for (artist_id, genres) in artist_genres {
        for genre in genres {
            let label = genre.trim().to_lowercase();
            if label.is_empty() {
                continue;
            }
            artists_by_genre.entry(label).or_default().insert(artist_id.as_str());
        }
    }

    let mut profile: Vec<GenreAffinity> = artists_by_genre
        .into_iter()
        .map(|(genre, artists)| GenreAffinity { genre, artist_count: artists.len() })
        .collect();
    profile.sort_by(|a, b| b.artist_count.cmp(&a.artist_count).then_with(|| a.genre.cmp(&b.genre)));
    profile
}

/// Keep genres whose estimated energy and valence ranges overlap the mood's.
///
/// `mood_fit = energy_overlap * valence_overlap`, and
/// `combined = 0.6 * mood_fit + 0.4 * count / max_count`. Sorted by
/// `combined`, best first.
#[must_use]
pub fn filter_genres_for_mood(ranked: &[GenreAffinity], thresholds: &MoodThresholds) -> Vec<MoodGenre> {
    let max_count = ranked.iter().map(|g| g.artist_count).max().unwrap_or(0);
    if max_count == 0 {
        return Vec::new();
    }

    let mut genres: Vec<MoodGenre> = ranked
        .iter()
        .filter_map(|affinity| {
            let estimate = genre_map::lookup(&affinity.genre);
            let energy_overlap = estimate.energy.overlap(&thresholds.energy);
            let valence_overlap = estimate.valence.overlap(&thresholds.valence);
            if energy_overlap == 0.0 || valence_overlap == 0.0 {
                return None;
            }

            let mood_fit = energy_overlap * valence_overlap;
            let popularity = affinity.artist_count as f64 / max_count as f64;
            Some(MoodGenre {
                genre: affinity.genre.clone(),
                artist_count: affinity.artist_count,
                mood_fit,
                combined: MOOD_FIT_WEIGHT * mood_fit + POPULARITY_WEIGHT * popularity,
            })
        })
        .collect();

    genres.sort_by(|a, b| b.combined.partial_cmp(&a.combined).unwrap_or(std::cmp::Ordering::Equal));
    genres
}

/// Pick up to `max_genres` search genres, skipping sub-genres of an already
/// chosen single-word genre ("deep house" after "house").
#[must_use]
pub fn select_search_genres(mood_genres: &[MoodGenre], max_genres: usize) -> Vec<String> {
    let mut selected = Vec::new();
    let mut standalone: HashSet<&str> = HashSet::new();

    for candidate in mood_genres {
        if selected.len() >= max_genres {
            break;
        }
        let genre = candidate.genre.as_str();
        let base = genre.split_whitespace().last().unwrap_or(genre);
        if standalone.contains(base) {
            continue;
        }
        if !genre.contains(char::is_whitespace) {
            standalone.insert(genre);
        }
        selected.push(candidate.genre.clone());
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::Mood;

    fn artist_map(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(artist, genres)| ((*artist).to_string(), genres.iter().map(|g| (*g).to_string()).collect()))
            .collect()
    }

    fn mood_genre(genre: &str, combined: f64) -> MoodGenre {
        MoodGenre { genre: genre.to_string(), artist_count: 1, mood_fit: combined, combined }
    }

    #[test]
    fn test_profile_counts_distinct_artists() {
        let map = artist_map(&[
            ("a1", &["House", "techno", "house"]),
            ("a2", &["house"]),
            ("a3", &["ambient"]),
        ]);
        let profile = build_profile(&map);

        assert_eq!(profile[0], GenreAffinity { genre: "house".to_string(), artist_count: 2 });
        assert_eq!(profile.len(), 3);
        assert_eq!(profile[1].genre, "ambient", "ties are alphabetical");
    }

    #[test]
    fn test_filter_drops_genres_without_overlap() {
        let profile = vec![
            GenreAffinity { genre: "death metal".to_string(), artist_count: 5 },
            GenreAffinity { genre: "ambient".to_string(), artist_count: 1 },
        ];
        let chill = filter_genres_for_mood(&profile, &Mood::Chill.thresholds());

        let names: Vec<&str> = chill.iter().map(|g| g.genre.as_str()).collect();
        assert_eq!(names, vec!["ambient"]);
        assert!(chill[0].combined > 0.0 && chill[0].combined <= 1.0);
    }

    #[test]
    fn test_filter_sorts_by_combined_score() {
        let profile = vec![
            GenreAffinity { genre: "lo-fi".to_string(), artist_count: 1 },
            GenreAffinity { genre: "chill".to_string(), artist_count: 4 },
        ];
        let genres = filter_genres_for_mood(&profile, &Mood::Chill.thresholds());
        assert!(genres.windows(2).all(|w| w[0].combined >= w[1].combined));
    }

    #[test]
    fn test_select_search_genres_dedupes_families() {
        let genres = vec![
            mood_genre("house", 0.9),
            mood_genre("deep house", 0.8),
            mood_genre("techno", 0.7),
            mood_genre("minimal techno", 0.6),
            mood_genre("downtempo", 0.5),
        ];
        assert_eq!(select_search_genres(&genres, 5), vec!["house", "techno", "downtempo"]);
        assert_eq!(select_search_genres(&genres, 2), vec!["house", "techno"]);
    }

    #[test]
    fn test_select_keeps_subgenre_seen_before_its_base() {
        let genres = vec![mood_genre("deep house", 0.9), mood_genre("house", 0.8), mood_genre("tech house", 0.7)];
        assert_eq!(select_search_genres(&genres, 5), vec!["deep house", "house"]);
    }
}
