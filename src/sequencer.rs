//! # Phase Sequencing
//!
//! Orders the tracks of one phase. Candidates are picked by how close their
//! energy sits to the phase's target, then chained greedily: each step appends
//! the remaining candidate that best combines transition quality (70%) with
//! the phase's intended energy direction (30%).
//!
//! The chain is O(n²) in the candidate count, which stays small because a
//! phase holds a share of a journey of roughly `minutes / 3.5` songs.

use crate::arc::{EnergyProgression, PhaseDefinition};
use crate::track::TrackWithFeatures;
use crate::transition::score_transition;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Skip count per track id, supplied by the preferences collaborator.
pub type SkipPenalties = HashMap<String, u32>;

const TRANSITION_WEIGHT: f64 = 0.7;
const DIRECTION_WEIGHT: f64 = 0.3;
const STABLE_TOLERANCE: f64 = 0.05;
const DIRECTION_FALLOFF: f64 = 3.0;

/// Amount subtracted from a candidate's energy fit for its skip penalty.
#[must_use]
pub fn penalty_adjustment(penalty: u32) -> f64 {
    match penalty {
        p if p >= 5 => 2.0,
        p if p >= 3 => 1.0,
        p => f64::from(p) * 0.1,
    }
}

/// How well moving from `from` to `to` energy follows `progression`.
///
/// `progress` is the chain's completion in `[0, 1]`; a peak phase ascends
/// before the halfway point and descends after it.
#[must_use]
pub fn direction_score(from: f64, to: f64, progression: EnergyProgression, progress: f64) -> f64 {
    let delta = to - from;
    match progression {
        EnergyProgression::Ascending => ascending(delta),
        EnergyProgression::Descending => ascending(-delta),
        EnergyProgression::Peak if progress < 0.5 => ascending(delta),
        EnergyProgression::Peak => ascending(-delta),
        EnergyProgression::Stable => {
            if delta.abs() <= STABLE_TOLERANCE {
                1.0
            } else {
                (1.0 - DIRECTION_FALLOFF * delta.abs()).max(0.0)
            }
        }
    }
}

fn ascending(delta: f64) -> f64 {
    if delta >= 0.0 {
        1.0
    } else {
        (1.0 + DIRECTION_FALLOFF * delta).max(0.0)
    }
}

fn by_energy(a: &TrackWithFeatures, b: &TrackWithFeatures) -> Ordering {
    a.energy().partial_cmp(&b.energy()).unwrap_or(Ordering::Equal)
}

/// The `count` tracks whose energy best fits the phase, best first.
fn select_candidates(
    pool: &[TrackWithFeatures],
    phase: &PhaseDefinition,
    count: usize,
    skip_penalties: &SkipPenalties,
) -> Vec<TrackWithFeatures> {
    let target = phase.energy_range.midpoint();
    let mut scored: Vec<(&TrackWithFeatures, f64)> = pool
        .iter()
        .map(|track| {
            let penalty = skip_penalties.get(track.id()).copied().unwrap_or(0);
            let fit = 1.0 - (track.energy() - target).abs() - penalty_adjustment(penalty);
            (track, fit)
        })
        .collect();

    scored.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    scored.into_iter().take(count).map(|(track, _)| track.clone()).collect()
}

/// Index of the track the chain starts from.
fn starter_index(candidates: &[TrackWithFeatures], progression: EnergyProgression) -> usize {
    let indexed = candidates.iter().enumerate();
    match progression {
        EnergyProgression::Ascending | EnergyProgression::Peak => {
            indexed.min_by(|(_, a), (_, b)| by_energy(a, b)).map_or(0, |(i, _)| i)
        }
        EnergyProgression::Descending => indexed
            .rev()
            .max_by(|(_, a), (_, b)| by_energy(a, b))
            .map_or(0, |(i, _)| i),
        EnergyProgression::Stable => {
            let mut order: Vec<usize> = (0..candidates.len()).collect();
            order.sort_by(|&a, &b| by_energy(&candidates[a], &candidates[b]));
            order[order.len() / 2]
        }
    }
}

/// Pick and order up to `count` tracks from `pool` for one phase.
#[must_use]
pub fn sequence_phase(
    pool: &[TrackWithFeatures],
    phase: &PhaseDefinition,
    count: usize,
    skip_penalties: &SkipPenalties,
) -> Vec<TrackWithFeatures> {
    let mut remaining = select_candidates(pool, phase, count, skip_penalties);
    if remaining.len() <= 1 {
        return remaining;
    }

    let progression = phase.energy_progression;
    let target_count = remaining.len() as f64;
    let mut chain = Vec::with_capacity(remaining.len());
    chain.push(remaining.remove(starter_index(&remaining, progression)));

    while !remaining.is_empty() {
        let Some(tail) = chain.last() else { break };
        let progress = chain.len() as f64 / target_count;

        let mut best_index = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (index, candidate) in remaining.iter().enumerate() {
            let score = TRANSITION_WEIGHT * score_transition(&tail.features, &candidate.features)
                + DIRECTION_WEIGHT * direction_score(tail.energy(), candidate.energy(), progression, progress);
            log::trace!("{} -> {}: {score:.3}", tail.id(), candidate.id());
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }
        chain.push(remaining.remove(best_index));
    }

    log::debug!(
        "Sequenced {} phase with {} tracks ({:?})",
        phase.phase,
        chain.len(),
        progression
    );
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arc::Phase;
    use crate::genre_map::FeatureRange;
    use crate::track::fixtures::with_features;

    fn phase(progression: EnergyProgression, min: f64, max: f64) -> PhaseDefinition {
        PhaseDefinition {
            phase: Phase::Build,
            percentage: 100,
            energy_range: FeatureRange::new(min, max),
            energy_progression: progression,
        }
    }

    fn pool(energies: &[f64]) -> Vec<TrackWithFeatures> {
        energies
            .iter()
            .enumerate()
            .map(|(i, &e)| with_features(&format!("t{i}"), e, 0.5, 120.0))
            .collect()
    }

    fn energies(tracks: &[TrackWithFeatures]) -> Vec<f64> {
        tracks.iter().map(TrackWithFeatures::energy).collect()
    }

    #[test]
    fn test_direction_score() {
        assert_eq!(direction_score(0.4, 0.5, EnergyProgression::Ascending, 0.0), 1.0);
        assert!((direction_score(0.5, 0.4, EnergyProgression::Ascending, 0.0) - 0.7).abs() < 1e-9);
        assert_eq!(direction_score(0.5, 0.4, EnergyProgression::Descending, 0.0), 1.0);
        assert_eq!(direction_score(0.5, 0.53, EnergyProgression::Stable, 0.0), 1.0);
        assert!((direction_score(0.5, 0.6, EnergyProgression::Stable, 0.0) - 0.7).abs() < 1e-9);
        assert_eq!(direction_score(0.9, 0.2, EnergyProgression::Stable, 0.0), 0.0);
    }

    #[test]
    fn test_peak_turns_at_halfway() {
        assert_eq!(direction_score(0.5, 0.7, EnergyProgression::Peak, 0.2), 1.0);
        assert_eq!(direction_score(0.7, 0.5, EnergyProgression::Peak, 0.8), 1.0);
        assert!(direction_score(0.5, 0.7, EnergyProgression::Peak, 0.8) < 1.0);
    }

    #[test]
    fn test_penalty_adjustment_tiers() {
        assert_eq!(penalty_adjustment(0), 0.0);
        assert!((penalty_adjustment(2) - 0.2).abs() < 1e-12);
        assert_eq!(penalty_adjustment(3), 1.0);
        assert_eq!(penalty_adjustment(5), 2.0);
        assert_eq!(penalty_adjustment(12), 2.0);
    }

    #[test]
    fn test_candidates_closest_to_phase_energy() {
        let tracks = pool(&[0.1, 0.5, 0.9, 0.55, 0.45]);
        let sequenced = sequence_phase(&tracks, &phase(EnergyProgression::Stable, 0.4, 0.6), 3, &SkipPenalties::new());

        let mut picked = energies(&sequenced);
        picked.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(picked, vec![0.45, 0.5, 0.55]);
    }

    #[test]
    fn test_skip_penalty_deprioritizes() {
        let tracks = pool(&[0.5, 0.52, 0.2]);
        let penalties: SkipPenalties = [("t0".to_string(), 5)].into_iter().collect();
        let sequenced = sequence_phase(&tracks, &phase(EnergyProgression::Stable, 0.4, 0.6), 2, &penalties);

        let ids: Vec<&str> = sequenced.iter().map(|t| t.id()).collect();
        assert!(!ids.contains(&"t0"), "heavily skipped track should lose its slot");
        assert_eq!(sequenced.len(), 2);
    }

    #[test]
    fn test_ascending_chain_starts_low_and_rises() {
        let tracks = pool(&[0.6, 0.3, 0.5, 0.4, 0.7]);
        let sequenced = sequence_phase(&tracks, &phase(EnergyProgression::Ascending, 0.3, 0.7), 5, &SkipPenalties::new());

        assert_eq!(energies(&sequenced), vec![0.3, 0.4, 0.5, 0.6, 0.7]);
    }

    #[test]
    fn test_descending_chain_starts_high() {
        let tracks = pool(&[0.4, 0.8, 0.6]);
        let sequenced = sequence_phase(&tracks, &phase(EnergyProgression::Descending, 0.3, 0.9), 3, &SkipPenalties::new());

        assert_eq!(sequenced[0].energy(), 0.8);
        assert_eq!(energies(&sequenced), vec![0.8, 0.6, 0.4]);
    }

    #[test]
    fn test_stable_chain_starts_at_median() {
        let tracks = pool(&[0.40, 0.50, 0.45]);
        let sequenced = sequence_phase(&tracks, &phase(EnergyProgression::Stable, 0.4, 0.5), 3, &SkipPenalties::new());
        assert_eq!(sequenced[0].energy(), 0.45);
    }

    #[test]
    fn test_small_pools() {
        let def = phase(EnergyProgression::Ascending, 0.3, 0.7);
        assert!(sequence_phase(&[], &def, 4, &SkipPenalties::new()).is_empty());

        let single = pool(&[0.5]);
        assert_eq!(sequence_phase(&single, &def, 4, &SkipPenalties::new()).len(), 1);

        let tracks = pool(&[0.2, 0.4, 0.6]);
        assert_eq!(sequence_phase(&tracks, &def, 10, &SkipPenalties::new()).len(), 3, "count caps at pool size");
    }

    #[test]
    fn test_no_duplicates_in_chain() {
        let tracks = pool(&[0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8]);
        let sequenced = sequence_phase(&tracks, &phase(EnergyProgression::Peak, 0.3, 0.8), 7, &SkipPenalties::new());

        let mut ids: Vec<&str> = sequenced.iter().map(|t| t.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }
}
