//! # Arc Templates
//!
//! A journey's dramatic shape. Each template is an ordered list of phases with
//! a share of the total song count, a target energy range, and the direction
//! energy should move within the phase.
//!
//! | template     | chosen when           | shape |
//! |--------------|-----------------------|-------|
//! | `intensity`  | ≤ 30 minutes          | short build, one sustained 55% peak |
//! | `slow-build` | 31-119 minutes        | opening 15 / build 30 / peak 35 / resolve 20 |
//! | `waves`      | ≥ 120 min, open-ended | six phases, two peaks |

use crate::genre_map::FeatureRange;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minutes an open-ended journey is planned for.
pub const OPEN_ENDED_MINUTES: u32 = 180;

const INTENSITY_MAX_MINUTES: u32 = 30;
const WAVES_MIN_MINUTES: u32 = 120;

/// Dramatic role of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Opening,
    Build,
    Peak,
    Resolve,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Opening => "opening",
            Phase::Build => "build",
            Phase::Peak => "peak",
            Phase::Resolve => "resolve",
        })
    }
}

/// Intended energy movement within a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyProgression {
    Ascending,
    Descending,
    Stable,
    /// Rises through the first half of the phase, falls through the second.
    Peak,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseDefinition {
    pub phase: Phase,
    /// Share of the template, in percent.
    pub percentage: u32,
    pub energy_range: FeatureRange,
    pub energy_progression: EnergyProgression,
}

const fn phase(
    phase: Phase,
    percentage: u32,
    energy: (f64, f64),
    energy_progression: EnergyProgression,
) -> PhaseDefinition {
    PhaseDefinition {
        phase,
        percentage,
        energy_range: FeatureRange::new(energy.0, energy.1),
        energy_progression,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcTemplate {
    pub name: &'static str,
    pub phases: &'static [PhaseDefinition],
}

pub static INTENSITY: ArcTemplate = ArcTemplate {
    name: "intensity",
    phases: &[
        phase(Phase::Opening, 10, (0.40, 0.60), EnergyProgression::Ascending),
        phase(Phase::Build, 20, (0.55, 0.80), EnergyProgression::Ascending),
        phase(Phase::Peak, 55, (0.75, 1.00), EnergyProgression::Stable),
        phase(Phase::Resolve, 15, (0.45, 0.70), EnergyProgression::Descending),
    ],
};

pub static SLOW_BUILD: ArcTemplate = ArcTemplate {
    name: "slow-build",
    phases: &[
        phase(Phase::Opening, 15, (0.20, 0.40), EnergyProgression::Stable),
        phase(Phase::Build, 30, (0.35, 0.70), EnergyProgression::Ascending),
        phase(Phase::Peak, 35, (0.65, 0.90), EnergyProgression::Peak),
        phase(Phase::Resolve, 20, (0.30, 0.55), EnergyProgression::Descending),
    ],
};

pub static WAVES: ArcTemplate = ArcTemplate {
    name: "waves",
    phases: &[
        phase(Phase::Opening, 10, (0.30, 0.50), EnergyProgression::Stable),
        phase(Phase::Build, 15, (0.45, 0.70), EnergyProgression::Ascending),
        phase(Phase::Peak, 20, (0.70, 0.90), EnergyProgression::Peak),
        phase(Phase::Resolve, 15, (0.45, 0.65), EnergyProgression::Descending),
        phase(Phase::Peak, 25, (0.75, 0.95), EnergyProgression::Peak),
        phase(Phase::Resolve, 15, (0.25, 0.50), EnergyProgression::Descending),
    ],
};

/// Every built-in template.
pub static TEMPLATES: [&ArcTemplate; 3] = [&INTENSITY, &SLOW_BUILD, &WAVES];

/// Requested journey length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyDuration {
    Minutes(u32),
    OpenEnded,
}

impl JourneyDuration {
    /// Planned minutes; open-ended journeys resolve to `open_ended_minutes`.
    #[must_use]
    pub const fn resolve(self, open_ended_minutes: u32) -> u32 {
        match self {
            JourneyDuration::Minutes(minutes) => minutes,
            JourneyDuration::OpenEnded => open_ended_minutes,
        }
    }
}

impl From<u32> for JourneyDuration {
    fn from(minutes: u32) -> Self {
        JourneyDuration::Minutes(minutes)
    }
}

impl fmt::Display for JourneyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JourneyDuration::Minutes(minutes) => write!(f, "{minutes}"),
            JourneyDuration::OpenEnded => f.write_str("open-ended"),
        }
    }
}

impl FromStr for JourneyDuration {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("open-ended") {
            return Ok(JourneyDuration::OpenEnded);
        }
        s.parse::<u32>()
            .map(JourneyDuration::Minutes)
            .map_err(|_| anyhow::anyhow!("Invalid duration '{s}'. Use a number of minutes or 'open-ended'"))
    }
}

impl Serialize for JourneyDuration {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JourneyDuration::Minutes(minutes) => serializer.serialize_u32(*minutes),
            JourneyDuration::OpenEnded => serializer.serialize_str("open-ended"),
        }
    }
}

impl<'de> Deserialize<'de> for JourneyDuration {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Minutes(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Minutes(minutes) => Ok(JourneyDuration::Minutes(minutes)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Choose the arc template for a requested duration.
#[must_use]
pub fn select_template(duration: JourneyDuration) -> &'static ArcTemplate {
    match duration {
        JourneyDuration::OpenEnded => &WAVES,
        JourneyDuration::Minutes(m) if m >= WAVES_MIN_MINUTES => &WAVES,
        JourneyDuration::Minutes(m) if m <= INTENSITY_MAX_MINUTES => &INTENSITY,
        JourneyDuration::Minutes(_) => &SLOW_BUILD,
    }
}

/// Look a template up by name.
#[must_use]
pub fn template_by_name(name: &str) -> Option<&'static ArcTemplate> {
    TEMPLATES.iter().copied().find(|t| t.name == name)
}

/// Songs per phase for `total_songs`.
///
/// Every phase but the last gets its rounded share; the last takes the exact
/// remainder so rounding drift does not accumulate. Each phase gets at least
/// one song, so the counts can exceed `total_songs` for very short journeys.
#[must_use]
pub fn calculate_phase_song_counts(template: &ArcTemplate, total_songs: usize) -> Vec<usize> {
    let Some((_, leading)) = template.phases.split_last() else {
        return Vec::new();
    };

    let mut counts: Vec<usize> = leading
        .iter()
        .map(|p| ((total_songs as f64 * f64::from(p.percentage) / 100.0).round() as usize).max(1))
        .collect();
    let allocated: usize = counts.iter().sum();
    counts.push(total_songs.saturating_sub(allocated).max(1));
    counts
}
