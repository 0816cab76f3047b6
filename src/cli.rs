//! # Command-Line Interface Module
//!
//! Clap definitions for the `moodjourney` binary.
//!
//! ## Commands
//!
//! - `generate`: Build a journey from a library file
//! - `moods`: List the moods and their feature thresholds
//! - `templates`: List the arc templates and their phases
//! - `genre`: Show the feature estimate a genre label resolves to
//! - `config`: Show or write the configuration file
//! - `completion`: Print a shell completion script
//!
//! ## Examples
//!
//! ```bash
//! moodjourney generate --library library.json --mood chill --duration 45
//! moodjourney generate --library library.json --mood energetic --duration open-ended --json
//! moodjourney genre "deep house"
//! ```

use crate::arc::JourneyDuration;
use crate::mood::Mood;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Parser, Debug)]
#[command(name = "moodjourney")]
#[command(about = "Mood journeys: phase-shaped playlists with smooth transitions")]
#[command(version)]
pub struct Args {
    /// Config file to use instead of the platform default
    #[arg(long, global = true, env = "MOODJOURNEY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a journey from a library file
    ///
    /// The library is a JSON document with `tracks`, and optionally
    /// `features`, `artistGenres`, `skipPenalties`, `excludedIds`,
    /// `recentlyPlayed` and `discovery`. Tracks without features get
    /// estimated ones.
    Generate {
        /// Path to the library JSON file
        #[arg(short, long)]
        library: PathBuf,

        /// Target mood
        #[arg(short, long)]
        mood: Mood,

        /// Length in minutes, or "open-ended"
        #[arg(short, long, default_value = "60")]
        duration: JourneyDuration,

        /// Print the journey as JSON
        #[arg(long)]
        json: bool,

        /// Skip discovery tracks and forgotten gems
        #[arg(long)]
        no_discovery: bool,
    },

    /// List the moods and their feature thresholds
    Moods,

    /// List the arc templates and their phases
    Templates,

    /// Show the feature estimate a genre label resolves to
    Genre {
        /// Free-text genre label, e.g. "melodic deep house"
        name: String,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        write: bool,
    },

    /// Generate shell completions
    ///
    /// Outputs a completion script for the given shell. Redirect it to the
    /// shell's completion directory.
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
