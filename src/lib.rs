//! Mood journeys: phase-shaped playlists built from a liked-song catalog.
//!
//! A journey is an ordered playlist that fits a target mood and length and is
//! shaped into dramatic phases (opening, build, peak, resolve) with smooth
//! track-to-track transitions. Because the catalog carries no reliable audio
//! analysis, features are estimated from genre tags, popularity and duration.
//!
//! Core modules:
//! - [`genre_map`] - Genre label to feature-range knowledge base
//! - [`features`] - Feature estimation and caching
//! - [`mood`] - Mood thresholds, scoring and filtering
//! - [`taste`] - Genre affinity profiling for discovery search
//! - [`camelot`] / [`transition`] - Harmonic and tempo transition scoring
//! - [`arc`] - Arc templates and per-phase song allocation
//! - [`sequencer`] - Greedy phase sequencing
//! - [`validator`] / [`generator`] - Input checks and journey assembly
//! - [`crossfade`] / [`daemon`] - Playback volume fading
//!
//! ### Supporting Modules
//!
//! - [`sources`] - Collaborator traits and candidate gathering
//! - [`library`] - JSON library snapshots for the binary
//! - [`config`] - TOML configuration
//! - [`error`] - Input errors
//! - [`cli`] / [`completion`] - Command-line interface
//!
//! ## Quick Start Example
//!
//! ```no_run
//! use moodjourney::generator::JourneyGenerator;
//! use moodjourney::library::LibraryFile;
//! use moodjourney::mood::Mood;
//! use std::path::Path;
//!
//! let library = LibraryFile::load(Path::new("library.json"))?;
//! let input = library.journey_input(Mood::Focused, 90.into(), None);
//! let journey = JourneyGenerator::default().generate(&input)?;
//!
//! for (i, phase) in journey.phases.iter().enumerate() {
//!     println!("{:?}: {} tracks", phase.phase, journey.phase_tracks(i).map_or(0, <[_]>::len));
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Input problems (empty library, bad duration, too few mood matches) are
//! [`error::JourneyError`] values whose message is meant for users.
//! Collaborator failures are logged and degrade to empty data; the crossfade
//! engine never fails outward.

pub mod arc;
pub mod camelot;
pub mod cli;
pub mod completion;
pub mod config;
pub mod crossfade;
pub mod daemon;
pub mod error;
pub mod features;
pub mod generator;
pub mod genre_map;
pub mod library;
pub mod mood;
pub mod sequencer;
pub mod sources;
pub mod taste;
pub mod track;
pub mod transition;
pub mod validator;
