//! # moodjourney
//!
//! Builds mood journeys from a JSON library snapshot. The binary is only a
//! composition root: it loads the config and library, wires the collaborator
//! seams, and prints what the core returns.
//!
//! ## Usage
//!
//! ```bash
//! moodjourney generate --library library.json --mood chill --duration 45
//! moodjourney templates
//! moodjourney completion fish > ~/.config/fish/completions/moodjourney.fish
//! ```
//!
//! Logging is controlled via `RUST_LOG`, e.g.
//! `RUST_LOG=moodjourney::sequencer=debug moodjourney generate ...`.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, info};
use moodjourney::cli::{self, Command};
use moodjourney::config::{self, AppConfig};
use moodjourney::genre_map::{self, FeatureRange};
use moodjourney::generator::{Journey, JourneyGenerator};
use moodjourney::library::LibraryFile;
use moodjourney::mood::Mood;
use moodjourney::{arc, camelot, completion};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    let app_config = match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    debug!("Effective config: {app_config:?}");

    match args.command {
        Command::Generate { library, mood, duration, json, no_discovery } => {
            let journey = generate(&library, mood, duration, no_discovery, &app_config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&journey).context("Failed to serialize journey")?);
            } else {
                print_journey(&journey);
            }
        }
        Command::Moods => print_moods(),
        Command::Templates => print_templates(),
        Command::Genre { name } => print_genre(&name),
        Command::Config { write } => {
            let path = args.config.clone().or_else(config::get_config_path);
            if write {
                let path = path.context("Could not determine the config file location")?;
                app_config.save_to(&path)?;
                info!("Wrote config to {}", path.display());
                println!("Wrote {}", path.display());
            } else {
                if let Some(path) = path {
                    println!("# {}", path.display());
                }
                print!("{}", toml::to_string_pretty(&app_config).context("Failed to serialize config")?);
            }
        }
        Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(shell), &mut cmd);
        }
    }

    Ok(())
}

fn generate(
    library_path: &Path,
    mood: Mood,
    duration: arc::JourneyDuration,
    no_discovery: bool,
    app_config: &AppConfig,
) -> Result<Journey> {
    let library = LibraryFile::load(library_path)?;
    let discovery = (!no_discovery).then_some(&app_config.discovery);
    let input = library.journey_input(mood, duration, discovery);

    let generator = JourneyGenerator::new(app_config.generation.clone());
    let journey = generator.generate(&input)?;
    Ok(journey)
}

fn range(r: &FeatureRange) -> String {
    format!("{:.2}-{:.2}", r.min, r.max)
}

fn print_journey(journey: &Journey) {
    println!(
        "{} journey ({}), {} tracks, {:.1} minutes",
        journey.mood,
        journey.template,
        journey.tracks.len(),
        journey.actual_duration
    );
    for warning in &journey.warnings {
        println!("  ! {warning}");
    }

    for (index, phase) in journey.phases.iter().enumerate() {
        println!();
        println!("== {} ==", phase.phase);
        for track in journey.phase_tracks(index).unwrap_or_default() {
            let key = camelot::from_features(&track.features).map_or_else(|| "--".to_string(), |c| c.to_string());
            let tag = if track.track.is_discovery {
                " [new]"
            } else if track.track.is_forgotten_gem {
                " [gem]"
            } else {
                ""
            };
            println!(
                "  {:>5.1} BPM  {:>3}  E {:.2}  {} - {}{tag}",
                track.features.tempo, key, track.features.energy, track.track.artist, track.track.title
            );
        }
    }

    if let Some(score) = journey.average_transition_score() {
        println!();
        println!("Average transition score: {score:.2}");
    }
}

fn print_moods() {
    for mood in Mood::ALL {
        let t = mood.thresholds();
        let mut line = format!("{:<12} energy {}  valence {}", mood, range(&t.energy), range(&t.valence));
        if let Some(tempo) = t.tempo {
            line.push_str(&format!("  tempo {:.0}-{:.0} BPM", tempo.min, tempo.max));
        }
        if let Some(dance) = t.danceability {
            line.push_str(&format!("  danceability {}", range(&dance)));
        }
        println!("{line}");
    }
}

fn print_templates() {
    for template in arc::TEMPLATES {
        println!("{}", template.name);
        for phase in template.phases {
            println!(
                "  {:<8} {:>3}%  energy {}  {:?}",
                phase.phase.to_string(),
                phase.percentage,
                range(&phase.energy_range),
                phase.energy_progression
            );
        }
    }
}

fn print_genre(name: &str) {
    let estimate = genre_map::lookup(name);
    match genre_map::matched_key(name) {
        Some(key) => println!("'{name}' matches '{key}'"),
        None => println!("'{name}' has no match, using the default estimate"),
    }
    println!("  energy       {}", range(&estimate.energy));
    println!("  valence      {}", range(&estimate.valence));
    println!("  danceability {}", range(&estimate.danceability));
    println!("  tempo        {:.0}-{:.0} BPM", estimate.tempo.min, estimate.tempo.max);
    println!("  loudness     {:.0} to {:.0} dB", estimate.loudness.min, estimate.loudness.max);
}
