//! Input errors for journey generation
//!
//! Validation failures abort generation before any track is sequenced. Each
//! variant's message is the single line shown to users.
//!
//! Collaborator failures (discovery, recently played, genres, playback) are
//! not represented here: those seams return `anyhow::Result` and degrade.

use crate::mood::Mood;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JourneyError {
    #[error("Your library has no tracks to build a journey from")]
    NoTracks,

    #[error("A journey must last between 15 and 240 minutes (got {minutes})")]
    InvalidDuration { minutes: u32 },

    #[error("Only {found} of your tracks fit a {mood} mood; at least {minimum} are needed")]
    InsufficientSongs { mood: Mood, found: usize, minimum: usize },
}

impl JourneyError {
    /// Human-readable message for display; identical to `Display`.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

pub type Result<T> = std::result::Result<T, JourneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = JourneyError::InsufficientSongs { mood: Mood::Chill, found: 5, minimum: 10 };
        assert_eq!(err.user_message(), "Only 5 of your tracks fit a chill mood; at least 10 are needed");
        assert!(JourneyError::InvalidDuration { minutes: 10 }.user_message().contains("got 10"));
        assert!(!JourneyError::NoTracks.user_message().is_empty());
    }
}
