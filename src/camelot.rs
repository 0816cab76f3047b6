//! # Camelot Wheel
//!
//! DJ notation for harmonic mixing compatibility.
//!
//! - Numbers 1-12 are positions on the wheel; neighbours are a fifth apart
//! - `A` is minor, `B` is major
//! - Same number with the other letter is the relative major/minor
//!
//! Keys arrive as pitch classes (`0` = C ... `11` = B) plus a mode flag
//! (`0` = minor, `1` = major), the way catalog audio-feature payloads
//! report them.

use crate::track::AudioFeatures;
use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wheel number for each minor key, indexed by pitch class.
const MINOR_WHEEL: [u8; 12] = [5, 12, 7, 2, 9, 4, 11, 6, 1, 8, 3, 10];
/// Wheel number for each major key, indexed by pitch class.
const MAJOR_WHEEL: [u8; 12] = [8, 3, 10, 5, 12, 7, 2, 9, 4, 11, 6, 1];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CamelotLetter {
    /// Minor.
    A,
    /// Major.
    B,
}

impl CamelotLetter {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            CamelotLetter::A => CamelotLetter::B,
            CamelotLetter::B => CamelotLetter::A,
        }
    }
}

/// Position on the Camelot wheel, e.g. `8A` (A minor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CamelotCode {
    number: u8,
    letter: CamelotLetter,
}

impl CamelotCode {
    /// Returns `None` unless `number` is within `1..=12`.
    #[must_use]
    pub const fn new(number: u8, letter: CamelotLetter) -> Option<Self> {
        match number {
            1..=12 => Some(Self { number, letter }),
            _ => None,
        }
    }

    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }

    #[must_use]
    pub const fn letter(&self) -> CamelotLetter {
        self.letter
    }

    fn step(self, offset: i8) -> Self {
        let index = (i16::from(self.number) - 1 + i16::from(offset)).rem_euclid(12);
        Self { number: index as u8 + 1, letter: self.letter }
    }
}

impl fmt::Display for CamelotCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.letter {
            CamelotLetter::A => 'A',
            CamelotLetter::B => 'B',
        };
        write!(f, "{}{letter}", self.number)
    }
}

impl FromStr for CamelotCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(letter_char) = s.chars().last() else {
            bail!("Empty Camelot code");
        };
        let letter = match letter_char.to_ascii_uppercase() {
            'A' => CamelotLetter::A,
            'B' => CamelotLetter::B,
            other => bail!("Invalid Camelot letter '{other}' in '{s}'"),
        };
        let number: u8 = s[..s.len() - letter_char.len_utf8()]
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid Camelot number in '{s}'"))?;
        CamelotCode::new(number, letter).ok_or_else(|| anyhow::anyhow!("Camelot number out of range in '{s}'"))
    }
}

/// Map a pitch class and mode to its Camelot code.
#[must_use]
pub fn to_camelot(key: u8, mode: u8) -> Option<CamelotCode> {
    let index = usize::from(key);
    match mode {
        0 => MINOR_WHEEL.get(index).map(|&number| CamelotCode { number, letter: CamelotLetter::A }),
        1 => MAJOR_WHEEL.get(index).map(|&number| CamelotCode { number, letter: CamelotLetter::B }),
        _ => None,
    }
}

/// Camelot code of a feature vector, when both key and mode are known.
#[must_use]
pub fn from_features(features: &AudioFeatures) -> Option<CamelotCode> {
    to_camelot(features.key?, features.mode?)
}

/// Steps between two wheel numbers going the short way round.
#[must_use]
pub fn circular_distance(a: u8, b: u8) -> u8 {
    let diff = a.abs_diff(b) % 12;
    diff.min(12 - diff)
}

/// Mixing distance between two codes.
///
/// 0 for the same code; 1 for the relative major/minor or a neighbouring
/// number with the same letter; otherwise the wheel distance plus one when the
/// letters differ.
#[must_use]
pub fn camelot_distance(a: CamelotCode, b: CamelotCode) -> u8 {
    let wheel = circular_distance(a.number, b.number);
    let same_letter = a.letter == b.letter;
    match (wheel, same_letter) {
        (0, true) => 0,
        (0, false) | (1, true) => 1,
        (steps, true) => steps,
        (steps, false) => steps + 1,
    }
}

/// Codes that mix cleanly with `code`: itself, both neighbours, the relative key.
#[must_use]
pub fn compatible_codes(code: CamelotCode) -> [CamelotCode; 4] {
    [
        code,
        code.step(1),
        code.step(-1),
        CamelotCode { letter: code.letter.other(), ..code },
    ]
}
