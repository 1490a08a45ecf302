//! Type-safe selectors for scheme generation.
//!
//! The CLI receives `variant` and `mode` as plain strings; these enums are
//! the validated forms the pipeline works with. Parsing policy differs on
//! purpose: an unknown mode is a hard error, an unknown variant silently
//! falls back to [`Variant::Vibrant`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TinctError;

/// Style variant selecting which dynamic-scheme rules derive the role table.
///
/// Two variants additionally toggle post-processing in the assembler:
/// `Monochrome` forces every derived palette slot through a grayscale
/// conversion, and `Neutral` applies a global chroma reduction after the
/// harmonized palettes are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Content,
    Expressive,
    Fidelity,
    FruitSalad,
    Monochrome,
    Neutral,
    Rainbow,
    TonalSpot,
    #[default]
    Vibrant,
}

impl Variant {
    /// All known variants, in listing order.
    pub const ALL: [Variant; 9] = [
        Variant::Content,
        Variant::Expressive,
        Variant::Fidelity,
        Variant::FruitSalad,
        Variant::Monochrome,
        Variant::Neutral,
        Variant::Rainbow,
        Variant::TonalSpot,
        Variant::Vibrant,
    ];

    /// Canonical lower-case name as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Content => "content",
            Variant::Expressive => "expressive",
            Variant::Fidelity => "fidelity",
            Variant::FruitSalad => "fruitsalad",
            Variant::Monochrome => "monochrome",
            Variant::Neutral => "neutral",
            Variant::Rainbow => "rainbow",
            Variant::TonalSpot => "tonalspot",
            Variant::Vibrant => "vibrant",
        }
    }

    /// Short human description for the `variants` listing.
    pub fn description(self) -> &'static str {
        match self {
            Variant::Content => "scheme follows the seed colour closely",
            Variant::Expressive => "playful hue rotations away from the seed",
            Variant::Fidelity => "maximum fidelity to the seed colour",
            Variant::FruitSalad => "several distinct accent hues",
            Variant::Monochrome => "all palette slots collapsed to grayscale",
            Variant::Neutral => "globally reduced chroma",
            Variant::Rainbow => "hue wheel sampled around the seed",
            Variant::TonalSpot => "balanced default Material tones",
            Variant::Vibrant => "high-chroma accents (fallback variant)",
        }
    }

    /// Parse a variant name, case-insensitively.
    ///
    /// Unrecognized values fall back to `Vibrant`. This is a permissive
    /// policy, not an error path, so callers can pass user input through
    /// unchecked.
    pub fn parse(input: &str) -> Variant {
        match input.trim().to_lowercase().as_str() {
            "content" => Variant::Content,
            "expressive" => Variant::Expressive,
            "fidelity" => Variant::Fidelity,
            "fruitsalad" => Variant::FruitSalad,
            "monochrome" => Variant::Monochrome,
            "neutral" => Variant::Neutral,
            "rainbow" => Variant::Rainbow,
            "tonalspot" => Variant::TonalSpot,
            _ => Variant::Vibrant,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Light or dark rendition of the palette.
///
/// Flips the sign of the terminal/accent tone boosts and selects which
/// static seed lists and success literals are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    pub fn is_light(self) -> bool {
        self == Mode::Light
    }

    pub fn is_dark(self) -> bool {
        self == Mode::Dark
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = TinctError;

    /// Parse a mode string, case-insensitively. Anything other than
    /// `light`/`dark` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            other => Err(TinctError::InvalidMode {
                value: other.to_string(),
            }),
        }
    }
}
