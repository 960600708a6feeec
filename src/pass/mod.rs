//! Password generation, entropy estimate, and strength rating.
//!
//! Nothing in here touches the terminal or the filesystem.

pub mod charset;
mod generate;
pub mod strength;

use std::collections::BTreeSet;
use std::num::IntErrorKind;

use thiserror::Error;

pub use generate::generate;
pub use strength::Preview;

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 64;
pub const DEFAULT_LENGTH: usize = 16;

/// Character classes, declared in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digit,
        CharClass::Symbol,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Select at least one character set.")]
    NoClassSelected,
    #[error("All selected sets were filtered out. Relax exclusions.")]
    AllFilteredOut,
    #[error("Not enough unique characters ({available}) for a no-repeat password of length {needed}.")]
    NotEnoughUnique { needed: usize, available: usize },
}

/// Inputs of a single generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub classes: BTreeSet<CharClass>,
    /// Alphabet of the symbol class.
    pub symbols: String,
    pub exclude_ambiguous: bool,
    pub exclude_similar: bool,
    pub no_repeat: bool,
    pub require_each: bool,
}

impl GenerationOptions {
    /// Set the length, clamped to the supported range.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = clamp_length(length);
        self
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: CharClass::ALL.into_iter().collect(),
            symbols: charset::SYMBOLS.to_string(),
            exclude_ambiguous: false,
            exclude_similar: false,
            no_repeat: false,
            require_each: false,
        }
    }
}

pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Parse a user supplied length from its leading integer (`"12abc"` is 12).
/// Garbage and zero fall back to the default; the result is clamped.
pub fn parse_length(input: &str) -> usize {
    let input = input.trim();
    let sign_len = usize::from(input.starts_with(['-', '+']));
    let digits_end = input[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(input.len(), |i| i + sign_len);

    match input[..digits_end].parse::<i64>() {
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => MAX_LENGTH,
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => MIN_LENGTH,
        Ok(0) | Err(_) => DEFAULT_LENGTH,
        Ok(n) if n < 0 => MIN_LENGTH,
        Ok(n) => clamp_length(usize::try_from(n).unwrap_or(MAX_LENGTH)),
    }
}
