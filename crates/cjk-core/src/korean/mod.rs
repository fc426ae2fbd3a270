//! Korean readings: Revised Romanization for Hangul, Sino-Korean readings
//! for hanja.

mod hangul;
mod hanja;

pub use hangul::romanize_hangul;
pub use hanja::{HanjaTable, DEFAULT_HANJA_TOML};

use tracing::debug;

use crate::registry::{Reader, Romanizer};
use crate::settings::settings;
use crate::types::{pair_readings, CharacterReading, ReadingError, RomanizationResult};
use crate::unicode::strip_whitespace;

pub const KOREAN_LANG_TAG: &str = "ko-Latn-t-m0-mcst";

#[derive(Debug, Default, Clone, Copy)]
pub struct KoreanRomanizer;

impl Romanizer for KoreanRomanizer {
    fn language_tag(&self) -> &'static str {
        KOREAN_LANG_TAG
    }

    fn romanize(&self, text: &str) -> Result<RomanizationResult, ReadingError> {
        Ok(RomanizationResult::new(
            KOREAN_LANG_TAG,
            romanize_hangul(&strip_whitespace(text)),
        ))
    }
}

/// Hanja → Hangul reader. The context is converted together with the term
/// so the term's first character knows whether it starts the word.
#[derive(Debug, Clone, Copy)]
pub struct KoreanReader {
    initial_sound_rule: bool,
}

impl KoreanReader {
    pub fn new(initial_sound_rule: bool) -> Self {
        Self { initial_sound_rule }
    }

    pub fn from_settings() -> Self {
        Self::new(settings().korean.initial_sound_rule)
    }
}

impl Default for KoreanReader {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reader for KoreanReader {
    fn read(
        &self,
        term: &str,
        normalized: &str,
        context: &str,
    ) -> Result<Vec<CharacterReading>, ReadingError> {
        let combined = format!("{context}{normalized}");
        let converted = HanjaTable::global().to_hangul(&combined, self.initial_sound_rule);
        let skip = context.chars().count();
        debug!(term, context, converted = %converted, "korean reading");
        // A character the table leaves unchanged has no reading.
        let readings = converted
            .chars()
            .skip(skip)
            .zip(normalized.chars())
            .map(|(c, n)| (c != n).then(|| c.to_string()));
        Ok(pair_readings(term, readings))
    }
}
