//! Mandarin readings: Pinyin for zh-CN, Bopomofo for zh-TW.

mod bopomofo;

pub use bopomofo::pinyin_to_bopomofo;

use pinyin::ToPinyin;
use tracing::debug;

use crate::registry::{Reader, Romanizer};
use crate::types::{pair_readings, CharacterReading, ReadingError, RomanizationResult};
use crate::unicode::strip_whitespace;

pub const PINYIN_LANG_TAG: &str = "zh-CN-Latn-pny";
pub const BOPOMOFO_LANG_TAG: &str = "zh-TW-Bopo";

/// Tone-marked Pinyin for a single character (most common reading).
pub fn pinyin_syllable(c: char) -> Option<&'static str> {
    c.to_pinyin().map(|p| p.with_tone())
}

/// Bopomofo for a single character. A syllable that does not convert stays
/// in its Pinyin form.
pub fn bopomofo_syllable(c: char) -> Option<String> {
    let syllable = pinyin_syllable(c)?;
    Some(pinyin_to_bopomofo(syllable).unwrap_or_else(|| {
        debug!(%c, syllable, "no bopomofo for syllable, keeping pinyin");
        syllable.to_string()
    }))
}

/// Concatenated Pinyin. Characters without a reading are kept as-is.
pub fn to_pinyin(text: &str) -> String {
    text.chars()
        .map(|c| match pinyin_syllable(c) {
            Some(p) => p.to_string(),
            None => c.to_string(),
        })
        .collect()
}

/// Concatenated Bopomofo. Characters without a reading are kept as-is.
pub fn to_bopomofo(text: &str) -> String {
    text.chars()
        .map(|c| bopomofo_syllable(c).unwrap_or_else(|| c.to_string()))
        .collect()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PinyinRomanizer;

impl Romanizer for PinyinRomanizer {
    fn language_tag(&self) -> &'static str {
        PINYIN_LANG_TAG
    }

    fn romanize(&self, text: &str) -> Result<RomanizationResult, ReadingError> {
        Ok(RomanizationResult::new(
            PINYIN_LANG_TAG,
            to_pinyin(&strip_whitespace(text)),
        ))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BopomofoRomanizer;

impl Romanizer for BopomofoRomanizer {
    fn language_tag(&self) -> &'static str {
        BOPOMOFO_LANG_TAG
    }

    fn romanize(&self, text: &str) -> Result<RomanizationResult, ReadingError> {
        Ok(RomanizationResult::new(
            BOPOMOFO_LANG_TAG,
            to_bopomofo(&strip_whitespace(text)),
        ))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PinyinReader;

impl Reader for PinyinReader {
    fn read(
        &self,
        term: &str,
        normalized: &str,
        _context: &str,
    ) -> Result<Vec<CharacterReading>, ReadingError> {
        let readings = normalized
            .chars()
            .map(|c| pinyin_syllable(c).map(str::to_string));
        Ok(pair_readings(term, readings))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BopomofoReader;

impl Reader for BopomofoReader {
    fn read(
        &self,
        term: &str,
        normalized: &str,
        _context: &str,
    ) -> Result<Vec<CharacterReading>, ReadingError> {
        Ok(pair_readings(term, normalized.chars().map(bopomofo_syllable)))
    }
}
