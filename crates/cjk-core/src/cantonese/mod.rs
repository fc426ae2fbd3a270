//! Cantonese (zh-HK) readings in Jyutping with superscript tone digits.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::registry::{Reader, Romanizer};
use crate::table::{self, TableError};
use crate::types::{pair_readings, CharacterReading, ReadingError, RomanizationResult};
use crate::unicode::strip_whitespace;

pub const JYUTPING_LANG_TAG: &str = "yue-HK-Latn-jyutping";

pub const DEFAULT_JYUTPING_TOML: &str = include_str!("jyutping.toml");

const SUP_OPEN: &str = "<sup>";
const SUP_CLOSE: &str = "</sup>";

/// Jyutping syllable per traditional character.
#[derive(Debug)]
pub struct JyutpingTable {
    readings: HashMap<char, String>,
}

impl JyutpingTable {
    pub fn parse(toml_str: &str) -> Result<Self, TableError> {
        Ok(Self {
            readings: table::parse_char_section(toml_str, "readings")?,
        })
    }

    pub fn global() -> &'static JyutpingTable {
        static INSTANCE: OnceLock<JyutpingTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            JyutpingTable::parse(DEFAULT_JYUTPING_TOML).expect("embedded jyutping.toml must be valid")
        })
    }

    pub fn get(&self, c: char) -> Option<&str> {
        self.readings.get(&c).map(String::as_str)
    }

    /// Space-separated syllables; characters without an entry are kept.
    pub fn to_jyutping(&self, text: &str) -> String {
        let mut out = String::new();
        for c in text.chars() {
            if !out.is_empty() {
                out.push(' ');
            }
            match self.get(c) {
                Some(syllable) => out.push_str(syllable),
                None => out.push(c),
            }
        }
        out
    }
}

/// Wrap each tone digit in `<sup>` markup and drop one space following it.
///
/// Existing `<sup>…</sup>` spans are copied unchanged, so formatting is
/// idempotent.
pub fn format_tones(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if rest.starts_with(SUP_OPEN) {
            let end = rest[SUP_OPEN.len()..]
                .find(SUP_CLOSE)
                .map(|i| SUP_OPEN.len() + i + SUP_CLOSE.len())
                .unwrap_or(rest.len());
            out.push_str(&rest[..end]);
            rest = &rest[end..];
            continue;
        }
        rest = &rest[c.len_utf8()..];
        if c.is_ascii_digit() {
            out.push_str(SUP_OPEN);
            out.push(c);
            out.push_str(SUP_CLOSE);
            if let Some(after) = rest.strip_prefix(' ') {
                rest = after;
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// True when `text` is already Jyutping: ASCII letters, digits and
/// whitespace, possibly with tone markup.
pub fn is_romanized(text: &str) -> bool {
    let bare = text.replace(SUP_OPEN, "").replace(SUP_CLOSE, "");
    !bare.trim().is_empty()
        && bare
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JyutpingRomanizer;

impl Romanizer for JyutpingRomanizer {
    fn language_tag(&self) -> &'static str {
        JYUTPING_LANG_TAG
    }

    fn romanize(&self, text: &str) -> Result<RomanizationResult, ReadingError> {
        let text = strip_whitespace(text);
        let romanized = if is_romanized(&text) {
            format_tones(&text)
        } else {
            format_tones(&JyutpingTable::global().to_jyutping(&text))
        };
        // Separators left next to characters without a syllable.
        Ok(RomanizationResult::new(
            JYUTPING_LANG_TAG,
            strip_whitespace(&romanized),
        ))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JyutpingReader;

impl Reader for JyutpingReader {
    fn read(
        &self,
        term: &str,
        normalized: &str,
        _context: &str,
    ) -> Result<Vec<CharacterReading>, ReadingError> {
        let table = JyutpingTable::global();
        let readings = normalized.chars().map(|c| table.get(c).map(str::to_string));
        Ok(pair_readings(term, readings))
    }
}
