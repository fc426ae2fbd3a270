//! Japanese readings.
//!
//! Text is segmented into words over a lattice built from a surface-keyed
//! lexicon, then each word's hiragana reading is romanized with modified
//! Hepburn. Isolated kanji often have no reading outside a word; the reader
//! covers those with a static on'yomi table.
//!
//! The segmenter is the one expensive resource in the crate. It is loaded on
//! first use through a [`SharedResource`], shared by the romanizer and the
//! reader, and a load failure is reported to every caller.

mod fallback;
mod hepburn;
mod lattice;
mod lexicon;
mod segmenter;
mod viterbi;

#[cfg(test)]
mod tests;

pub use fallback::{FallbackReadings, DEFAULT_FALLBACK_TOML};
pub use hepburn::{HepburnTable, DEFAULT_HEPBURN_TOML};
pub use lattice::{build_lattice, Lattice, LatticeNode};
pub use lexicon::{Lexicon, LexiconEntry, LexiconError, PrefixMatch, DEFAULT_LEXICON_TSV};
pub use segmenter::Segmenter;
pub use viterbi::{viterbi, Segment};

use std::sync::Arc;

use tracing::debug;

use crate::registry::{Reader, Romanizer};
use crate::resource::SharedResource;
use crate::settings::settings;
use crate::types::{pair_readings, CharacterReading, ReadingError, RomanizationResult};
use crate::unicode::strip_whitespace;

pub const JAPANESE_LANG_TAG: &str = "ja-Latn-hepburn";

/// The segmenter resource configured from [`crate::settings`].
pub fn segmenter_resource() -> SharedResource<Segmenter> {
    SharedResource::new("japanese segmenter", Segmenter::from_settings)
}

pub struct JapaneseRomanizer {
    segmenter: Arc<SharedResource<Segmenter>>,
    macrons: bool,
}

impl JapaneseRomanizer {
    pub fn new(segmenter: Arc<SharedResource<Segmenter>>) -> Self {
        Self {
            segmenter,
            macrons: settings().hepburn.long_vowel_macrons,
        }
    }

    pub fn with_macrons(mut self, macrons: bool) -> Self {
        self.macrons = macrons;
        self
    }
}

impl Romanizer for JapaneseRomanizer {
    fn language_tag(&self) -> &'static str {
        JAPANESE_LANG_TAG
    }

    fn romanize(&self, text: &str) -> Result<RomanizationResult, ReadingError> {
        let segmenter = self.segmenter.get()?;
        let kana = segmenter.to_hiragana(&strip_whitespace(text));
        Ok(RomanizationResult::new(
            JAPANESE_LANG_TAG,
            HepburnTable::global().romanize(&kana, self.macrons),
        ))
    }
}

pub struct JapaneseReader {
    segmenter: Arc<SharedResource<Segmenter>>,
}

impl JapaneseReader {
    pub fn new(segmenter: Arc<SharedResource<Segmenter>>) -> Self {
        Self { segmenter }
    }
}

impl Reader for JapaneseReader {
    /// Reads each normalized character on its own. When the segmenter
    /// returns the character unchanged, the fallback table is consulted by
    /// the original character, then by the normalized one.
    fn read(
        &self,
        term: &str,
        normalized: &str,
        _context: &str,
    ) -> Result<Vec<CharacterReading>, ReadingError> {
        let segmenter = self.segmenter.get()?;
        let fallback = FallbackReadings::global();
        let mut originals = term.chars();
        let readings = normalized.chars().map(|n| {
            let original = originals.next();
            let hiragana = segmenter.to_hiragana(n.encode_utf8(&mut [0; 4]));
            if hiragana.chars().ne(std::iter::once(n)) {
                return Some(hiragana);
            }
            let found = original
                .and_then(|o| fallback.get(o))
                .or_else(|| fallback.get(n));
            if found.is_some() {
                debug!(%n, "segmenter miss, using fallback reading");
            }
            found.map(str::to_string)
        });
        Ok(pair_readings(term, readings.collect::<Vec<_>>()))
    }
}
