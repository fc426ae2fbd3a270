use tracing::debug_span;

use super::fallback::FallbackReadings;
use super::lattice::build_lattice;
use super::lexicon::{Lexicon, LexiconError};
use super::viterbi::{viterbi, Segment};
use crate::settings::settings;

/// Word segmentation and kana readings for Japanese text.
#[derive(Debug)]
pub struct Segmenter {
    lexicon: Lexicon,
    segment_penalty: i64,
    unknown_word_cost: i64,
    fallback: Option<&'static FallbackReadings>,
}

impl Segmenter {
    pub fn new(lexicon: Lexicon, segment_penalty: i64, unknown_word_cost: i64) -> Self {
        Self {
            lexicon,
            segment_penalty,
            unknown_word_cost,
            fallback: Some(FallbackReadings::global()),
        }
    }

    /// Leave kanji the lexicon does not cover as written.
    pub fn without_fallback(mut self) -> Self {
        self.fallback = None;
        self
    }

    /// Load the lexicon named by `[segmenter] lexicon_path`, or the embedded
    /// one when unset.
    pub fn from_settings() -> Result<Self, LexiconError> {
        let s = &settings().segmenter;
        let lexicon = match &s.lexicon_path {
            Some(path) => Lexicon::load(path)?,
            None => Lexicon::embedded()?,
        };
        Ok(Self::new(lexicon, s.segment_penalty, s.unknown_word_cost))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn segment(&self, text: &str) -> Vec<Segment> {
        let _span = debug_span!("segment", text).entered();
        let lattice = build_lattice(&self.lexicon, text, self.unknown_word_cost, self.fallback);
        viterbi(&lattice, self.segment_penalty)
    }

    /// Concatenated hiragana reading. Kanji outside the lexicon are read by
    /// their on'yomi from the fallback table; anything else without a
    /// reading stays as written.
    pub fn to_hiragana(&self, text: &str) -> String {
        self.segment(text)
            .into_iter()
            .map(|s| s.reading)
            .collect()
    }
}
