use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::unicode::is_hiragana;

pub const DEFAULT_LEXICON_TSV: &str = include_str!("lexicon.tsv");

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("lexicon has no entries")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    /// Hiragana reading of the surface.
    pub reading: String,
    /// Lower is preferred.
    pub cost: i64,
}

/// All entries whose surface is a prefix of the queried text.
#[derive(Debug)]
pub struct PrefixMatch<'a> {
    pub surface: &'a str,
    pub char_len: usize,
    pub entries: &'a [LexiconEntry],
}

/// Surface-keyed word list used to segment Japanese text.
///
/// Built from `surface<TAB>reading<TAB>cost` lines. Blank lines and lines
/// starting with `#` are ignored.
#[derive(Debug, Default)]
pub struct Lexicon {
    entries: HashMap<String, Vec<LexiconEntry>>,
    max_surface_chars: usize,
}

impl Lexicon {
    pub fn parse(tsv: &str) -> Result<Self, LexiconError> {
        let mut lexicon = Lexicon::default();
        for (i, line) in tsv.lines().enumerate() {
            let line_no = i + 1;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            let [surface, reading, cost] = fields[..] else {
                return Err(LexiconError::Parse {
                    line: line_no,
                    reason: format!("expected 3 tab-separated fields, got {}", fields.len()),
                });
            };
            if surface.is_empty() {
                return Err(LexiconError::Parse {
                    line: line_no,
                    reason: "empty surface".to_string(),
                });
            }
            if reading.is_empty() || !reading.chars().all(|c| is_hiragana(c) || c == 'ー') {
                return Err(LexiconError::Parse {
                    line: line_no,
                    reason: format!("reading must be hiragana: {reading:?}"),
                });
            }
            let cost: i64 = cost.trim().parse().map_err(|_| LexiconError::Parse {
                line: line_no,
                reason: format!("invalid cost: {cost:?}"),
            })?;
            lexicon.insert(surface, reading, cost);
        }
        if lexicon.entries.is_empty() {
            return Err(LexiconError::Empty);
        }
        debug!(
            surfaces = lexicon.entries.len(),
            max_surface_chars = lexicon.max_surface_chars,
            "lexicon parsed"
        );
        Ok(lexicon)
    }

    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn embedded() -> Result<Self, LexiconError> {
        Self::parse(DEFAULT_LEXICON_TSV)
    }

    fn insert(&mut self, surface: &str, reading: &str, cost: i64) {
        self.max_surface_chars = self.max_surface_chars.max(surface.chars().count());
        let list = self.entries.entry(surface.to_string()).or_default();
        list.push(LexiconEntry {
            reading: reading.to_string(),
            cost,
        });
        list.sort_by_key(|e| e.cost);
    }

    pub fn lookup(&self, surface: &str) -> &[LexiconEntry] {
        self.entries.get(surface).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every lexicon surface that is a prefix of `text`, shortest first.
    pub fn common_prefix_search<'a>(&'a self, text: &str) -> Vec<PrefixMatch<'a>> {
        let mut matches = Vec::new();
        for (char_len, (offset, c)) in text.char_indices().enumerate() {
            if char_len >= self.max_surface_chars {
                break;
            }
            let prefix = &text[..offset + c.len_utf8()];
            if let Some((surface, entries)) = self.entries.get_key_value(prefix) {
                matches.push(PrefixMatch {
                    surface: surface.as_str(),
                    char_len: char_len + 1,
                    entries,
                });
            }
        }
        matches
    }

    /// Number of distinct surfaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
