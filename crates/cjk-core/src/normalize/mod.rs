//! Character-for-character script variant conversion.
//!
//! Three tables are embedded: simplified → traditional, traditional →
//! Japanese shinjitai, and its inverse. Conversion maps each character
//! independently, so the output always has the same number of characters as
//! the input. Readers rely on that to pair readings positionally.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::locale::LocaleCode;
use crate::registry::Normalizer;
use crate::table::{self, TableError};

pub const DEFAULT_VARIANTS_TOML: &str = include_str!("variants.toml");

#[derive(Debug)]
pub struct VariantTables {
    simplified_to_traditional: HashMap<char, char>,
    traditional_to_japanese: HashMap<char, char>,
    japanese_to_traditional: HashMap<char, char>,
}

impl VariantTables {
    pub fn parse(toml_str: &str) -> Result<Self, TableError> {
        Ok(Self {
            simplified_to_traditional: table::parse_variant_section(
                toml_str,
                "simplified_to_traditional",
            )?,
            traditional_to_japanese: table::parse_variant_section(
                toml_str,
                "traditional_to_japanese",
            )?,
            japanese_to_traditional: table::parse_variant_section(
                toml_str,
                "japanese_to_traditional",
            )?,
        })
    }

    /// Embedded tables, parsed on first use.
    pub fn global() -> &'static VariantTables {
        static INSTANCE: OnceLock<VariantTables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            VariantTables::parse(DEFAULT_VARIANTS_TOML).expect("embedded variants.toml must be valid")
        })
    }

    pub fn simplified_to_traditional(&self, text: &str) -> String {
        convert(&self.simplified_to_traditional, text)
    }

    pub fn traditional_to_japanese(&self, text: &str) -> String {
        convert(&self.traditional_to_japanese, text)
    }

    pub fn japanese_to_traditional(&self, text: &str) -> String {
        convert(&self.japanese_to_traditional, text)
    }

    pub fn simplified_to_japanese(&self, text: &str) -> String {
        self.traditional_to_japanese(&self.simplified_to_traditional(text))
    }

    /// Rewrite `text`, written in `source`, with Japanese shinjitai forms.
    pub fn to_shinjitai(&self, text: &str, source: LocaleCode) -> String {
        match source {
            LocaleCode::Ja => text.to_string(),
            LocaleCode::ZhCn => self.simplified_to_japanese(text),
            LocaleCode::ZhTw | LocaleCode::ZhHk | LocaleCode::Ko | LocaleCode::En => {
                self.traditional_to_japanese(text)
            }
        }
    }
}

fn convert(map: &HashMap<char, char>, text: &str) -> String {
    let out: String = text.chars().map(|c| *map.get(&c).unwrap_or(&c)).collect();
    debug_assert_eq!(out.chars().count(), text.chars().count());
    if out != text {
        debug!(from = text, to = %out, "variant conversion");
    }
    out
}

/// Normalizer registered for zh-CN: simplified → traditional.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimplifiedNormalizer;

impl Normalizer for SimplifiedNormalizer {
    fn to_traditional(&self, text: &str) -> String {
        VariantTables::global().simplified_to_traditional(text)
    }
}

/// Normalizer registered for ja: shinjitai → traditional.
#[derive(Debug, Default, Clone, Copy)]
pub struct JapaneseNormalizer;

impl Normalizer for JapaneseNormalizer {
    fn to_traditional(&self, text: &str) -> String {
        VariantTables::global().japanese_to_traditional(text)
    }
}
