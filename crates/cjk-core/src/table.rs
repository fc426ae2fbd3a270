//! Parsing for the embedded TOML data tables.
//!
//! Every table is a TOML document whose named sections map string keys to
//! string values. Tables are parsed once on first use and never mutated.

use std::collections::{BTreeMap, HashMap};

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is missing or empty")]
    Empty(String),
    #[error("key must be a single character: {0:?}")]
    InvalidKey(String),
    #[error("value for {key:?} must be a single character: {value:?}")]
    InvalidValue { key: String, value: String },
    #[error("empty value for key: {0}")]
    EmptyValue(String),
}

type Sections = BTreeMap<String, BTreeMap<String, String>>;

/// Parse `[section]` of a TOML document into a sorted `BTreeMap`.
pub fn parse_section(
    toml_str: &str,
    section: &str,
) -> Result<BTreeMap<String, String>, TableError> {
    let mut sections: Sections =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;
    let map = sections
        .remove(section)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| TableError::Empty(section.to_string()))?;

    for (key, value) in &map {
        if key.is_empty() {
            return Err(TableError::InvalidKey(key.clone()));
        }
        if value.is_empty() {
            return Err(TableError::EmptyValue(key.clone()));
        }
    }
    Ok(map)
}

/// Parse a section whose keys are single characters.
pub fn parse_char_section(
    toml_str: &str,
    section: &str,
) -> Result<HashMap<char, String>, TableError> {
    parse_section(toml_str, section)?
        .into_iter()
        .map(|(key, value)| match single_char(&key) {
            Some(c) => Ok((c, value)),
            None => Err(TableError::InvalidKey(key)),
        })
        .collect()
}

/// Parse a section mapping one character to exactly one character.
pub fn parse_variant_section(
    toml_str: &str,
    section: &str,
) -> Result<HashMap<char, char>, TableError> {
    parse_char_section(toml_str, section)?
        .into_iter()
        .map(|(key, value)| match single_char(&value) {
            Some(v) => Ok((key, v)),
            None => Err(TableError::InvalidValue {
                key: key.to_string(),
                value,
            }),
        })
        .collect()
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
