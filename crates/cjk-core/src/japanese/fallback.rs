use std::collections::HashMap;
use std::sync::OnceLock;

use crate::table::{self, TableError};

pub const DEFAULT_FALLBACK_TOML: &str = include_str!("fallback_readings.toml");

/// Readings for kanji the segmenter leaves unread when they stand alone.
#[derive(Debug)]
pub struct FallbackReadings {
    readings: HashMap<char, String>,
}

impl FallbackReadings {
    pub fn parse(toml_str: &str) -> Result<Self, TableError> {
        Ok(Self {
            readings: table::parse_char_section(toml_str, "readings")?,
        })
    }

    pub fn global() -> &'static FallbackReadings {
        static INSTANCE: OnceLock<FallbackReadings> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            FallbackReadings::parse(DEFAULT_FALLBACK_TOML)
                .expect("embedded fallback_readings.toml must be valid")
        })
    }

    pub fn get(&self, c: char) -> Option<&str> {
        self.readings.get(&c).map(String::as_str)
    }
}
