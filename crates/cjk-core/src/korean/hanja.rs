//! Hanja → Hangul substitution with position-dependent sound rules.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::hangul::{Syllable, FINAL_L, FINAL_N, FINAL_NONE, INITIAL_N, INITIAL_R, INITIAL_SILENT};
use crate::table::{self, TableError};

pub const DEFAULT_HANJA_TOML: &str = include_str!("hanja.toml");

/// Sino-Korean reading per traditional character, in its non-initial form
/// (女 → 녀, 論 → 론).
#[derive(Debug)]
pub struct HanjaTable {
    readings: HashMap<char, char>,
}

impl HanjaTable {
    pub fn parse(toml_str: &str) -> Result<Self, TableError> {
        Ok(Self {
            readings: table::parse_variant_section(toml_str, "readings")?,
        })
    }

    pub fn global() -> &'static HanjaTable {
        static INSTANCE: OnceLock<HanjaTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            HanjaTable::parse(DEFAULT_HANJA_TOML).expect("embedded hanja.toml must be valid")
        })
    }

    pub fn get(&self, c: char) -> Option<char> {
        self.readings.get(&c).copied()
    }

    /// Replace every known hanja with its Hangul reading. Characters without
    /// an entry are kept. With `initial_sound_rule`, readings change with
    /// their position in the word: 女 alone is 여, but 男女 is 남녀.
    pub fn to_hangul(&self, text: &str, initial_sound_rule: bool) -> String {
        let mut out = String::with_capacity(text.len());
        let mut prev: Option<char> = None;
        for c in text.chars() {
            let converted = match self.get(c) {
                Some(reading) if initial_sound_rule => apply_position_rules(reading, prev),
                Some(reading) => reading,
                None => c,
            };
            out.push(converted);
            prev = Some(converted);
        }
        out
    }
}

fn apply_position_rules(reading: char, prev: Option<char>) -> char {
    let Some(mut syllable) = Syllable::decompose(reading) else {
        return reading;
    };
    let word_initial = prev.map_or(true, |p| !p.is_alphanumeric());

    if word_initial {
        // 두음 법칙: 녀 → 여, 력 → 역, 론 → 논.
        syllable.initial = match syllable.initial {
            INITIAL_R if syllable.is_iotized() => INITIAL_SILENT,
            INITIAL_R => INITIAL_N,
            INITIAL_N if syllable.is_iotized() => INITIAL_SILENT,
            other => other,
        };
    } else if is_ryeol_or_ryul(syllable) {
        // 렬/률 after a vowel or ㄴ: 비율, 나열.
        let after_open = prev
            .and_then(Syllable::decompose)
            .is_some_and(|p| matches!(p.final_, FINAL_NONE | FINAL_N));
        if after_open {
            syllable.initial = INITIAL_SILENT;
        }
    }
    syllable.compose()
}

fn is_ryeol_or_ryul(s: Syllable) -> bool {
    // ㅕ = 6, ㅠ = 17
    s.initial == INITIAL_R && matches!(s.medial, 6 | 17) && s.final_ == FINAL_L
}
