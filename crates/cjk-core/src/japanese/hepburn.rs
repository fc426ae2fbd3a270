//! Kana → modified Hepburn romanization.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::table::{self, TableError};
use crate::unicode::katakana_to_hiragana;

pub const DEFAULT_HEPBURN_TOML: &str = include_str!("hepburn.toml");

#[derive(Debug)]
pub struct HepburnTable {
    mappings: HashMap<String, String>,
}

impl HepburnTable {
    pub fn parse(toml_str: &str) -> Result<Self, TableError> {
        let mappings = table::parse_section(toml_str, "mappings")?;
        Ok(Self {
            mappings: mappings.into_iter().collect(),
        })
    }

    pub fn global() -> &'static HepburnTable {
        static INSTANCE: OnceLock<HepburnTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            HepburnTable::parse(DEFAULT_HEPBURN_TOML).expect("embedded hepburn.toml must be valid")
        })
    }

    /// Longest mapping (two-kana yōon first) at the start of `chars`.
    fn lookup(&self, chars: &[char]) -> Option<(&str, usize)> {
        (1..=chars.len().min(2)).rev().find_map(|n| {
            let key: String = chars[..n].iter().collect();
            self.mappings.get(&key).map(|r| (r.as_str(), n))
        })
    }

    /// Romanize kana text. Katakana is folded to hiragana first; characters
    /// without a mapping pass through.
    ///
    /// With `macrons`, ー and the long vowels ou/oo/uu are written ā ī ū ē ō;
    /// otherwise ー repeats the preceding vowel and ou/oo/uu stay spelled out.
    ///
    /// っ doubles the following consonant. With no consonant to double it is
    /// written as an apostrophe.
    pub fn romanize(&self, kana: &str, macrons: bool) -> String {
        let chars: Vec<char> = katakana_to_hiragana(kana).chars().collect();
        let mut out = String::with_capacity(kana.len() * 2);
        let mut last_vowel: Option<char> = None;
        let mut sokuon = false;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            if c == 'っ' {
                sokuon = true;
                i += 1;
                continue;
            }
            if c == 'ー' {
                if std::mem::take(&mut sokuon) {
                    out.push('\'');
                    last_vowel = None;
                }
                if let Some(v) = last_vowel {
                    if macrons {
                        out.pop();
                        out.push(macron(v));
                        last_vowel = None;
                    } else {
                        out.push(v);
                    }
                }
                i += 1;
                continue;
            }

            let Some((roman, used)) = self.lookup(&chars[i..]) else {
                if std::mem::take(&mut sokuon) {
                    out.push('\'');
                }
                out.push(c);
                last_vowel = None;
                i += 1;
                continue;
            };
            i += used;

            if std::mem::take(&mut sokuon) {
                match roman.chars().next() {
                    _ if roman.starts_with("ch") => out.push('t'),
                    Some(first) if !is_vowel(first) => out.push(first),
                    _ => {
                        out.push('\'');
                        last_vowel = None;
                    }
                }
            }

            if macrons && is_long_vowel(last_vowel, roman) {
                if let Some(v) = last_vowel {
                    out.pop();
                    out.push(macron(v));
                }
                last_vowel = None;
                continue;
            }

            if c == 'ん' {
                out.push('n');
                let next = self.lookup(&chars[i..]).map(|(r, _)| r);
                if next.is_some_and(|r| r.starts_with(|f: char| is_vowel(f) || f == 'y')) {
                    out.push('\'');
                }
                last_vowel = None;
                continue;
            }

            out.push_str(roman);
            last_vowel = roman.chars().last().filter(|l| is_vowel(*l));
        }
        if sokuon {
            out.push('\'');
        }
        out
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// ou, oo and uu collapse into one long vowel.
fn is_long_vowel(last_vowel: Option<char>, roman: &str) -> bool {
    matches!((last_vowel, roman), (Some('o'), "u" | "o") | (Some('u'), "u"))
}

fn macron(v: char) -> char {
    match v {
        'a' => 'ā',
        'i' => 'ī',
        'u' => 'ū',
        'e' => 'ē',
        'o' => 'ō',
        other => other,
    }
}
