//! Hangul syllable arithmetic and Revised Romanization of Korean.

use crate::unicode::is_hangul_syllable;

const SYLLABLE_BASE: u32 = 0xAC00;
const MEDIAL_COUNT: u32 = 21;
const FINAL_COUNT: u32 = 28;

// Initial consonant indices.
pub(crate) const INITIAL_G: usize = 0;
pub(crate) const INITIAL_N: usize = 2;
pub(crate) const INITIAL_D: usize = 3;
pub(crate) const INITIAL_R: usize = 5;
pub(crate) const INITIAL_M: usize = 6;
pub(crate) const INITIAL_SILENT: usize = 11;
pub(crate) const INITIAL_J: usize = 12;
pub(crate) const INITIAL_H: usize = 18;

// Final consonant indices.
pub(crate) const FINAL_NONE: usize = 0;
pub(crate) const FINAL_N: usize = 4;
pub(crate) const FINAL_L: usize = 8;
const FINAL_NH: usize = 6;
const FINAL_D: usize = 7;
const FINAL_LT: usize = 13;
const FINAL_LH: usize = 15;
const FINAL_M: usize = 16;
const FINAL_NG: usize = 21;
const FINAL_T: usize = 25;
const FINAL_H: usize = 27;

const MEDIAL_I: usize = 20;

const INITIALS: [&str; 19] = [
    "g", "kk", "n", "d", "tt", "r", "m", "b", "pp", "s", "ss", "", "j", "jj", "ch", "k", "t", "p",
    "h",
];

const MEDIALS: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae", "oe", "yo", "u", "wo", "we",
    "wi", "yu", "eu", "ui", "i",
];

/// Final consonants as pronounced before a pause or another consonant.
const FINALS: [&str; 28] = [
    "", "k", "k", "k", "n", "n", "n", "t", "l", "k", "m", "l", "l", "l", "p", "l", "m", "p", "p",
    "t", "t", "ng", "t", "t", "k", "t", "p", "t",
];

/// Before a vowel the final moves into the next syllable:
/// (final left behind, initial carried over; `None` when it goes silent).
const LIAISON: [(usize, Option<usize>); 28] = [
    (0, None),
    (0, Some(0)),
    (0, Some(1)),
    (1, Some(9)),
    (0, Some(2)),
    (4, Some(12)),
    (0, Some(2)),
    (0, Some(3)),
    (0, Some(5)),
    (8, Some(0)),
    (8, Some(6)),
    (8, Some(7)),
    (8, Some(9)),
    (8, Some(16)),
    (8, Some(17)),
    (0, Some(5)),
    (0, Some(6)),
    (0, Some(7)),
    (17, Some(9)),
    (0, Some(9)),
    (0, Some(10)),
    (21, None),
    (0, Some(12)),
    (0, Some(14)),
    (0, Some(15)),
    (0, Some(16)),
    (0, Some(17)),
    (0, None),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Syllable {
    pub initial: usize,
    pub medial: usize,
    pub final_: usize,
}

impl Syllable {
    pub fn decompose(c: char) -> Option<Self> {
        if !is_hangul_syllable(c) {
            return None;
        }
        let index = c as u32 - SYLLABLE_BASE;
        Some(Self {
            initial: (index / (MEDIAL_COUNT * FINAL_COUNT)) as usize,
            medial: ((index % (MEDIAL_COUNT * FINAL_COUNT)) / FINAL_COUNT) as usize,
            final_: (index % FINAL_COUNT) as usize,
        })
    }

    pub fn compose(self) -> char {
        let index = (self.initial as u32 * MEDIAL_COUNT + self.medial as u32) * FINAL_COUNT
            + self.final_ as u32;
        char::from_u32(SYLLABLE_BASE + index).unwrap_or('\u{FFFD}')
    }

    /// Medial begins with a y-glide or is ㅣ.
    pub fn is_iotized(self) -> bool {
        matches!(self.medial, 2 | 3 | 6 | 7 | 12 | 17 | MEDIAL_I)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum FinalSound {
    K,
    T,
    P,
    Other,
}

fn final_sound(final_: usize) -> FinalSound {
    match final_ {
        1 | 2 | 3 | 9 | 24 => FinalSound::K,
        7 | 19 | 20 | 22 | 23 | 25 | 27 => FinalSound::T,
        14 | 17 | 18 | 26 => FinalSound::P,
        _ => FinalSound::Other,
    }
}

/// Romanization of a final followed by the next syllable, and the next
/// syllable's initial when the junction rewrites it.
fn junction(cur: Syllable, next: Syllable) -> (&'static str, Option<&'static str>) {
    let coda = cur.final_;
    if coda == FINAL_NONE {
        return ("", None);
    }
    let plain = FINALS[coda];
    match next.initial {
        INITIAL_SILENT => {
            if next.medial == MEDIAL_I {
                match coda {
                    FINAL_D => return ("", Some("j")),
                    FINAL_T => return ("", Some("ch")),
                    FINAL_LT => return ("l", Some("ch")),
                    _ => {}
                }
            }
            let (left, moved) = LIAISON[coda];
            (FINALS[left], moved.map(|i| INITIALS[i]))
        }
        INITIAL_G | INITIAL_D | INITIAL_J if matches!(coda, FINAL_H | FINAL_NH | FINAL_LH) => {
            let aspirated = match next.initial {
                INITIAL_G => "k",
                INITIAL_D => "t",
                _ => "ch",
            };
            let left = match coda {
                FINAL_NH => "n",
                FINAL_LH => "l",
                _ => "",
            };
            (left, Some(aspirated))
        }
        INITIAL_N | INITIAL_M => match (coda, final_sound(coda)) {
            (FINAL_L | FINAL_LH, _) if next.initial == INITIAL_N => ("l", Some("l")),
            (_, FinalSound::K) => ("ng", None),
            (_, FinalSound::T) => ("n", None),
            (_, FinalSound::P) => ("m", None),
            _ => (plain, None),
        },
        INITIAL_R => match (coda, final_sound(coda)) {
            (FINAL_N | FINAL_L, _) => ("l", Some("l")),
            (FINAL_M | FINAL_NG, _) => (plain, Some("n")),
            (_, FinalSound::K) => ("ng", Some("n")),
            (_, FinalSound::P) => ("m", Some("n")),
            _ => (plain, Some("n")),
        },
        INITIAL_H if matches!(coda, FINAL_H) => ("", Some("h")),
        _ => (plain, None),
    }
}

/// Revised Romanization of Korean. Sound changes apply across adjacent
/// Hangul syllables; any other character passes through and breaks the run.
pub fn romanize_hangul(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut onset: Option<&'static str> = None;

    for (i, &c) in chars.iter().enumerate() {
        let Some(syllable) = Syllable::decompose(c) else {
            out.push(c);
            onset = None;
            continue;
        };
        out.push_str(onset.take().unwrap_or(INITIALS[syllable.initial]));
        out.push_str(MEDIALS[syllable.medial]);

        let next = chars.get(i + 1).copied().and_then(Syllable::decompose);
        let (coda, next_onset) = match next {
            Some(next) => junction(syllable, next),
            None => (FINALS[syllable.final_], None),
        };
        out.push_str(coda);
        onset = next_onset;
    }
    out
}
