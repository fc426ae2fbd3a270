//! Property-based checks for the invariants every locale must hold.
//!
//! Inputs are drawn from a small pool mixing simplified, traditional and
//! shinjitai forms with kana, Hangul and ASCII, so the tables are actually hit.

use proptest::prelude::*;

use crate::cantonese::format_tones;
use crate::normalize::VariantTables;
use crate::{LocaleCode, Registry};

const POOL: &[char] = &[
    '电', '脑', '電', '腦', '脳', '学', '學', '国', '國', '女', '男', '人', '工', '知', '能',
    '日', '本', '語', '東', '京', '羅', '列', 'カ', 'な', '한', '글', 'a', 'Z', '1', '😀',
];

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_term() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(POOL), 0..12)
        .prop_map(|chars| chars.into_iter().collect())
}

fn arb_locale() -> impl Strategy<Value = LocaleCode> {
    prop::sample::select(LocaleCode::ALL.to_vec())
}

fn arb_jyutping() -> impl Strategy<Value = String> {
    "[a-z0-9 ]{0,30}"
}

// ---------------------------------------------------------------------------
// proptest entry point
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn variant_conversion_preserves_length(term in arb_term()) {
        let tables = VariantTables::global();
        let n = term.chars().count();
        prop_assert_eq!(tables.simplified_to_traditional(&term).chars().count(), n);
        prop_assert_eq!(tables.traditional_to_japanese(&term).chars().count(), n);
        prop_assert_eq!(tables.japanese_to_traditional(&term).chars().count(), n);
        for source in LocaleCode::ALL {
            prop_assert_eq!(tables.to_shinjitai(&term, source).chars().count(), n);
        }
    }

    #[test]
    fn normalize_preserves_length(
        term in arb_term(),
        source in arb_locale(),
        target in arb_locale(),
    ) {
        let normalized = Registry::global().normalize(&term, source, target);
        prop_assert_eq!(normalized.chars().count(), term.chars().count());
    }

    #[test]
    fn one_reading_per_character(
        term in arb_term(),
        source in arb_locale(),
        target in arb_locale(),
        context in arb_term(),
    ) {
        let registry = Registry::global();
        let normalized = registry.normalize(&term, source, target);
        let readings = registry.read(target, &term, &normalized, &context).unwrap();
        prop_assert_eq!(readings.len(), term.chars().count());
        for (reading, c) in readings.iter().zip(term.chars()) {
            prop_assert_eq!(reading.character, c);
            prop_assert!(!reading.reading.is_empty());
        }
    }

    #[test]
    fn romanized_text_has_no_whitespace_for_han_input(
        term in arb_term(),
        locale in arb_locale(),
    ) {
        let result = Registry::global().romanize(&term, locale).unwrap();
        prop_assert!(!result.text.chars().any(char::is_whitespace));
    }

    #[test]
    fn tone_formatting_is_idempotent(text in arb_jyutping()) {
        let once = format_tones(&text);
        prop_assert_eq!(format_tones(&once), once.clone());
    }
}
