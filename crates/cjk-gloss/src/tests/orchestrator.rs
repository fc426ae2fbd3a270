use super::*;
use crate::{Loan, ReadingCatalog};

// ---------------------------------------------------------------------------
// Reading: own reading vs. display-locale reader
// ---------------------------------------------------------------------------

#[test]
fn same_locale_uses_own_reading() {
    let w = word(LocaleCode::ZhCn, [Term::new("電").with_reading("diàn")]);
    let readings = orchestrator().read_word(&w, LocaleCode::ZhCn).unwrap();
    assert_eq!(readings, vec![vec![CharacterReading::new('電', "diàn")]]);
}

#[test]
fn same_locale_pads_short_reading() {
    let w = word(LocaleCode::ZhCn, [Term::new("電腦").with_reading("diàn")]);
    let readings = orchestrator().read_word(&w, LocaleCode::ZhCn).unwrap();
    assert_eq!(
        pairs(&readings),
        vec![('電', "diàn".to_string()), ('腦', "腦".to_string())]
    );
}

#[test]
fn display_locale_without_reader_uses_own_reading() {
    let w = word(LocaleCode::ZhHk, [Term::new("電腦").with_reading("din6 nou5")]);
    let readings = orchestrator().read_word(&w, LocaleCode::En).unwrap();
    assert_eq!(
        pairs(&readings),
        vec![('電', "din6".to_string()), ('腦', "nou5".to_string())]
    );
}

#[test]
fn cross_locale_normalizes_before_reading() {
    let w = word(LocaleCode::ZhCn, [Term::new("电").with_reading("diàn")]);
    let readings = orchestrator().read_word(&w, LocaleCode::Ja).unwrap();
    assert_eq!(readings, vec![vec![CharacterReading::new('电', "でん")]]);
}

#[test]
fn simplified_read_as_cantonese() {
    let w = word(LocaleCode::ZhCn, [Term::new("电脑")]);
    let readings = orchestrator().read_word(&w, LocaleCode::ZhHk).unwrap();
    assert_eq!(
        pairs(&readings),
        vec![('电', "din6".to_string()), ('脑', "nou5".to_string())]
    );
}

#[cfg(feature = "trace")]
#[test]
fn read_word_under_debug_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();
    let w = word(LocaleCode::ZhCn, [Term::new("电脑")]);
    let readings = tracing::subscriber::with_default(subscriber, || {
        orchestrator().read_word(&w, LocaleCode::ZhHk)
    })
    .unwrap();
    assert_eq!(pairs(&readings).len(), 2);
}

#[test]
fn one_list_per_term() {
    let w = word(
        LocaleCode::ZhCn,
        [Term::new("电"), Term::new("脑"), Term::new("")],
    );
    let readings = orchestrator().read_word(&w, LocaleCode::Ja).unwrap();
    assert_eq!(readings.len(), 3);
    assert_eq!(readings[0], vec![CharacterReading::new('电', "でん")]);
    assert_eq!(readings[1], vec![CharacterReading::new('脑', "のう")]);
    assert!(readings[2].is_empty());
}

// ---------------------------------------------------------------------------
// Korean context
// ---------------------------------------------------------------------------

#[test]
fn korean_context_carries_across_unspaced_terms() {
    let w = word(LocaleCode::ZhTw, [Term::new("男"), Term::new("女")]);
    let readings = orchestrator().read_word(&w, LocaleCode::Ko).unwrap();
    assert_eq!(
        pairs(&readings),
        vec![('男', "남".to_string()), ('女', "녀".to_string())]
    );
}

#[test]
fn korean_context_resets_at_space() {
    let w = word(LocaleCode::ZhTw, [Term::new("男"), Term::new("女").spaced(true)]);
    let readings = orchestrator().read_word(&w, LocaleCode::Ko).unwrap();
    assert_eq!(readings[1], vec![CharacterReading::new('女', "여")]);
}

#[test]
fn korean_word_initial_term() {
    let w = word(LocaleCode::ZhTw, [Term::new("女")]);
    let readings = orchestrator().read_word(&w, LocaleCode::Ko).unwrap();
    assert_eq!(readings, vec![vec![CharacterReading::new('女', "여")]]);
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[test]
fn catalog_reading_wins_over_reader() {
    let registry = Registry::global();
    let mut catalog = ReadingCatalog::new();
    catalog.insert(LocaleCode::ZhHk, "電腦".to_string(), "din6 lou5".to_string());
    let orchestrator = ReadingOrchestrator::new(registry).with_catalog(&catalog);

    let w = word(LocaleCode::Ja, [Term::new("電脳")]);
    let readings = orchestrator.read_word(&w, LocaleCode::ZhHk).unwrap();
    assert_eq!(
        pairs(&readings),
        vec![('電', "din6".to_string()), ('脳', "lou5".to_string())]
    );
}

#[test]
fn catalog_miss_falls_through_to_reader() {
    let registry = Registry::global();
    let catalog = ReadingCatalog::from_words(
        registry,
        &[word(LocaleCode::ZhHk, [Term::new("電話").with_reading("din6 waa2")])],
    );
    let orchestrator = ReadingOrchestrator::new(registry).with_catalog(&catalog);

    let w = word(LocaleCode::ZhCn, [Term::new("电脑")]);
    let readings = orchestrator.read_word(&w, LocaleCode::ZhHk).unwrap();
    assert_eq!(
        pairs(&readings),
        vec![('电', "din6".to_string()), ('脑', "nou5".to_string())]
    );
}

// ---------------------------------------------------------------------------
// Word romanization
// ---------------------------------------------------------------------------

#[test]
fn romanize_mandarin_word() {
    let w = word(LocaleCode::ZhCn, [Term::new("电"), Term::new("脑")]);
    let result = orchestrator().romanize_word(&w).unwrap();
    assert_eq!(result.language_tag, "zh-CN-Latn-pny");
    assert_eq!(result.text, "diànnǎo");
}

#[test]
fn romanize_prefers_reading() {
    let w = word(LocaleCode::ZhHk, [Term::new("電腦").with_reading("din6 nou5")]);
    let result = orchestrator().romanize_word(&w).unwrap();
    assert_eq!(result.language_tag, "yue-HK-Latn-jyutping");
    assert_eq!(result.text, "din<sup>6</sup>nou<sup>5</sup>");
}

#[test]
fn romanize_joins_with_separators() {
    let hyphen = word(LocaleCode::Ko, [Term::new("한"), Term::new("글").hyphenated()]);
    assert_eq!(orchestrator().romanize_word(&hyphen).unwrap().text, "han-geul");

    let english = word(
        LocaleCode::En,
        [Term::new("soft"), Term::new("ware").spaced(false)],
    );
    let result = orchestrator().romanize_word(&english).unwrap();
    assert_eq!(result.language_tag, "en-Latn");
    assert_eq!(result.text, "software");

    let spaced = word(LocaleCode::En, [Term::new("personal"), Term::new("computer")]);
    assert_eq!(
        orchestrator().romanize_word(&spaced).unwrap().text,
        "personal computer"
    );
}

#[test]
fn romanize_capitalizes_proper_loans() {
    let proper = word(
        LocaleCode::Ko,
        [Term::new("윈도우").with_loan(Loan::new("Windows", LocaleCode::En))],
    );
    assert_eq!(orchestrator().romanize_word(&proper).unwrap().text, "Windou");

    let common = word(
        LocaleCode::Ko,
        [Term::new("윈도우").with_loan(Loan::new("window", LocaleCode::En))],
    );
    assert_eq!(orchestrator().romanize_word(&common).unwrap().text, "windou");
}

// ---------------------------------------------------------------------------
// Normalization passthrough
// ---------------------------------------------------------------------------

#[test]
fn normalize_without_normalizer_keeps_text() {
    let registry = orchestrator().registry();
    assert_eq!(
        registry.normalize("電腦", LocaleCode::ZhTw, LocaleCode::Ko),
        "電腦"
    );
}
