use std::io::Write;

use super::super::*;
use super::embedded_segmenter;

fn romanize(text: &str) -> String {
    JapaneseRomanizer::new(embedded_segmenter())
        .with_macrons(true)
        .romanize(text)
        .unwrap()
        .text
}

#[test]
fn embedded_lexicon_parses() {
    let lexicon = Lexicon::embedded().unwrap();
    assert!(!lexicon.is_empty());
    assert_eq!(lexicon.lookup("電脳")[0].reading, "でんのう");
    assert!(lexicon.lookup("電").is_empty());
}

#[test]
fn test_segment_compound() {
    let segmenter = Segmenter::new(Lexicon::embedded().unwrap(), 3000, 10000);
    let segments = segmenter.segment("人工知能");
    assert_eq!(
        segments,
        vec![Segment {
            surface: "人工知能".to_string(),
            reading: "じんこうちのう".to_string(),
        }]
    );
}

#[test]
fn test_segment_words_and_particles() {
    let segmenter = Segmenter::new(Lexicon::embedded().unwrap(), 3000, 10000);
    let surfaces: Vec<String> = segmenter
        .segment("日本語の辞書")
        .into_iter()
        .map(|s| s.surface)
        .collect();
    assert_eq!(surfaces, vec!["日本語", "の", "辞書"]);
}

#[test]
fn test_to_hiragana_reads_unknown_kanji_by_onyomi() {
    let segmenter = Segmenter::new(Lexicon::embedded().unwrap(), 3000, 10000);
    assert_eq!(segmenter.to_hiragana("電"), "でん");
    assert_eq!(segmenter.to_hiragana("防火壁"), "ぼうかへき");
    assert_eq!(segmenter.to_hiragana("カナ"), "かな");
    assert_eq!(segmenter.to_hiragana("A"), "A");
}

#[test]
fn test_to_hiragana_without_fallback_keeps_kanji() {
    let segmenter = Segmenter::new(Lexicon::embedded().unwrap(), 3000, 10000).without_fallback();
    assert_eq!(segmenter.to_hiragana("電"), "電");
    assert_eq!(segmenter.to_hiragana("電脳"), "でんのう");
}

#[test]
fn test_romanize_words() {
    assert_eq!(romanize("電脳"), "dennō");
    assert_eq!(romanize("日本語"), "nihongo");
    assert_eq!(romanize("東京"), "tōkyō");
    assert_eq!(romanize("学校"), "gakkō");
    assert_eq!(romanize("コンピューター"), "konpyūtā");
}

#[test]
fn test_romanize_kanji_outside_lexicon() {
    assert_eq!(romanize("火"), "ka");
    assert_eq!(romanize("防火壁"), "bōkaheki");
    assert_eq!(romanize("東京都"), "tōkyōto");
    assert_eq!(romanize("電脳服"), "dennōfuku");
}

#[test]
fn test_romanize_strips_whitespace_and_reads_kana() {
    assert_eq!(romanize("電 脳"), "dennō");
    assert_eq!(romanize("でん のう"), "dennō");
}

#[test]
fn test_romanize_language_tag() {
    let r = JapaneseRomanizer::new(embedded_segmenter())
        .romanize("東京")
        .unwrap();
    assert_eq!(r.language_tag, "ja-Latn-hepburn");
}

#[test]
fn test_custom_lexicon_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# custom").unwrap();
    writeln!(file, "電\tいなずま\t1000").unwrap();
    file.flush().unwrap();

    let lexicon = Lexicon::load(file.path()).unwrap();
    let segmenter = Segmenter::new(lexicon, 3000, 10000);
    assert_eq!(segmenter.to_hiragana("電"), "いなずま");
}

#[test]
fn test_lexicon_parse_errors() {
    let err = Lexicon::parse("電脳\tでんのう\n").unwrap_err();
    assert!(matches!(err, LexiconError::Parse { line: 1, .. }));

    let err = Lexicon::parse("# header\n電脳\tデンノウ\t3000\n").unwrap_err();
    assert!(matches!(err, LexiconError::Parse { line: 2, .. }));

    let err = Lexicon::parse("電脳\tでんのう\tcheap\n").unwrap_err();
    assert!(err.to_string().contains("invalid cost"));

    let err = Lexicon::parse("# only comments\n\n").unwrap_err();
    assert!(matches!(err, LexiconError::Empty));
}

#[test]
fn test_missing_lexicon_file_is_resource_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.tsv");
    let resource = Arc::new(SharedResource::new("missing segmenter", move || {
        Lexicon::load(&path).map(|lexicon| Segmenter::new(lexicon, 3000, 10000))
    }));
    let romanizer = JapaneseRomanizer::new(Arc::clone(&resource));
    let reader = JapaneseReader::new(resource);

    let err = romanizer.romanize("電脳").unwrap_err();
    assert!(matches!(err, ReadingError::Resource(ref e) if e.resource() == "missing segmenter"));
    assert!(reader.read("電", "電", "").is_err());
}

#[test]
fn test_common_prefix_search() {
    let lexicon = Lexicon::embedded().unwrap();
    let matches = lexicon.common_prefix_search("日本語です");
    let surfaces: Vec<&str> = matches.iter().map(|m| m.surface).collect();
    assert_eq!(surfaces, vec!["日本", "日本語"]);
    assert_eq!(matches[1].char_len, 3);
}
