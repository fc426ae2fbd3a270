//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before the first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::path::PathBuf;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before the first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub segmenter: SegmenterSettings,
    pub hepburn: HepburnSettings,
    pub korean: KoreanSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SegmenterSettings {
    pub segment_penalty: i64,
    pub unknown_word_cost: i64,
    /// When unset, the embedded lexicon is used.
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HepburnSettings {
    /// Write long vowels as ā ī ū ē ō instead of doubling the vowel.
    pub long_vowel_macrons: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KoreanSettings {
    /// Apply the word-initial sound rule (두음 법칙) to Sino-Korean readings.
    pub initial_sound_rule: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_negative {
        ($section:ident . $field:ident) => {
            if s.$section.$field < 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be non-negative".to_string(),
                });
            }
        };
    }

    check_non_negative!(segmenter.segment_penalty);
    check_non_negative!(segmenter.unknown_word_cost);

    if let Some(path) = &s.segmenter.lexicon_path {
        if path.as_os_str().is_empty() {
            return Err(SettingsError::InvalidValue {
                field: "segmenter.lexicon_path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.segmenter.segment_penalty, 3000);
        assert_eq!(s.segmenter.unknown_word_cost, 10000);
        assert!(s.segmenter.lexicon_path.is_none());
        assert!(s.hepburn.long_vowel_macrons);
        assert!(s.korean.initial_sound_rule);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[segmenter]
segment_penalty = 1000
unknown_word_cost = 5000
lexicon_path = "/tmp/lexicon.tsv"

[hepburn]
long_vowel_macrons = false

[korean]
initial_sound_rule = false
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.segmenter.segment_penalty, 1000);
        assert_eq!(
            s.segmenter.lexicon_path.as_deref(),
            Some(std::path::Path::new("/tmp/lexicon.tsv"))
        );
        assert!(!s.hepburn.long_vowel_macrons);
        assert!(!s.korean.initial_sound_rule);
    }

    #[test]
    fn error_negative_penalty() {
        let toml = r#"
[segmenter]
segment_penalty = -1
unknown_word_cost = 10000

[hepburn]
long_vowel_macrons = true

[korean]
initial_sound_rule = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("segmenter.segment_penalty"));
    }

    #[test]
    fn error_empty_lexicon_path() {
        let toml = r#"
[segmenter]
segment_penalty = 3000
unknown_word_cost = 10000
lexicon_path = ""

[hepburn]
long_vowel_macrons = true

[korean]
initial_sound_rule = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("lexicon_path"));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[segmenter]
segment_penalty = 3000
unknown_word_cost = 10000
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
