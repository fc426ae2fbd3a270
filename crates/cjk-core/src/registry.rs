//! Locale → capability dispatch.
//!
//! Every [`LocaleCode`] resolves to a [`LocaleCapabilities`] record. A missing
//! romanizer, reader or normalizer is not an error: the registry substitutes
//! identity behavior with the same output shape.

use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::cantonese::{JyutpingReader, JyutpingRomanizer};
use crate::japanese::{self, JapaneseReader, JapaneseRomanizer};
use crate::korean::{KoreanReader, KoreanRomanizer};
use crate::locale::LocaleCode;
use crate::mandarin::{BopomofoReader, BopomofoRomanizer, PinyinReader, PinyinRomanizer};
use crate::normalize::{JapaneseNormalizer, SimplifiedNormalizer, VariantTables};
use crate::types::{CharacterReading, ReadingError, RomanizationResult};
use crate::unicode::strip_whitespace;

/// Converts a whole term to a transliteration.
pub trait Romanizer: Send + Sync {
    /// BCP 47 tag of the transliteration system, e.g. `zh-CN-Latn-pny`.
    fn language_tag(&self) -> &'static str;

    fn romanize(&self, text: &str) -> Result<RomanizationResult, ReadingError>;
}

/// Produces one [`CharacterReading`] per character of `term`.
///
/// `normalized` is `term` rewritten into the script this reader's tables are
/// keyed by. `context` is the normalized text of the preceding terms in the
/// same word; only readers with position-dependent pronunciation use it.
pub trait Reader: Send + Sync {
    fn read(
        &self,
        term: &str,
        normalized: &str,
        context: &str,
    ) -> Result<Vec<CharacterReading>, ReadingError>;
}

/// Rewrites a locale's script into canonical traditional Chinese forms.
pub trait Normalizer: Send + Sync {
    fn to_traditional(&self, text: &str) -> String;
}

#[derive(Clone, Default)]
pub struct LocaleCapabilities {
    romanizer: Option<Arc<dyn Romanizer>>,
    reader: Option<Arc<dyn Reader>>,
    normalizer: Option<Arc<dyn Normalizer>>,
}

impl LocaleCapabilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_romanizer(mut self, romanizer: impl Romanizer + 'static) -> Self {
        self.romanizer = Some(Arc::new(romanizer));
        self
    }

    pub fn with_reader(mut self, reader: impl Reader + 'static) -> Self {
        self.reader = Some(Arc::new(reader));
        self
    }

    pub fn with_normalizer(mut self, normalizer: impl Normalizer + 'static) -> Self {
        self.normalizer = Some(Arc::new(normalizer));
        self
    }

    pub fn romanizer(&self) -> Option<&dyn Romanizer> {
        self.romanizer.as_deref()
    }

    pub fn reader(&self) -> Option<&dyn Reader> {
        self.reader.as_deref()
    }

    pub fn normalizer(&self) -> Option<&dyn Normalizer> {
        self.normalizer.as_deref()
    }
}

impl fmt::Debug for LocaleCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleCapabilities")
            .field("romanizer", &self.romanizer.as_ref().map(|r| r.language_tag()))
            .field("reader", &self.reader.is_some())
            .field("normalizer", &self.normalizer.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    capabilities: [LocaleCapabilities; 6],
}

impl Registry {
    /// A registry where every locale uses identity behavior.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard capability set. The Japanese romanizer and reader share
    /// one lazily loaded segmenter, configured from [`crate::settings`].
    pub fn standard() -> Self {
        let segmenter = Arc::new(japanese::segmenter_resource());
        let mut registry = Self::empty();
        registry
            .register(
                LocaleCode::Ja,
                LocaleCapabilities::new()
                    .with_romanizer(JapaneseRomanizer::new(Arc::clone(&segmenter)))
                    .with_reader(JapaneseReader::new(segmenter))
                    .with_normalizer(JapaneseNormalizer),
            )
            .register(
                LocaleCode::Ko,
                LocaleCapabilities::new()
                    .with_romanizer(KoreanRomanizer)
                    .with_reader(KoreanReader::from_settings()),
            )
            .register(
                LocaleCode::ZhCn,
                LocaleCapabilities::new()
                    .with_romanizer(PinyinRomanizer)
                    .with_reader(PinyinReader)
                    .with_normalizer(SimplifiedNormalizer),
            )
            .register(
                LocaleCode::ZhHk,
                LocaleCapabilities::new()
                    .with_romanizer(JyutpingRomanizer)
                    .with_reader(JyutpingReader),
            )
            .register(
                LocaleCode::ZhTw,
                LocaleCapabilities::new()
                    .with_romanizer(BopomofoRomanizer)
                    .with_reader(BopomofoReader),
            );
        registry
    }

    /// Process-wide standard registry.
    pub fn global() -> &'static Registry {
        static INSTANCE: OnceLock<Registry> = OnceLock::new();
        INSTANCE.get_or_init(Registry::standard)
    }

    /// Replace the capabilities of `locale`.
    pub fn register(&mut self, locale: LocaleCode, capabilities: LocaleCapabilities) -> &mut Self {
        self.capabilities[locale.index()] = capabilities;
        self
    }

    pub fn capabilities(&self, locale: LocaleCode) -> &LocaleCapabilities {
        &self.capabilities[locale.index()]
    }

    pub fn has_romanizer(&self, locale: LocaleCode) -> bool {
        self.capabilities(locale).romanizer.is_some()
    }

    pub fn has_reader(&self, locale: LocaleCode) -> bool {
        self.capabilities(locale).reader.is_some()
    }

    pub fn has_normalizer(&self, locale: LocaleCode) -> bool {
        self.capabilities(locale).normalizer.is_some()
    }

    /// Tag of the locale's romanizer, or `{language}-Latn` without one.
    pub fn language_tag(&self, locale: LocaleCode) -> String {
        match self.capabilities(locale).romanizer() {
            Some(romanizer) => romanizer.language_tag().to_string(),
            None => default_language_tag(locale),
        }
    }

    pub fn romanize(
        &self,
        text: &str,
        locale: LocaleCode,
    ) -> Result<RomanizationResult, ReadingError> {
        match self.capabilities(locale).romanizer() {
            Some(romanizer) => romanizer.romanize(text),
            None => Ok(RomanizationResult::new(
                default_language_tag(locale),
                strip_whitespace(text),
            )),
        }
    }

    pub fn read(
        &self,
        locale: LocaleCode,
        term: &str,
        normalized: &str,
        context: &str,
    ) -> Result<Vec<CharacterReading>, ReadingError> {
        match self.capabilities(locale).reader() {
            Some(reader) => reader.read(term, normalized, context),
            None => Ok(term.chars().map(CharacterReading::identity).collect()),
        }
    }

    /// Rewrite `text` from `source`'s script into the script `target`'s
    /// reader expects. Unsupported directions return the text unchanged.
    pub fn normalize(&self, text: &str, source: LocaleCode, target: LocaleCode) -> String {
        if target == LocaleCode::Ja {
            return VariantTables::global().to_shinjitai(text, source);
        }
        match self.capabilities(source).normalizer() {
            Some(normalizer) => normalizer.to_traditional(text),
            None => {
                debug!(%source, %target, "no normalizer, passing text through");
                text.to_string()
            }
        }
    }
}

fn default_language_tag(locale: LocaleCode) -> String {
    format!("{}-Latn", locale.language())
}
