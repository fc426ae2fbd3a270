use tracing::{debug, debug_span};

use cjk_core::{pair_readings, CharacterReading, LocaleCode, ReadingError, Registry, RomanizationResult};

use crate::catalog::{canonical_key, ReadingCatalog};
use crate::term::Term;
use crate::word::Word;

/// Resolves the readings of whole words, term by term, in any display
/// locale.
pub struct ReadingOrchestrator<'a> {
    registry: &'a Registry,
    catalog: Option<&'a ReadingCatalog>,
}

/// Pair each character of `text` with one whitespace-separated unit of
/// `reading`. Characters past the last unit read as themselves.
pub fn split_reading(text: &str, reading: Option<&str>) -> Vec<CharacterReading> {
    let units = reading
        .unwrap_or_default()
        .split_whitespace()
        .map(|unit| Some(unit.to_string()));
    pair_readings(text, units)
}

impl ReadingOrchestrator<'static> {
    /// Orchestrator over the standard registry, without a catalog.
    pub fn global() -> Self {
        Self::new(Registry::global())
    }
}

impl<'a> ReadingOrchestrator<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            catalog: None,
        }
    }

    pub fn with_catalog(mut self, catalog: &'a ReadingCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// One reading list per term, in term order.
    ///
    /// Terms are read strictly left to right. The context handed to each
    /// term is the normalized text of the terms before it, restarting at
    /// any term preceded by a space.
    pub fn read_word(
        &self,
        word: &Word,
        target: LocaleCode,
    ) -> Result<Vec<Vec<CharacterReading>>, ReadingError> {
        let _span = debug_span!(
            "read_word",
            locale = %word.locale,
            target = %target,
            terms = word.terms.len()
        )
        .entered();

        let mut context = String::new();
        let mut readings = Vec::with_capacity(word.terms.len());
        for term in &word.terms {
            if term.spacing(word.locale).has_space() {
                context.clear();
            }
            readings.push(self.read_term(term, word.locale, target, &context)?);
            context.push_str(&self.registry.normalize(&term.text, word.locale, target));
        }
        Ok(readings)
    }

    /// Readings for one term of a `source` word shown in `target`.
    pub fn read_term(
        &self,
        term: &Term,
        source: LocaleCode,
        target: LocaleCode,
        context: &str,
    ) -> Result<Vec<CharacterReading>, ReadingError> {
        if source == target || !self.registry.has_reader(target) {
            return Ok(split_reading(&term.text, term.reading.as_deref()));
        }

        if let Some(catalog) = self.catalog {
            let key = canonical_key(self.registry, &term.text, source);
            if let Some(reading) = catalog.lookup(target, &key) {
                debug!(term = %term.text, %key, "catalog reading");
                return Ok(split_reading(&term.text, Some(reading)));
            }
        }

        let normalized = self.registry.normalize(&term.text, source, target);
        self.registry.read(target, &term.text, &normalized, context)
    }

    /// Romanize a word in its own locale.
    ///
    /// Each term is romanized on its own, from its reading when it has
    /// one, and the parts are joined with the terms' separators. Loans of
    /// capitalized source words are capitalized.
    pub fn romanize_word(&self, word: &Word) -> Result<RomanizationResult, ReadingError> {
        let _span = debug_span!("romanize_word", locale = %word.locale).entered();

        let mut text = String::new();
        for (i, term) in word.terms.iter().enumerate() {
            let input = term.reading.as_deref().unwrap_or(&term.text);
            let mut part = self.registry.romanize(input, word.locale)?.text;
            if term.loan.as_ref().is_some_and(|loan| loan.is_capitalized()) {
                part = capitalize(&part);
            }
            if i > 0 {
                text.push_str(term.spacing(word.locale).separator());
            }
            text.push_str(&part);
        }
        Ok(RomanizationResult::new(
            self.registry.language_tag(word.locale),
            text,
        ))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
