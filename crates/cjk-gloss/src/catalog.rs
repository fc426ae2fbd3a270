use std::collections::HashMap;

use cjk_core::{LocaleCode, Registry};

use crate::word::Word;

/// Readings already written in the table, keyed by display locale and
/// canonical text.
///
/// When a term of one locale is shown in another, a term of the display
/// locale with the same canonical text has a hand-checked reading that
/// beats any dictionary lookup.
#[derive(Debug, Default, Clone)]
pub struct ReadingCatalog {
    entries: HashMap<(LocaleCode, String), String>,
}

/// Lowercased canonical form of `text`: traditional characters when
/// `locale` registers a normalizer, the text itself otherwise.
pub fn canonical_key(registry: &Registry, text: &str, locale: LocaleCode) -> String {
    let canonical = match registry.capabilities(locale).normalizer() {
        Some(normalizer) => normalizer.to_traditional(text),
        None => text.to_string(),
    };
    canonical.to_lowercase()
}

impl ReadingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog every term with a reading. The first term for a key wins.
    pub fn from_words<'a>(
        registry: &Registry,
        words: impl IntoIterator<Item = &'a Word>,
    ) -> Self {
        let mut catalog = Self::new();
        for word in words {
            for term in &word.terms {
                if let Some(reading) = &term.reading {
                    let key = canonical_key(registry, &term.text, word.locale);
                    catalog.insert(word.locale, key, reading.clone());
                }
            }
        }
        catalog
    }

    /// Returns false when the key was already present.
    pub fn insert(&mut self, locale: LocaleCode, key: String, reading: String) -> bool {
        match self.entries.entry((locale, key)) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(reading);
                true
            }
        }
    }

    pub fn lookup(&self, locale: LocaleCode, key: &str) -> Option<&str> {
        self.entries
            .get(&(locale, key.to_string()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;

    #[test]
    fn keys_are_canonical_traditional() {
        let registry = Registry::global();
        assert_eq!(canonical_key(registry, "电脑", LocaleCode::ZhCn), "電腦");
        assert_eq!(canonical_key(registry, "電脳", LocaleCode::Ja), "電腦");
        assert_eq!(canonical_key(registry, "電腦", LocaleCode::ZhTw), "電腦");
        assert_eq!(canonical_key(registry, "Software", LocaleCode::En), "software");
    }

    #[test]
    fn first_entry_wins() {
        let registry = Registry::global();
        let words = [
            Word::new(LocaleCode::ZhHk, [Term::new("電腦").with_reading("din6 nou5")]),
            Word::new(LocaleCode::ZhHk, [Term::new("電腦").with_reading("x y")]),
            Word::new(LocaleCode::ZhHk, [Term::new("電")]),
        ];
        let catalog = ReadingCatalog::from_words(registry, &words);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup(LocaleCode::ZhHk, "電腦"), Some("din6 nou5"));
        assert_eq!(catalog.lookup(LocaleCode::ZhTw, "電腦"), None);
    }
}
