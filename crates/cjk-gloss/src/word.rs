use serde::{Deserialize, Serialize};

use cjk_core::LocaleCode;

use crate::term::Term;

/// An ordered run of terms in one locale. Term order matters: Korean
/// readings depend on the terms before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub locale: LocaleCode,
    pub terms: Vec<Term>,
}

impl Word {
    pub fn new(locale: LocaleCode, terms: impl IntoIterator<Item = Term>) -> Self {
        Self {
            locale,
            terms: terms.into_iter().collect(),
        }
    }

    /// The terms' text concatenated without separators.
    pub fn text(&self) -> String {
        self.terms.iter().map(|t| t.text.as_str()).collect()
    }

    pub fn char_count(&self) -> usize {
        self.terms.iter().map(|t| t.text.chars().count()).sum()
    }
}
