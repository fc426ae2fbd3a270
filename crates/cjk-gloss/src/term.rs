use serde::{Deserialize, Serialize};

use cjk_core::LocaleCode;

use crate::spacing::{Spacing, SpacingValue};

/// One morpheme or word part as written in a vocabulary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    #[serde(alias = "term")]
    pub text: String,
    /// One unit per character, whitespace-separated.
    #[serde(default, alias = "read", skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan: Option<Loan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<SpacingValue>,
}

/// The source word of a loanword term, e.g. `computer` for コンピューター.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub source: String,
    #[serde(default = "default_loan_locale")]
    pub locale: LocaleCode,
}

fn default_loan_locale() -> LocaleCode {
    LocaleCode::En
}

impl Term {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reading: None,
            loan: None,
            space: None,
        }
    }

    pub fn with_reading(mut self, reading: impl Into<String>) -> Self {
        self.reading = Some(reading.into());
        self
    }

    pub fn with_loan(mut self, loan: Loan) -> Self {
        self.loan = Some(loan);
        self
    }

    pub fn with_space(mut self, space: SpacingValue) -> Self {
        self.space = Some(space);
        self
    }

    pub fn spaced(self, space: bool) -> Self {
        self.with_space(SpacingValue::Flag(space))
    }

    pub fn hyphenated(self) -> Self {
        self.with_space(SpacingValue::Text("hyphen".to_string()))
    }

    /// Spacing before this term inside a word of `locale`.
    pub fn spacing(&self, locale: LocaleCode) -> Spacing {
        Spacing::parse(self.space.as_ref(), Spacing::implicit_for(locale))
    }

    pub fn reading_units(&self) -> impl Iterator<Item = &str> {
        self.reading.as_deref().unwrap_or_default().split_whitespace()
    }

    pub fn is_loan(&self) -> bool {
        self.loan.is_some()
    }
}

impl Loan {
    pub fn new(source: impl Into<String>, locale: LocaleCode) -> Self {
        Self {
            source: source.into(),
            locale,
        }
    }

    /// Proper-noun loans keep their capital in romanization.
    pub fn is_capitalized(&self) -> bool {
        self.source.chars().next().is_some_and(char::is_uppercase)
    }
}
