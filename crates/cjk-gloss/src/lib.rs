//! Per-word readings and romanization for vocabulary comparison tables.
//!
//! A [`Word`] is an ordered run of [`Term`]s in one locale. The
//! [`ReadingOrchestrator`] walks a word left to right and asks the
//! `cjk_core` registry for ruby-style character readings in any display
//! locale, carrying the context the Korean reader needs.

mod catalog;
mod orchestrator;
mod spacing;
mod term;
mod trace_init;
mod word;

#[cfg(test)]
mod tests;

pub use catalog::{canonical_key, ReadingCatalog};
pub use orchestrator::{split_reading, ReadingOrchestrator};
pub use spacing::{Spacing, SpacingValue};
pub use term::{Loan, Term};
pub use trace_init::init_tracing;
pub use word::Word;

pub use cjk_core::{CharacterReading, LocaleCode, ReadingError, Registry, RomanizationResult};
