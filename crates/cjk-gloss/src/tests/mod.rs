mod orchestrator;

use cjk_core::{CharacterReading, LocaleCode, Registry};

use crate::{ReadingOrchestrator, Term, Word};

fn orchestrator() -> ReadingOrchestrator<'static> {
    ReadingOrchestrator::new(Registry::global())
}

fn word(locale: LocaleCode, terms: impl IntoIterator<Item = Term>) -> Word {
    Word::new(locale, terms)
}

/// Readings flattened to `(character, reading)` pairs for compact asserts.
fn pairs(readings: &[Vec<CharacterReading>]) -> Vec<(char, String)> {
    readings
        .iter()
        .flatten()
        .map(|r| (r.character, r.reading.clone()))
        .collect()
}

#[test]
fn init_tracing_is_callable_twice() {
    let dir = std::env::temp_dir();
    crate::init_tracing(&dir);
    crate::init_tracing(&dir);
}
