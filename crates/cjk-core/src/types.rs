use serde::Serialize;

use crate::resource::ResourceError;

/// Romanized form of a text together with the BCP 47 tag of the system used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RomanizationResult {
    pub language_tag: String,
    pub text: String,
}

impl RomanizationResult {
    pub fn new(language_tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            language_tag: language_tag.into(),
            text: text.into(),
        }
    }
}

/// One character of a term paired with its pronunciation in the display
/// locale. An identity reading (reading == the character itself) means no
/// annotation should be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterReading {
    pub character: char,
    pub reading: String,
}

impl CharacterReading {
    pub fn new(character: char, reading: impl Into<String>) -> Self {
        Self {
            character,
            reading: reading.into(),
        }
    }

    pub fn identity(character: char) -> Self {
        Self {
            character,
            reading: character.to_string(),
        }
    }

    pub fn is_identity(&self) -> bool {
        let mut chars = self.reading.chars();
        chars.next() == Some(self.character) && chars.next().is_none()
    }

    pub fn is_annotated(&self) -> bool {
        !self.is_identity()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReadingError {
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// Pair every character of `term` positionally with the next unit of
/// `readings`. Characters past the end of `readings`, or paired with `None`,
/// get an identity reading; surplus readings are dropped.
pub fn pair_readings<I>(term: &str, readings: I) -> Vec<CharacterReading>
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut readings = readings.into_iter();
    term.chars()
        .map(|c| match readings.next().flatten() {
            Some(reading) => CharacterReading::new(c, reading),
            None => CharacterReading::identity(c),
        })
        .collect()
}
