//! Phonetic readings and romanization for CJK vocabulary.
//!
//! Each supported locale registers an optional romanizer, reader and
//! normalizer in a [`Registry`]. Locales without a capability fall back to
//! identity behavior, so callers never special-case a missing capability.

pub mod cantonese;
pub mod japanese;
pub mod korean;
pub mod locale;
pub mod mandarin;
pub mod normalize;
pub mod registry;
pub mod resource;
pub mod settings;
pub mod table;
pub mod types;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use locale::{LocaleCode, LocaleError};
pub use registry::{LocaleCapabilities, Normalizer, Reader, Registry, Romanizer};
pub use resource::{ResourceError, ResourceState, SharedResource};
pub use types::{pair_readings, CharacterReading, ReadingError, RomanizationResult};
