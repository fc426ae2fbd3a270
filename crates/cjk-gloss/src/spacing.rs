use serde::{Deserialize, Serialize};

use cjk_core::LocaleCode;

/// How a term is separated from the term before it.
///
/// The implicit variants come from the locale when the table leaves spacing
/// unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spacing {
    Space,
    NoSpace,
    Hyphen,
    ImplicitSpace,
    ImplicitNoSpace,
}

/// Spacing as written in a table: `space: true`, `space: false` or
/// `space: "hyphen"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpacingValue {
    Flag(bool),
    Text(String),
}

impl Spacing {
    pub fn has_space(self) -> bool {
        matches!(self, Spacing::Space | Spacing::ImplicitSpace)
    }

    pub fn has_no_space(self) -> bool {
        matches!(self, Spacing::NoSpace | Spacing::ImplicitNoSpace)
    }

    pub fn is_implicit(self) -> bool {
        matches!(self, Spacing::ImplicitSpace | Spacing::ImplicitNoSpace)
    }

    pub fn separator(self) -> &'static str {
        match self {
            Spacing::Hyphen => "-",
            Spacing::Space | Spacing::ImplicitSpace => " ",
            Spacing::NoSpace | Spacing::ImplicitNoSpace => "",
        }
    }

    pub fn implicit_for(locale: LocaleCode) -> Spacing {
        if locale.is_spaceless() {
            Spacing::ImplicitNoSpace
        } else {
            Spacing::ImplicitSpace
        }
    }

    /// Unknown strings resolve to `implicit_default`, like a missing value.
    pub fn parse(value: Option<&SpacingValue>, implicit_default: Spacing) -> Spacing {
        match value {
            None => implicit_default,
            Some(SpacingValue::Flag(true)) => Spacing::Space,
            Some(SpacingValue::Flag(false)) => Spacing::NoSpace,
            Some(SpacingValue::Text(s)) if s == "hyphen" => Spacing::Hyphen,
            Some(SpacingValue::Text(_)) => implicit_default,
        }
    }
}
