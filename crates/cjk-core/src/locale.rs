use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of locales the vocabulary tables are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LocaleCode {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "ko")]
    Ko,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "zh-HK")]
    ZhHk,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("unsupported locale: {0}")]
    Unsupported(String),
}

impl LocaleCode {
    pub const ALL: [LocaleCode; 6] = [
        LocaleCode::En,
        LocaleCode::Ja,
        LocaleCode::Ko,
        LocaleCode::ZhCn,
        LocaleCode::ZhHk,
        LocaleCode::ZhTw,
    ];

    /// BCP 47 form with a hyphen separator, e.g. `zh-CN`.
    pub const fn as_str(self) -> &'static str {
        match self {
            LocaleCode::En => "en",
            LocaleCode::Ja => "ja",
            LocaleCode::Ko => "ko",
            LocaleCode::ZhCn => "zh-CN",
            LocaleCode::ZhHk => "zh-HK",
            LocaleCode::ZhTw => "zh-TW",
        }
    }

    pub const fn language(self) -> &'static str {
        match self {
            LocaleCode::En => "en",
            LocaleCode::Ja => "ja",
            LocaleCode::Ko => "ko",
            LocaleCode::ZhCn | LocaleCode::ZhHk | LocaleCode::ZhTw => "zh",
        }
    }

    pub const fn territory(self) -> Option<&'static str> {
        match self {
            LocaleCode::ZhCn => Some("CN"),
            LocaleCode::ZhHk => Some("HK"),
            LocaleCode::ZhTw => Some("TW"),
            LocaleCode::En | LocaleCode::Ja | LocaleCode::Ko => None,
        }
    }

    /// Japanese and Chinese do not put spaces between words.
    pub const fn is_spaceless(self) -> bool {
        matches!(
            self,
            LocaleCode::Ja | LocaleCode::ZhCn | LocaleCode::ZhHk | LocaleCode::ZhTw
        )
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for LocaleCode {
    type Err = LocaleError;

    /// Accepts both `zh-CN` and `zh_CN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('_', "-");
        LocaleCode::ALL
            .into_iter()
            .find(|l| l.as_str() == normalized)
            .ok_or_else(|| LocaleError::Unsupported(s.to_string()))
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
