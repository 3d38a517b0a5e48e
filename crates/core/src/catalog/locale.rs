use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Content language of the guide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Korean,
    English,
}

impl Locale {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Korean => "ko",
            Self::English => "en",
        }
    }

    /// Footer label for an activity page, e.g. "Activity 2 of 3".
    #[must_use]
    pub fn activity_status(self, number: u8, total: u8) -> String {
        match self {
            Self::Korean => format!("활동 {number} / {total}"),
            Self::English => format!("Activity {number} of {total}"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let primary = normalized
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        match primary {
            "ko" | "kor" | "korean" => Ok(Self::Korean),
            "en" | "eng" | "english" => Ok(Self::English),
            _ => Err(LocaleError::Unsupported { raw: s.to_string() }),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LocaleError {
    #[error("unsupported locale: {raw} (expected ko or en)")]
    Unsupported { raw: String },
}
