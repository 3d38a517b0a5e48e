use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of pages in the guide: intro, three activities, report.
pub const PAGE_COUNT: u8 = 5;

/// Number of activity pages between the intro and the report.
pub const ACTIVITY_COUNT: u8 = PAGE_COUNT - 2;

/// Position in the fixed page sequence. Always in `0..PAGE_COUNT`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageIndex(u8);

impl PageIndex {
    pub const FIRST: Self = Self(0);
    pub const LAST: Self = Self(PAGE_COUNT - 1);

    /// Creates a validated page index.
    ///
    /// # Errors
    ///
    /// Returns `PageIndexError::OutOfRange` if `value >= PAGE_COUNT`.
    pub fn new(value: u8) -> Result<Self, PageIndexError> {
        if value >= PAGE_COUNT {
            return Err(PageIndexError::OutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Returns the underlying u8 value
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    /// The following page, or `None` on the last page.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        if self.is_last() {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }

    /// The preceding page, or `None` on the first page.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }

    #[must_use]
    pub fn kind(self) -> PageKind {
        match self.0 {
            0 => PageKind::Intro,
            n if n == PAGE_COUNT - 1 => PageKind::Report,
            n => PageKind::Activity(n),
        }
    }
}

impl fmt::Debug for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PageIndex({})", self.0)
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for PageIndex {
    type Error = PageIndexError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for PageIndex {
    type Err = PageIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s.trim().parse().map_err(|_| PageIndexError::Invalid {
            raw: s.to_string(),
        })?;
        Self::new(value)
    }
}

/// What a page shows. Activities carry their 1-based number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Intro,
    Activity(u8),
    Report,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PageIndexError {
    #[error("page index {value} is out of range (0..{PAGE_COUNT})")]
    OutOfRange { value: u8 },
    #[error("invalid page index: {raw}")]
    Invalid { raw: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(
            PageIndex::new(PAGE_COUNT).unwrap_err(),
            PageIndexError::OutOfRange { value: PAGE_COUNT }
        );
        assert!(PageIndex::new(PAGE_COUNT - 1).is_ok());
    }

    #[test]
    fn boundaries_have_no_neighbours() {
        assert_eq!(PageIndex::FIRST.previous(), None);
        assert_eq!(PageIndex::LAST.next(), None);
        assert_eq!(PageIndex::FIRST.next().map(PageIndex::value), Some(1));
        assert_eq!(PageIndex::LAST.previous().map(PageIndex::value), Some(3));
    }

    #[test]
    fn kind_maps_sequence() {
        let kinds: Vec<_> = (0..PAGE_COUNT)
            .map(|value| PageIndex::new(value).unwrap().kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                PageKind::Intro,
                PageKind::Activity(1),
                PageKind::Activity(2),
                PageKind::Activity(3),
                PageKind::Report,
            ]
        );
    }

    #[test]
    fn parses_from_str() {
        assert_eq!(" 3 ".parse::<PageIndex>().unwrap().value(), 3);
        assert!(matches!(
            "x".parse::<PageIndex>(),
            Err(PageIndexError::Invalid { .. })
        ));
        assert!(matches!(
            "9".parse::<PageIndex>(),
            Err(PageIndexError::OutOfRange { value: 9 })
        ));
    }
}
