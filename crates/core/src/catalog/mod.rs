//! Static page content for the guide.
//!
//! A `Catalog` holds every string the guide shows, for one locale. Pages
//! are described declaratively here and rendered by the ui crate.

mod en;
mod ko;
mod locale;

use thiserror::Error;
use url::Url;

use crate::model::{ACTIVITY_COUNT, PageIndex, PageKind};

pub use locale::{Locale, LocaleError};

/// Icons available to page content. The ui crate maps them to SVG.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Rocket,
    Compass,
    Baby,
    Search,
    Lightbulb,
    Users,
    ChartPie,
    Scale,
    PuzzlePiece,
    Star,
    Compress,
    Heart,
    Trophy,
    ChevronLeft,
    ChevronRight,
    Download,
}

/// Title colour of a question panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Blue,
    Purple,
    Orange,
    Red,
    Green,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line `input`.
    Line,
    /// Multi-line `textarea`.
    Lines { rows: u8 },
}

/// A free-text answer field. Its value is never read back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerField {
    pub kind: FieldKind,
    pub placeholder: &'static str,
    pub before: Option<&'static str>,
    pub after: Option<&'static str>,
    /// Narrow input for short answers like a colour name.
    pub compact: bool,
}

impl AnswerField {
    #[must_use]
    pub const fn line(placeholder: &'static str) -> Self {
        Self {
            kind: FieldKind::Line,
            placeholder,
            before: None,
            after: None,
            compact: false,
        }
    }

    #[must_use]
    pub const fn lines(rows: u8, placeholder: &'static str) -> Self {
        Self {
            kind: FieldKind::Lines { rows },
            placeholder,
            before: None,
            after: None,
            compact: false,
        }
    }

    #[must_use]
    pub const fn labelled(self, before: &'static str, after: Option<&'static str>) -> Self {
        Self {
            before: Some(before),
            after,
            ..self
        }
    }

    #[must_use]
    pub const fn compact(self) -> Self {
        Self {
            compact: true,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Paragraph(&'static str),
    /// Semibold line, used for hints and sub-questions.
    Note(&'static str),
    Field(AnswerField),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionPanel {
    pub title: &'static str,
    pub icon: Icon,
    pub tone: Tone,
    pub body: &'static [Block],
}

impl QuestionPanel {
    pub fn fields(&self) -> impl Iterator<Item = &AnswerField> {
        self.body.iter().filter_map(|block| match block {
            Block::Field(field) => Some(field),
            _ => None,
        })
    }
}

/// How the question panels of an activity are arranged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuestionLayout {
    /// Side by side on wide screens.
    #[default]
    Columns,
    Stacked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivityPage {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub embed_url: &'static str,
    /// Gray page background.
    pub muted: bool,
    pub layout: QuestionLayout,
    pub questions: &'static [QuestionPanel],
}

impl ActivityPage {
    /// Height of the embedded app, in CSS pixels.
    pub const EMBED_HEIGHT: u32 = 500;

    /// Parses the embed address.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidEmbedUrl` if the address does not parse
    /// and `CatalogError::UnsupportedScheme` if it is not http(s).
    pub fn embed_url(&self) -> Result<Url, CatalogError> {
        let url = Url::parse(self.embed_url).map_err(|source| CatalogError::InvalidEmbedUrl {
            raw: self.embed_url.to_string(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CatalogError::UnsupportedScheme {
                raw: self.embed_url.to_string(),
            });
        }
        Ok(url)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntroPage {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportPage {
    pub title: &'static str,
    pub lead: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub questions: &'static [QuestionPanel],
}

/// Header, navigation bar and completion footer text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChromeText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub previous: &'static str,
    pub start: &'static str,
    pub next: &'static str,
    pub write_report: &'static str,
    pub intro_status: &'static str,
    pub report_status: &'static str,
    pub complete_title: &'static str,
    pub complete_message: &'static str,
    pub save_image: &'static str,
    /// Heading of the fallback shown when a page fails to render.
    pub render_failed: &'static str,
}

/// Messages and names used by the image export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportText {
    pub unavailable: &'static str,
    pub failed: &'static str,
    pub file_stem: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Catalog {
    pub locale: Locale,
    pub chrome: ChromeText,
    pub intro: IntroPage,
    pub activities: [ActivityPage; ACTIVITY_COUNT as usize],
    pub report: ReportPage,
    pub export: ExportText,
}

static KOREAN: Catalog = ko::CATALOG;
static ENGLISH: Catalog = en::CATALOG;

impl Catalog {
    #[must_use]
    pub fn for_locale(locale: Locale) -> &'static Catalog {
        match locale {
            Locale::Korean => &KOREAN,
            Locale::English => &ENGLISH,
        }
    }

    /// The activity shown on `page`, if it is an activity page.
    #[must_use]
    pub fn activity(&self, page: PageIndex) -> Option<&ActivityPage> {
        match page.kind() {
            PageKind::Activity(number) => self.activities.get(usize::from(number) - 1),
            PageKind::Intro | PageKind::Report => None,
        }
    }

    /// Checks embed addresses and that every activity asks something.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (index, activity) in self.activities.iter().enumerate() {
            activity.embed_url()?;
            if activity.questions.is_empty() {
                return Err(CatalogError::NoQuestions { activity: index + 1 });
            }
        }
        if self.report.questions.is_empty() {
            return Err(CatalogError::NoReportPrompts);
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("invalid embed url {raw}: {source}")]
    InvalidEmbedUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("embed url must be http(s): {raw}")]
    UnsupportedScheme { raw: String },
    #[error("activity {activity} has no questions")]
    NoQuestions { activity: usize },
    #[error("report has no prompts")]
    NoReportPrompts,
}
