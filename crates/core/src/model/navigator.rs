use std::time::Duration;

use crate::catalog::Catalog;
use crate::model::{ACTIVITY_COUNT, PageIndex, PageKind};

/// How long the page body stays faded out before the page changes.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(200);

/// A page change that has been requested but not applied yet.
///
/// Returned by `Navigator::go_next` / `Navigator::go_previous`; the caller
/// waits `TRANSITION_DELAY` and then hands it back to `Navigator::complete`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct PendingTransition {
    from: PageIndex,
    to: PageIndex,
}

impl PendingTransition {
    #[must_use]
    pub fn origin(&self) -> PageIndex {
        self.from
    }

    #[must_use]
    pub fn target(&self) -> PageIndex {
        self.to
    }
}

/// Session state for one run through the guide.
///
/// Answers typed into the activity and report fields are not part of this
/// state; they live only in the input elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    learner_name: String,
    page: PageIndex,
    transitioning: bool,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the guide on `page` with a prefilled learner name.
    #[must_use]
    pub fn starting_at(page: PageIndex, learner_name: impl Into<String>) -> Self {
        Self {
            learner_name: learner_name.into(),
            page,
            transitioning: false,
        }
    }

    #[must_use]
    pub fn page(&self) -> PageIndex {
        self.page
    }

    #[must_use]
    pub fn learner_name(&self) -> &str {
        &self.learner_name
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.learner_name = value.into();
    }

    /// Requests the following page. No-op on the last page.
    ///
    /// The target is computed from the page shown right now, so two requests
    /// issued before the first completes both point at the same page.
    pub fn go_next(&mut self) -> Option<PendingTransition> {
        let to = self.page.next()?;
        Some(self.begin(to))
    }

    /// Requests the preceding page. No-op on the first page.
    pub fn go_previous(&mut self) -> Option<PendingTransition> {
        let to = self.page.previous()?;
        Some(self.begin(to))
    }

    /// Applies a pending transition and ends the fade.
    ///
    /// Returns the page now shown; the caller resets the scroll position.
    pub fn complete(&mut self, transition: PendingTransition) -> PageIndex {
        self.page = transition.to;
        self.transitioning = false;
        self.page
    }

    fn begin(&mut self, to: PageIndex) -> PendingTransition {
        self.transitioning = true;
        PendingTransition {
            from: self.page,
            to,
        }
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        !self.page.is_first()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        !self.page.is_last()
    }

    /// Only the report page offers the image export.
    #[must_use]
    pub fn shows_export(&self) -> bool {
        self.page.is_last()
    }

    #[must_use]
    pub fn next_button_label(&self, catalog: &Catalog) -> &'static str {
        match self.page.value() {
            0 => catalog.chrome.start,
            n if n == ACTIVITY_COUNT => catalog.chrome.write_report,
            _ => catalog.chrome.next,
        }
    }

    #[must_use]
    pub fn status_label(&self, catalog: &Catalog) -> String {
        match self.page.kind() {
            PageKind::Intro => catalog.chrome.intro_status.to_string(),
            PageKind::Activity(number) => catalog.locale.activity_status(number, ACTIVITY_COUNT),
            PageKind::Report => catalog.chrome.report_status.to_string(),
        }
    }

    /// The trimmed name shown in the report heading, or the placeholder
    /// when it is blank. Blank here means the same as in `report_file_name`.
    #[must_use]
    pub fn report_name<'a>(&'a self, catalog: &'a Catalog) -> &'a str {
        let name = self.learner_name.trim();
        if name.is_empty() {
            catalog.report.name_placeholder
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Locale;
    use crate::model::{PAGE_COUNT, report_file_name};

    fn step(nav: &mut Navigator, forward: bool) {
        let pending = if forward {
            nav.go_next()
        } else {
            nav.go_previous()
        };
        if let Some(pending) = pending {
            nav.complete(pending);
        }
    }

    #[test]
    fn starts_on_intro_with_empty_name() {
        let nav = Navigator::new();
        assert_eq!(nav.page(), PageIndex::FIRST);
        assert_eq!(nav.learner_name(), "");
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn go_next_marks_transition_until_completed() {
        let mut nav = Navigator::new();
        let pending = nav.go_next().expect("transition");
        assert!(nav.is_transitioning());
        assert_eq!(nav.page().value(), 0);
        assert_eq!(pending.origin().value(), 0);
        assert_eq!(pending.target().value(), 1);

        let shown = nav.complete(pending);
        assert_eq!(shown.value(), 1);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn boundaries_are_noops() {
        let mut nav = Navigator::new();
        assert!(nav.go_previous().is_none());
        assert!(!nav.is_transitioning());

        let mut nav = Navigator::starting_at(PageIndex::LAST, "");
        assert!(nav.go_next().is_none());
        assert_eq!(nav.page(), PageIndex::LAST);
    }

    #[test]
    fn index_stays_in_range_for_any_sequence() {
        let mut nav = Navigator::new();
        // xorshift walk, deterministic across runs
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            step(&mut nav, seed % 2 == 0);
            assert!(nav.page().value() < PAGE_COUNT);
        }
        for _ in 0..10 {
            step(&mut nav, true);
        }
        assert_eq!(nav.page(), PageIndex::LAST);
        for _ in 0..10 {
            step(&mut nav, false);
        }
        assert_eq!(nav.page(), PageIndex::FIRST);
    }

    #[test]
    fn overlapping_requests_share_a_target() {
        let mut nav = Navigator::new();
        let first = nav.go_next().expect("first");
        let second = nav.go_next().expect("second");
        assert_eq!(first.target(), second.target());
        nav.complete(first);
        nav.complete(second);
        assert_eq!(nav.page().value(), 1);
    }

    #[test]
    fn button_label_follows_page() {
        let catalog = Catalog::for_locale(Locale::English);
        let mut nav = Navigator::new();
        assert_eq!(nav.next_button_label(catalog), catalog.chrome.start);
        step(&mut nav, true);
        assert_eq!(nav.next_button_label(catalog), catalog.chrome.next);
        step(&mut nav, true);
        assert_eq!(nav.next_button_label(catalog), catalog.chrome.next);
        step(&mut nav, true);
        assert_eq!(nav.page().value(), 3);
        assert_eq!(nav.next_button_label(catalog), catalog.chrome.write_report);
        step(&mut nav, true);
        assert_eq!(nav.next_button_label(catalog), catalog.chrome.next);
        assert!(!nav.can_go_next());
    }

    #[test]
    fn status_label_follows_page() {
        let catalog = Catalog::for_locale(Locale::English);
        let labels: Vec<_> = (0..PAGE_COUNT)
            .map(|value| {
                Navigator::starting_at(PageIndex::new(value).unwrap(), "").status_label(catalog)
            })
            .collect();
        assert_eq!(
            labels,
            vec![
                "Introduction",
                "Activity 1 of 3",
                "Activity 2 of 3",
                "Activity 3 of 3",
                "Final Report",
            ]
        );
    }

    #[test]
    fn korean_status_label_uses_slash_format() {
        let catalog = Catalog::for_locale(Locale::Korean);
        let nav = Navigator::starting_at(PageIndex::new(2).unwrap(), "");
        assert_eq!(nav.status_label(catalog), "활동 2 / 3");
    }

    #[test]
    fn export_only_on_report_page() {
        for value in 0..PAGE_COUNT {
            let nav = Navigator::starting_at(PageIndex::new(value).unwrap(), "");
            assert_eq!(nav.shows_export(), value == PAGE_COUNT - 1);
        }
    }

    #[test]
    fn report_name_falls_back_to_placeholder() {
        let catalog = Catalog::for_locale(Locale::English);
        let mut nav = Navigator::starting_at(PageIndex::LAST, "");
        assert_eq!(nav.report_name(catalog), catalog.report.name_placeholder);
        nav.set_name("Minji");
        assert_eq!(nav.report_name(catalog), "Minji");
        nav.set_name("");
        assert_eq!(nav.report_name(catalog), catalog.report.name_placeholder);
    }

    #[test]
    fn blank_name_agrees_with_export_file_name() {
        let catalog = Catalog::for_locale(Locale::English);
        let stem = catalog.export.file_stem;
        let nav = Navigator::starting_at(PageIndex::LAST, "   ");
        assert_eq!(nav.report_name(catalog), catalog.report.name_placeholder);
        assert_eq!(report_file_name(nav.learner_name(), stem), format!("{stem}.png"));

        let nav = Navigator::starting_at(PageIndex::LAST, "  Minji ");
        assert_eq!(nav.report_name(catalog), "Minji");
        assert_eq!(
            report_file_name(nav.learner_name(), stem),
            format!("Minji-{stem}.png")
        );
    }
}
