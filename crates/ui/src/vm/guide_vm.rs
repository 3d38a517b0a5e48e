use guide_core::Catalog;
use guide_core::model::{Navigator, PageIndex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    Previous,
    Next,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavBarVm {
    pub previous_label: &'static str,
    pub next_label: &'static str,
    pub status_label: String,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

/// Everything the shell renders, derived from the navigator on each render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuideVm {
    pub page: PageIndex,
    pub fading: bool,
    pub learner_name: String,
    pub report_name: String,
    pub nav_bar: NavBarVm,
    pub shows_export: bool,
}

#[must_use]
pub fn map_guide(nav: &Navigator, catalog: &Catalog) -> GuideVm {
    GuideVm {
        page: nav.page(),
        fading: nav.is_transitioning(),
        learner_name: nav.learner_name().to_string(),
        report_name: nav.report_name(catalog).to_string(),
        nav_bar: NavBarVm {
            previous_label: catalog.chrome.previous,
            next_label: nav.next_button_label(catalog),
            status_label: nav.status_label(catalog),
            can_go_previous: nav.can_go_previous(),
            can_go_next: nav.can_go_next(),
        },
        shows_export: nav.shows_export(),
    }
}
