use std::sync::Arc;
use std::time::Duration;

use guide_core::model::{Navigator, PageIndex, TRANSITION_DELAY};
use guide_core::{Catalog, Locale};
use services::ExportService;

pub trait UiApp: Send + Sync {
    fn locale(&self) -> Locale;
    fn start_page(&self) -> PageIndex;
    fn learner_name(&self) -> String;

    /// Script URL of the DOM-to-image library, injected into the document.
    fn rasterizer_src(&self) -> Option<String>;

    fn export_service(&self) -> Arc<ExportService>;

    fn transition_delay(&self) -> Duration {
        TRANSITION_DELAY
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: &'static Catalog,
    start_page: PageIndex,
    learner_name: String,
    rasterizer_src: Option<String>,
    transition_delay: Duration,

    export_service: Arc<ExportService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: Catalog::for_locale(app.locale()),
            start_page: app.start_page(),
            learner_name: app.learner_name(),
            rasterizer_src: app.rasterizer_src(),
            transition_delay: app.transition_delay(),
            export_service: app.export_service(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Fresh session state for a new run through the guide.
    #[must_use]
    pub fn initial_navigator(&self) -> Navigator {
        Navigator::starting_at(self.start_page, self.learner_name.clone())
    }

    #[must_use]
    pub fn rasterizer_src(&self) -> Option<String> {
        self.rasterizer_src.clone()
    }

    #[must_use]
    pub fn transition_delay(&self) -> Duration {
        self.transition_delay
    }

    #[must_use]
    pub fn export_service(&self) -> Arc<ExportService> {
        Arc::clone(&self.export_service)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
