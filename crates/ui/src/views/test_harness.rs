use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use guide_core::model::{Navigator, PageIndex, TRANSITION_DELAY};
use guide_core::{Catalog, Locale};
use services::{
    Alerter, AlerterRef, DownloadError, Downloader, DownloaderRef, ExportOptions, ExportService,
    ImageDataUrl, RasterizeError, Rasterizer, RasterizerRef, SnapshotTarget,
};

use crate::context::{UiApp, build_app_context};
use crate::views::GuideShell;
use crate::views::shell::{GuideHandles, guide_frame, use_guide_handles};
use crate::vm::NavIntent;

#[derive(Default)]
pub struct RecordingDownloader {
    files: Mutex<Vec<String>>,
}

impl RecordingDownloader {
    pub fn files(&self) -> Vec<String> {
        self.files.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Downloader for RecordingDownloader {
    async fn download(&self, file_name: &str, _image: &ImageDataUrl) -> Result<(), DownloadError> {
        self.files.lock().unwrap().push(file_name.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingAlerter {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlerter {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Alerter for RecordingAlerter {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Always produces the same tiny PNG.
pub struct ReadyRasterizer;

#[async_trait(?Send)]
impl Rasterizer for ReadyRasterizer {
    async fn probe(&self) -> bool {
        true
    }

    async fn render(
        &self,
        _target: SnapshotTarget,
        _options: &ExportOptions,
    ) -> Result<ImageDataUrl, RasterizeError> {
        Ok(ImageDataUrl::new("data:image/png;base64,iVBORw0KGgo="))
    }
}

pub struct TestApp {
    pub locale: Locale,
    pub page: u8,
    pub learner_name: String,
    pub delay: Duration,
    pub rasterizer: Option<RasterizerRef>,
    pub downloader: DownloaderRef,
    pub alerter: AlerterRef,
}

impl TestApp {
    pub fn new(locale: Locale, page: u8, learner_name: &str) -> Self {
        Self {
            locale,
            page,
            learner_name: learner_name.to_string(),
            delay: TRANSITION_DELAY,
            rasterizer: None,
            downloader: Arc::new(RecordingDownloader::default()),
            alerter: Arc::new(RecordingAlerter::default()),
        }
    }
}

impl UiApp for TestApp {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn start_page(&self) -> PageIndex {
        PageIndex::new(self.page).expect("valid page")
    }

    fn learner_name(&self) -> String {
        self.learner_name.clone()
    }

    fn rasterizer_src(&self) -> Option<String> {
        None
    }

    fn export_service(&self) -> Arc<ExportService> {
        Arc::new(ExportService::new(
            self.rasterizer.clone(),
            Arc::clone(&self.downloader),
            Arc::clone(&self.alerter),
            Catalog::for_locale(self.locale).export,
        ))
    }

    fn transition_delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Props, Clone)]
struct GuideHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for GuideHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn GuideHarness(props: GuideHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { GuideShell {} }
}

/// Renders the whole guide to HTML, starting on `page`.
pub fn render_guide(locale: Locale, page: u8, learner_name: &str) -> String {
    let app = Arc::new(TestApp::new(locale, page, learner_name));
    let mut dom = VirtualDom::new_with_props(GuideHarness, GuideHarnessProps { app });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[derive(Clone, Default)]
struct HarnessHandles {
    guide: Rc<RefCell<Option<GuideHandles>>>,
}

#[derive(Props, Clone)]
struct IntentHarnessProps {
    app: Arc<TestApp>,
    handles: HarnessHandles,
}

impl PartialEq for IntentHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn IntentHarness(props: IntentHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { RegisteredGuide { app: props.app.clone(), handles: props.handles.clone() } }
}

#[component]
fn RegisteredGuide(props: IntentHarnessProps) -> Element {
    let handles = use_guide_handles();
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.guide.borrow_mut() = Some(handles);
    }
    guide_frame(handles)
}

/// A live guide whose real callbacks can be invoked from a test.
pub struct GuideIntentHarness {
    dom: VirtualDom,
    handles: GuideHandles,
}

impl GuideIntentHarness {
    pub fn new(app: TestApp) -> Self {
        let registry = HarnessHandles::default();
        let mut dom = VirtualDom::new_with_props(
            IntentHarness,
            IntentHarnessProps {
                app: Arc::new(app),
                handles: registry.clone(),
            },
        );
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        let handles = (*registry.guide.borrow()).expect("guide handles registered");
        Self { dom, handles }
    }

    pub fn intent(&mut self, intent: NavIntent) {
        let dispatch = self.handles.dispatch;
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn rename(&mut self, name: &str) {
        let on_name_change = self.handles.on_name_change;
        let name = name.to_string();
        self.dom.in_runtime(|| on_name_change.call(name));
        drive_dom(&mut self.dom);
    }

    pub fn export(&mut self) {
        let on_export = self.handles.on_export;
        self.dom.in_runtime(|| on_export.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn navigator(&self) -> Navigator {
        let nav = self.handles.nav;
        self.dom.in_runtime(|| nav.peek().clone())
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Lets spawned tasks run until `done` holds or the attempts run out.
    pub async fn settle(&mut self, mut done: impl FnMut(&Self) -> bool) {
        for _ in 0..40 {
            if done(self) {
                return;
            }
            let _ = tokio::time::timeout(Duration::from_millis(25), self.dom.wait_for_work()).await;
            drive_dom(&mut self.dom);
        }
    }
}

fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}
