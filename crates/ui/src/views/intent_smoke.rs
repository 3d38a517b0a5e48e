use std::sync::Arc;
use std::time::Duration;

use guide_core::Locale;
use guide_core::model::PageIndex;

use super::test_harness::{
    GuideIntentHarness, ReadyRasterizer, RecordingAlerter, RecordingDownloader, TestApp,
};
use crate::vm::NavIntent;

const SHORT_DELAY: Duration = Duration::from_millis(5);

fn quick_app(page: u8) -> TestApp {
    TestApp {
        delay: SHORT_DELAY,
        ..TestApp::new(Locale::English, page, "")
    }
}

#[tokio::test(flavor = "current_thread")]
async fn next_fades_then_lands_on_the_following_page() {
    let mut harness = GuideIntentHarness::new(quick_app(0));

    harness.intent(NavIntent::Next);
    let html = harness.html();
    assert!(html.contains("guide-main--fading"), "missing fade in {html}");
    assert!(html.contains("Introduction"), "page changed too early: {html}");
    assert_eq!(harness.navigator().page(), PageIndex::FIRST);

    harness.settle(|h| !h.navigator().is_transitioning()).await;

    let nav = harness.navigator();
    assert_eq!(nav.page().value(), 1);
    assert!(!nav.is_transitioning());
    let html = harness.html();
    assert!(html.contains("Activity 1 of 3"), "missing activity status in {html}");
    assert!(!html.contains("guide-main--fading"), "fade left behind in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn previous_steps_back_after_the_delay() {
    let mut harness = GuideIntentHarness::new(quick_app(2));

    harness.intent(NavIntent::Previous);
    harness.settle(|h| !h.navigator().is_transitioning()).await;

    assert_eq!(harness.navigator().page().value(), 1);
    assert!(harness.html().contains("Activity 1 of 3"));
}

#[tokio::test(flavor = "current_thread")]
async fn next_on_report_page_changes_nothing() {
    let mut harness = GuideIntentHarness::new(quick_app(4));
    let before = harness.html();

    harness.intent(NavIntent::Next);
    harness.settle(|_| false).await;

    let nav = harness.navigator();
    assert_eq!(nav.page(), PageIndex::LAST);
    assert!(!nav.is_transitioning());
    assert_eq!(harness.html(), before);
}

#[tokio::test(flavor = "current_thread")]
async fn export_without_rasterizer_alerts_once() {
    let alerter = Arc::new(RecordingAlerter::default());
    let downloader = Arc::new(RecordingDownloader::default());
    let mut harness = GuideIntentHarness::new(TestApp {
        alerter: alerter.clone(),
        downloader: downloader.clone(),
        ..quick_app(4)
    });
    assert!(harness.html().contains("export-report"));

    harness.export();
    harness.settle(|_| !alerter.messages().is_empty()).await;

    assert_eq!(alerter.messages(), vec!["Saving as an image is not available."]);
    assert!(downloader.files().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn export_uses_the_name_typed_into_the_header() {
    let alerter = Arc::new(RecordingAlerter::default());
    let downloader = Arc::new(RecordingDownloader::default());
    let mut harness = GuideIntentHarness::new(TestApp {
        rasterizer: Some(Arc::new(ReadyRasterizer)),
        alerter: alerter.clone(),
        downloader: downloader.clone(),
        ..quick_app(4)
    });

    harness.rename("Minji");
    assert!(harness.html().contains("Minji"));

    harness.export();
    harness.settle(|_| !downloader.files().is_empty()).await;

    assert_eq!(
        downloader.files(),
        vec!["Minji-population-expedition-report.png"]
    );
    assert!(alerter.messages().is_empty());
}
