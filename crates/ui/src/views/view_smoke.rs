use guide_core::Locale;
use guide_core::model::PAGE_COUNT;

use super::test_harness::render_guide;

#[test]
fn intro_renders_start_label_and_status() {
    let html = render_guide(Locale::English, 0, "");
    assert!(html.contains("Start the Expedition!"), "missing start label in {html}");
    assert!(html.contains("Introduction"), "missing status in {html}");
    assert!(!html.contains("<iframe"), "intro must not embed an app: {html}");
    assert!(!html.contains("<textarea"), "intro must not ask questions: {html}");
}

#[test]
fn export_control_only_on_report_page() {
    for page in 0..PAGE_COUNT {
        let html = render_guide(Locale::English, page, "");
        let has_export = html.contains("export-report");
        assert_eq!(has_export, page == PAGE_COUNT - 1, "page {page}: {html}");
    }
}

#[test]
fn report_heading_shows_learner_name() {
    let html = render_guide(Locale::English, 4, "Minji");
    assert!(html.contains("Minji"), "missing learner name in {html}");
    assert!(!html.contains("Please enter your name"), "placeholder shown in {html}");
    assert!(html.contains("report-root"), "missing snapshot target in {html}");
    assert!(html.contains("#fdf8e6"), "missing report background in {html}");
}

#[test]
fn report_heading_falls_back_to_placeholder() {
    let html = render_guide(Locale::English, 4, "");
    assert!(html.contains("Please enter your name"), "missing placeholder in {html}");
}

#[test]
fn activity_page_embeds_app_and_questions() {
    let html = render_guide(Locale::English, 1, "");
    assert!(html.contains("https://birthrate2.netlify.app/"), "missing embed in {html}");
    assert!(html.contains("500"), "missing embed height in {html}");
    assert!(html.contains("Activity 1 of 3"), "missing status in {html}");
    assert!(html.contains("Next Step"), "missing next label in {html}");
    assert!(html.contains("<textarea"), "missing reflection field in {html}");
    assert!(html.contains("Enter a number"), "missing short answer in {html}");
}

#[test]
fn third_activity_offers_report_button() {
    let html = render_guide(Locale::English, 3, "");
    assert!(html.contains("Write the Report"), "missing report label in {html}");
    assert!(html.contains("https://population1.netlify.app/"), "missing embed in {html}");
}

#[test]
fn second_activity_uses_muted_background() {
    let html = render_guide(Locale::English, 2, "");
    assert!(html.contains("activity--muted"), "missing muted class in {html}");
    let first = render_guide(Locale::English, 1, "");
    assert!(!first.contains("activity--muted"), "unexpected muted class in {first}");
}

#[test]
fn korean_is_rendered_by_default_catalog() {
    let html = render_guide(Locale::Korean, 1, "");
    assert!(html.contains("활동 1 / 3"), "missing korean status in {html}");
    assert!(html.contains("다음 단계로"), "missing korean next label in {html}");
}

#[test]
fn prefilled_name_lands_in_header_input() {
    let html = render_guide(Locale::Korean, 0, "민지");
    assert!(html.contains("learner-name"), "missing name input in {html}");
    assert!(html.contains("민지"), "missing prefilled name in {html}");
}
