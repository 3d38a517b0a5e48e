use dioxus::prelude::*;
use guide_core::catalog::Icon;
use guide_core::model::{REPORT_BACKGROUND, REPORT_TARGET_ID};

use crate::context::AppContext;
use crate::views::icons::IconGlyph;
use crate::views::panels::QuestionBox;

/// The final report. Its container is the export snapshot target.
#[component]
pub fn ReportPanel(report_name: String) -> Element {
    let report = use_context::<AppContext>().catalog().report;

    rsx! {
        section {
            class: "panel report",
            id: REPORT_TARGET_ID,
            style: "background-color: {REPORT_BACKGROUND};",
            header { class: "report__header",
                h2 {
                    IconGlyph { icon: Icon::Star, class: "icon--lg" }
                    "{report.title}"
                }
                p { "{report.lead}" }
            }
            div { class: "report__learner",
                h3 { id: "report-learner",
                    "{report.name_label} "
                    span { class: "report__learner-name", "{report_name}" }
                }
            }
            div { class: "report__questions",
                for panel in report.questions.iter().copied() {
                    QuestionBox { panel }
                }
            }
        }
    }
}
