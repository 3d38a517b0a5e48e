use dioxus::prelude::*;
use guide_core::catalog::{ActivityPage, QuestionLayout};

use crate::views::icons::IconGlyph;
use crate::views::panels::QuestionBox;

/// Activity page: header, embedded visualization, question panels.
#[component]
pub fn ActivitySection(activity: ActivityPage) -> Element {
    let section_class = if activity.muted {
        "panel activity activity--muted"
    } else {
        "panel activity"
    };
    let questions_class = match activity.layout {
        QuestionLayout::Columns => "activity__questions activity__questions--columns",
        QuestionLayout::Stacked => "activity__questions activity__questions--stacked",
    };
    let embed_height = ActivityPage::EMBED_HEIGHT;

    rsx! {
        section { class: "{section_class}",
            header { class: "activity__header",
                span { class: "activity__step", "{activity.step}" }
                h2 { class: "activity__title",
                    IconGlyph { icon: activity.icon, class: "icon--lg" }
                    span { "{activity.title}" }
                }
                p { class: "activity__description", "{activity.description}" }
            }
            div { class: "activity__embed",
                iframe {
                    src: activity.embed_url,
                    width: "100%",
                    height: "{embed_height}",
                    title: "{activity.title} App",
                }
            }
            div { class: "{questions_class}",
                for panel in activity.questions.iter().copied() {
                    QuestionBox { panel }
                }
            }
        }
    }
}
