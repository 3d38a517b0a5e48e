use dioxus::prelude::*;
use guide_core::catalog::{AnswerField, Block, FieldKind, QuestionPanel, Tone};

use crate::views::icons::IconGlyph;

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Blue => "question__title--blue",
        Tone::Purple => "question__title--purple",
        Tone::Orange => "question__title--orange",
        Tone::Red => "question__title--red",
        Tone::Green => "question__title--green",
    }
}

/// One prompt with its answer fields. Field values are left to the DOM.
#[component]
pub fn QuestionBox(panel: QuestionPanel) -> Element {
    let title_class = tone_class(panel.tone);

    rsx! {
        div { class: "question",
            h3 { class: "question__title {title_class}",
                IconGlyph { icon: panel.icon, class: "icon--md" }
                span { "{panel.title}" }
            }
            div { class: "question__body",
                for block in panel.body.iter().copied() {
                    match block {
                        Block::Paragraph(text) => rsx! { p { "{text}" } },
                        Block::Note(text) => rsx! { p { class: "question__note", "{text}" } },
                        Block::Field(field) => rsx! { AnswerInput { field } },
                    }
                }
            }
        }
    }
}

#[component]
fn AnswerInput(field: AnswerField) -> Element {
    let input_class = if field.compact {
        "answer answer--compact"
    } else {
        "answer"
    };
    let control = match field.kind {
        FieldKind::Line => rsx! {
            input { class: input_class, r#type: "text", placeholder: field.placeholder }
        },
        FieldKind::Lines { rows } => rsx! {
            textarea { class: input_class, rows: "{rows}", placeholder: field.placeholder }
        },
    };

    if field.before.is_none() && field.after.is_none() {
        return control;
    }

    rsx! {
        div { class: "answer-row",
            if let Some(before) = field.before {
                span { class: "answer-row__label", "{before}" }
            }
            {control}
            if let Some(after) = field.after {
                span { class: "answer-row__label", "{after}" }
            }
        }
    }
}
