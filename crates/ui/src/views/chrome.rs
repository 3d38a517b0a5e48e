use dioxus::prelude::*;
use guide_core::catalog::Icon;

use crate::context::AppContext;
use crate::views::icons::IconGlyph;
use crate::vm::{NavBarVm, NavIntent};

#[component]
pub fn GuideHeader(learner_name: String, on_name_change: EventHandler<String>) -> Element {
    let chrome = use_context::<AppContext>().catalog().chrome;

    rsx! {
        header { class: "guide-header",
            h1 { class: "guide-header__title",
                IconGlyph { icon: Icon::Rocket, class: "icon--xl" }
                "{chrome.title}"
            }
            p { class: "guide-header__subtitle", "{chrome.subtitle}" }
            div { class: "guide-header__name",
                label {
                    "{chrome.name_label} "
                    input {
                        id: "learner-name",
                        r#type: "text",
                        placeholder: "{chrome.name_placeholder}",
                        value: "{learner_name}",
                        oninput: move |evt| on_name_change.call(evt.value()),
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar(vm: NavBarVm, on_intent: EventHandler<NavIntent>) -> Element {
    rsx! {
        div { class: "nav-bar",
            button {
                class: "nav-bar__button nav-bar__button--previous",
                id: "nav-previous",
                r#type: "button",
                disabled: !vm.can_go_previous,
                onclick: move |_| on_intent.call(NavIntent::Previous),
                IconGlyph { icon: Icon::ChevronLeft, class: "icon--sm" }
                "{vm.previous_label}"
            }
            div { class: "nav-bar__status", id: "nav-status", "{vm.status_label}" }
            button {
                class: "nav-bar__button nav-bar__button--next",
                id: "nav-next",
                r#type: "button",
                disabled: !vm.can_go_next,
                onclick: move |_| on_intent.call(NavIntent::Next),
                "{vm.next_label}"
                IconGlyph { icon: Icon::ChevronRight, class: "icon--sm" }
            }
        }
    }
}

#[component]
pub fn CompletionFooter(on_export: EventHandler<()>) -> Element {
    let chrome = use_context::<AppContext>().catalog().chrome;

    rsx! {
        footer { class: "completion",
            div { class: "completion__heading",
                IconGlyph { icon: Icon::Trophy, class: "icon--lg" }
                h2 { "{chrome.complete_title}" }
            }
            p { class: "completion__message", "{chrome.complete_message}" }
            button {
                class: "completion__export",
                id: "export-report",
                r#type: "button",
                onclick: move |_| on_export.call(()),
                IconGlyph { icon: Icon::Download, class: "icon--md" }
                "{chrome.save_image}"
            }
        }
    }
}
