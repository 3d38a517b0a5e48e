use dioxus::prelude::*;
use guide_core::catalog::Icon;

use crate::context::AppContext;
use crate::views::icons::IconGlyph;

#[component]
pub fn IntroPanel() -> Element {
    let intro = use_context::<AppContext>().catalog().intro;

    rsx! {
        section { class: "panel intro",
            div { class: "intro__heading",
                IconGlyph { icon: Icon::Compass, class: "icon--lg" }
                h2 { "{intro.title}" }
            }
            p { class: "intro__body", "{intro.body}" }
        }
    }
}
