use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::GuideShell;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let chrome = ctx.catalog().chrome;
    let title = chrome.title;
    let render_failed = chrome.render_failed;
    let rasterizer_src = ctx.rasterizer_src();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{title}" }
        if let Some(src) = rasterizer_src {
            document::Script { src: "{src}" }
        }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: move |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "{render_failed}" }
                        pre { "{errors:?}" }
                    }
                },
                GuideShell {}
            }
        }
    }
}
