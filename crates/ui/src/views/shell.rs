use dioxus::document::eval;
use dioxus::prelude::*;
use guide_core::model::{Navigator, PageIndex, PageKind};

use crate::context::AppContext;
use crate::views::activity::ActivitySection;
use crate::views::chrome::{CompletionFooter, GuideHeader, NavBar};
use crate::views::intro::IntroPanel;
use crate::views::report::ReportPanel;
use crate::vm::{NavIntent, map_guide};

/// Session state plus the callbacks that mutate it.
#[derive(Clone, Copy)]
pub(crate) struct GuideHandles {
    pub nav: Signal<Navigator>,
    pub dispatch: Callback<NavIntent>,
    pub on_name_change: Callback<String>,
    pub on_export: Callback<()>,
}

/// Creates the navigator signal and wires navigation and export to it.
pub(crate) fn use_guide_handles() -> GuideHandles {
    let ctx = use_context::<AppContext>();
    let delay = ctx.transition_delay();
    let export_service = ctx.export_service();

    let nav = use_signal(|| ctx.initial_navigator());

    let dispatch = use_callback(move |intent: NavIntent| {
        let mut nav = nav;
        let pending = match intent {
            NavIntent::Next => nav.write().go_next(),
            NavIntent::Previous => nav.write().go_previous(),
        };
        let Some(pending) = pending else {
            return;
        };
        spawn(async move {
            tokio::time::sleep(delay).await;
            let shown = nav.write().complete(pending);
            tracing::info!(from = %pending.origin(), to = %shown, "page changed");
            let _ = eval("window.scrollTo(0, 0);");
        });
    });

    let on_name_change = use_callback(move |value: String| {
        let mut nav = nav;
        nav.write().set_name(value);
    });

    let on_export = use_callback(move |()| {
        let export_service = export_service.clone();
        let learner_name = nav.read().learner_name().to_string();
        spawn(async move {
            // Failures were already shown to the learner by the service.
            if let Err(err) = export_service.export_report(&learner_name).await {
                tracing::debug!(error = %err, "export ended without a file");
            }
        });
    });

    GuideHandles {
        nav,
        dispatch,
        on_name_change,
        on_export,
    }
}

/// Renders the chrome and current page for `handles`.
pub(crate) fn guide_frame(handles: GuideHandles) -> Element {
    let catalog = use_context::<AppContext>().catalog();
    let vm = map_guide(&handles.nav.read(), catalog);
    let main_class = if vm.fading {
        "guide-main guide-main--fading"
    } else {
        "guide-main"
    };

    rsx! {
        div { class: "guide",
            GuideHeader { learner_name: vm.learner_name.clone(), on_name_change: handles.on_name_change }
            main { class: main_class,
                PageContent { page: vm.page, report_name: vm.report_name.clone() }
            }
            NavBar { vm: vm.nav_bar.clone(), on_intent: handles.dispatch }
            if vm.shows_export {
                CompletionFooter { on_export: handles.on_export }
            }
        }
    }
}

/// Owns the session state and wires navigation and export to the page.
#[component]
pub fn GuideShell() -> Element {
    let handles = use_guide_handles();
    guide_frame(handles)
}

/// Pure mapping from page index to the page body.
#[component]
pub fn PageContent(page: PageIndex, report_name: String) -> Element {
    let catalog = use_context::<AppContext>().catalog();

    match page.kind() {
        PageKind::Intro => rsx! { IntroPanel {} },
        PageKind::Activity(_) => match catalog.activity(page).copied() {
            Some(activity) => rsx! { ActivitySection { activity } },
            None => rsx! {},
        },
        PageKind::Report => rsx! { ReportPanel { report_name } },
    }
}
