use dioxus::prelude::*;
use guide_core::catalog::Icon;

fn icon_paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Rocket => &[
            "M15.59 14.37a6 6 0 01-5.84 7.38v-4.82m5.84-2.56a12.023 12.023 0 013.822 5.84M15.59 14.37a12.023 12.023 0 00-3.822 5.84m-2.018-5.84a12.023 12.023 0 01-3.822-5.84m3.822 5.84A12.023 12.023 0 009.77 14.37M3.75 12h16.5m-16.5 0a8.25 8.25 0 0116.5 0M12 6.75v-3.75",
        ],
        Icon::Compass => &[
            "M12 21a9 9 0 100-18 9 9 0 000 18z",
            "M12 3v2.25m0 13.5V21m-4.5-9H3m18 0h-4.5m-9-4.5L5.25 5.25m13.5 13.5L18.75 18.75m-13.5 0L5.25 18.75m13.5-13.5L18.75 5.25",
            "M12 12l3.3-1.65m-3.3 1.65L8.7 10.35M12 12v3.3m0-3.3L15.3 13.65m-3.3-1.65L8.7 13.65",
        ],
        Icon::Baby => &[
            "M15.182 15.182a4.5 4.5 0 01-6.364 0M21 12a9 9 0 11-18 0 9 9 0 0118 0zM12 12v.01M9 12v.01M15 12v.01",
        ],
        Icon::Search => &[
            "M21 21l-5.197-5.197m0 0A7.5 7.5 0 105.196 5.196a7.5 7.5 0 0010.607 10.607z",
        ],
        Icon::Lightbulb => &[
            "M12 18.75a6 6 0 006-6c0-3.314-2.686-6-6-6s-6 2.686-6 6a6 6 0 006 6zM12 21a3 3 0 003-3h-6a3 3 0 003 3zM12 3a.75.75 0 01.75.75V6a.75.75 0 01-1.5 0V3.75A.75.75 0 0112 3z",
        ],
        Icon::Users => &[
            "M18 18.72a9.094 9.094 0 00-12 0m12 0a9.094 9.094 0 01-12 0m12 0v-4.5m-12 4.5v-4.5m12 0a9.094 9.094 0 00-12 0m12 0a9.094 9.094 0 01-12 0M9.75 7.5a3 3 0 116 0 3 3 0 01-6 0z",
        ],
        Icon::ChartPie => &[
            "M10.5 6a7.5 7.5 0 107.5 7.5h-7.5V6z",
            "M13.5 10.5H21A7.5 7.5 0 0013.5 3v7.5z",
        ],
        Icon::Scale => &[
            "M12 3v18m0 0l-4.5-4.5m4.5 4.5l4.5-4.5M3 12h18m-18 0l4.5 4.5M3 12l4.5-4.5",
            "M12 21a9 9 0 100-18 9 9 0 000 18z",
        ],
        Icon::PuzzlePiece => &[
            "M21 7.5l-2.25-1.313M21 7.5v6M21 7.5l-2.25 1.313M3 7.5l2.25-1.313M3 7.5l2.25 1.313M3 7.5v6m1.125-6.687l.625.364m1.125-6.687L6 3.313m-.625 3.375L6 6.313M6 3.313v1.375m0 0L7.125 6m-1.125-.313L6 6.313m0 0l-1.125.313m1.125-.313L6 6.313m6 10.5v-1.375m0 0l1.125.687m-1.125-.687l-1.125.687m0 0l-1.125.688m1.125-.688l1.125.688m-1.125-.688L12 18.313m0 0l1.125-.687m-1.125.687L12 18.313m1.125 1.375l-.625.364m1.125-1.739l-.625.364m0 0L12 21.313m0 0l-1.125-.687m1.125.687L12 21.313m1.125 1.375l.625.364m-1.125-.364L12 21.313m0 0L13.125 21m0 0l-1.125.687m-1.125 1.375l-.625.364m-1.125-.364l.625.364",
        ],
        Icon::Star => &[
            "M11.48 3.499a.562.562 0 011.04 0l2.125 5.111a.563.563 0 00.475.31h5.418a.562.562 0 01.321.988l-4.204 3.602a.563.563 0 00-.182.557l1.285 5.385a.562.562 0 01-.84.61l-4.725-2.885a.563.563 0 00-.586 0L6.982 20.54a.562.562 0 01-.84-.61l1.285-5.386a.562.562 0 00-.182-.557l-4.204-3.602a.562.562 0 01.321-.988h5.418a.563.563 0 00.475-.31L11.48 3.5z",
        ],
        Icon::Compress => &[
            "M9 9V4.5M9 9H4.5M9 9L3.75 3.75M9 15v4.5M9 15H4.5M9 15l-5.25 5.25M15 9h4.5M15 9V4.5M15 9l5.25-5.25M15 15h4.5M15 15v4.5M15 15l5.25 5.25",
        ],
        Icon::Heart => &[
            "M21 8.25c0-2.485-2.099-4.5-4.688-4.5-1.935 0-3.597 1.126-4.312 2.733-.715-1.607-2.377-2.733-4.313-2.733C5.1 3.75 3 5.765 3 8.25c0 7.22 9 12 9 12s9-4.78 9-12z",
        ],
        Icon::Trophy => &[
            "M16.5 18.75h-9a9 9 0 119 0zM16.5 18.75v-3.375c0-.621-.504-1.125-1.125-1.125h-6.75c-.621 0-1.125.504-1.125 1.125v3.375m10.5-3.375c0-2.03-1.428-3.75-3.375-3.75h-3.75c-1.947 0-3.375 1.72-3.375 3.75m10.5 0h-10.5",
        ],
        Icon::ChevronLeft => &[
            "M15.75 19.5L8.25 12l7.5-7.5",
        ],
        Icon::ChevronRight => &[
            "M8.25 4.5l7.5 7.5-7.5 7.5",
        ],
        Icon::Download => &[
            "M3 16.5v2.25A2.25 2.25 0 005.25 21h13.5A2.25 2.25 0 0021 18.75V16.5M16.5 12L12 16.5m0 0L7.5 12m4.5 4.5V3",
        ],
    }
}

/// Outline icon drawn with the current text colour.
#[component]
pub fn IconGlyph(icon: Icon, class: &'static str) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            fill: "none",
            view_box: "0 0 24 24",
            stroke_width: "1.5",
            stroke: "currentColor",
            "aria-hidden": "true",
            for d in icon_paths(icon) {
                path { stroke_linecap: "round", stroke_linejoin: "round", d: *d }
            }
        }
    }
}
