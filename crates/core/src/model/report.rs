/// Background painted behind the report panel and its exported image.
pub const REPORT_BACKGROUND: &str = "#fdf8e6";

/// DOM id of the report container; the export snapshot targets it.
pub const REPORT_TARGET_ID: &str = "report-root";

/// File name for an exported report image.
///
/// Uses `{name}-{stem}.png` when the trimmed learner name is non-empty and
/// `{stem}.png` otherwise. Characters that cannot appear in file names are
/// replaced with `_`.
#[must_use]
pub fn report_file_name(learner_name: &str, stem: &str) -> String {
    let name = learner_name.trim();
    if name.is_empty() {
        return format!("{stem}.png");
    }
    format!("{}-{stem}.png", sanitize_file_component(name))
}

fn sanitize_file_component(raw: &str) -> String {
    raw.chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            ch if ch.is_control() => '_',
            ch => ch,
        })
        .collect()
}
