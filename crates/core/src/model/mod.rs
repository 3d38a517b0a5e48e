mod navigator;
mod page;
mod report;

pub use navigator::{Navigator, PendingTransition, TRANSITION_DELAY};
pub use page::{ACTIVITY_COUNT, PAGE_COUNT, PageIndex, PageIndexError, PageKind};
pub use report::{REPORT_BACKGROUND, REPORT_TARGET_ID, report_file_name};
