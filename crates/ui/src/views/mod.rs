mod activity;
mod chrome;
mod icons;
mod intro;
mod panels;
mod report;
mod shell;

#[cfg(test)]
mod intent_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use shell::{GuideShell, PageContent};
