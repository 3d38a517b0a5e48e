//! Report image export.
//!
//! The rasterizer, downloader and alert surface are injected so the flow
//! can run without a webview.

mod file_download;

use std::sync::Arc;

use async_trait::async_trait;
use guide_core::catalog::ExportText;
use guide_core::model::{REPORT_BACKGROUND, REPORT_TARGET_ID, report_file_name};
use serde::Serialize;

use crate::error::{DownloadError, ExportError, RasterizeError};

pub use file_download::FileDownloader;

/// DOM id of the subtree to snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapshotTarget(&'static str);

impl SnapshotTarget {
    /// The report panel container.
    pub const REPORT: Self = Self(REPORT_TARGET_ID);

    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(&self) -> &'static str {
        self.0
    }
}

/// Options handed to the rasterizer. Serialized in the shape
/// `html-to-image` expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    pub cache_bust: bool,
    pub background_color: String,
}

impl ExportOptions {
    #[must_use]
    pub fn report() -> Self {
        Self {
            cache_bust: true,
            background_color: REPORT_BACKGROUND.to_string(),
        }
    }

    /// # Errors
    ///
    /// Returns the serializer error; not expected for this shape.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// An encoded image as a `data:` URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageDataUrl(String);

impl ImageDataUrl {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The base64 payload after the `;base64,` marker, if present.
    #[must_use]
    pub fn base64_payload(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let (header, payload) = rest.split_once(',')?;
        header.ends_with(";base64").then_some(payload)
    }
}

#[async_trait(?Send)]
pub trait Rasterizer: Send + Sync {
    /// Whether the conversion capability is present at all.
    async fn probe(&self) -> bool;

    /// Converts the target subtree into an image.
    async fn render(
        &self,
        target: SnapshotTarget,
        options: &ExportOptions,
    ) -> Result<ImageDataUrl, RasterizeError>;
}

#[async_trait(?Send)]
pub trait Downloader: Send + Sync {
    async fn download(&self, file_name: &str, image: &ImageDataUrl) -> Result<(), DownloadError>;
}

/// User-facing failure surface.
pub trait Alerter: Send + Sync {
    fn alert(&self, message: &str);
}

pub type RasterizerRef = Arc<dyn Rasterizer>;
pub type DownloaderRef = Arc<dyn Downloader>;
pub type AlerterRef = Arc<dyn Alerter>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportReceipt {
    pub file_name: String,
}

/// Turns the report panel into a downloaded PNG. One shot, no retry.
#[derive(Clone)]
pub struct ExportService {
    rasterizer: Option<RasterizerRef>,
    downloader: DownloaderRef,
    alerter: AlerterRef,
    text: ExportText,
}

impl ExportService {
    #[must_use]
    pub fn new(
        rasterizer: Option<RasterizerRef>,
        downloader: DownloaderRef,
        alerter: AlerterRef,
        text: ExportText,
    ) -> Self {
        Self {
            rasterizer,
            downloader,
            alerter,
            text,
        }
    }

    /// Exports the report for `learner_name`.
    ///
    /// Every failure has already been shown to the user through the
    /// `Alerter` when this returns.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Unavailable` when no rasterizer is present,
    /// `ExportError::Conversion` when the snapshot fails and
    /// `ExportError::Download` when the file cannot be handed over.
    pub async fn export_report(&self, learner_name: &str) -> Result<ExportReceipt, ExportError> {
        let Some(rasterizer) = self.available_rasterizer().await else {
            return Err(self.unavailable());
        };

        let options = ExportOptions::report();
        let image = match rasterizer.render(SnapshotTarget::REPORT, &options).await {
            Ok(image) => image,
            Err(RasterizeError::Unavailable | RasterizeError::MissingTarget(_)) => {
                return Err(self.unavailable());
            }
            Err(err) => {
                tracing::error!(error = %err, "report conversion failed");
                self.alerter.alert(self.text.failed);
                return Err(ExportError::Conversion(err));
            }
        };

        let file_name = report_file_name(learner_name, self.text.file_stem);
        if let Err(err) = self.downloader.download(&file_name, &image).await {
            tracing::error!(error = %err, file_name = %file_name, "report download failed");
            self.alerter.alert(self.text.failed);
            return Err(err.into());
        }

        tracing::info!(file_name = %file_name, "report exported");
        Ok(ExportReceipt { file_name })
    }

    async fn available_rasterizer(&self) -> Option<&RasterizerRef> {
        let rasterizer = self.rasterizer.as_ref()?;
        rasterizer.probe().await.then_some(rasterizer)
    }

    fn unavailable(&self) -> ExportError {
        tracing::warn!("image export requested but no rasterizer is available");
        self.alerter.alert(self.text.unavailable);
        ExportError::Unavailable
    }
}
