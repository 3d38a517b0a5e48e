//! Shared error types for the services crate.

use thiserror::Error;

/// Errors reported by a `Rasterizer`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RasterizeError {
    #[error("rasterizer is not available")]
    Unavailable,
    #[error("snapshot target not found: {0}")]
    MissingTarget(String),
    #[error("conversion failed: {0}")]
    Failed(String),
    #[error("rasterizer script error: {0}")]
    Script(String),
}

/// Errors reported by a `Downloader`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DownloadError {
    #[error("image is not a base64 data url")]
    InvalidDataUrl,
    #[error(transparent)]
    Decode(#[from] base64::DecodeError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("download script error: {0}")]
    Script(String),
    #[error("the webview did not accept the download")]
    Rejected,
}

/// Errors emitted by `ExportService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("image export is not available")]
    Unavailable,
    #[error(transparent)]
    Conversion(RasterizeError),
    #[error(transparent)]
    Download(#[from] DownloadError),
}
