#![forbid(unsafe_code)]

pub mod error;
pub mod export;

pub use error::{DownloadError, ExportError, RasterizeError};
pub use export::{
    Alerter, AlerterRef, Downloader, DownloaderRef, ExportOptions, ExportReceipt, ExportService,
    FileDownloader, ImageDataUrl, Rasterizer, RasterizerRef, SnapshotTarget,
};
