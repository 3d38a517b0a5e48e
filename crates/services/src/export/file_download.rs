use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::{Downloader, ImageDataUrl};
use crate::error::DownloadError;

/// Writes exported images into a directory instead of asking the webview
/// to download them.
#[derive(Clone, Debug)]
pub struct FileDownloader {
    dir: PathBuf,
}

impl FileDownloader {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait(?Send)]
impl Downloader for FileDownloader {
    async fn download(&self, file_name: &str, image: &ImageDataUrl) -> Result<(), DownloadError> {
        let payload = image
            .base64_payload()
            .ok_or(DownloadError::InvalidDataUrl)?;
        let bytes = STANDARD.decode(payload)?;

        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, &bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "report image written");
        Ok(())
    }
}
