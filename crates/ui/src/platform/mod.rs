//! Webview-backed implementations of the export collaborators.

use async_trait::async_trait;
use dioxus::document::eval;
use serde::Deserialize;
use services::{
    Alerter, DownloadError, Downloader, ExportOptions, ImageDataUrl, RasterizeError, Rasterizer,
    SnapshotTarget,
};

mod scripts;

use scripts::{alert_script, download_script, probe_script, render_script};

/// Default source of the `html-to-image` bundle.
pub const HTML_TO_IMAGE_SRC: &str =
    "https://cdn.jsdelivr.net/npm/html-to-image@1.11.11/dist/html-to-image.js";

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum RenderReply {
    Ok {
        #[serde(rename = "dataUrl")]
        data_url: String,
    },
    Missing,
    Unavailable,
    Error {
        message: String,
    },
}

/// Calls `htmlToImage.toPng` inside the webview.
pub struct ScriptRasterizer;

#[async_trait(?Send)]
impl Rasterizer for ScriptRasterizer {
    async fn probe(&self) -> bool {
        eval(probe_script()).join::<bool>().await.unwrap_or(false)
    }

    async fn render(
        &self,
        target: SnapshotTarget,
        options: &ExportOptions,
    ) -> Result<ImageDataUrl, RasterizeError> {
        let options_json = options
            .to_json()
            .map_err(|err| RasterizeError::Script(err.to_string()))?;
        let script = render_script(target.id(), &options_json);
        let reply = eval(&script)
            .join::<RenderReply>()
            .await
            .map_err(|err| RasterizeError::Script(format!("{err:?}")))?;

        match reply {
            RenderReply::Ok { data_url } => Ok(ImageDataUrl::new(data_url)),
            RenderReply::Missing => Err(RasterizeError::MissingTarget(target.id().to_string())),
            RenderReply::Unavailable => Err(RasterizeError::Unavailable),
            RenderReply::Error { message } => Err(RasterizeError::Failed(message)),
        }
    }
}

/// Saves through a synthetic link click, like a browser download.
///
/// Reports `DownloadError::Rejected` when the webview lacks download links
/// or cancels the click.
pub struct ScriptDownloader;

#[async_trait(?Send)]
impl Downloader for ScriptDownloader {
    async fn download(&self, file_name: &str, image: &ImageDataUrl) -> Result<(), DownloadError> {
        let script = download_script(file_name, image.as_str());
        let accepted = eval(&script)
            .join::<bool>()
            .await
            .map_err(|err| DownloadError::Script(format!("{err:?}")))?;
        if !accepted {
            return Err(DownloadError::Rejected);
        }
        // The webview gives no completion signal; the file may still be dropped.
        tracing::info!(file_name = %file_name, "download handed to the webview");
        Ok(())
    }
}

/// Shows messages with `window.alert`.
pub struct ScriptAlerter;

impl Alerter for ScriptAlerter {
    fn alert(&self, message: &str) {
        let _ = eval(&alert_script(message));
    }
}
