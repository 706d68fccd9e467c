//! Thumbnail operations
//!
//! Both operations wait for the video's thumbnail to report `ready` before
//! touching it. The wait is a bounded poll on `thumbnails/show`.

use serde_json::Value;
use tracing::{info, warn};

use super::api::{JwPlayerApiGeneric, ensure_ok, require};
use super::transport::{HttpMethod, Transport};
use crate::{
    Error, Result,
    signing::ParameterSet,
    types::{ThumbnailOptions, UploadFile, UploadTarget},
};

const READY: &str = "ready";

impl<T: Transport> JwPlayerApiGeneric<T> {
    /// Poll until the thumbnail is ready, up to `thumbnails.max_attempts` checks
    pub async fn wait_for_thumbnail(&self, video_key: &str) -> Result<()> {
        let video_key = require("videoKey", video_key)?;
        let max_attempts = self.settings().thumbnails.max_attempts.max(1);
        let interval = self.settings().thumbnails.poll_interval();
        let extra = ParameterSet::new().with("videoKey", video_key);

        for attempt in 1..=max_attempts {
            let body = self
                .call(HttpMethod::Get, "/videos/thumbnails/show", &extra)
                .await?;
            ensure_ok(&body, video_key)?;

            let status = body
                .pointer("/thumbnail/status")
                .and_then(Value::as_str)
                .unwrap_or("unknown");
            if status == READY {
                return Ok(());
            }

            warn!(video_key, attempt, max_attempts, status, "thumbnail not ready");
            if attempt < max_attempts && !interval.is_zero() {
                tokio::time::sleep(interval).await;
            }
        }

        Err(Error::not_ready(video_key, max_attempts))
    }

    /// Use the frame at `options.position` as the video's thumbnail
    pub async fn modify_thumbnail_frame(
        &self,
        video_key: &str,
        options: &ThumbnailOptions,
    ) -> Result<Value> {
        let video_key = require("videoKey", video_key)?;
        self.wait_for_thumbnail(video_key).await?;

        let mut extra = ParameterSet::new().with("videoKey", video_key);
        extra.extend(&options.to_params());

        let body = self
            .call(HttpMethod::Get, "/videos/thumbnails/update", &extra)
            .await?;
        ensure_ok(&body, video_key)?;
        info!(video_key, "thumbnail frame updated");
        Ok(body)
    }

    /// Replace the video's thumbnail with an uploaded image
    pub async fn upload_thumbnail(&self, video_key: &str, image: UploadFile) -> Result<Value> {
        let video_key = require("videoKey", video_key)?;
        if image.is_empty() {
            return Err(Error::invalid_argument(
                "You must provide an image in order to upload a thumbnail",
            ));
        }
        self.wait_for_thumbnail(video_key).await?;

        let body = self
            .call(
                HttpMethod::Get,
                "/videos/thumbnails/update",
                &ParameterSet::new().with("videoKey", video_key),
            )
            .await?;
        ensure_ok(&body, video_key)?;
        let target = UploadTarget::from_response(&body, video_key)?;

        let uploaded = self
            .upload("/videos/thumbnails/upload", &target, image)
            .await?;
        ensure_ok(&uploaded, video_key)?;
        info!(video_key, "thumbnail uploaded");
        Ok(uploaded)
    }
}
