//! Video operations

use tracing::info;

use super::api::{
    JwPlayerApiGeneric, created_key, ensure_ok, require, take_entities, take_entity,
};
use super::transport::{HttpMethod, Transport};
use crate::{
    Error, Result,
    shaping::{Shaped, shape_video},
    signing::ParameterSet,
    types::{BatchContent, StatusResponse, UploadFile, UploadTarget},
};

impl<T: Transport> JwPlayerApiGeneric<T> {
    /// List videos, optionally filtered (`resultLimit`, `search`, ...)
    pub async fn list_videos(&self, filter: Option<&ParameterSet>) -> Result<Vec<Shaped>> {
        let empty = ParameterSet::new();
        let body = self
            .call(HttpMethod::Get, "/videos/list", filter.unwrap_or(&empty))
            .await?;
        take_entities(body, "videos", "videos/list")?
            .iter()
            .map(|video| shape_video(video, self.urls()))
            .collect()
    }

    /// Fetch one video by key
    pub async fn get_video(&self, video_key: &str) -> Result<Shaped> {
        let video_key = require("videoKey", video_key)?;
        let body = self
            .call(
                HttpMethod::Get,
                "/videos/show",
                &ParameterSet::new().with("videoKey", video_key),
            )
            .await?;
        let video = take_entity(body, "video", video_key)?;
        shape_video(&video, self.urls())
    }

    /// Create a video the platform fetches from `download_url`
    pub async fn create_video_from_url(
        &self,
        download_url: &str,
        fields: Option<&ParameterSet>,
    ) -> Result<Shaped> {
        let download_url = require("downloadUrl", download_url)?;
        let mut extra = ParameterSet::new().with("downloadUrl", download_url);
        if let Some(fields) = fields {
            extra.extend(fields);
        }
        self.create_and_fetch(&extra, download_url).await
    }

    /// Create one video per entry, in order, one request after the other
    pub async fn batch_create_videos(&self, items: &[BatchContent]) -> Result<Vec<Shaped>> {
        if items.is_empty() {
            return Err(Error::invalid_argument(
                "You must provide a content in order to upload it",
            ));
        }
        for item in items {
            require("downloadUrl", &item.download_url)?;
        }

        let mut created = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let video = self.create_and_fetch(&item.to_params(), &item.download_url).await?;
            info!(index, total = items.len(), "batch video created");
            created.push(video);
        }
        Ok(created)
    }

    async fn create_and_fetch(&self, extra: &ParameterSet, context: &str) -> Result<Shaped> {
        let body = self.call(HttpMethod::Post, "/videos/create", extra).await?;
        let video_key = created_key(&body, "video", context)?;
        info!(video_key = %video_key, "video created");
        self.get_video(&video_key).await
    }

    /// Create a video record, then post the file to the upload host
    pub async fn upload_video(
        &self,
        file: UploadFile,
        fields: Option<&ParameterSet>,
    ) -> Result<Shaped> {
        if file.is_empty() {
            return Err(Error::invalid_argument(
                "You must provide a file in order to upload it",
            ));
        }

        let empty = ParameterSet::new();
        let body = self
            .call(HttpMethod::Post, "/videos/create", fields.unwrap_or(&empty))
            .await?;
        ensure_ok(&body, "videos/create")?;
        let target = UploadTarget::from_response(&body, "videos/create")?;

        let uploaded = self.upload("/videos/upload", &target, file).await?;
        let video_key = created_key(&uploaded, "media", &target.key)?;
        info!(video_key = %video_key, "video uploaded");
        self.get_video(&video_key).await
    }

    /// Update a video's fields and return the refreshed video
    pub async fn update_video(&self, video_key: &str, fields: &ParameterSet) -> Result<Shaped> {
        let video_key = require("videoKey", video_key)?;
        if fields.is_empty() {
            return Err(Error::invalid_argument(
                "You must provide the fields to update",
            ));
        }

        let mut extra = ParameterSet::new().with("videoKey", video_key);
        extra.extend(fields);

        let body = self.call(HttpMethod::Get, "/videos/update", &extra).await?;
        if ensure_ok(&body, video_key).is_err() {
            return Err(Error::remote_rejection(
                video_key,
                format!("Video with the key {} does not exist", video_key),
            ));
        }
        info!(video_key, "video updated");
        self.get_video(video_key).await
    }

    /// Delete a video
    pub async fn delete_video(&self, video_key: &str) -> Result<StatusResponse> {
        let video_key = require("videoKey", video_key)?;
        let body = self
            .call(
                HttpMethod::Get,
                "/videos/delete",
                &ParameterSet::new().with("videoKey", video_key),
            )
            .await?;
        ensure_ok(&body, video_key)?;
        info!(video_key, "video deleted");
        Ok(serde_json::from_value(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::api::mock::{MockTransport, client, param, path};
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::time::Duration;

    fn show(request: &super::super::ApiRequest) -> Value {
        let key = param(request, "video_key").unwrap_or_default();
        json!({"status": "ok", "video": {"key": key, "title": format!("title-{}", key)}})
    }

    #[tokio::test]
    async fn test_get_video_blank_key_makes_no_call() {
        let api = client(MockTransport::always(json!({"status": "ok"})));

        for key in ["", "   "] {
            let err = api.get_video(key).await.unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
        }
        assert_eq!(api.transport().calls(), 0);
    }

    #[tokio::test]
    async fn test_get_video_shapes_response() {
        let api = client(MockTransport::new(|request| (Duration::ZERO, Ok(show(request)))));

        let video = api.get_video("abc123").await.unwrap();
        assert_eq!(video["key"], json!("abc123"));
        assert_eq!(video["description"], json!(""));
        assert_eq!(
            video["thumbnail"],
            json!("https://content.jwplatform.com/thumbs/abc123.jpg")
        );

        let requests = api.transport().requests();
        assert_eq!(path(&requests[0]), "/videos/show");
        assert_eq!(param(&requests[0], "video_key").as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_get_video_not_found() {
        let api = client(MockTransport::always(
            json!({"status": "error", "code": "NotFound", "message": "Video not found"}),
        ));
        let err = api.get_video("missing").await.unwrap_err();
        match err {
            Error::RemoteRejection { key, .. } => assert_eq!(key, "missing"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_videos_with_filter() {
        let api = client(MockTransport::always(json!({
            "status": "ok",
            "videos": [{"key": "a"}, {"key": "b", "tags": "x"}]
        })));

        let filter = ParameterSet::new().with("resultLimit", 2);
        let videos = api.list_videos(Some(&filter)).await.unwrap();

        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0]["tags"], json!([]));
        assert_eq!(videos[1]["tags"], json!("x"));
        let request = &api.transport().requests()[0];
        assert_eq!(path(request), "/videos/list");
        assert_eq!(param(request, "result_limit").as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_create_from_url_refetches() {
        let api = client(MockTransport::new(|request| {
            let body = match path(request) {
                "/videos/create" => json!({"status": "ok", "video": {"key": "new1"}}),
                _ => show(request),
            };
            (Duration::ZERO, Ok(body))
        }));

        let fields = ParameterSet::new().with("title", "Clip");
        let video = api
            .create_video_from_url("https://example.com/clip.mp4", Some(&fields))
            .await
            .unwrap();
        assert_eq!(video["key"], json!("new1"));

        let requests = api.transport().requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(
            param(&requests[0], "download_url").as_deref(),
            Some("https://example.com/clip.mp4")
        );
        assert_eq!(param(&requests[0], "title").as_deref(), Some("Clip"));
        assert_eq!(path(&requests[1]), "/videos/show");
    }

    #[tokio::test]
    async fn test_batch_keeps_input_order_with_reversed_latency() {
        let api = client(MockTransport::new(|request| match path(request) {
            "/videos/create" => {
                let url = param(request, "download_url").unwrap_or_default();
                // The first item answers slowest.
                let delay = if url == "u1" { 50 } else { 0 };
                (
                    Duration::from_millis(delay),
                    Ok(json!({"status": "ok", "video": {"key": format!("key-{}", url)}})),
                )
            }
            _ => (Duration::ZERO, Ok(show(request))),
        }));

        let items = vec![BatchContent::new("u1"), BatchContent::new("u2").with_title("Two")];
        let videos = api.batch_create_videos(&items).await.unwrap();

        let keys: Vec<&Value> = videos.iter().map(|v| &v["key"]).collect();
        assert_eq!(keys, vec![&json!("key-u1"), &json!("key-u2")]);
        assert_eq!(api.transport().calls(), 4);
    }

    #[tokio::test]
    async fn test_batch_rejects_empty_input_without_calls() {
        let api = client(MockTransport::always(json!({"status": "ok"})));
        assert!(matches!(
            api.batch_create_videos(&[]).await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            api.batch_create_videos(&[BatchContent::new("u1"), BatchContent::new("")])
                .await,
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(api.transport().calls(), 0);
    }

    #[tokio::test]
    async fn test_upload_video_two_step_flow() {
        let api = client(MockTransport::new(|request| {
            let body = match path(request) {
                "/videos/create" => json!({
                    "status": "ok",
                    "link": {"query": {"key": "upkey", "token": "uptoken"}}
                }),
                "/videos/upload" => json!({"status": "ok", "media": {"key": "media1"}}),
                _ => show(request),
            };
            (Duration::ZERO, Ok(body))
        }));

        let file = UploadFile::new("clip.mp4", b"bytes".to_vec());
        let fields = ParameterSet::new().with("title", "Clip");
        let video = api.upload_video(file, Some(&fields)).await.unwrap();
        assert_eq!(video["key"], json!("media1"));

        let requests = api.transport().requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[1].url, "https://upload.test/v1/videos/upload");
        assert_eq!(requests[1].query, "api_format=json&key=upkey&token=uptoken");
        assert_eq!(
            requests[1].file.as_ref().map(|f| f.file_name.as_str()),
            Some("clip.mp4")
        );
    }

    #[tokio::test]
    async fn test_upload_video_empty_file() {
        let api = client(MockTransport::always(json!({"status": "ok"})));
        let err = api
            .upload_video(UploadFile::new("empty.mp4", Vec::new()), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(api.transport().calls(), 0);
    }

    #[tokio::test]
    async fn test_update_video_missing_is_rejection() {
        let api = client(MockTransport::always(json!({"status": "error"})));
        let fields = ParameterSet::new().with("title", "New");
        let err = api.update_video("gone", &fields).await.unwrap_err();
        match err {
            Error::RemoteRejection { key, message } => {
                assert_eq!(key, "gone");
                assert!(message.contains("does not exist"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(api.transport().calls(), 1);
    }

    #[tokio::test]
    async fn test_update_video_requires_fields() {
        let api = client(MockTransport::always(json!({"status": "ok"})));
        let err = api.update_video("abc", &ParameterSet::new()).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(api.transport().calls(), 0);
    }

    #[tokio::test]
    async fn test_update_video_refetches() {
        let api = client(MockTransport::new(|request| {
            let body = match path(request) {
                "/videos/update" => json!({"status": "ok"}),
                _ => show(request),
            };
            (Duration::ZERO, Ok(body))
        }));
        let fields = ParameterSet::new().with("title", "New");
        let video = api.update_video("abc", &fields).await.unwrap();
        assert_eq!(video["key"], json!("abc"));

        let requests = api.transport().requests();
        assert_eq!(param(&requests[0], "title").as_deref(), Some("New"));
        assert_eq!(param(&requests[0], "video_key").as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_delete_video() {
        let api = client(MockTransport::always(
            json!({"status": "ok", "videos": {"total": 1}}),
        ));
        let response = api.delete_video("abc").await.unwrap();
        assert!(response.is_ok());
        assert_eq!(path(&api.transport().requests()[0]), "/videos/delete");
    }
}
