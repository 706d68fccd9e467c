//! Client integration tests
//!
//! Drives the reqwest-backed client against a wiremock server.

mod common;

use common::helpers::{API_KEY, create_test_client, signed};
use jwplatform_api::{Error, ParameterSet, ThumbnailOptions, UploadFile};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_video_is_signed_and_shaped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/videos/show"))
        .and(query_param("api_format", "json"))
        .and(query_param("api_key", API_KEY))
        .and(query_param("video_key", "abc"))
        .and(signed())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "video": {"key": "abc", "title": "Clip", "duration": "12.5"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let video = api.get_video("abc").await.unwrap();

    assert_eq!(video["title"], json!("Clip"));
    assert_eq!(video["description"], json!(""));
    assert_eq!(video["tags"], json!([]));
    assert_eq!(
        video["thumbnail"],
        json!("https://content.jwplatform.com/thumbs/abc.jpg")
    );
    assert_eq!(
        video["video"],
        json!("https://content.jwplatform.com/players/abc.html")
    );
}

#[tokio::test]
async fn test_list_videos_with_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/videos/list"))
        .and(query_param("result_limit", "2"))
        .and(signed())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "videos": [
                {"key": "a", "upload_session_id": null},
                {"key": "b", "description": "Second", "tags": "x, y"}
            ]
        })))
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let filter = ParameterSet::new().with("resultLimit", 2);
    let videos = api.list_videos(Some(&filter)).await.unwrap();

    assert_eq!(videos.len(), 2);
    assert!(videos[0].contains_key("uploadSessionId"));
    assert_eq!(videos[1]["description"], json!("Second"));
    assert_eq!(videos[1]["tags"], json!("x, y"));
}

#[tokio::test]
async fn test_upload_video_two_step_flow() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/videos/create"))
        .and(query_param("title", "Holiday"))
        .and(signed())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "link": {
                "protocol": "http",
                "address": "upload.jwplatform.com",
                "path": "/v1/videos/upload",
                "query": {"key": "upload-key", "token": "upload-token"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/upload/v1/videos/upload"))
        .and(query_param("api_format", "json"))
        .and(query_param("key", "upload-key"))
        .and(query_param("token", "upload-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "media": {"key": "new-video", "type": "video"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/videos/show"))
        .and(query_param("video_key", "new-video"))
        .and(signed())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "video": {"key": "new-video", "title": "Holiday"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let fields = ParameterSet::new().with("title", "Holiday");
    let file = UploadFile::new("holiday.mp4", b"not really a video".to_vec());
    let video = api.upload_video(file, Some(&fields)).await.unwrap();

    assert_eq!(video["key"], json!("new-video"));
    assert_eq!(video["title"], json!("Holiday"));
}

#[tokio::test]
async fn test_http_error_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(path("/v1/videos/show"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let err = api.get_video("abc").await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_non_json_body_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(path("/v1/players/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    assert!(matches!(
        api.list_players(None).await,
        Err(Error::Transport(_))
    ));
}

#[tokio::test]
async fn test_error_status_is_remote_rejection() {
    let server = MockServer::start().await;
    Mock::given(path("/v1/videos/delete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "code": "NotFound",
            "message": "Video not found"
        })))
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    match api.delete_video("gone").await.unwrap_err() {
        Error::RemoteRejection { key, message } => {
            assert_eq!(key, "gone");
            assert_eq!(message, "Video not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_player_list_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/players/list"))
        .and(signed())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "players": [{"key": "p1", "name": "Main", "width": 640, "ga_web_property_id": null}]
        })))
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let players = api.list_players(None).await.unwrap();
    let keys: Vec<&str> = players[0].keys().map(String::as_str).collect();

    assert_eq!(
        keys,
        vec![
            "views",
            "height",
            "cloudHostedPlayer",
            "key",
            "skin",
            "responsive",
            "playlist",
            "name",
            "custom",
            "width",
            "version"
        ]
    );
    assert_eq!(players[0]["views"], json!(null));
    assert_eq!(players[0]["width"], json!(640));
}

#[tokio::test]
async fn test_thumbnail_frame_waits_for_ready() {
    let server = MockServer::start().await;
    Mock::given(path("/v1/videos/thumbnails/show"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "thumbnail": {"status": "processing"}
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(path("/v1/videos/thumbnails/show"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "thumbnail": {"status": "ready"}
        })))
        .mount(&server)
        .await;
    Mock::given(path("/v1/videos/thumbnails/update"))
        .and(query_param("video_key", "abc"))
        .and(query_param("position", "3.5"))
        .and(signed())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let body = api
        .modify_thumbnail_frame("abc", &ThumbnailOptions::at(3.5))
        .await
        .unwrap();
    assert_eq!(body["status"], json!("ok"));
}

#[tokio::test]
async fn test_thumbnail_never_ready() {
    let server = MockServer::start().await;
    Mock::given(path("/v1/videos/thumbnails/show"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "thumbnail": {"status": "processing"}
        })))
        .expect(3)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let err = api
        .upload_thumbnail("abc", UploadFile::new("t.jpg", b"jpeg".to_vec()))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotReady { attempts: 3, .. }));
}
