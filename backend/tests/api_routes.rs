use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use backend::api::gemini::{GeminiError, TextGenerator};
use backend::utils::caption_gateway::CaptionGateway;
use backend::utils::media_library::MediaLibrary;
use backend::{build_router, AppState};

enum FakeReply {
    Text(&'static str),
    Fail,
}

struct FakeGenerator(FakeReply);

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate_text(&self, _model: &str, _prompt: &str) -> Result<String, GeminiError> {
        match &self.0 {
            FakeReply::Text(text) => Ok(text.to_string()),
            FakeReply::Fail => Err(GeminiError::Api {
                status: 401,
                message: "API key not valid".to_string(),
            }),
        }
    }
}

fn state_with(gateway: CaptionGateway, frontend_dist: PathBuf) -> Arc<AppState> {
    Arc::new(AppState {
        caption_gateway: Arc::new(gateway),
        media: Arc::new(MediaLibrary::default()),
        frontend_dist,
        media_dir: PathBuf::from("does-not-exist"),
        media_url_prefix: "/assets".to_string(),
    })
}

fn mock_state() -> Arc<AppState> {
    state_with(CaptionGateway::mock_only(), PathBuf::from("does-not-exist"))
}

fn live_state(reply: FakeReply) -> Arc<AppState> {
    let generator: Arc<dyn TextGenerator> = Arc::new(FakeGenerator(reply));
    state_with(
        CaptionGateway::new(Some(generator), "gemini-2.5-flash"),
        PathBuf::from("does-not-exist"),
    )
}

async fn post_caption(state: Arc<AppState>, body: Value) -> (StatusCode, Value) {
    let response = build_router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/caption")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_check_answers_ok() {
    let response = build_router(mock_state())
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn empty_context_is_rejected_before_the_gateway() {
    let (status, body) = post_caption(mock_state(), json!({"imageContext": "   ", "tone": "fun"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn mock_mode_returns_tone_caption() {
    let (status, body) = post_caption(
        mock_state(),
        json!({"imageContext": "couple on the beach", "tone": "romantic"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["caption"],
        "In the whispers of the wind, love found its eternal home. ✨ #ForeverYours #NextImage"
    );
}

#[tokio::test]
async fn missing_or_unknown_tone_uses_professional() {
    let expected = "Excellence in every frame. Elevating your visual identity. 📸";

    let (_, body) = post_caption(mock_state(), json!({"imageContext": "headshot"})).await;
    assert_eq!(body["caption"], expected);

    let (_, body) = post_caption(mock_state(), json!({"imageContext": "headshot", "tone": "vaporwave"})).await;
    assert_eq!(body["caption"], expected);
}

#[tokio::test]
async fn live_mode_returns_generated_text() {
    let (status, body) = post_caption(
        live_state(FakeReply::Text("Mehendi nights, golden lights. #NextImage")),
        json!({"imageContext": "mehendi ceremony", "tone": "cinematic"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["caption"], "Mehendi nights, golden lights. #NextImage");
}

#[tokio::test]
async fn live_mode_empty_text_gets_placeholder() {
    let (_, body) = post_caption(
        live_state(FakeReply::Text("")),
        json!({"imageContext": "mehendi ceremony", "tone": "cinematic"}),
    )
    .await;
    assert_eq!(body["caption"], "Could not generate caption.");
}

#[tokio::test]
async fn live_mode_failure_is_never_surfaced() {
    let (status, body) = post_caption(
        live_state(FakeReply::Fail),
        json!({"imageContext": "kids birthday", "tone": "fun"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["caption"],
        "Caught in the act of being awesome! Can we rewind this moment? 😄 #PartyVibes"
    );
}

#[tokio::test]
async fn media_listing_uses_camel_case() {
    let response = build_router(mock_state())
        .oneshot(Request::builder().uri("/api/media").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["photos"], json!([]));
    assert!(body.get("heroImages").is_some());
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_frontend_index() {
    let dist = tempfile::TempDir::new().unwrap();
    fs::write(dist.path().join("index.html"), "<html>studio</html>").unwrap();

    let state = state_with(CaptionGateway::mock_only(), dist.path().to_path_buf());
    let response = build_router(state)
        .oneshot(Request::builder().uri("/portfolio/weddings").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<html>studio</html>");
}
