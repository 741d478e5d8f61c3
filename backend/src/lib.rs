use axum::{
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config {
    pub mod app_config;
}
pub mod api {
    pub mod gemini;
}
pub mod handlers {
    pub mod caption_dtos;
    pub mod caption_handlers;
    pub mod media_handlers;
}
pub mod utils {
    pub mod caption_gateway;
    pub mod media_library;
}

use api::gemini::{GeminiClient, TextGenerator};
use config::app_config::AppConfig;
use handlers::caption_handlers;
use handlers::media_handlers;
use utils::caption_gateway::CaptionGateway;
use utils::media_library::MediaLibrary;

pub struct AppState {
    pub caption_gateway: Arc<CaptionGateway>,
    pub media: Arc<MediaLibrary>,
    pub frontend_dist: PathBuf,
    pub media_dir: PathBuf,
    pub media_url_prefix: String,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let generator: Option<Arc<dyn TextGenerator>> = match &config.gemini_api_key {
            Some(key) => Some(Arc::new(GeminiClient::new(
                key.clone(),
                config.gemini_base_url.clone(),
            ))),
            None => {
                tracing::warn!("No Gemini API key configured, captions will come from the mock table");
                None
            }
        };

        let media = MediaLibrary::scan(&config.media_dir, &config.media_url_prefix)?;

        Ok(Self {
            caption_gateway: Arc::new(CaptionGateway::new(generator, config.gemini_model.clone())),
            media: Arc::new(media),
            frontend_dist: config.frontend_dist.clone(),
            media_dir: config.media_dir.clone(),
            media_url_prefix: config.media_url_prefix.clone(),
        })
    }
}

async fn health_check() -> &'static str {
    "OK"
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let index = state.frontend_dist.join("index.html");
    let frontend = ServeDir::new(&state.frontend_dist).fallback(ServeFile::new(index));

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/caption", post(caption_handlers::generate_caption))
        .route("/api/media", get(media_handlers::get_media))
        .nest_service(&state.media_url_prefix, ServeDir::new(&state.media_dir))
        .fallback_service(frontend)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // the trunk dev server runs on another port
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE]),
        )
        .with_state(state)
}
