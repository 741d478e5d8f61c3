use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json as AxumJson,
};
use serde_json::{json, Value};

use crate::handlers::caption_dtos::{CaptionRequestBody, CaptionResponse};
use crate::AppState;

pub async fn generate_caption(
    State(state): State<Arc<AppState>>,
    AxumJson(body): AxumJson<CaptionRequestBody>,
) -> Result<AxumJson<CaptionResponse>, (StatusCode, AxumJson<Value>)> {
    if body.image_context.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            AxumJson(json!({"error": "Image context cannot be empty"})),
        ));
    }

    let request = body.into_request();
    tracing::info!("Generating {} caption (live: {})", request.tone, state.caption_gateway.is_live());

    let caption = state.caption_gateway.generate_caption(&request).await;
    Ok(AxumJson(CaptionResponse { caption }))
}
