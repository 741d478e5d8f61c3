use std::sync::Arc;

use axum::{extract::State, response::Json as AxumJson};

use crate::utils::media_library::MediaLibrary;
use crate::AppState;

pub async fn get_media(State(state): State<Arc<AppState>>) -> AxumJson<MediaLibrary> {
    AxumJson(state.media.as_ref().clone())
}
