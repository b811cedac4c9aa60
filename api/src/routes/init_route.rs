use std::sync::Arc;

use assistant::ChatResponse;
use axum::{Json, extract::State};

use crate::core::app_state::AppState;

/// Handler: GET /init — the top-level menu buttons.
pub async fn init_menu(State(state): State<Arc<AppState>>) -> Json<ChatResponse> {
    Json(state.dispatcher.main_menu())
}
