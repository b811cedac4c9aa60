//! POST /chat — menu navigation and knowledge-base answers.

use std::sync::Arc;

use assistant::ChatResponse;
use axum::{Json, extract::State, http::HeaderMap};
use tracing::debug;

use crate::{
    core::app_state::AppState, middleware_layer::json_extractor::REQUEST_ID_HEADER,
    routes::chat::chat_request::ChatRequest,
};

/// Handler: POST /chat
///
/// Always answers 200 with `{text, buttons}`; model failures and missing
/// configuration show up in `text`.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8001/chat \
///   -H 'content-type: application/json' \
///   -d '{"message":"fees_tuition_in_state"}'
/// ```
pub async fn chat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-");

    debug!(
        request_id = %request_id,
        message_len = body.message.len(),
        has_context = body.context.is_some(),
        "chat: start"
    );

    let resp = state.dispatcher.handle(&body.message).await;

    debug!(
        request_id = %request_id,
        buttons = resp.buttons.len(),
        "chat: done"
    );

    Json(resp)
}
