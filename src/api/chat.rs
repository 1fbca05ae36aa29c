use axum::{extract::State, response::Json, routing::post, Router};

use crate::error::ApiResult;
use crate::models::{ChatRequest, ChatResponse};
use crate::services::ChatService;

pub fn chat_routes(chat: ChatService) -> Router {
    Router::new()
        .route("/chat", post(chat_with_coach))
        .with_state(chat)
}

/// Answer a user's message with a canned coaching reply
pub async fn chat_with_coach(
    State(chat): State<ChatService>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    Ok(Json(chat.chat(request).await?))
}
