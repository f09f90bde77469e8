//! Conversation request handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use tracing::debug;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{
    ConversationListResponse, ConversationResponse, CreateConversationRequest,
    CreateConversationResponse, SendMessageRequest, SendMessageResponse,
};

/// `GET /api/conversations` — up to 50 summaries, most recently updated first.
pub async fn list_conversations_handler(
    State(state): State<AppState>,
) -> AppResult<Json<ConversationListResponse>> {
    let conversations = state.conversations.list().await?;
    Ok(Json(ConversationListResponse { conversations }))
}

/// `POST /api/conversations` — create a conversation, optionally seeded.
pub async fn create_conversation_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateConversationRequest>, JsonRejection>,
) -> AppResult<Json<CreateConversationResponse>> {
    let Json(body) = payload?;
    debug!(agent = %body.agent, seeded = body.first_message.is_some(), "create conversation");
    let id = state.conversations.create(body.into()).await?;
    Ok(Json(CreateConversationResponse { id: id.to_string() }))
}

/// `GET /api/conversations/{id}` — a conversation with all messages.
pub async fn get_conversation_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ConversationResponse>> {
    let conversation = state.conversations.get(&id).await?;
    Ok(Json(conversation.into()))
}

/// `POST /api/conversations/{id}/messages` — append a message and return the reply.
pub async fn send_message_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> AppResult<Json<SendMessageResponse>> {
    let Json(body) = payload?;
    let message = state
        .conversations
        .send_message(&id, &body.content, body.agent)
        .await?;
    Ok(Json(SendMessageResponse { message }))
}
