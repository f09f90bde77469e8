//! # parlor_api
//!
//! HTTP API library for Parlor.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use parlor_core::conversations::ConversationService;

use crate::config::ApiConfig;
use crate::handlers::{agents, conversations, health};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Conversation service wrapping the configured store.
    pub conversations: ConversationService,
    /// API configuration.
    pub config: ApiConfig,
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::GET_ROOT, get(health::root_handler))
        .route(routes::GET_TEST, get(health::diagnostic_handler))
        .route(routes::GET_API_AGENTS, get(agents::list_agents_handler))
        .route(
            routes::GET_API_CONVERSATIONS,
            get(conversations::list_conversations_handler),
        )
        .route(
            routes::POST_API_CONVERSATIONS,
            post(conversations::create_conversation_handler),
        )
        .route(
            routes::GET_API_CONVERSATIONS_ID,
            get(conversations::get_conversation_handler),
        )
        .route(
            routes::POST_API_CONVERSATIONS_ID_MESSAGES,
            post(conversations::send_message_handler),
        )
        .layer(cors)
        .with_state(state)
}
