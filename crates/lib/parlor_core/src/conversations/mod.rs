//! Conversation orchestration.
//!
//! Ties the agent router to the store: creating conversations, appending
//! user/assistant pairs, and listing.

pub mod service;

use thiserror::Error;

use crate::store::StoreError;

pub use service::{ConversationService, LIST_LIMIT};

/// Conversation errors.
#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("Invalid conversation id: {0}")]
    InvalidId(String),

    #[error("Conversation not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<StoreError> for ConversationError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unavailable(msg) => ConversationError::Unavailable(msg),
            other => ConversationError::Store(other.to_string()),
        }
    }
}
