//! Request and response bodies.
//!
//! Field names are snake_case on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parlor_core::agents::{Agent, AgentId};
use parlor_core::models::conversation::{
    Conversation, ConversationSummary, Message, NewConversation,
};

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `GET /` body.
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// `GET /test` body. Values are human-readable status strings.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentListResponse {
    pub agents: &'static [Agent],
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversationListResponse {
    pub conversations: Vec<ConversationSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateConversationRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub agent: AgentId,
    #[serde(default)]
    pub first_message: Option<String>,
}

impl From<CreateConversationRequest> for NewConversation {
    fn from(req: CreateConversationRequest) -> Self {
        Self {
            title: req.title,
            agent: Some(req.agent),
            first_message: req.first_message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConversationResponse {
    pub id: String,
}

/// Full conversation as returned by `GET /api/conversations/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationResponse {
    pub id: String,
    pub title: String,
    pub agent: AgentId,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Conversation> for ConversationResponse {
    fn from(c: Conversation) -> Self {
        Self {
            id: c.id.to_string(),
            title: c.title,
            agent: c.agent,
            messages: c.messages,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
    /// One-off agent for this message; it also becomes the new default.
    #[serde(default)]
    pub agent: Option<AgentId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendMessageResponse {
    pub message: Message,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults_agent_to_general() {
        let req: CreateConversationRequest = serde_json::from_str("{}").expect("parse");
        assert_eq!(req.agent, AgentId::General);
        assert!(req.title.is_none());
        assert!(req.first_message.is_none());
    }

    #[test]
    fn create_request_rejects_unknown_agent() {
        let parsed = serde_json::from_str::<CreateConversationRequest>(r#"{"agent":"wizard"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn send_request_requires_content() {
        assert!(serde_json::from_str::<SendMessageRequest>(r#"{"agent":"code"}"#).is_err());
        let req: SendMessageRequest =
            serde_json::from_str(r#"{"content":"hi","agent":null}"#).expect("parse");
        assert_eq!(req.agent, None);
    }
}
