//! Conversation domain models.
//!
//! A conversation owns its messages; messages are only ever appended,
//! user/assistant in pairs, and never reordered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::agents::AgentId;

/// Title given to conversations created without one.
pub const DEFAULT_TITLE: &str = "New Chat";

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// A single chat message. Content is markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Responder that produced the message; only set for assistant messages.
    #[serde(default)]
    pub agent: Option<AgentId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Message {
    pub fn user(content: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            agent: None,
            created_at: Some(at),
        }
    }

    pub fn assistant(content: impl Into<String>, agent: AgentId, at: DateTime<Utc>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            agent: Some(agent),
            created_at: Some(at),
        }
    }
}

/// A stored conversation with its full message history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub title: String,
    /// Default responder for messages sent without an override.
    pub agent: AgentId,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Metadata-only view used by listings.
    pub fn summary(&self) -> ConversationSummary {
        ConversationSummary {
            id: self.id,
            title: self.title.clone(),
            agent: self.agent,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Conversation metadata without messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: Uuid,
    pub title: String,
    pub agent: AgentId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a conversation.
#[derive(Debug, Clone, Default)]
pub struct NewConversation {
    pub title: Option<String>,
    pub agent: Option<AgentId>,
    /// When present and non-empty, seeds the conversation with a
    /// user/assistant pair.
    pub first_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serializes_with_null_optionals() {
        let at = Utc::now();
        let json = serde_json::to_value(Message::user("hi", at)).expect("serialize");
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "hi");
        assert!(json["agent"].is_null());
        assert!(json["created_at"].is_string());
    }

    #[test]
    fn message_deserializes_without_optionals() {
        let msg: Message =
            serde_json::from_str(r#"{"role":"system","content":"be brief"}"#).expect("parse");
        assert_eq!(msg.role, Role::System);
        assert_eq!(msg.agent, None);
        assert_eq!(msg.created_at, None);
    }

    #[test]
    fn assistant_message_carries_agent_tag() {
        let msg = Message::assistant("ok", AgentId::Design, Utc::now());
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.agent, Some(AgentId::Design));
    }

    #[test]
    fn summary_drops_messages() {
        let now = Utc::now();
        let conv = Conversation {
            id: Uuid::now_v7(),
            title: "t".into(),
            agent: AgentId::Code,
            messages: vec![Message::user("a", now)],
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(conv.summary()).expect("serialize");
        assert!(json.get("messages").is_none());
        assert_eq!(json["agent"], "code");
        assert_eq!(json["id"], conv.id.to_string());
    }
}
