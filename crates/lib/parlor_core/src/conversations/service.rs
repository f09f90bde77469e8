//! Conversation service — the only writer of conversation records.
//!
//! Every mutation appends a whole user/assistant pair in a single store
//! call. Two concurrent sends to the same conversation each land their pair
//! intact, but the order between the pairs, and which request's
//! `updated_at`/default agent survives, is last-write-wins. No extra
//! locking is done here.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use super::ConversationError;
use crate::agents::{AgentId, router};
use crate::models::conversation::{
    Conversation, ConversationSummary, DEFAULT_TITLE, Message, NewConversation,
};
use crate::store::{ConversationStore, ConversationUpdate, ListQuery};
use crate::uuid::{parse_id, uuidv7};
use crate::validation;

/// Maximum number of summaries returned by [`ConversationService::list`].
pub const LIST_LIMIT: usize = 50;

/// Orchestrates routing and persistence for conversations.
#[derive(Clone)]
pub struct ConversationService {
    store: Arc<dyn ConversationStore>,
}

impl ConversationService {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    /// The backing store, for diagnostics.
    pub fn store(&self) -> &dyn ConversationStore {
        self.store.as_ref()
    }

    /// Create a conversation, optionally seeded with a first exchange.
    ///
    /// The seeded pair is part of the inserted record, so readers never see
    /// the conversation without it.
    pub async fn create(&self, input: NewConversation) -> Result<Uuid, ConversationError> {
        reject_invalid(validation::validate_new_conversation(&input))?;

        let agent = input.agent.unwrap_or_default();
        let title = input
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let created_at = Utc::now();

        let mut conversation = Conversation {
            id: uuidv7(),
            title,
            agent,
            messages: Vec::new(),
            created_at,
            updated_at: created_at,
        };

        if let Some(first) = input.first_message.filter(|m| !m.is_empty()) {
            let at = Utc::now().max(created_at);
            conversation.messages.extend(reply_pair(agent, first, at));
            conversation.updated_at = at;
        }

        let id = self.store.insert(&conversation).await?;
        info!(
            %id,
            %agent,
            seeded = !conversation.messages.is_empty(),
            "created conversation"
        );
        Ok(id)
    }

    /// Load a conversation with all of its messages.
    pub async fn get(&self, id: &str) -> Result<Conversation, ConversationError> {
        let id = parse_conversation_id(id)?;
        self.store
            .find_one(id)
            .await?
            .ok_or_else(|| ConversationError::NotFound(id.to_string()))
    }

    /// Route `content` to the active agent and append the exchange.
    ///
    /// The active agent is `agent_override` when given, otherwise the
    /// conversation's default. Whichever is used becomes the conversation's
    /// new default.
    pub async fn send_message(
        &self,
        id: &str,
        content: &str,
        agent_override: Option<AgentId>,
    ) -> Result<Message, ConversationError> {
        let id = parse_conversation_id(id)?;
        reject_invalid(validation::validate_content(content))?;

        let conversation = self
            .store
            .find_one(id)
            .await?
            .ok_or_else(|| ConversationError::NotFound(id.to_string()))?;

        let active = agent_override.unwrap_or(conversation.agent);
        let at = Utc::now().max(conversation.created_at);
        let pair = reply_pair(active, content.to_string(), at);

        let matched = self
            .store
            .append_and_set(
                id,
                &pair,
                ConversationUpdate {
                    updated_at: at,
                    agent: Some(active),
                },
            )
            .await?;
        if !matched {
            return Err(ConversationError::NotFound(id.to_string()));
        }

        info!(%id, agent = %active, overridden = agent_override.is_some(), "appended message pair");
        let [_, reply] = pair;
        Ok(reply)
    }

    /// Most recently updated conversations first, without messages.
    pub async fn list(&self) -> Result<Vec<ConversationSummary>, ConversationError> {
        let items = self
            .store
            .find_many(ListQuery { limit: LIST_LIMIT })
            .await?;
        debug!(count = items.len(), "listed conversations");
        Ok(items)
    }
}

/// Build the user message and the routed assistant reply.
fn reply_pair(agent: AgentId, content: String, at: DateTime<Utc>) -> [Message; 2] {
    let reply = router::dispatch(agent, &content);
    [
        Message::user(content, at),
        Message::assistant(reply, agent, at),
    ]
}

fn parse_conversation_id(raw: &str) -> Result<Uuid, ConversationError> {
    parse_id(raw).ok_or_else(|| ConversationError::InvalidId(raw.to_string()))
}

fn reject_invalid(errors: Vec<String>) -> Result<(), ConversationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConversationError::Validation(errors.join("; ")))
    }
}
