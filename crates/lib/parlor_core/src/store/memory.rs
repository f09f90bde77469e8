//! In-process conversation store.
//!
//! Used by tests and by the server's `memory` backend. Each record sits
//! behind its own shard lock, which makes a pair append atomic with respect
//! to other appends on the same conversation.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use super::{
    CONVERSATION_COLLECTION, ConversationStore, ConversationUpdate, ListQuery, StoreError,
    StoreStatus,
};
use crate::models::conversation::{Conversation, ConversationSummary, Message};

/// DashMap-backed [`ConversationStore`].
#[derive(Debug)]
pub struct MemoryConversationStore {
    conversations: DashMap<Uuid, Conversation>,
    available: AtomicBool,
}

impl MemoryConversationStore {
    pub fn new() -> Self {
        Self {
            conversations: DashMap::new(),
            available: AtomicBool::new(true),
        }
    }

    /// Simulate the backing database going away (or coming back).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of stored conversations.
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("in-memory store offline".into()))
        }
    }
}

impl Default for MemoryConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationStore for MemoryConversationStore {
    async fn insert(&self, conversation: &Conversation) -> Result<Uuid, StoreError> {
        self.check_available()?;
        self.conversations
            .insert(conversation.id, conversation.clone());
        Ok(conversation.id)
    }

    async fn find_one(&self, id: Uuid) -> Result<Option<Conversation>, StoreError> {
        self.check_available()?;
        Ok(self.conversations.get(&id).map(|c| c.value().clone()))
    }

    async fn find_many(&self, query: ListQuery) -> Result<Vec<ConversationSummary>, StoreError> {
        self.check_available()?;
        let mut items: Vec<ConversationSummary> = self
            .conversations
            .iter()
            .map(|entry| entry.value().summary())
            .collect();
        items.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        items.truncate(query.limit);
        Ok(items)
    }

    async fn append_and_set(
        &self,
        id: Uuid,
        messages: &[Message],
        update: ConversationUpdate,
    ) -> Result<bool, StoreError> {
        self.check_available()?;
        let Some(mut conversation) = self.conversations.get_mut(&id) else {
            return Ok(false);
        };
        conversation.messages.extend_from_slice(messages);
        conversation.updated_at = update.updated_at;
        if let Some(agent) = update.agent {
            conversation.agent = agent;
        }
        Ok(true)
    }

    async fn status(&self) -> StoreStatus {
        let connected = self.available.load(Ordering::SeqCst);
        StoreStatus {
            backend: "memory",
            configured: true,
            connected,
            database_name: Some("memory".into()),
            collections: vec![CONVERSATION_COLLECTION.to_string()],
            error: (!connected).then(|| "in-memory store offline".to_string()),
        }
    }
}
