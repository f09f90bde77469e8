//! Conversation persistence.
//!
//! [`ConversationStore`] is the only way conversation records are read or
//! written. It is built once at startup and handed to the service, so tests
//! can swap in [`MemoryConversationStore`].

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::agents::AgentId;
use crate::models::conversation::{Conversation, ConversationSummary, Message};

pub use memory::MemoryConversationStore;
pub use postgres::PgConversationStore;

/// Collection (table) holding conversation records.
pub const CONVERSATION_COLLECTION: &str = "conversation";

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(sqlx::migrate::MigrateError),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StoreError::Unavailable(e.to_string()),
            other => StoreError::Database(other),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        match e {
            sqlx::migrate::MigrateError::Execute(inner)
            | sqlx::migrate::MigrateError::ExecuteMigration(inner, _) => StoreError::from(inner),
            other => StoreError::Migration(other),
        }
    }
}

/// Parameters for [`ConversationStore::find_many`].
#[derive(Debug, Clone, Copy)]
pub struct ListQuery {
    pub limit: usize,
}

/// Fields overwritten alongside a message append.
#[derive(Debug, Clone, Copy)]
pub struct ConversationUpdate {
    pub updated_at: DateTime<Utc>,
    /// New default agent; `None` leaves the stored value untouched.
    pub agent: Option<AgentId>,
}

/// Best-effort connectivity report for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct StoreStatus {
    pub backend: &'static str,
    pub configured: bool,
    pub connected: bool,
    pub database_name: Option<String>,
    /// First few collection names, when they could be listed.
    pub collections: Vec<String>,
    pub error: Option<String>,
}

/// Document-store style persistence for conversations.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Insert a whole conversation, including any seeded messages, and
    /// return its id.
    async fn insert(&self, conversation: &Conversation) -> Result<Uuid, StoreError>;

    async fn find_one(&self, id: Uuid) -> Result<Option<Conversation>, StoreError>;

    /// Conversation summaries, most recently updated first.
    async fn find_many(&self, query: ListQuery) -> Result<Vec<ConversationSummary>, StoreError>;

    /// Append `messages` in order and apply `update` as one atomic operation.
    /// Returns `false` when no record matched `id`.
    async fn append_and_set(
        &self,
        id: Uuid,
        messages: &[Message],
        update: ConversationUpdate,
    ) -> Result<bool, StoreError>;

    /// Never fails; problems are reported inside the status.
    async fn status(&self) -> StoreStatus;
}

/// Stand-in used when no database is configured. Every call fails with
/// [`StoreError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredStore;

const NOT_CONFIGURED: &str = "Database not configured";

#[async_trait]
impl ConversationStore for UnconfiguredStore {
    async fn insert(&self, _conversation: &Conversation) -> Result<Uuid, StoreError> {
        Err(StoreError::Unavailable(NOT_CONFIGURED.into()))
    }

    async fn find_one(&self, _id: Uuid) -> Result<Option<Conversation>, StoreError> {
        Err(StoreError::Unavailable(NOT_CONFIGURED.into()))
    }

    async fn find_many(&self, _query: ListQuery) -> Result<Vec<ConversationSummary>, StoreError> {
        Err(StoreError::Unavailable(NOT_CONFIGURED.into()))
    }

    async fn append_and_set(
        &self,
        _id: Uuid,
        _messages: &[Message],
        _update: ConversationUpdate,
    ) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable(NOT_CONFIGURED.into()))
    }

    async fn status(&self) -> StoreStatus {
        StoreStatus {
            backend: "none",
            error: Some(NOT_CONFIGURED.into()),
            ..StoreStatus::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_errors_map_to_unavailable() {
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolClosed),
            StoreError::Unavailable(_)
        ));
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(matches!(
            StoreError::from(sqlx::Error::Io(io)),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn migration_connection_errors_map_to_unavailable() {
        let err = sqlx::migrate::MigrateError::Execute(sqlx::Error::PoolTimedOut);
        assert!(matches!(StoreError::from(err), StoreError::Unavailable(_)));

        let err = sqlx::migrate::MigrateError::VersionMissing(1);
        assert!(matches!(StoreError::from(err), StoreError::Migration(_)));
    }

    #[test]
    fn query_errors_stay_database_errors() {
        assert!(matches!(
            StoreError::from(sqlx::Error::RowNotFound),
            StoreError::Database(_)
        ));
    }

    #[tokio::test]
    async fn unconfigured_store_rejects_everything() {
        let store = UnconfiguredStore;
        assert!(matches!(
            store.find_one(Uuid::now_v7()).await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(matches!(
            store.find_many(ListQuery { limit: 10 }).await,
            Err(StoreError::Unavailable(_))
        ));

        let status = store.status().await;
        assert!(!status.configured);
        assert!(!status.connected);
    }
}
