//! PostgreSQL conversation store.
//!
//! Messages live inline in a JSONB array column, so a pair append is a
//! single `UPDATE` and is atomic per row.
//!
//! The schema is migrated on the first call that reaches the database. A
//! failed attempt is not remembered, so the next call tries again.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{ConversationStore, ConversationUpdate, ListQuery, StoreError, StoreStatus};
use crate::agents::AgentId;
use crate::models::conversation::{Conversation, ConversationSummary, Message};

/// Row returned by full conversation queries.
#[derive(Debug, Clone, sqlx::FromRow)]
struct ConversationRow {
    id: Uuid,
    title: String,
    agent: AgentId,
    messages: Json<Vec<Message>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ConversationRow> for Conversation {
    fn from(row: ConversationRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            agent: row.agent,
            messages: row.messages.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Row returned by listing queries (messages projected out).
#[derive(Debug, Clone, sqlx::FromRow)]
struct SummaryRow {
    id: Uuid,
    title: String,
    agent: AgentId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SummaryRow> for ConversationSummary {
    fn from(row: SummaryRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            agent: row.agent,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// sqlx-backed [`ConversationStore`].
#[derive(Debug, Clone)]
pub struct PgConversationStore {
    pool: PgPool,
    migrated: Arc<OnceCell<()>>,
}

impl PgConversationStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            migrated: Arc::new(OnceCell::new()),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run the embedded migrations once per store.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.migrated
            .get_or_try_init(|| async {
                info!("running database migrations");
                crate::migrate::migrate(&self.pool).await?;
                Ok::<_, StoreError>(())
            })
            .await?;
        Ok(())
    }

    pub fn is_migrated(&self) -> bool {
        self.migrated.initialized()
    }
}

#[async_trait]
impl ConversationStore for PgConversationStore {
    async fn insert(&self, conversation: &Conversation) -> Result<Uuid, StoreError> {
        self.ensure_schema().await?;
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO conversation (id, title, agent, messages, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(conversation.id)
        .bind(&conversation.title)
        .bind(conversation.agent)
        .bind(Json(&conversation.messages))
        .bind(conversation.created_at)
        .bind(conversation.updated_at)
        .fetch_one(&self.pool)
        .await?;

        debug!(%id, messages = conversation.messages.len(), "inserted conversation");
        Ok(id)
    }

    async fn find_one(&self, id: Uuid) -> Result<Option<Conversation>, StoreError> {
        self.ensure_schema().await?;
        let row = sqlx::query_as::<_, ConversationRow>(
            r#"
            SELECT id, title, agent, messages, created_at, updated_at
            FROM conversation
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Conversation::from))
    }

    async fn find_many(&self, query: ListQuery) -> Result<Vec<ConversationSummary>, StoreError> {
        self.ensure_schema().await?;
        let limit = i64::try_from(query.limit).unwrap_or(i64::MAX);
        let rows = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT id, title, agent, created_at, updated_at
            FROM conversation
            ORDER BY updated_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ConversationSummary::from).collect())
    }

    async fn append_and_set(
        &self,
        id: Uuid,
        messages: &[Message],
        update: ConversationUpdate,
    ) -> Result<bool, StoreError> {
        self.ensure_schema().await?;
        let result = sqlx::query(
            r#"
            UPDATE conversation
            SET messages = messages || $2::jsonb,
                updated_at = $3,
                agent = COALESCE($4, agent)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(Json(messages))
        .bind(update.updated_at)
        .bind(update.agent)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn status(&self) -> StoreStatus {
        let mut status = StoreStatus {
            backend: "postgres",
            configured: true,
            ..StoreStatus::default()
        };

        match sqlx::query_scalar::<_, String>("SELECT current_database()")
            .fetch_one(&self.pool)
            .await
        {
            Ok(name) => {
                status.connected = true;
                status.database_name = Some(name);
            }
            Err(e) => {
                warn!("database status check failed: {e}");
                status.error = Some(e.to_string());
                return status;
            }
        }

        match sqlx::query_scalar::<_, String>(
            r#"
            SELECT table_name::text
            FROM information_schema.tables
            WHERE table_schema = current_schema()
            ORDER BY table_name
            LIMIT 10
            "#,
        )
        .fetch_all(&self.pool)
        .await
        {
            Ok(tables) => status.collections = tables,
            Err(e) => {
                warn!("listing tables failed: {e}");
                status.error = Some(e.to_string());
            }
        }

        status
    }
}
