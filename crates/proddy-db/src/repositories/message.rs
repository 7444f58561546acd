//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use proddy_core::entities::Message;
use proddy_core::error::DomainError;
use proddy_core::traits::{MessageRepository, RepoResult};
use proddy_core::value_objects::Snowflake;

use crate::mappers::MessageColumns;
use crate::models::MessageModel;

use super::error::{map_db_error, map_unique_violation};

const MESSAGE_COLUMNS: &str = "id, workspace_id, member_id, body, body_format, image, channel_id, \
     conversation_id, parent_message_id, calendar_date, calendar_time, created_at, updated_at";

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Message>> {
        let result = sqlx::query_as::<_, MessageModel>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Message::try_from).transpose()
    }

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        let columns = MessageColumns::new(message);

        sqlx::query(
            r#"
            INSERT INTO messages (id, workspace_id, member_id, body, body_format, image,
                                  channel_id, conversation_id, parent_message_id,
                                  calendar_date, calendar_time, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(columns.id)
        .bind(columns.workspace_id)
        .bind(columns.member_id)
        .bind(columns.body)
        .bind(columns.body_format)
        .bind(columns.image)
        .bind(columns.channel_id)
        .bind(columns.conversation_id)
        .bind(columns.parent_message_id)
        .bind(columns.calendar_date)
        .bind(columns.calendar_time)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "messages"))?;

        Ok(())
    }

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn update(&self, message: &Message) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE messages
            SET body = $2, body_format = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(message.id.into_inner())
        .bind(message.body.raw())
        .bind(message.body.format().as_str())
        .bind(message.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MessageNotFound(message.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MessageNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_recent_in_conversation(
        &self,
        conversation_id: Snowflake,
        member_id: Snowflake,
        limit: i64,
    ) -> RepoResult<Vec<Message>> {
        let rows = sqlx::query_as::<_, MessageModel>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages \
             WHERE conversation_id = $1 AND member_id = $2 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $3"
        ))
        .bind(conversation_id.into_inner())
        .bind(member_id.into_inner())
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Message::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_ids_in_conversation(
        &self,
        conversation_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<Snowflake>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM messages
            WHERE conversation_id = $1 AND member_id = $2
            ORDER BY id
            "#,
        )
        .bind(conversation_id.into_inner())
        .bind(member_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids.into_iter().map(Snowflake::new).collect())
    }
}
