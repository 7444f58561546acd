//! PostgreSQL implementation of MentionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use proddy_core::entities::Mention;
use proddy_core::error::DomainError;
use proddy_core::traits::{MentionRepository, RepoResult};
use proddy_core::value_objects::Snowflake;

use crate::models::MentionModel;

use super::error::{map_db_error, map_unique_violation};

#[derive(Clone)]
pub struct PgMentionRepository {
    pool: PgPool,
}

impl PgMentionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MentionRepository for PgMentionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Mention>> {
        let result = sqlx::query_as::<_, MentionModel>(
            r#"
            SELECT id, message_id, card_id, mentioned_member_id, mentioner_member_id,
                   workspace_id, channel_id, conversation_id, parent_message_id, read, created_at
            FROM mentions
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Mention::from))
    }

    #[instrument(skip(self, mention), fields(mention_id = %mention.id))]
    async fn create(&self, mention: &Mention) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO mentions (id, message_id, card_id, mentioned_member_id, mentioner_member_id,
                                  workspace_id, channel_id, conversation_id, parent_message_id,
                                  read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(mention.id.into_inner())
        .bind(mention.message_id.map(Snowflake::into_inner))
        .bind(mention.card_id.map(Snowflake::into_inner))
        .bind(mention.mentioned_member_id.into_inner())
        .bind(mention.mentioner_member_id.into_inner())
        .bind(mention.workspace_id.into_inner())
        .bind(mention.channel_id.map(Snowflake::into_inner))
        .bind(mention.conversation_id.map(Snowflake::into_inner))
        .bind(mention.parent_message_id.map(Snowflake::into_inner))
        .bind(mention.read)
        .bind(mention.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "mentions"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_for_member(
        &self,
        workspace_id: Snowflake,
        member_id: Snowflake,
        unread_only: bool,
    ) -> RepoResult<Vec<Mention>> {
        let rows = sqlx::query_as::<_, MentionModel>(
            r#"
            SELECT id, message_id, card_id, mentioned_member_id, mentioner_member_id,
                   workspace_id, channel_id, conversation_id, parent_message_id, read, created_at
            FROM mentions
            WHERE workspace_id = $1
              AND mentioned_member_id = $2
              AND (NOT $3 OR read = FALSE)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(workspace_id.into_inner())
        .bind(member_id.into_inner())
        .bind(unread_only)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Mention::from).collect())
    }

    #[instrument(skip(self))]
    async fn set_read(&self, id: Snowflake, read: bool) -> RepoResult<()> {
        let result = sqlx::query("UPDATE mentions SET read = $2 WHERE id = $1")
            .bind(id.into_inner())
            .bind(read)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MentionNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_all_read(&self, workspace_id: Snowflake, member_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE mentions
            SET read = TRUE
            WHERE workspace_id = $1 AND mentioned_member_id = $2 AND read = FALSE
            "#,
        )
        .bind(workspace_id.into_inner())
        .bind(member_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
