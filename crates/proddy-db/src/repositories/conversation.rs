//! PostgreSQL implementation of ConversationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use proddy_core::entities::Conversation;
use proddy_core::traits::{ConversationRepository, RepoResult};
use proddy_core::value_objects::Snowflake;

use crate::models::ConversationModel;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgConversationRepository {
    pool: PgPool,
}

impl PgConversationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationRepository for PgConversationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Conversation>> {
        let result = sqlx::query_as::<_, ConversationModel>(
            r#"
            SELECT id, workspace_id, member_one_id, member_two_id
            FROM conversations
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Conversation::from))
    }

    #[instrument(skip(self))]
    async fn find_by_member(
        &self,
        workspace_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<Conversation>> {
        let rows = sqlx::query_as::<_, ConversationModel>(
            r#"
            SELECT id, workspace_id, member_one_id, member_two_id
            FROM conversations
            WHERE workspace_id = $1 AND (member_one_id = $2 OR member_two_id = $2)
            ORDER BY id
            "#,
        )
        .bind(workspace_id.into_inner())
        .bind(member_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Conversation::from).collect())
    }
}
