//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use proddy_core::entities::{Member, User};
use proddy_core::traits::{MemberRepository, RepoResult};
use proddy_core::value_objects::Snowflake;

use crate::models::{MemberModel, MemberWithUserModel};

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT id, workspace_id, user_id, role
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Member::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_workspace_and_user(
        &self,
        workspace_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT id, workspace_id, user_id, role
            FROM members
            WHERE workspace_id = $1 AND user_id = $2
            "#,
        )
        .bind(workspace_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Member::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_with_users(&self, workspace_id: Snowflake) -> RepoResult<Vec<(Member, User)>> {
        let rows = sqlx::query_as::<_, MemberWithUserModel>(
            r#"
            SELECT m.id, m.workspace_id, m.user_id, m.role,
                   u.name AS user_name, u.image AS user_image
            FROM members m
            JOIN users u ON u.id = m.user_id
            WHERE m.workspace_id = $1
            ORDER BY m.id
            "#,
        )
        .bind(workspace_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(<(Member, User)>::try_from).collect()
    }
}
