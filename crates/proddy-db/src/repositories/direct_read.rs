//! PostgreSQL implementation of DirectReadRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use proddy_core::entities::DirectRead;
use proddy_core::traits::{DirectReadRepository, RepoResult};
use proddy_core::value_objects::Snowflake;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgDirectReadRepository {
    pool: PgPool,
}

impl PgDirectReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DirectReadRepository for PgDirectReadRepository {
    #[instrument(skip(self))]
    async fn exists(&self, message_id: Snowflake, member_id: Snowflake) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM direct_reads WHERE message_id = $1 AND member_id = $2
            )
            "#,
        )
        .bind(message_id.into_inner())
        .bind(member_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    // Concurrent inserts for the same pair collapse on the unique index
    #[instrument(skip(self, read), fields(message_id = %read.message_id, member_id = %read.member_id))]
    async fn create(&self, read: &DirectRead) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO direct_reads (id, message_id, member_id, read_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (message_id, member_id) DO NOTHING
            "#,
        )
        .bind(read.id.into_inner())
        .bind(read.message_id.into_inner())
        .bind(read.member_id.into_inner())
        .bind(read.read_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }
}
