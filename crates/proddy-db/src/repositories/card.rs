//! PostgreSQL implementation of CardRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use proddy_core::entities::Card;
use proddy_core::traits::{CardRepository, RepoResult};
use proddy_core::value_objects::Snowflake;

use crate::models::CardModel;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgCardRepository {
    pool: PgPool,
}

impl PgCardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CardRepository for PgCardRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Card>> {
        let result = sqlx::query_as::<_, CardModel>(
            r#"
            SELECT id, workspace_id, channel_id, title
            FROM cards
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Card::from))
    }
}
