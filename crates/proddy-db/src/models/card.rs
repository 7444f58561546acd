//! Card database model

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CardModel {
    pub id: i64,
    pub workspace_id: i64,
    pub channel_id: i64,
    pub title: String,
}
