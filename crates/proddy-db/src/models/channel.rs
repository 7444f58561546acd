//! Channel database model

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ChannelModel {
    pub id: i64,
    pub workspace_id: i64,
    pub name: String,
}
