//! Conversation database model

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ConversationModel {
    pub id: i64,
    pub workspace_id: i64,
    pub member_one_id: i64,
    pub member_two_id: i64,
}
