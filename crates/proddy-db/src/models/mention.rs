//! Mention database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for mentions table
#[derive(Debug, Clone, FromRow)]
pub struct MentionModel {
    pub id: i64,
    pub message_id: Option<i64>,
    pub card_id: Option<i64>,
    pub mentioned_member_id: i64,
    pub mentioner_member_id: i64,
    pub workspace_id: i64,
    pub channel_id: Option<i64>,
    pub conversation_id: Option<i64>,
    pub parent_message_id: Option<i64>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
