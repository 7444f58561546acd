//! Message database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for messages table
///
/// The calendar event is flattened into two nullable columns.
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub workspace_id: i64,
    pub member_id: i64,
    pub body: String,
    pub body_format: String,
    pub image: Option<String>,
    pub channel_id: Option<i64>,
    pub conversation_id: Option<i64>,
    pub parent_message_id: Option<i64>,
    pub calendar_date: Option<NaiveDate>,
    pub calendar_time: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
