//! DirectRead entity - receipt that a member has read a direct message
//!
//! Receipts only ever get created. A message is unread for a member exactly
//! when no receipt exists for the `(message_id, member_id)` pair.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectRead {
    pub id: Snowflake,
    pub message_id: Snowflake,
    pub member_id: Snowflake,
    pub read_at: DateTime<Utc>,
}

impl DirectRead {
    pub fn new(id: Snowflake, message_id: Snowflake, member_id: Snowflake) -> Self {
        Self {
            id,
            message_id,
            member_id,
            read_at: Utc::now(),
        }
    }
}
