//! Card entity - a task on a channel's board

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: Snowflake,
    pub workspace_id: Snowflake,
    pub channel_id: Snowflake,
    pub title: String,
}

impl Card {
    pub fn new(
        id: Snowflake,
        workspace_id: Snowflake,
        channel_id: Snowflake,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id,
            workspace_id,
            channel_id,
            title: title.into(),
        }
    }
}
