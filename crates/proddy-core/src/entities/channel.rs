//! Channel entity

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: Snowflake,
    pub workspace_id: Snowflake,
    pub name: String,
}

impl Channel {
    pub fn new(id: Snowflake, workspace_id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            workspace_id,
            name: name.into(),
        }
    }
}
