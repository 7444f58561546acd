//! Message entity - a channel post, thread reply or direct message

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{MessageBody, Snowflake};

/// Calendar entry attached to a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    /// Free-form time of day as entered by the user (e.g. "14:30")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Message entity
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: Snowflake,
    pub workspace_id: Snowflake,
    /// Author (workspace member)
    pub member_id: Snowflake,
    pub body: MessageBody,
    pub image: Option<String>,
    pub channel_id: Option<Snowflake>,
    pub conversation_id: Option<Snowflake>,
    pub parent_message_id: Option<Snowflake>,
    pub calendar_event: Option<CalendarEvent>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Message {
    pub fn new(
        id: Snowflake,
        workspace_id: Snowflake,
        member_id: Snowflake,
        body: MessageBody,
    ) -> Self {
        Self {
            id,
            workspace_id,
            member_id,
            body,
            image: None,
            channel_id: None,
            conversation_id: None,
            parent_message_id: None,
            calendar_event: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn in_channel(mut self, channel_id: Snowflake) -> Self {
        self.channel_id = Some(channel_id);
        self
    }

    pub fn in_conversation(mut self, conversation_id: Snowflake) -> Self {
        self.conversation_id = Some(conversation_id);
        self
    }

    pub fn replying_to(mut self, parent_message_id: Snowflake) -> Self {
        self.parent_message_id = Some(parent_message_id);
        self
    }

    /// Direct messages never take part in mention extraction
    #[inline]
    pub fn is_direct(&self) -> bool {
        self.conversation_id.is_some()
    }

    #[inline]
    pub fn is_thread_reply(&self) -> bool {
        self.parent_message_id.is_some()
    }

    #[inline]
    pub fn is_edited(&self) -> bool {
        self.updated_at.is_some()
    }

    #[inline]
    pub fn is_authored_by(&self, member_id: Snowflake) -> bool {
        self.member_id == member_id
    }

    pub fn edit(&mut self, body: MessageBody) {
        self.body = body;
        self.updated_at = Some(Utc::now());
    }

    pub fn text_preview(&self) -> String {
        self.body.text_preview()
    }
}
