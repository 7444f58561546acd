//! Mention entity - a member was addressed by a message or assigned a card

use chrono::{DateTime, Utc};

use crate::entities::{Card, Message};
use crate::value_objects::Snowflake;

/// Mention entity
///
/// Exactly one of `message_id` / `card_id` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    pub id: Snowflake,
    pub message_id: Option<Snowflake>,
    pub card_id: Option<Snowflake>,
    pub mentioned_member_id: Snowflake,
    pub mentioner_member_id: Snowflake,
    pub workspace_id: Snowflake,
    pub channel_id: Option<Snowflake>,
    pub conversation_id: Option<Snowflake>,
    pub parent_message_id: Option<Snowflake>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Mention {
    /// Unread mention of `mentioned_member_id` inside `message`
    pub fn for_message(id: Snowflake, message: &Message, mentioned_member_id: Snowflake) -> Self {
        Self {
            id,
            message_id: Some(message.id),
            card_id: None,
            mentioned_member_id,
            mentioner_member_id: message.member_id,
            workspace_id: message.workspace_id,
            channel_id: message.channel_id,
            conversation_id: message.conversation_id,
            parent_message_id: message.parent_message_id,
            read: false,
            created_at: Utc::now(),
        }
    }

    /// Unread assignment mention on `card`
    pub fn for_card(
        id: Snowflake,
        card: &Card,
        assigner_member_id: Snowflake,
        assignee_member_id: Snowflake,
    ) -> Self {
        Self {
            id,
            message_id: None,
            card_id: Some(card.id),
            mentioned_member_id: assignee_member_id,
            mentioner_member_id: assigner_member_id,
            workspace_id: card.workspace_id,
            channel_id: Some(card.channel_id),
            conversation_id: None,
            parent_message_id: None,
            read: false,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_addressed_to(&self, member_id: Snowflake) -> bool {
        self.mentioned_member_id == member_id
    }
}
