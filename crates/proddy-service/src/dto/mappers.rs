//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs, plus
//! the small constructors the inbox listings share.

use proddy_core::entities::{Message, User};
use proddy_core::value_objects::Snowflake;

use super::responses::{MessageResponse, NotificationAuthor, NotificationSource, SourceKind};

/// Shown when a mention's author no longer resolves to a user
pub const UNKNOWN_AUTHOR_NAME: &str = "Unknown User";

// ============================================================================
// Message Mappers
// ============================================================================

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.to_string(),
            workspace_id: message.workspace_id.to_string(),
            member_id: message.member_id.to_string(),
            body: message.body.raw().to_string(),
            format: message.body.format(),
            image: message.image.clone(),
            channel_id: message.channel_id.map(|id| id.to_string()),
            conversation_id: message.conversation_id.map(|id| id.to_string()),
            parent_message_id: message.parent_message_id.map(|id| id.to_string()),
            calendar_event: message.calendar_event.clone(),
            created_at: message.created_at,
            updated_at: message.updated_at,
        }
    }
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self::from(&message)
    }
}

// ============================================================================
// Notification Mappers
// ============================================================================

impl NotificationAuthor {
    /// Author block for a member, falling back to a placeholder name when the
    /// member's user is unknown
    pub fn for_member(member_id: Snowflake, user: Option<&User>) -> Self {
        match user {
            Some(user) => Self {
                id: member_id.to_string(),
                name: user.name.clone(),
                image: user.image.clone(),
            },
            None => Self {
                id: member_id.to_string(),
                name: UNKNOWN_AUTHOR_NAME.to_string(),
                image: None,
            },
        }
    }
}

impl NotificationSource {
    pub fn new(kind: SourceKind, id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.to_string(),
            name: name.into(),
        }
    }
}
