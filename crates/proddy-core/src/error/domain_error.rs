//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Member not found: {0}")]
    MemberNotFound(Snowflake),

    #[error("Channel not found: {0}")]
    ChannelNotFound(Snowflake),

    #[error("Conversation not found: {0}")]
    ConversationNotFound(Snowflake),

    #[error("Message not found: {0}")]
    MessageNotFound(Snowflake),

    #[error("Parent message not found: {0}")]
    ParentMessageNotFound(Snowflake),

    #[error("Mention not found: {0}")]
    MentionNotFound(Snowflake),

    #[error("Card not found: {0}")]
    CardNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid message body: {0}")]
    InvalidBody(String),

    #[error("Channel {0} does not belong to this workspace")]
    ChannelOutsideWorkspace(Snowflake),

    #[error("Conversation {0} does not belong to this workspace")]
    ConversationOutsideWorkspace(Snowflake),

    #[error("Message {0} is not a direct message")]
    NotDirectMessage(Snowflake),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Unauthorized: not the message author")]
    NotMessageAuthor,

    #[error("Unauthorized: mention belongs to another member")]
    NotMentionOwner,

    #[error("Unauthorized: not a participant of this conversation")]
    NotConversationParticipant,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Duplicate record: {0}")]
    DuplicateRecord(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Scheduler error: {0}")]
    SchedulerError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::ChannelNotFound(_) => "UNKNOWN_CHANNEL",
            Self::ConversationNotFound(_) => "UNKNOWN_CONVERSATION",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::ParentMessageNotFound(_) => "UNKNOWN_PARENT_MESSAGE",
            Self::MentionNotFound(_) => "UNKNOWN_MENTION",
            Self::CardNotFound(_) => "UNKNOWN_CARD",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::ChannelOutsideWorkspace(_) => "CHANNEL_OUTSIDE_WORKSPACE",
            Self::ConversationOutsideWorkspace(_) => "CONVERSATION_OUTSIDE_WORKSPACE",
            Self::NotDirectMessage(_) => "NOT_DIRECT_MESSAGE",

            // Authorization
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotMessageAuthor => "NOT_MESSAGE_AUTHOR",
            Self::NotMentionOwner => "NOT_MENTION_OWNER",
            Self::NotConversationParticipant => "NOT_CONVERSATION_PARTICIPANT",

            // Conflict
            Self::DuplicateRecord(_) => "DUPLICATE_RECORD",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::SchedulerError(_) => "SCHEDULER_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::MemberNotFound(_)
                | Self::ChannelNotFound(_)
                | Self::ConversationNotFound(_)
                | Self::MessageNotFound(_)
                | Self::ParentMessageNotFound(_)
                | Self::MentionNotFound(_)
                | Self::CardNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidBody(_)
                | Self::ChannelOutsideWorkspace(_)
                | Self::ConversationOutsideWorkspace(_)
                | Self::NotDirectMessage(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized
                | Self::NotMessageAuthor
                | Self::NotMentionOwner
                | Self::NotConversationParticipant
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateRecord(_))
    }
}
