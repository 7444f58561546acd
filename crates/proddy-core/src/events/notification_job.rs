//! Notification jobs - work items produced by message ingestion
//!
//! A job only carries identifiers; the delivery worker loads whatever it
//! needs (recipient address, preferences, rendered preview) when it runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Mention, Message};
use crate::value_objects::Snowflake;

/// All notification job kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotificationJob {
    Mention(MentionJob),
    DirectMessage(DirectMessageJob),
    ThreadReply(ThreadReplyJob),
}

impl NotificationJob {
    /// Stable job kind name
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Mention(_) => "mention",
            Self::DirectMessage(_) => "direct_message",
            Self::ThreadReply(_) => "thread_reply",
        }
    }

    pub fn workspace_id(&self) -> Snowflake {
        match self {
            Self::Mention(job) => job.workspace_id,
            Self::DirectMessage(job) => job.workspace_id,
            Self::ThreadReply(job) => job.workspace_id,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Mention(job) => job.created_at,
            Self::DirectMessage(job) => job.created_at,
            Self::ThreadReply(job) => job.created_at,
        }
    }
}

// ============================================================================
// Job Payloads
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionJob {
    pub mention_id: Snowflake,
    pub workspace_id: Snowflake,
    pub mentioned_member_id: Snowflake,
    pub mentioner_member_id: Snowflake,
    pub message_id: Option<Snowflake>,
    pub card_id: Option<Snowflake>,
    pub channel_id: Option<Snowflake>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectMessageJob {
    pub message_id: Snowflake,
    pub workspace_id: Snowflake,
    pub conversation_id: Snowflake,
    pub sender_member_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadReplyJob {
    pub message_id: Snowflake,
    pub workspace_id: Snowflake,
    pub parent_message_id: Snowflake,
    pub replier_member_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Constructors
// ============================================================================

impl NotificationJob {
    pub fn mention(mention: &Mention) -> Self {
        Self::Mention(MentionJob {
            mention_id: mention.id,
            workspace_id: mention.workspace_id,
            mentioned_member_id: mention.mentioned_member_id,
            mentioner_member_id: mention.mentioner_member_id,
            message_id: mention.message_id,
            card_id: mention.card_id,
            channel_id: mention.channel_id,
            created_at: Utc::now(),
        })
    }

    /// `None` unless the message lives in a conversation
    pub fn direct_message(message: &Message) -> Option<Self> {
        let conversation_id = message.conversation_id?;
        Some(Self::DirectMessage(DirectMessageJob {
            message_id: message.id,
            workspace_id: message.workspace_id,
            conversation_id,
            sender_member_id: message.member_id,
            created_at: Utc::now(),
        }))
    }

    /// `None` unless the message replies to a parent
    pub fn thread_reply(message: &Message) -> Option<Self> {
        let parent_message_id = message.parent_message_id?;
        Some(Self::ThreadReply(ThreadReplyJob {
            message_id: message.id,
            workspace_id: message.workspace_id,
            parent_message_id,
            replier_member_id: message.member_id,
            created_at: Utc::now(),
        }))
    }
}
