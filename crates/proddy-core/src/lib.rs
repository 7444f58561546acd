//! # proddy-core
//!
//! Domain layer for Proddy's mention and read-tracking pipeline: entities,
//! message bodies, mention extraction, notification jobs and the ports the
//! infrastructure crates implement. No database or web framework in here.

pub mod entities;
pub mod error;
pub mod events;
pub mod mentions;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    CalendarEvent, Card, Channel, Conversation, DirectRead, Member, MemberRole, Mention, Message,
    User,
};
pub use error::DomainError;
pub use events::{DirectMessageJob, MentionJob, NotificationJob, ThreadReplyJob};
pub use mentions::{extract_mentions, MemberRoster};
pub use traits::{
    CardRepository, ChannelRepository, ConversationRepository, DirectReadRepository,
    MemberRepository, MentionRepository, MessageRepository, NotificationScheduler, RepoResult,
};
pub use value_objects::{
    BodyFormat, DeltaOp, MessageBody, RichText, Snowflake, SnowflakeGenerator,
    SnowflakeParseError,
};
