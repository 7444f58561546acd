//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Card, Channel, Conversation, DirectRead, Member, Mention, Message, User,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Member>>;

    /// Find the member record of a user inside a workspace
    async fn find_by_workspace_and_user(
        &self,
        workspace_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<Member>>;

    /// All members of a workspace joined with their user profile
    async fn find_with_users(&self, workspace_id: Snowflake) -> RepoResult<Vec<(Member, User)>>;
}

// ============================================================================
// Channel Repository
// ============================================================================

#[async_trait]
pub trait ChannelRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Channel>>;
}

// ============================================================================
// Conversation Repository
// ============================================================================

#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Conversation>>;

    /// Conversations in a workspace that `member_id` takes part in
    async fn find_by_member(
        &self,
        workspace_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<Conversation>>;
}

// ============================================================================
// Card Repository
// ============================================================================

#[async_trait]
pub trait CardRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Card>>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Message>>;

    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Persist a new body and `updated_at`
    async fn update(&self, message: &Message) -> RepoResult<()>;

    /// Hard delete
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Messages `member_id` sent in a conversation, newest first, at most `limit`
    async fn find_recent_in_conversation(
        &self,
        conversation_id: Snowflake,
        member_id: Snowflake,
        limit: i64,
    ) -> RepoResult<Vec<Message>>;

    /// Ids of every message `member_id` sent in a conversation
    async fn find_ids_in_conversation(
        &self,
        conversation_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<Snowflake>>;
}

// ============================================================================
// Mention Repository
// ============================================================================

#[async_trait]
pub trait MentionRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Mention>>;

    async fn create(&self, mention: &Mention) -> RepoResult<()>;

    /// Mentions addressed to a member in a workspace, newest first
    async fn find_for_member(
        &self,
        workspace_id: Snowflake,
        member_id: Snowflake,
        unread_only: bool,
    ) -> RepoResult<Vec<Mention>>;

    async fn set_read(&self, id: Snowflake, read: bool) -> RepoResult<()>;

    /// Flip every unread mention of a member in a workspace; returns rows changed
    async fn mark_all_read(&self, workspace_id: Snowflake, member_id: Snowflake) -> RepoResult<u64>;
}

// ============================================================================
// Direct Read Repository
// ============================================================================

#[async_trait]
pub trait DirectReadRepository: Send + Sync {
    async fn exists(&self, message_id: Snowflake, member_id: Snowflake) -> RepoResult<bool>;

    /// Insert a receipt unless one exists for the same message and member.
    /// Returns whether a row was written.
    async fn create(&self, read: &DirectRead) -> RepoResult<bool>;
}
