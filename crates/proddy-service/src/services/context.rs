//! Service context - dependency container for services
//!
//! Holds every repository port, the notification scheduler and the id
//! generator the services need.

use std::sync::Arc;

use proddy_core::traits::{
    CardRepository, ChannelRepository, ConversationRepository, DirectReadRepository,
    MemberRepository, MentionRepository, MessageRepository, NotificationScheduler,
};
use proddy_core::{Snowflake, SnowflakeGenerator};

use super::error::{ServiceError, ServiceResult};

/// Messages per conversation shown in the direct-message inbox
pub const DEFAULT_DIRECT_MESSAGE_PREVIEW_LIMIT: u32 = 5;

/// Service context containing all dependencies
///
/// Cheap to clone; every port is shared behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    member_repo: Arc<dyn MemberRepository>,
    channel_repo: Arc<dyn ChannelRepository>,
    conversation_repo: Arc<dyn ConversationRepository>,
    card_repo: Arc<dyn CardRepository>,
    message_repo: Arc<dyn MessageRepository>,
    mention_repo: Arc<dyn MentionRepository>,
    direct_read_repo: Arc<dyn DirectReadRepository>,

    // Background jobs
    scheduler: Arc<dyn NotificationScheduler>,

    snowflake_generator: Arc<SnowflakeGenerator>,
    direct_message_preview_limit: u32,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the channel repository
    pub fn channel_repo(&self) -> &dyn ChannelRepository {
        self.channel_repo.as_ref()
    }

    /// Get the conversation repository
    pub fn conversation_repo(&self) -> &dyn ConversationRepository {
        self.conversation_repo.as_ref()
    }

    /// Get the card repository
    pub fn card_repo(&self) -> &dyn CardRepository {
        self.card_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the mention repository
    pub fn mention_repo(&self) -> &dyn MentionRepository {
        self.mention_repo.as_ref()
    }

    /// Get the direct-read repository
    pub fn direct_read_repo(&self) -> &dyn DirectReadRepository {
        self.direct_read_repo.as_ref()
    }

    // === Jobs ===

    /// Get the notification scheduler
    pub fn scheduler(&self) -> &dyn NotificationScheduler {
        self.scheduler.as_ref()
    }

    // === Ids & settings ===

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }

    pub fn direct_message_preview_limit(&self) -> u32 {
        self.direct_message_preview_limit
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("scheduler", &"...")
            .field("snowflake_generator", &self.snowflake_generator)
            .field(
                "direct_message_preview_limit",
                &self.direct_message_preview_limit,
            )
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    member_repo: Option<Arc<dyn MemberRepository>>,
    channel_repo: Option<Arc<dyn ChannelRepository>>,
    conversation_repo: Option<Arc<dyn ConversationRepository>>,
    card_repo: Option<Arc<dyn CardRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    mention_repo: Option<Arc<dyn MentionRepository>>,
    direct_read_repo: Option<Arc<dyn DirectReadRepository>>,
    scheduler: Option<Arc<dyn NotificationScheduler>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    direct_message_preview_limit: u32,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            member_repo: None,
            channel_repo: None,
            conversation_repo: None,
            card_repo: None,
            message_repo: None,
            mention_repo: None,
            direct_read_repo: None,
            scheduler: None,
            snowflake_generator: None,
            direct_message_preview_limit: DEFAULT_DIRECT_MESSAGE_PREVIEW_LIMIT,
        }
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn channel_repo(mut self, repo: Arc<dyn ChannelRepository>) -> Self {
        self.channel_repo = Some(repo);
        self
    }

    pub fn conversation_repo(mut self, repo: Arc<dyn ConversationRepository>) -> Self {
        self.conversation_repo = Some(repo);
        self
    }

    pub fn card_repo(mut self, repo: Arc<dyn CardRepository>) -> Self {
        self.card_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn mention_repo(mut self, repo: Arc<dyn MentionRepository>) -> Self {
        self.mention_repo = Some(repo);
        self
    }

    pub fn direct_read_repo(mut self, repo: Arc<dyn DirectReadRepository>) -> Self {
        self.direct_read_repo = Some(repo);
        self
    }

    pub fn scheduler(mut self, scheduler: Arc<dyn NotificationScheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn direct_message_preview_limit(mut self, limit: u32) -> Self {
        self.direct_message_preview_limit = limit;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        if self.direct_message_preview_limit == 0 {
            return Err(ServiceError::validation(
                "direct_message_preview_limit must be positive",
            ));
        }

        Ok(ServiceContext {
            member_repo: required(self.member_repo, "member_repo")?,
            channel_repo: required(self.channel_repo, "channel_repo")?,
            conversation_repo: required(self.conversation_repo, "conversation_repo")?,
            card_repo: required(self.card_repo, "card_repo")?,
            message_repo: required(self.message_repo, "message_repo")?,
            mention_repo: required(self.mention_repo, "mention_repo")?,
            direct_read_repo: required(self.direct_read_repo, "direct_read_repo")?,
            scheduler: required(self.scheduler, "scheduler")?,
            snowflake_generator: self.snowflake_generator.unwrap_or_default(),
            direct_message_preview_limit: self.direct_message_preview_limit,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
}
