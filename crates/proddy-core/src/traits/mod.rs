//! Ports implemented by the infrastructure crates

mod repositories;
mod scheduler;

pub use repositories::{
    CardRepository, ChannelRepository, ConversationRepository, DirectReadRepository,
    MemberRepository, MentionRepository, MessageRepository, RepoResult,
};
pub use scheduler::NotificationScheduler;
