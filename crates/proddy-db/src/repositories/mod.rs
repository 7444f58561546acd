//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in proddy-core.

mod card;
mod channel;
mod conversation;
mod direct_read;
mod error;
mod member;
mod mention;
mod message;

pub use card::PgCardRepository;
pub use channel::PgChannelRepository;
pub use conversation::PgConversationRepository;
pub use direct_read::PgDirectReadRepository;
pub use member::PgMemberRepository;
pub use mention::PgMentionRepository;
pub use message::PgMessageRepository;
