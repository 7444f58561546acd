//! Database models - SQLx-compatible structs for PostgreSQL tables

mod card;
mod channel;
mod conversation;
mod member;
mod mention;
mod message;

pub use card::CardModel;
pub use channel::ChannelModel;
pub use conversation::ConversationModel;
pub use member::{MemberModel, MemberWithUserModel};
pub use mention::MentionModel;
pub use message::MessageModel;
