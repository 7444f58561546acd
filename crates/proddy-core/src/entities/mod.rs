//! Domain entities - core business objects

mod card;
mod channel;
mod conversation;
mod direct_read;
mod member;
mod mention;
mod message;
mod user;

pub use card::Card;
pub use channel::Channel;
pub use conversation::Conversation;
pub use direct_read::DirectRead;
pub use member::{Member, MemberRole};
pub use mention::Mention;
pub use message::{CalendarEvent, Message};
pub use user::User;
