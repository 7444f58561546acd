//! Mention extraction - resolve which workspace members a message addresses

mod extractor;
mod roster;

pub use extractor::{extract_mentions, member_markers};
pub use roster::MemberRoster;
