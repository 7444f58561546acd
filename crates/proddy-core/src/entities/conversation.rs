//! Conversation entity - a 1:1 direct-message thread between two members

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: Snowflake,
    pub workspace_id: Snowflake,
    pub member_one_id: Snowflake,
    pub member_two_id: Snowflake,
}

impl Conversation {
    pub fn new(
        id: Snowflake,
        workspace_id: Snowflake,
        member_one_id: Snowflake,
        member_two_id: Snowflake,
    ) -> Self {
        Self {
            id,
            workspace_id,
            member_one_id,
            member_two_id,
        }
    }

    #[inline]
    pub fn includes(&self, member_id: Snowflake) -> bool {
        self.member_one_id == member_id || self.member_two_id == member_id
    }

    /// The participant that is not `member_id`, or `None` if `member_id` is
    /// not part of this conversation
    pub fn partner_of(&self, member_id: Snowflake) -> Option<Snowflake> {
        if self.member_one_id == member_id {
            Some(self.member_two_id)
        } else if self.member_two_id == member_id {
            Some(self.member_one_id)
        } else {
            None
        }
    }
}
