//! Mention entity <-> model mapper

use proddy_core::entities::Mention;
use proddy_core::value_objects::Snowflake;

use crate::models::MentionModel;

impl From<MentionModel> for Mention {
    fn from(model: MentionModel) -> Self {
        Mention {
            id: Snowflake::new(model.id),
            message_id: model.message_id.map(Snowflake::new),
            card_id: model.card_id.map(Snowflake::new),
            mentioned_member_id: Snowflake::new(model.mentioned_member_id),
            mentioner_member_id: Snowflake::new(model.mentioner_member_id),
            workspace_id: Snowflake::new(model.workspace_id),
            channel_id: model.channel_id.map(Snowflake::new),
            conversation_id: model.conversation_id.map(Snowflake::new),
            parent_message_id: model.parent_message_id.map(Snowflake::new),
            read: model.read,
            created_at: model.created_at,
        }
    }
}
