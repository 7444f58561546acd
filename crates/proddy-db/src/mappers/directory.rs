//! Mappers for the workspace directory tables

use proddy_core::entities::{Card, Channel, Conversation, Member, MemberRole, User};
use proddy_core::error::DomainError;
use proddy_core::value_objects::Snowflake;

use crate::models::{
    CardModel, ChannelModel, ConversationModel, MemberModel, MemberWithUserModel,
};

fn parse_role(role: &str) -> Result<MemberRole, DomainError> {
    MemberRole::parse(role)
        .ok_or_else(|| DomainError::DatabaseError(format!("unknown member role {role:?}")))
}

impl TryFrom<MemberModel> for Member {
    type Error = DomainError;

    fn try_from(model: MemberModel) -> Result<Self, Self::Error> {
        Ok(Member {
            id: Snowflake::new(model.id),
            workspace_id: Snowflake::new(model.workspace_id),
            user_id: Snowflake::new(model.user_id),
            role: parse_role(&model.role)?,
        })
    }
}

impl TryFrom<MemberWithUserModel> for (Member, User) {
    type Error = DomainError;

    fn try_from(model: MemberWithUserModel) -> Result<Self, Self::Error> {
        let member = Member {
            id: Snowflake::new(model.id),
            workspace_id: Snowflake::new(model.workspace_id),
            user_id: Snowflake::new(model.user_id),
            role: parse_role(&model.role)?,
        };
        let user = User {
            id: member.user_id,
            name: model.user_name,
            image: model.user_image,
        };
        Ok((member, user))
    }
}

impl From<ChannelModel> for Channel {
    fn from(model: ChannelModel) -> Self {
        Channel {
            id: Snowflake::new(model.id),
            workspace_id: Snowflake::new(model.workspace_id),
            name: model.name,
        }
    }
}

impl From<ConversationModel> for Conversation {
    fn from(model: ConversationModel) -> Self {
        Conversation {
            id: Snowflake::new(model.id),
            workspace_id: Snowflake::new(model.workspace_id),
            member_one_id: Snowflake::new(model.member_one_id),
            member_two_id: Snowflake::new(model.member_two_id),
        }
    }
}

impl From<CardModel> for Card {
    fn from(model: CardModel) -> Self {
        Card {
            id: Snowflake::new(model.id),
            workspace_id: Snowflake::new(model.workspace_id),
            channel_id: Snowflake::new(model.channel_id),
            title: model.title,
        }
    }
}
