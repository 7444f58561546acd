//! Message entity <-> model mapper

use proddy_core::entities::{CalendarEvent, Message};
use proddy_core::error::DomainError;
use proddy_core::value_objects::{BodyFormat, MessageBody, Snowflake};

use crate::models::MessageModel;

impl TryFrom<MessageModel> for Message {
    type Error = DomainError;

    fn try_from(model: MessageModel) -> Result<Self, Self::Error> {
        let format = BodyFormat::parse(&model.body_format).ok_or_else(|| {
            DomainError::DatabaseError(format!("unknown body format {:?}", model.body_format))
        })?;
        // A stored rich-text body that no longer parses is still shown as text
        let body = MessageBody::parse(&model.body, format)
            .unwrap_or_else(|_| MessageBody::Plain(model.body));

        Ok(Message {
            id: Snowflake::new(model.id),
            workspace_id: Snowflake::new(model.workspace_id),
            member_id: Snowflake::new(model.member_id),
            body,
            image: model.image,
            channel_id: model.channel_id.map(Snowflake::new),
            conversation_id: model.conversation_id.map(Snowflake::new),
            parent_message_id: model.parent_message_id.map(Snowflake::new),
            calendar_event: model.calendar_date.map(|date| CalendarEvent {
                date,
                time: model.calendar_time,
            }),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Column values of a message ready to bind
pub struct MessageColumns<'a> {
    pub id: i64,
    pub workspace_id: i64,
    pub member_id: i64,
    pub body: &'a str,
    pub body_format: &'static str,
    pub image: Option<&'a str>,
    pub channel_id: Option<i64>,
    pub conversation_id: Option<i64>,
    pub parent_message_id: Option<i64>,
    pub calendar_date: Option<chrono::NaiveDate>,
    pub calendar_time: Option<&'a str>,
}

impl<'a> MessageColumns<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self {
            id: message.id.into_inner(),
            workspace_id: message.workspace_id.into_inner(),
            member_id: message.member_id.into_inner(),
            body: message.body.raw(),
            body_format: message.body.format().as_str(),
            image: message.image.as_deref(),
            channel_id: message.channel_id.map(Snowflake::into_inner),
            conversation_id: message.conversation_id.map(Snowflake::into_inner),
            parent_message_id: message.parent_message_id.map(Snowflake::into_inner),
            calendar_date: message.calendar_event.as_ref().map(|e| e.date),
            calendar_time: message
                .calendar_event
                .as_ref()
                .and_then(|e| e.time.as_deref()),
        }
    }
}
