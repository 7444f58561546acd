//! Message service
//!
//! Handles message creation, editing, deletion and lookup, plus the
//! notification side effects of creating a message.

use proddy_core::entities::Message;
use proddy_core::{DomainError, MessageBody, NotificationJob, Snowflake};
use tracing::{debug, info, instrument, warn};

use crate::dto::{CreateMessageRequest, MessageResponse, UpdateMessageRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::membership::MembershipService;
use super::mention::MentionService;
use super::schedule_job;

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new message
    ///
    /// Thread replies schedule a `thread_reply` job. Direct messages schedule
    /// a `direct_message` job and are never scanned for mentions. Everything
    /// else is scanned, and mention failures are logged rather than returned.
    #[instrument(skip(self, request), fields(workspace_id = %request.workspace_id))]
    pub async fn create_message(
        &self,
        user_id: Snowflake,
        request: CreateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let workspace_id = request.workspace_id;
        let member = MembershipService::new(self.ctx)
            .require_member(workspace_id, user_id)
            .await?;

        let conversation_id = match (request.conversation_id, request.channel_id) {
            (Some(conversation_id), _) => {
                self.verify_conversation(workspace_id, conversation_id)
                    .await?;
                Some(conversation_id)
            }
            // A thread reply without an explicit target lives wherever its
            // parent does
            (None, None) => match request.parent_message_id {
                Some(parent_id) => {
                    self.ctx
                        .message_repo()
                        .find_by_id(parent_id)
                        .await?
                        .ok_or(DomainError::ParentMessageNotFound(parent_id))?
                        .conversation_id
                }
                None => None,
            },
            (None, Some(_)) => None,
        };

        if let Some(channel_id) = request.channel_id {
            self.verify_channel(workspace_id, channel_id).await?;
        }

        let body = MessageBody::from_input(&request.body, request.format)?;

        let mut message = Message::new(self.ctx.generate_id(), workspace_id, member.id, body);
        message.image = request.image;
        message.channel_id = request.channel_id;
        message.conversation_id = conversation_id;
        message.parent_message_id = request.parent_message_id;
        message.calendar_event = request.calendar_event;

        self.ctx.message_repo().create(&message).await?;

        info!(
            message_id = %message.id,
            format = %message.body.format(),
            direct = message.is_direct(),
            "Message created"
        );

        if let Some(job) = NotificationJob::thread_reply(&message) {
            schedule_job(self.ctx, job).await;
        }

        if let Some(job) = NotificationJob::direct_message(&message) {
            schedule_job(self.ctx, job).await;
            return Ok(MessageResponse::from(message));
        }

        match MentionService::new(self.ctx).process_message(&message).await {
            Ok(outcome) if !outcome.is_empty() => {
                debug!(
                    message_id = %message.id,
                    mentions = outcome.mention_ids.len(),
                    "Mentions created"
                );
            }
            Ok(_) => {}
            Err(e) => {
                warn!(message_id = %message.id, error = %e, "Mention processing failed");
            }
        }

        Ok(MessageResponse::from(message))
    }

    /// Get message by ID
    #[instrument(skip(self))]
    pub async fn get_message(
        &self,
        user_id: Snowflake,
        message_id: Snowflake,
    ) -> ServiceResult<MessageResponse> {
        let message = self.find_message(message_id).await?;

        MembershipService::new(self.ctx)
            .require_member(message.workspace_id, user_id)
            .await?;

        Ok(MessageResponse::from(message))
    }

    /// Replace a message body; author only
    #[instrument(skip(self, request))]
    pub async fn update_message(
        &self,
        user_id: Snowflake,
        message_id: Snowflake,
        request: UpdateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let mut message = self.find_authored_message(user_id, message_id).await?;

        message.edit(MessageBody::from_input(&request.body, request.format)?);
        self.ctx.message_repo().update(&message).await?;

        info!(message_id = %message_id, "Message updated");

        Ok(MessageResponse::from(message))
    }

    /// Hard-delete a message; author only
    #[instrument(skip(self))]
    pub async fn delete_message(&self, user_id: Snowflake, message_id: Snowflake) -> ServiceResult<()> {
        self.find_authored_message(user_id, message_id).await?;
        self.ctx.message_repo().delete(message_id).await?;

        info!(message_id = %message_id, "Message deleted");

        Ok(())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn find_message(&self, message_id: Snowflake) -> ServiceResult<Message> {
        Ok(self
            .ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .ok_or(DomainError::MessageNotFound(message_id))?)
    }

    async fn find_authored_message(
        &self,
        user_id: Snowflake,
        message_id: Snowflake,
    ) -> ServiceResult<Message> {
        let message = self.find_message(message_id).await?;
        let member = MembershipService::new(self.ctx)
            .require_member(message.workspace_id, user_id)
            .await?;

        if !message.is_authored_by(member.id) {
            return Err(DomainError::NotMessageAuthor.into());
        }

        Ok(message)
    }

    async fn verify_channel(&self, workspace_id: Snowflake, channel_id: Snowflake) -> ServiceResult<()> {
        let channel = self
            .ctx
            .channel_repo()
            .find_by_id(channel_id)
            .await?
            .ok_or_else(|| DomainError::ValidationError(format!("Channel {channel_id} not found")))?;

        if channel.workspace_id != workspace_id {
            return Err(DomainError::ChannelOutsideWorkspace(channel_id).into());
        }

        Ok(())
    }

    async fn verify_conversation(
        &self,
        workspace_id: Snowflake,
        conversation_id: Snowflake,
    ) -> ServiceResult<()> {
        let conversation = self
            .ctx
            .conversation_repo()
            .find_by_id(conversation_id)
            .await?
            .ok_or_else(|| {
                DomainError::ValidationError(format!("Conversation {conversation_id} not found"))
            })?;

        if conversation.workspace_id != workspace_id {
            return Err(DomainError::ConversationOutsideWorkspace(conversation_id).into());
        }

        Ok(())
    }
}
