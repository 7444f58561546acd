//! Direct message service
//!
//! Read receipts for 1:1 conversations. A message is unread for a member
//! until a `DirectRead` row exists for the pair; rows are never removed.

use proddy_core::entities::DirectRead;
use proddy_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{
    CountResponse, NotificationAuthor, NotificationItem, NotificationSource, SourceKind,
    SuccessResponse, UnreadCountResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::membership::MembershipService;

/// Direct message read-state service
pub struct DirectMessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DirectMessageService<'a> {
    /// Create a new DirectMessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record that the caller has read a message; repeated calls are no-ops
    ///
    /// Only direct messages can be marked, and only by a participant of the
    /// conversation they were sent in.
    #[instrument(skip(self))]
    pub async fn mark_read(
        &self,
        user_id: Snowflake,
        message_id: Snowflake,
    ) -> ServiceResult<SuccessResponse> {
        let message = self
            .ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .ok_or(DomainError::MessageNotFound(message_id))?;

        let member = MembershipService::new(self.ctx)
            .require_member(message.workspace_id, user_id)
            .await?;

        let conversation_id = message
            .conversation_id
            .ok_or(DomainError::NotDirectMessage(message_id))?;
        let conversation = self
            .ctx
            .conversation_repo()
            .find_by_id(conversation_id)
            .await?
            .ok_or(DomainError::ConversationNotFound(conversation_id))?;
        if !conversation.includes(member.id) {
            return Err(DomainError::NotConversationParticipant.into());
        }

        self.record_read(message_id, member.id).await?;

        Ok(SuccessResponse::ok())
    }

    /// Mark every message the caller's conversation partners sent as read
    #[instrument(skip(self))]
    pub async fn mark_all_read(
        &self,
        user_id: Snowflake,
        workspace_id: Snowflake,
    ) -> ServiceResult<CountResponse> {
        let member = MembershipService::new(self.ctx)
            .require_member(workspace_id, user_id)
            .await?;

        let conversations = self
            .ctx
            .conversation_repo()
            .find_by_member(workspace_id, member.id)
            .await?;

        let mut count = 0u64;
        for conversation in conversations {
            let Some(partner_id) = conversation.partner_of(member.id) else {
                continue;
            };

            let message_ids = self
                .ctx
                .message_repo()
                .find_ids_in_conversation(conversation.id, partner_id)
                .await?;

            for message_id in message_ids {
                if self.record_read(message_id, member.id).await? {
                    count += 1;
                }
            }
        }

        info!(count, "Direct messages marked as read");

        Ok(CountResponse::new(count))
    }

    /// Recent messages from each conversation partner, newest first
    ///
    /// Best-effort: failures are logged and yield an empty list.
    #[instrument(skip(self))]
    pub async fn list_for_user(
        &self,
        user_id: Snowflake,
        workspace_id: Snowflake,
        unread_only: bool,
    ) -> Vec<NotificationItem> {
        match self.try_list(user_id, workspace_id, unread_only).await {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "Failed to list direct messages");
                Vec::new()
            }
        }
    }

    /// Unread direct messages, counted over the same listing the inbox shows
    #[instrument(skip(self))]
    pub async fn unread_count(&self, user_id: Snowflake, workspace_id: Snowflake) -> UnreadCountResponse {
        let unread = self.list_for_user(user_id, workspace_id, true).await;
        UnreadCountResponse::new(unread.len())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// `true` if a new receipt was stored
    async fn record_read(&self, message_id: Snowflake, member_id: Snowflake) -> ServiceResult<bool> {
        if self
            .ctx
            .direct_read_repo()
            .exists(message_id, member_id)
            .await?
        {
            return Ok(false);
        }

        let receipt = DirectRead::new(self.ctx.generate_id(), message_id, member_id);
        Ok(self.ctx.direct_read_repo().create(&receipt).await?)
    }

    async fn try_list(
        &self,
        user_id: Snowflake,
        workspace_id: Snowflake,
        unread_only: bool,
    ) -> ServiceResult<Vec<NotificationItem>> {
        let membership = MembershipService::new(self.ctx);
        let member = membership.require_member(workspace_id, user_id).await?;
        let profiles = membership.profiles(workspace_id).await?;

        let conversations = self
            .ctx
            .conversation_repo()
            .find_by_member(workspace_id, member.id)
            .await?;
        let limit = i64::from(self.ctx.direct_message_preview_limit());

        let mut items = Vec::new();
        for conversation in conversations {
            let Some(partner_id) = conversation.partner_of(member.id) else {
                continue;
            };
            let author = NotificationAuthor::for_member(partner_id, profiles.get(&partner_id));
            let source = NotificationSource::new(
                SourceKind::Direct,
                conversation.id,
                author.name.clone(),
            );

            let messages = self
                .ctx
                .message_repo()
                .find_recent_in_conversation(conversation.id, partner_id, limit)
                .await?;

            for message in messages {
                let read = self
                    .ctx
                    .direct_read_repo()
                    .exists(message.id, member.id)
                    .await?;
                if unread_only && read {
                    continue;
                }

                items.push((
                    message.created_at,
                    message.id,
                    NotificationItem {
                        id: message.id.to_string(),
                        message_id: Some(message.id.to_string()),
                        card_id: None,
                        text: message.text_preview(),
                        timestamp: message.created_at,
                        read,
                        author: author.clone(),
                        source: source.clone(),
                    },
                ));
            }
        }

        items.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));

        Ok(items.into_iter().map(|(_, _, item)| item).collect())
    }
}
