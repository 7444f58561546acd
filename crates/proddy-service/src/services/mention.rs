//! Mention service
//!
//! Creates mention rows (from message bodies and card assignments) and serves
//! the caller's mention inbox and its read flags.

use std::collections::{BTreeSet, HashMap};

use proddy_core::entities::{Mention, Message, User};
use proddy_core::{extract_mentions, DomainError, MemberRoster, NotificationJob, Snowflake};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::dto::{
    AssignCardRequest, CountResponse, NotificationAuthor, NotificationItem, NotificationSource,
    ReadResponse, SourceKind,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::membership::MembershipService;
use super::schedule_job;

/// Source name for thread replies
const THREAD_SOURCE_NAME: &str = "Thread";
/// Source name for card mentions whose board can't be resolved
const BOARD_SOURCE_NAME: &str = "Board";
/// Fallbacks when a channel or conversation partner is gone
const UNKNOWN_CHANNEL_NAME: &str = "Unknown channel";
const DIRECT_SOURCE_NAME: &str = "Direct message";

// ============================================================================
// Extraction outcome
// ============================================================================

/// Mentions created for one message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentionOutcome {
    /// Ids of the created mention rows
    pub mention_ids: Vec<Snowflake>,
    /// Members addressed, in ascending id order
    pub mentioned_member_ids: Vec<Snowflake>,
}

impl MentionOutcome {
    pub fn is_empty(&self) -> bool {
        self.mention_ids.is_empty()
    }
}

/// Failure while turning a message body into mention rows
///
/// Never escapes message creation: the message is already stored by the time
/// extraction runs.
#[derive(Debug, Error)]
pub enum MentionError {
    #[error("failed to load workspace roster: {0}")]
    Roster(#[source] DomainError),

    #[error("failed to store mention of member {member_id}: {source}")]
    Persist {
        member_id: Snowflake,
        #[source]
        source: DomainError,
    },
}

// ============================================================================
// Service
// ============================================================================

/// Mention service
pub struct MentionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MentionService<'a> {
    /// Create a new MentionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Extract mentions from a stored message and persist one row per member
    ///
    /// Direct messages are skipped outright. Each created mention schedules a
    /// `mention` job.
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    pub async fn process_message(&self, message: &Message) -> Result<MentionOutcome, MentionError> {
        if message.is_direct() {
            return Ok(MentionOutcome::default());
        }

        let profiles = self
            .ctx
            .member_repo()
            .find_with_users(message.workspace_id)
            .await
            .map_err(MentionError::Roster)?;
        let roster: MemberRoster = profiles.iter().collect();

        let mentioned = extract_mentions(&message.body, &roster);
        let mut outcome = MentionOutcome::default();

        for member_id in mentioned {
            let mention = Mention::for_message(self.ctx.generate_id(), message, member_id);
            self.ctx
                .mention_repo()
                .create(&mention)
                .await
                .map_err(|source| MentionError::Persist { member_id, source })?;

            schedule_job(self.ctx, NotificationJob::mention(&mention)).await;

            outcome.mention_ids.push(mention.id);
            outcome.mentioned_member_ids.push(member_id);
        }

        debug!(count = outcome.mention_ids.len(), "Mentions extracted");

        Ok(outcome)
    }

    /// Create assignment mentions for members newly assigned to a card
    ///
    /// The assigner and anyone outside the card's workspace are skipped.
    #[instrument(skip(self, request))]
    pub async fn create_card_assignment_mentions(
        &self,
        user_id: Snowflake,
        card_id: Snowflake,
        request: AssignCardRequest,
    ) -> ServiceResult<CountResponse> {
        let card = self
            .ctx
            .card_repo()
            .find_by_id(card_id)
            .await?
            .ok_or(DomainError::CardNotFound(card_id))?;

        let assigner = MembershipService::new(self.ctx)
            .require_member(card.workspace_id, user_id)
            .await?;

        let assignees: BTreeSet<Snowflake> = request.assignee_member_ids.into_iter().collect();
        let mut count = 0u64;

        for assignee_id in assignees {
            if assignee_id == assigner.id {
                continue;
            }

            let in_workspace = self
                .ctx
                .member_repo()
                .find_by_id(assignee_id)
                .await?
                .is_some_and(|member| member.workspace_id == card.workspace_id);
            if !in_workspace {
                debug!(assignee_id = %assignee_id, "Skipping assignee outside the workspace");
                continue;
            }

            let mention = Mention::for_card(self.ctx.generate_id(), &card, assigner.id, assignee_id);
            self.ctx.mention_repo().create(&mention).await?;
            schedule_job(self.ctx, NotificationJob::mention(&mention)).await;
            count += 1;
        }

        info!(card_id = %card_id, count, "Card assignment mentions created");

        Ok(CountResponse::new(count))
    }

    /// The caller's mentions in a workspace, newest first
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
                warn!(error = %e, "Failed to list mentions");
                Vec::new()
            }
        }
    }

    /// Set the read flag of one of the caller's mentions; `None` marks it read
    #[instrument(skip(self))]
    pub async fn mark_read(
        &self,
        user_id: Snowflake,
        mention_id: Snowflake,
        status: Option<bool>,
    ) -> ServiceResult<ReadResponse> {
        let mention = self
            .ctx
            .mention_repo()
            .find_by_id(mention_id)
            .await?
            .ok_or(DomainError::MentionNotFound(mention_id))?;

        let member = MembershipService::new(self.ctx)
            .require_member(mention.workspace_id, user_id)
            .await?;
        if !mention.is_addressed_to(member.id) {
            return Err(DomainError::NotMentionOwner.into());
        }

        let read = status.unwrap_or(true);
        self.ctx.mention_repo().set_read(mention_id, read).await?;

        Ok(ReadResponse {
            success: true,
            read,
        })
    }

    /// Mark every unread mention of the caller in a workspace as read
    #[instrument(skip(self))]
    pub async fn mark_all_read(
        &self,
        user_id: Snowflake,
        workspace_id: Snowflake,
    ) -> ServiceResult<CountResponse> {
        let member = MembershipService::new(self.ctx)
            .require_member(workspace_id, user_id)
            .await?;

        let count = self
            .ctx
            .mention_repo()
            .mark_all_read(workspace_id, member.id)
            .await?;

        info!(count, "Mentions marked as read");

        Ok(CountResponse::new(count))
    }

    // ========================================================================
    // Listing helpers
    // ========================================================================

    async fn try_list(
        &self,
        user_id: Snowflake,
        workspace_id: Snowflake,
        unread_only: bool,
    ) -> ServiceResult<Vec<NotificationItem>> {
        let membership = MembershipService::new(self.ctx);
        let member = membership.require_member(workspace_id, user_id).await?;
        let profiles = membership.profiles(workspace_id).await?;

        let mentions = self
            .ctx
            .mention_repo()
            .find_for_member(workspace_id, member.id, unread_only)
            .await?;

        let mut items = Vec::with_capacity(mentions.len());
        for mention in mentions {
            let author = NotificationAuthor::for_member(
                mention.mentioner_member_id,
                profiles.get(&mention.mentioner_member_id),
            );

            let resolved = match (mention.card_id, mention.message_id) {
                (Some(card_id), _) => Some(self.card_preview(card_id, &mention).await?),
                (None, Some(message_id)) => {
                    self.message_preview(message_id, &mention, member.id, &profiles)
                        .await?
                }
                (None, None) => None,
            };

            // Messages deleted since the mention was made drop out
            let Some((text, source)) = resolved else {
                continue;
            };

            items.push(NotificationItem {
                id: mention.id.to_string(),
                message_id: mention.message_id.map(|id| id.to_string()),
                card_id: mention.card_id.map(|id| id.to_string()),
                text,
                timestamp: mention.created_at,
                read: mention.read,
                author,
                source,
            });
        }

        Ok(items)
    }

    async fn card_preview(
        &self,
        card_id: Snowflake,
        mention: &Mention,
    ) -> ServiceResult<(String, NotificationSource)> {
        let Some(card) = self.ctx.card_repo().find_by_id(card_id).await? else {
            return Ok((
                "Assigned you to a card (deleted)".to_string(),
                NotificationSource::new(SourceKind::Card, card_id, BOARD_SOURCE_NAME),
            ));
        };

        let board = match mention.channel_id {
            Some(channel_id) => self
                .ctx
                .channel_repo()
                .find_by_id(channel_id)
                .await?
                .map(|channel| channel.name),
            None => None,
        };

        Ok((
            format!("Assigned you to {}", card.title),
            NotificationSource::new(
                SourceKind::Card,
                card.id,
                board.unwrap_or_else(|| BOARD_SOURCE_NAME.to_string()),
            ),
        ))
    }

    async fn message_preview(
        &self,
        message_id: Snowflake,
        mention: &Mention,
        member_id: Snowflake,
        profiles: &HashMap<Snowflake, User>,
    ) -> ServiceResult<Option<(String, NotificationSource)>> {
        let Some(message) = self.ctx.message_repo().find_by_id(message_id).await? else {
            return Ok(None);
        };

        let source = if let Some(parent_id) = mention.parent_message_id {
            NotificationSource::new(SourceKind::Thread, parent_id, THREAD_SOURCE_NAME)
        } else if let Some(channel_id) = mention.channel_id {
            let name = self
                .ctx
                .channel_repo()
                .find_by_id(channel_id)
                .await?
                .map_or_else(|| UNKNOWN_CHANNEL_NAME.to_string(), |channel| channel.name);
            NotificationSource::new(SourceKind::Channel, channel_id, name)
        } else if let Some(conversation_id) = mention.conversation_id {
            let partner = self
                .ctx
                .conversation_repo()
                .find_by_id(conversation_id)
                .await?
                .and_then(|conversation| conversation.partner_of(member_id))
                .and_then(|partner_id| profiles.get(&partner_id))
                .map(|user| user.name.clone());
            NotificationSource::new(
                SourceKind::Direct,
                conversation_id,
                partner.unwrap_or_else(|| DIRECT_SOURCE_NAME.to_string()),
            )
        } else {
            return Ok(None);
        };

        Ok(Some((message.text_preview(), source)))
    }
}
