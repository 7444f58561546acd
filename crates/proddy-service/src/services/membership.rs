//! Membership service
//!
//! Resolves an authenticated user to their member record in a workspace.
//! Every read and write in this crate is addressed by member, not user.

use std::collections::HashMap;

use proddy_core::entities::{Member, User};
use proddy_core::{DomainError, Snowflake};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Workspace membership lookups
pub struct MembershipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MembershipService<'a> {
    /// Create a new MembershipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The caller's member record, or `Unauthorized` if they are not in the
    /// workspace
    #[instrument(skip(self))]
    pub async fn require_member(
        &self,
        workspace_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<Member> {
        match self
            .ctx
            .member_repo()
            .find_by_workspace_and_user(workspace_id, user_id)
            .await?
        {
            Some(member) => Ok(member),
            None => {
                debug!("Caller is not a member of the workspace");
                Err(DomainError::Unauthorized.into())
            }
        }
    }

    /// Users of every member in a workspace, keyed by member id
    #[instrument(skip(self))]
    pub async fn profiles(&self, workspace_id: Snowflake) -> ServiceResult<HashMap<Snowflake, User>> {
        let profiles = self.ctx.member_repo().find_with_users(workspace_id).await?;
        Ok(profiles
            .into_iter()
            .map(|(member, user)| (member.id, user))
            .collect())
    }
}
