//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and is constructed per
//! request.

pub mod context;
pub mod direct;
pub mod error;
pub mod membership;
pub mod mention;
pub mod message;

use proddy_core::NotificationJob;
use tracing::warn;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder, DEFAULT_DIRECT_MESSAGE_PREVIEW_LIMIT};
pub use direct::DirectMessageService;
pub use error::{ServiceError, ServiceResult};
pub use membership::MembershipService;
pub use mention::{MentionError, MentionOutcome, MentionService};
pub use message::MessageService;

/// Hand a job to the scheduler without waiting on delivery; failures are
/// logged and dropped
pub(crate) async fn schedule_job(ctx: &ServiceContext, job: NotificationJob) {
    let kind = job.kind();
    if let Err(e) = ctx.scheduler().schedule(job).await {
        warn!(kind, error = %e, "Failed to schedule notification job");
    }
}
