//! Notification scheduling port

use async_trait::async_trait;

use super::repositories::RepoResult;
use crate::events::NotificationJob;

/// Hands notification jobs to a background worker
///
/// Callers do not wait for delivery; a successful return only means the job
/// was accepted.
#[async_trait]
pub trait NotificationScheduler: Send + Sync {
    async fn schedule(&self, job: NotificationJob) -> RepoResult<()>;
}
