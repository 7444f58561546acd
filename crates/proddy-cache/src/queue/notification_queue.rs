//! Redis-backed notification scheduler.
//!
//! Jobs are appended with `RPUSH` to a single list; the delivery worker pops
//! from the other end, so jobs are delivered in scheduling order.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use proddy_core::error::DomainError;
use proddy_core::events::NotificationJob;
use proddy_core::traits::{NotificationScheduler, RepoResult};

use crate::pool::{RedisPoolError, RedisResult, SharedRedisPool};

/// Envelope stored in the queue around each job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedJob {
    /// Unique id so the worker can de-duplicate retries
    pub job_id: Uuid,
    pub enqueued_at: DateTime<Utc>,
    pub job: NotificationJob,
}

impl QueuedJob {
    /// Wrap a job with a fresh id
    #[must_use]
    pub fn new(job: NotificationJob) -> Self {
        Self {
            job_id: Uuid::new_v4(),
            enqueued_at: Utc::now(),
            job,
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Notification scheduler that pushes jobs onto a Redis list
#[derive(Debug, Clone)]
pub struct RedisNotificationQueue {
    pool: SharedRedisPool,
    key: String,
}

impl RedisNotificationQueue {
    /// Create a queue writing to the list at `key`
    #[must_use]
    pub fn new(pool: SharedRedisPool, key: impl Into<String>) -> Self {
        Self {
            pool,
            key: key.into(),
        }
    }

    /// Redis key of the backing list
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append a job, returning the queue length after the push
    pub async fn push(&self, job: &QueuedJob) -> RedisResult<u64> {
        let payload = job.to_json()?;
        let mut conn = self.pool.get().await?;
        let len: u64 = conn.rpush(&self.key, payload).await?;
        Ok(len)
    }
}

#[async_trait]
impl NotificationScheduler for RedisNotificationQueue {
    #[instrument(skip(self, job), fields(kind = job.kind(), queue = %self.key))]
    async fn schedule(&self, job: NotificationJob) -> RepoResult<()> {
        let queued = QueuedJob::new(job);
        let len = self.push(&queued).await.map_err(to_domain_error)?;

        tracing::debug!(job_id = %queued.job_id, pending = len, "Notification job queued");

        Ok(())
    }
}

fn to_domain_error(err: RedisPoolError) -> DomainError {
    DomainError::SchedulerError(err.to_string())
}
