//! Notification job queue backed by a Redis list.

mod notification_queue;

pub use notification_queue::{QueuedJob, RedisNotificationQueue};
