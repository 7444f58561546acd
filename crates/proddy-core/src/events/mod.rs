//! Notification jobs handed to the background delivery worker

mod notification_job;

pub use notification_job::{DirectMessageJob, MentionJob, NotificationJob, ThreadReplyJob};
