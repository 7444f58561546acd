//! # proddy-cache
//!
//! Redis layer: a managed connection pool and the notification job queue
//! that hands mention, direct-message and thread-reply jobs to the delivery
//! worker.
//!
//! ## Example
//!
//! ```ignore
//! use proddy_cache::{create_shared_pool, RedisNotificationQueue, RedisPoolConfig};
//!
//! let pool = create_shared_pool(RedisPoolConfig::from(&config.redis))?;
//! let queue = RedisNotificationQueue::new(pool, &config.notifications.queue_key);
//! queue.schedule(NotificationJob::mention(&mention)).await?;
//! ```

pub mod pool;
pub mod queue;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export queue types
pub use queue::{QueuedJob, RedisNotificationQueue};
