//! # proddy-db
//!
//! PostgreSQL implementations of the proddy-core repository traits via SQLx:
//! pool setup, migrations, row models, mappers and repositories.
//!
//! ```rust,ignore
//! use proddy_db::{create_pool, migrations_dir, run_migrations, PgMentionRepository, PoolConfig};
//!
//! let pool = create_pool(&PoolConfig::from(&config.database)).await?;
//! run_migrations(&pool, migrations_dir(&config.database)).await?;
//! let mentions = PgMentionRepository::new(pool.clone());
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{
    create_pool, migrations_dir, run_migrations, PgPool, PoolConfig, MIGRATIONS_DIR,
};
pub use repositories::{
    PgCardRepository, PgChannelRepository, PgConversationRepository, PgDirectReadRepository,
    PgMemberRepository, PgMentionRepository, PgMessageRepository,
};
