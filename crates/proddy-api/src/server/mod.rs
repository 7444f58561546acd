//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use proddy_cache::{create_shared_pool, RedisNotificationQueue, RedisPoolConfig};
use proddy_common::{AppConfig, AppError};
use proddy_core::SnowflakeGenerator;
use proddy_db::{
    create_pool, migrations_dir, run_migrations, PgCardRepository, PgChannelRepository,
    PgConversationRepository, PgDirectReadRepository, PgMemberRepository, PgMentionRepository,
    PgMessageRepository, PoolConfig,
};
use proddy_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes are mounted outside the rate limiter.
///
/// # Errors
/// Returns `AppError::Config` if the rate limit settings are invalid
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_rate_limit(create_router(), &config.rate_limit)?;
    let router = apply_middleware(
        health_routes().merge(api),
        &config.cors,
        config.app.env.is_production(),
    );
    Ok(router.with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    let migrations = migrations_dir(&config.database);
    info!(dir = %migrations.display(), "Running database migrations");
    run_migrations(&pool, &migrations)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let redis_pool = create_shared_pool(RedisPoolConfig::from(&config.redis))
        .map_err(|e| AppError::Cache(e.to_string()))?;
    let queue = RedisNotificationQueue::new(
        Arc::clone(&redis_pool),
        config.notifications.queue_key.clone(),
    );

    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let service_context = ServiceContextBuilder::new()
        .member_repo(Arc::new(PgMemberRepository::new(pool.clone())))
        .channel_repo(Arc::new(PgChannelRepository::new(pool.clone())))
        .conversation_repo(Arc::new(PgConversationRepository::new(pool.clone())))
        .card_repo(Arc::new(PgCardRepository::new(pool.clone())))
        .message_repo(Arc::new(PgMessageRepository::new(pool.clone())))
        .mention_repo(Arc::new(PgMentionRepository::new(pool.clone())))
        .direct_read_repo(Arc::new(PgDirectReadRepository::new(pool.clone())))
        .scheduler(Arc::new(queue))
        .snowflake_generator(snowflake_generator)
        .direct_message_preview_limit(config.notifications.direct_message_preview_limit)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config)
        .with_db_pool(pool)
        .with_redis_pool(redis_pool))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}
