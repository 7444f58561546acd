//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! configuration, token validation, and handles on the backing pools for
//! readiness checks.

use std::sync::Arc;

use proddy_cache::SharedRedisPool;
use proddy_common::{AppConfig, JwtService};
use proddy_db::PgPool;
use proddy_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    jwt_service: Arc<JwtService>,
    /// `None` when the process runs without PostgreSQL (in-memory tests)
    db_pool: Option<PgPool>,
    /// `None` when the process runs without Redis
    redis_pool: Option<SharedRedisPool>,
}

impl AppState {
    /// Create a new AppState without backing pools
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        let jwt_service = Arc::new(JwtService::new(&config.jwt.secret));
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            jwt_service,
            db_pool: None,
            redis_pool: None,
        }
    }

    /// Attach the PostgreSQL pool for readiness checks
    #[must_use]
    pub fn with_db_pool(mut self, pool: PgPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Attach the Redis pool for readiness checks
    #[must_use]
    pub fn with_redis_pool(mut self, pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(pool);
        self
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    pub fn db_pool(&self) -> Option<&PgPool> {
        self.db_pool.as_ref()
    }

    pub fn redis_pool(&self) -> Option<&SharedRedisPool> {
        self.redis_pool.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("db_pool", &self.db_pool.is_some())
            .field("redis_pool", &self.redis_pool.is_some())
            .finish()
    }
}
