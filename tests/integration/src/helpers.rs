//! Test helpers for integration tests
//!
//! Builds the full axum application over the in-memory fixture and drives it
//! with `tower::ServiceExt::oneshot`, so no sockets or databases are involved.

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use proddy_api::{create_app, AppState};
use proddy_common::{AppConfig, JwtService};
use proddy_core::Snowflake;
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;

use crate::fixtures::Fixture;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Configuration for an app without backing pools
///
/// The pool URLs are required by the loader but never dialed.
pub fn test_config() -> Result<AppConfig> {
    AppConfig::from_lookup(|key| {
        let value = match key {
            "APP_ENV" => "development",
            "API_PORT" => "0",
            "DATABASE_URL" => "postgres://unused@localhost/proddy_test",
            "REDIS_URL" => "redis://localhost:6379",
            "JWT_SECRET" => TEST_JWT_SECRET,
            "RATE_LIMIT_REQUESTS_PER_SECOND" => "1000",
            "RATE_LIMIT_BURST" => "1000",
            _ => return None,
        };
        Some(value.to_string())
    })
    .context("test configuration")
}

/// Mint a bearer token the app accepts
pub fn access_token(user_id: Snowflake) -> Result<String> {
    JwtService::new(TEST_JWT_SECRET)
        .issue_access_token(user_id, 3600)
        .context("issue access token")
}

/// Response captured from the router
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// `error.code` of an error body
    pub fn error_code(&self) -> Option<&str> {
        self.body["error"]["code"].as_str()
    }
}

/// The application router over a seeded fixture
pub struct TestApp {
    pub fixture: Fixture,
    router: Router,
}

impl TestApp {
    pub async fn spawn() -> Result<Self> {
        let fixture = Fixture::seed().await;
        let state = AppState::new(fixture.context(), test_config()?);
        let router = create_app(state).context("build router")?;
        Ok(Self { fixture, router })
    }

    pub async fn get(&self, path: &str, user_id: Option<Snowflake>) -> Result<TestResponse> {
        self.send(Method::GET, path, user_id, None).await
    }

    pub async fn post<T: Serialize>(
        &self,
        path: &str,
        user_id: Snowflake,
        body: &T,
    ) -> Result<TestResponse> {
        let body = serde_json::to_vec(body)?;
        self.send(Method::POST, path, Some(user_id), Some(body)).await
    }

    pub async fn post_empty(&self, path: &str, user_id: Snowflake) -> Result<TestResponse> {
        self.send(Method::POST, path, Some(user_id), None).await
    }

    pub async fn patch<T: Serialize>(
        &self,
        path: &str,
        user_id: Snowflake,
        body: &T,
    ) -> Result<TestResponse> {
        let body = serde_json::to_vec(body)?;
        self.send(Method::PATCH, path, Some(user_id), Some(body)).await
    }

    pub async fn patch_empty(&self, path: &str, user_id: Snowflake) -> Result<TestResponse> {
        self.send(Method::PATCH, path, Some(user_id), None).await
    }

    pub async fn delete(&self, path: &str, user_id: Snowflake) -> Result<TestResponse> {
        self.send(Method::DELETE, path, Some(user_id), None).await
    }

    /// Send a request with a raw `Authorization` header value
    pub async fn get_with_authorization(&self, path: &str, authorization: &str) -> Result<TestResponse> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .header(header::AUTHORIZATION, authorization)
            .body(Body::empty())?;
        self.dispatch(request).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        user_id: Option<Snowflake>,
        body: Option<Vec<u8>>,
    ) -> Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(user_id) = user_id {
            builder = builder.header(
                header::AUTHORIZATION,
                format!("Bearer {}", access_token(user_id)?),
            );
        }
        let request = match body {
            Some(bytes) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(bytes))?,
            None => builder.body(Body::empty())?,
        };
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> Result<TestResponse> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .with_context(|| format!("non-JSON body: {}", String::from_utf8_lossy(&bytes)))?
        };
        Ok(TestResponse { status, body })
    }
}
