//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{direct, health, mentions, messages};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(message_routes())
        .merge(mention_routes())
        .merge(direct_message_routes())
}

/// Message routes
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", post(messages::create_message))
        .route(
            "/messages/:message_id",
            get(messages::get_message)
                .patch(messages::update_message)
                .delete(messages::delete_message),
        )
        .route("/messages/:message_id/read", post(direct::mark_direct_message_read))
}

/// Mention routes
fn mention_routes() -> Router<AppState> {
    Router::new()
        .route("/workspaces/:workspace_id/mentions", get(mentions::list_mentions))
        .route(
            "/workspaces/:workspace_id/mentions/read",
            post(mentions::mark_all_mentions_read),
        )
        .route("/mentions/:mention_id", patch(mentions::mark_mention_read))
        .route("/cards/:card_id/assignees", post(mentions::assign_card))
}

/// Direct message routes
fn direct_message_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/workspaces/:workspace_id/direct-messages",
            get(direct::list_direct_messages),
        )
        .route(
            "/workspaces/:workspace_id/direct-messages/read",
            post(direct::mark_all_direct_messages_read),
        )
        .route(
            "/workspaces/:workspace_id/direct-messages/unread-count",
            get(direct::unread_direct_message_count),
        )
}
