//! # proddy-api
//!
//! REST API server built with Axum: message ingestion, the mention inbox and
//! direct-message read receipts under `/api/v1`.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;
