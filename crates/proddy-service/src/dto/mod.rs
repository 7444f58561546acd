//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AssignCardRequest, CreateMessageRequest, IncludeReadParams, MarkMentionRequest,
    UpdateMessageRequest,
};

// Re-export commonly used response types
pub use responses::{
    CountResponse, HealthChecks, HealthResponse, MessageResponse, NotificationAuthor,
    NotificationItem, NotificationSource, ReadResponse, ReadinessResponse, SourceKind,
    SuccessResponse, UnreadCountResponse,
};

pub use mappers::UNKNOWN_AUTHOR_NAME;
