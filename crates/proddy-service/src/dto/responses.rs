//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Ids are rendered
//! as strings so JavaScript clients never lose precision.

use chrono::{DateTime, Utc};
use serde::Serialize;

use proddy_core::entities::CalendarEvent;
use proddy_core::value_objects::BodyFormat;

// ============================================================================
// Message Responses
// ============================================================================

/// Message response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    pub workspace_id: String,
    pub member_id: String,
    pub body: String,
    pub format: BodyFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_event: Option<CalendarEvent>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Notification Responses
// ============================================================================

/// One entry of the mention or direct-message inbox
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub author: NotificationAuthor,
    pub source: NotificationSource,
}

/// Who triggered the notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationAuthor {
    /// Member id of the author
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Where the notification came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationSource {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub id: String,
    pub name: String,
}

/// Kind of [`NotificationSource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Channel,
    Direct,
    Thread,
    Card,
}

// ============================================================================
// Read-State Responses
// ============================================================================

/// Plain acknowledgement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Result of toggling a mention's read flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadResponse {
    pub success: bool,
    pub read: bool,
}

/// Result of a bulk operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountResponse {
    pub success: bool,
    pub count: u64,
}

impl CountResponse {
    pub fn new(count: u64) -> Self {
        Self {
            success: true,
            count,
        }
    }
}

/// Unread direct-message badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnreadCountResponse {
    pub total: usize,
    pub direct: usize,
}

impl UnreadCountResponse {
    pub fn new(unread: usize) -> Self {
        Self {
            total: unread,
            direct: unread,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    /// `None` marks a dependency the process runs without
    pub fn from_checks(database: Option<bool>, redis: Option<bool>) -> Self {
        let all_healthy = database.unwrap_or(true) && redis.unwrap_or(true);
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: check_label(database).to_string(),
                redis: check_label(redis).to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

fn check_label(check: Option<bool>) -> &'static str {
    match check {
        Some(true) => "healthy",
        Some(false) => "unhealthy",
        None => "not_configured",
    }
}
