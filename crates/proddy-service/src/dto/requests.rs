//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Ids are accepted either as JSON strings or numbers.

use serde::Deserialize;
use validator::Validate;

use proddy_core::entities::CalendarEvent;
use proddy_core::value_objects::{BodyFormat, Snowflake};

// ============================================================================
// Message Requests
// ============================================================================

/// Create message request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    #[validate(length(min = 1, max = 20000, message = "Body must be 1-20000 characters"))]
    pub body: String,

    /// Explicit body format; without it the legacy delta detection applies
    #[serde(default)]
    pub format: Option<BodyFormat>,

    pub workspace_id: Snowflake,

    #[serde(default)]
    pub channel_id: Option<Snowflake>,

    #[serde(default)]
    pub conversation_id: Option<Snowflake>,

    #[serde(default)]
    pub parent_message_id: Option<Snowflake>,

    /// Storage reference of an uploaded image
    #[validate(length(max = 2048, message = "Image reference must be at most 2048 characters"))]
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub calendar_event: Option<CalendarEvent>,
}

/// Update message request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
    #[validate(length(min = 1, max = 20000, message = "Body must be 1-20000 characters"))]
    pub body: String,

    #[serde(default)]
    pub format: Option<BodyFormat>,
}

// ============================================================================
// Mention Requests
// ============================================================================

/// Mark a single mention read or unread
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MarkMentionRequest {
    /// New read state; `true` when omitted
    #[serde(default)]
    pub status: Option<bool>,
}

/// Members newly assigned to a card
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignCardRequest {
    #[validate(length(min = 1, max = 100, message = "Between 1 and 100 assignees required"))]
    pub assignee_member_ids: Vec<Snowflake>,
}

// ============================================================================
// Listing Queries
// ============================================================================

/// `?include_read=` filter shared by the mention and direct-message listings
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct IncludeReadParams {
    #[serde(default, alias = "includeRead")]
    pub include_read: Option<bool>,
}

impl IncludeReadParams {
    /// Only an explicit `false` narrows the listing to unread items
    #[must_use]
    pub fn unread_only(self) -> bool {
        self.include_read == Some(false)
    }
}
