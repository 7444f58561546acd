//! Member database models

use sqlx::FromRow;

/// Database model for members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub workspace_id: i64,
    pub user_id: i64,
    pub role: String,
}

/// Member row joined with its user profile
#[derive(Debug, Clone, FromRow)]
pub struct MemberWithUserModel {
    pub id: i64,
    pub workspace_id: i64,
    pub user_id: i64,
    pub role: String,
    pub user_name: String,
    pub user_image: Option<String>,
}
