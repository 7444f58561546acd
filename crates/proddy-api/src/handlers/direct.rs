//! Direct message handlers
//!
//! Read receipts and the unread inbox for 1:1 conversations.

use axum::{extract::State, Json};
use proddy_service::dto::{
    CountResponse, IncludeReadParams, NotificationItem, SuccessResponse, UnreadCountResponse,
};
use proddy_service::DirectMessageService;

use crate::extractors::{AuthUser, IdPath, QueryParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// List recent direct messages addressed to the caller
///
/// GET /workspaces/{workspace_id}/direct-messages?include_read=
pub async fn list_direct_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(workspace_id): IdPath,
    QueryParams(params): QueryParams<IncludeReadParams>,
) -> Json<Vec<NotificationItem>> {
    let service = DirectMessageService::new(state.service_context());
    Json(
        service
            .list_for_user(auth.user_id, workspace_id, params.unread_only())
            .await,
    )
}

/// Unread direct message badge
///
/// GET /workspaces/{workspace_id}/direct-messages/unread-count
pub async fn unread_direct_message_count(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(workspace_id): IdPath,
) -> Json<UnreadCountResponse> {
    let service = DirectMessageService::new(state.service_context());
    Json(service.unread_count(auth.user_id, workspace_id).await)
}

/// Mark every direct message to the caller in a workspace as read
///
/// POST /workspaces/{workspace_id}/direct-messages/read
pub async fn mark_all_direct_messages_read(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(workspace_id): IdPath,
) -> ApiResult<Json<CountResponse>> {
    let service = DirectMessageService::new(state.service_context());
    let response = service.mark_all_read(auth.user_id, workspace_id).await?;
    Ok(Json(response))
}

/// Mark a single direct message as read
///
/// POST /messages/{message_id}/read
pub async fn mark_direct_message_read(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
) -> ApiResult<Json<SuccessResponse>> {
    let service = DirectMessageService::new(state.service_context());
    let response = service.mark_read(auth.user_id, message_id).await?;
    Ok(Json(response))
}
