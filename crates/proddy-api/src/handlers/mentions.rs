//! Mention handlers
//!
//! The caller's mention inbox, its read flags, and card assignment mentions.

use axum::{extract::State, Json};
use proddy_service::dto::{
    AssignCardRequest, CountResponse, IncludeReadParams, MarkMentionRequest, NotificationItem,
    ReadResponse,
};
use proddy_service::MentionService;

use crate::extractors::{AuthUser, IdPath, OptionalValidatedJson, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List the caller's mentions in a workspace
///
/// GET /workspaces/{workspace_id}/mentions?include_read=
pub async fn list_mentions(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(workspace_id): IdPath,
    QueryParams(params): QueryParams<IncludeReadParams>,
) -> Json<Vec<NotificationItem>> {
    let service = MentionService::new(state.service_context());
    Json(
        service
            .list_for_user(auth.user_id, workspace_id, params.unread_only())
            .await,
    )
}

/// Mark all of the caller's mentions in a workspace as read
///
/// POST /workspaces/{workspace_id}/mentions/read
pub async fn mark_all_mentions_read(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(workspace_id): IdPath,
) -> ApiResult<Json<CountResponse>> {
    let service = MentionService::new(state.service_context());
    let response = service.mark_all_read(auth.user_id, workspace_id).await?;
    Ok(Json(response))
}

/// Mark one mention read, or unread with `{"status": false}`
///
/// PATCH /mentions/{mention_id}
pub async fn mark_mention_read(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(mention_id): IdPath,
    OptionalValidatedJson(request): OptionalValidatedJson<MarkMentionRequest>,
) -> ApiResult<Json<ReadResponse>> {
    let status = request.unwrap_or_default().status;
    let service = MentionService::new(state.service_context());
    let response = service.mark_read(auth.user_id, mention_id, status).await?;
    Ok(Json(response))
}

/// Notify members newly assigned to a card
///
/// POST /cards/{card_id}/assignees
pub async fn assign_card(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(card_id): IdPath,
    ValidatedJson(request): ValidatedJson<AssignCardRequest>,
) -> ApiResult<Created<Json<CountResponse>>> {
    let service = MentionService::new(state.service_context());
    let response = service
        .create_card_assignment_mentions(auth.user_id, card_id, request)
        .await?;
    Ok(Created(Json(response)))
}
