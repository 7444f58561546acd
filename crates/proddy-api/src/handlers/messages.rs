//! Message handlers
//!
//! Endpoints for message operations.

use axum::{extract::State, Json};
use proddy_service::dto::{CreateMessageRequest, MessageResponse, UpdateMessageRequest};
use proddy_service::MessageService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create message
///
/// POST /messages
pub async fn create_message(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.create_message(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get message by ID
///
/// GET /messages/{message_id}
pub async fn get_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = MessageService::new(state.service_context());
    let response = service.get_message(auth.user_id, message_id).await?;
    Ok(Json(response))
}

/// Edit message
///
/// PATCH /messages/{message_id}
pub async fn update_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateMessageRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = MessageService::new(state.service_context());
    let response = service
        .update_message(auth.user_id, message_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete message
///
/// DELETE /messages/{message_id}
pub async fn delete_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
) -> ApiResult<NoContent> {
    let service = MessageService::new(state.service_context());
    service.delete_message(auth.user_id, message_id).await?;
    Ok(NoContent)
}
