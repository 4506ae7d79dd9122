use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::admin_dto::{
        BulkDeleteRequest, BulkDeleteResponse, LoginRequest, LoginResponse, UpdateMessageRequest,
    },
    error::Result,
    routes::extractors::AppJson,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = Json<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<impl IntoResponse> {
    let access_token = state
        .auth_service
        .login(&payload.email, &payload.password)?;
    Ok(Json(LoginResponse { access_token }))
}

#[utoipa::path(
    get,
    path = "/api/admin/messages",
    responses(
        (status = 200, description = "All messages, newest first", body = Json<Vec<Message>>),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn list_messages(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let messages = state.message_service.list().await?;
    Ok(Json(messages))
}

#[utoipa::path(
    put,
    path = "/api/admin/messages/{id}",
    params(
        ("id" = String, Path, description = "Message ID")
    ),
    request_body = UpdateMessageRequest,
    responses(
        (status = 200, description = "Updated message", body = Json<Message>),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Message not found")
    )
)]
#[axum::debug_handler]
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateMessageRequest>,
) -> Result<impl IntoResponse> {
    let message = state.message_service.set_read(&id, payload.read).await?;
    Ok(Json(message))
}

#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    responses(
        (status = 200, description = "Message counters", body = Json<DashboardSummary>),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn dashboard(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let summary = state.summary_service.dashboard().await?;
    Ok(Json(summary))
}

#[utoipa::path(
    post,
    path = "/api/admin/messages/bulk-delete",
    request_body = BulkDeleteRequest,
    responses(
        (status = 200, description = "Messages deleted", body = Json<BulkDeleteResponse>),
        (status = 400, description = "No message IDs provided"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No messages were deleted")
    )
)]
#[axum::debug_handler]
pub async fn bulk_delete(
    State(state): State<AppState>,
    AppJson(payload): AppJson<BulkDeleteRequest>,
) -> Result<impl IntoResponse> {
    let deleted = state
        .message_service
        .bulk_delete(&payload.id_keys())
        .await?;
    Ok(Json(BulkDeleteResponse {
        message: "Messages deleted successfully".to_string(),
        deleted,
    }))
}
