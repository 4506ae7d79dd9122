use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::contact_dto::{ContactResponse, ContactSubmission},
    error::Result,
    routes::extractors::AppJson,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactSubmission,
    responses(
        (status = 201, description = "Message stored", body = Json<ContactResponse>),
        (status = 400, description = "Missing field or length limit exceeded")
    )
)]
#[axum::debug_handler]
pub async fn submit_contact(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ContactSubmission>,
) -> Result<impl IntoResponse> {
    state.message_service.submit(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            message: "Message sent successfully".to_string(),
        }),
    ))
}
