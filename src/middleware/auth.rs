use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::{AuthError, Error};
use crate::services::auth_service::AuthService;

/// Rejects the request with 401 unless it carries a valid admin bearer token.
/// Verified claims are inserted into the request extensions.
pub async fn require_admin(
    State(auth): State<AuthService>,
    mut req: Request,
    next: Next,
) -> Response {
    let header = match req.headers().get(AUTHORIZATION).map(|v| v.to_str()) {
        None => None,
        Some(Ok(value)) => Some(value),
        Some(Err(_)) => return Error::from(AuthError::InvalidToken).into_response(),
    };

    match auth.authorize(header) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}
