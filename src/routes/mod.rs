pub mod admin;
pub mod contact;
pub mod extractors;
pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{middleware::auth::require_admin, AppState};

/// All routes of the service. Admin routes sit behind the bearer-token guard.
pub fn router(state: AppState) -> Router {
    let public_api = Router::new()
        .route("/health", get(health::health))
        .route("/api/contact", post(contact::submit_contact))
        .route("/api/admin/login", post(admin::login));

    let admin_api = Router::new()
        .route("/api/admin/messages", get(admin::list_messages))
        .route("/api/admin/messages/:id", put(admin::update_message))
        .route(
            "/api/admin/messages/bulk-delete",
            post(admin::bulk_delete),
        )
        .route("/api/admin/dashboard", get(admin::dashboard))
        .route_layer(axum::middleware::from_fn_with_state(
            state.auth_service.clone(),
            require_admin,
        ));

    public_api.merge(admin_api).with_state(state)
}
