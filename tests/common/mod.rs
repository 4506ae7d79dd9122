#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use contact_backend::{config::AuthConfig, routes, store::JsonFileStore, AppState};
use serde_json::Value as JsonValue;
use tempfile::TempDir;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin_password";

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test_secret_key".into(),
        admin_email: ADMIN_EMAIL.into(),
        admin_password: ADMIN_PASSWORD.into(),
        token_ttl: chrono::Duration::hours(24),
    }
}

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    pub dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("messages.json"));
        let state = AppState::new(Arc::new(store), &auth_config());
        Self {
            app: routes::router(state.clone()),
            state,
            dir,
        }
    }

    pub fn messages_path(&self) -> std::path::PathBuf {
        self.dir.path().join("messages.json")
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<JsonValue>,
    ) -> (StatusCode, JsonValue) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let req = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let resp = self.app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null)
        };
        (status, json)
    }

    pub async fn login(&self) -> String {
        let (status, body) = self
            .send(
                "POST",
                "/api/admin/login",
                None,
                Some(serde_json::json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["access_token"].as_str().expect("access_token").to_string()
    }
}
