use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Body of `PUT /api/admin/messages/{id}`. An absent `read` keeps the current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMessageRequest {
    pub read: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkDeleteRequest {
    #[serde(default)]
    pub message_ids: Vec<JsonValue>,
}

impl BulkDeleteRequest {
    /// Ids as text; numbers and strings are both accepted.
    pub fn id_keys(&self) -> Vec<String> {
        self.message_ids
            .iter()
            .map(|id| match id {
                JsonValue::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDeleteResponse {
    pub message: String,
    pub deleted: usize,
}
