use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::time::parse_timestamp;

/// A contact message as served to the admin and written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Message {
    /// Ids arriving over HTTP are matched as text, so `"7"` and `7` both hit id 7.
    pub fn id_matches(&self, key: &str) -> bool {
        self.id.to_string() == key
    }
}

/// On-disk record as it may have been written by any past version.
#[derive(Debug, Deserialize)]
pub struct StoredMessage {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(default, rename = "createdAt", alias = "created_at")]
    pub created_at: Option<String>,
    #[serde(default, rename = "submissionDate", alias = "submission_date")]
    pub submission_date: Option<String>,
    #[serde(default)]
    pub read: Option<bool>,
    #[serde(default, rename = "isRead", alias = "is_read")]
    pub is_read: Option<bool>,
}

impl StoredMessage {
    /// Fills `read` from the legacy read flag and `createdAt` from the legacy
    /// submission date, falling back to `now` when neither timestamp exists
    /// or the stored one cannot be parsed.
    pub fn normalize(self, now: DateTime<Utc>) -> Message {
        let created_at = match self.created_at.or(self.submission_date) {
            Some(raw) => parse_timestamp(&raw).unwrap_or_else(|e| {
                tracing::warn!(id = self.id, raw = %raw, error = %e, "unparsable message timestamp, using load time");
                now
            }),
            None => now,
        };

        Message {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone.unwrap_or_default(),
            subject: self.subject,
            message: self.message,
            created_at,
            read: self.read.or(self.is_read).unwrap_or(false),
        }
    }
}
