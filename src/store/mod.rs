//! Durable home of the message collection.
//!
//! Every operation reads the whole collection and writes it back whole; there
//! is no cache between calls.

pub mod json_file;
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

use crate::error::Result;
use crate::models::message::{Message, StoredMessage};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Returns the stored collection in insertion order. An absent record is
    /// an empty collection.
    async fn load(&self) -> Result<Vec<Message>>;

    /// Replaces the stored collection. Readers never observe a partial write.
    async fn save(&self, messages: &[Message]) -> Result<()>;
}

/// Decodes a stored payload. A payload that is not a JSON array is treated as
/// empty; each record is normalized from legacy field names.
pub fn decode(bytes: &[u8], now: DateTime<Utc>) -> Result<Vec<Message>> {
    let JsonValue::Array(records) = serde_json::from_slice::<JsonValue>(bytes)? else {
        tracing::warn!("stored message payload is not a list, treating as empty");
        return Ok(Vec::new());
    };

    records
        .into_iter()
        .map(|record| -> Result<Message> {
            Ok(serde_json::from_value::<StoredMessage>(record)?.normalize(now))
        })
        .collect()
}

pub fn encode(messages: &[Message]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(messages)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_list_payload_is_empty() {
        let out = decode(br#"{"messages": []}"#, Utc::now()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(decode(b"[{", Utc::now()).is_err());
    }

    #[test]
    fn record_missing_required_field_is_an_error() {
        assert!(decode(br#"[{"id": 1, "name": "A"}]"#, Utc::now()).is_err());
    }

    #[test]
    fn odd_timestamps_do_not_poison_the_collection() {
        let now = Utc::now();
        let out = decode(
            br#"[
                {"id":1,"name":"A","email":"e","subject":"s","message":"m","createdAt":"2024-01-05"},
                {"id":2,"name":"B","email":"e","subject":"s","message":"m","createdAt":"not a date"}
            ]"#,
            now,
        )
        .unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].created_at.to_rfc3339(), "2024-01-05T00:00:00+00:00");
        assert_eq!(out[1].created_at, now);
    }

    #[test]
    fn encode_is_pretty_printed() {
        let bytes = encode(&[]).unwrap();
        assert_eq!(bytes, b"[]");

        let now = Utc::now();
        let msgs = decode(
            br#"[{"id":1,"name":"A","email":"e","subject":"s","message":"m"}]"#,
            now,
        )
        .unwrap();
        let text = String::from_utf8(encode(&msgs).unwrap()).unwrap();
        assert!(text.contains("\n  {"));
        assert_eq!(decode(text.as_bytes(), Utc::now()).unwrap(), msgs);
    }
}
