use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{decode, encode, MessageStore};
use crate::error::Result;
use crate::models::message::Message;
use crate::utils::time;

/// Holds the serialized collection in memory. Goes through the same
/// encode/decode path as the file store, so legacy payloads behave the same.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    bytes: Arc<RwLock<Option<Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Arc::new(RwLock::new(Some(bytes.into()))),
        }
    }

    /// The raw stored payload, or `None` if nothing was ever written.
    pub async fn snapshot(&self) -> Option<Vec<u8>> {
        self.bytes.read().await.clone()
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Message>> {
        match self.bytes.read().await.as_deref() {
            Some(bytes) => decode(bytes, time::now()),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, messages: &[Message]) -> Result<()> {
        let bytes = encode(messages)?;
        *self.bytes.write().await = Some(bytes);
        Ok(())
    }
}
