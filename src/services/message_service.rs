use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::dto::contact_dto::ContactSubmission;
use crate::error::{Error, Result, ValidationError};
use crate::models::message::Message;
use crate::store::MessageStore;
use crate::utils::time;

/// Contact message operations over a [`MessageStore`].
///
/// Mutations run load, mutate and save under one lock shared by all clones,
/// so two concurrent writers cannot overwrite each other's changes.
#[derive(Clone)]
pub struct MessageService {
    store: Arc<dyn MessageStore>,
    write_lock: Arc<Mutex<()>>,
}

impl MessageService {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn submit(&self, input: ContactSubmission) -> Result<Message> {
        input.check()?;

        let _guard = self.write_lock.lock().await;
        let mut messages = self.store.load().await?;
        let id = match messages.iter().map(|m| m.id).max() {
            None => 1,
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| Error::Internal("message id space exhausted".to_string()))?,
        };

        let phone = input.phone_text();
        let message = Message {
            id,
            name: input.name.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
            phone,
            subject: input.subject.unwrap_or_default(),
            message: input.message.unwrap_or_default(),
            created_at: time::now(),
            read: false,
        };
        messages.push(message.clone());
        self.store.save(&messages).await?;

        tracing::info!(id = message.id, "contact message stored");
        Ok(message)
    }

    /// Newest first. Order among equal timestamps is unspecified.
    pub async fn list(&self) -> Result<Vec<Message>> {
        let mut messages = self.store.load().await?;
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    /// Sets the read flag of the message whose id renders as `id`.
    /// `None` leaves the flag as it is but still rewrites the record.
    pub async fn set_read(&self, id: &str, read: Option<bool>) -> Result<Message> {
        let _guard = self.write_lock.lock().await;
        let mut messages = self.store.load().await?;

        let Some(message) = messages.iter_mut().find(|m| m.id_matches(id)) else {
            return Err(Error::NotFound("Message not found".to_string()));
        };
        if let Some(read) = read {
            message.read = read;
        }
        let updated = message.clone();
        self.store.save(&messages).await?;

        tracing::info!(id = updated.id, read = updated.read, "message read state updated");
        Ok(updated)
    }

    /// Removes every message whose id is in `ids` and returns how many went.
    /// Nothing is written unless at least one message matched.
    pub async fn bulk_delete(&self, ids: &[String]) -> Result<usize> {
        if ids.is_empty() {
            return Err(ValidationError::EmptyIdList.into());
        }
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();

        let _guard = self.write_lock.lock().await;
        let mut messages = self.store.load().await?;
        let before = messages.len();
        messages.retain(|m| !wanted.contains(m.id.to_string().as_str()));
        let deleted = before - messages.len();

        if deleted == 0 {
            return Err(Error::NotFound("No messages were deleted".to_string()));
        }
        self.store.save(&messages).await?;

        tracing::info!(deleted, "messages deleted");
        Ok(deleted)
    }
}
