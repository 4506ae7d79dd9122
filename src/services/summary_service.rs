use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::message::Message;
use crate::services::message_service::MessageService;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(rename = "total_messages")]
    pub total_count: usize,
    #[serde(rename = "unread_messages")]
    pub unread_count: usize,
    pub latest_message: Option<Message>,
}

#[derive(Clone)]
pub struct SummaryService {
    messages: MessageService,
}

impl SummaryService {
    pub fn new(messages: MessageService) -> Self {
        Self { messages }
    }

    pub async fn dashboard(&self) -> Result<DashboardSummary> {
        let messages = self.messages.list().await?;
        Ok(DashboardSummary {
            total_count: messages.len(),
            unread_count: messages.iter().filter(|m| !m.read).count(),
            latest_message: messages.into_iter().next(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::contact_dto::ContactSubmission;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn empty_store_has_no_latest() {
        let svc = SummaryService::new(MessageService::new(Arc::new(MemoryStore::new())));
        let summary = svc.dashboard().await.unwrap();
        assert_eq!((summary.total_count, summary.unread_count), (0, 0));
        assert!(summary.latest_message.is_none());
    }

    #[tokio::test]
    async fn marking_read_drops_unread_by_one() {
        let messages = MessageService::new(Arc::new(MemoryStore::new()));
        let svc = SummaryService::new(messages.clone());
        for name in ["Alice", "Bob"] {
            messages
                .submit(ContactSubmission {
                    name: Some(name.into()),
                    email: Some("x@example.com".into()),
                    phone: Some("555-0100".into()),
                    subject: Some("Hi".into()),
                    message: Some("Hello".into()),
                })
                .await
                .unwrap();
        }

        let before = svc.dashboard().await.unwrap();
        assert_eq!(before.unread_count, 2);

        messages.set_read("1", Some(true)).await.unwrap();
        let after = svc.dashboard().await.unwrap();
        assert_eq!(after.total_count, 2);
        assert_eq!(after.unread_count, 1);
    }

    #[test]
    fn serializes_with_dashboard_field_names() {
        let summary = DashboardSummary {
            total_count: 3,
            unread_count: 1,
            latest_message: None,
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["total_messages"], 3);
        assert_eq!(value["unread_messages"], 1);
        assert!(value["latest_message"].is_null());
    }
}
