pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use std::sync::Arc;

use crate::config::AuthConfig;
use crate::services::{
    auth_service::AuthService, message_service::MessageService, summary_service::SummaryService,
};
use crate::store::MessageStore;

#[derive(Clone)]
pub struct AppState {
    pub message_service: MessageService,
    pub summary_service: SummaryService,
    pub auth_service: AuthService,
}

impl AppState {
    pub fn new(store: Arc<dyn MessageStore>, auth: &AuthConfig) -> Self {
        let message_service = MessageService::new(store);
        let summary_service = SummaryService::new(message_service.clone());
        let auth_service = AuthService::new(auth);

        Self {
            message_service,
            summary_service,
            auth_service,
        }
    }
}
