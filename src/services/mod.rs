pub mod auth_service;
pub mod message_service;
pub mod summary_service;
