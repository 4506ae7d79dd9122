use axum::extract::FromRequest;

use crate::error::Error;

/// `Json` whose rejections become a 400 with the usual `{"error": ...}` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);
