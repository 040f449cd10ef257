use axum::extract::FromRequest;

use crate::errors::ApiError;

/// `axum::Json` whose rejections answer with the usual `{"message"}` body
/// instead of a plain-text 4xx.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
