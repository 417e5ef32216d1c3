use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejections (bad syntax, wrong content type, unknown fields)
/// are reported as `400 {"error": ...}` like every other validation failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
