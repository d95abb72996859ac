use axum::extract::{FromRequest, rejection::JsonRejection};

use crate::app_error::AppError;

/// `Json` whose rejections come back in the same shape as every other error.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}
