use axum::http::Uri;

use crate::error::ApiError;

pub mod health;
pub mod reference;
pub mod score;

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
