//! HTTP request handlers.

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::HttpError;

pub mod chat;
pub mod health;
pub mod models;

/// JSON body extractor whose rejection uses the standard error envelope.
///
/// The stock `Json` extractor answers a malformed body with a plain-text
/// 400; wrapping it keeps every error response in the
/// `{success, error, status}` shape.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
