//! JSON extractor that reports malformed bodies as `AppError::BadRequest`.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON body extractor with the application's error format.
///
/// Missing fields, wrong types and unparseable dates all surface as a
/// 400 response carrying the deserializer's message.
///
/// # Example
///
/// ```rust,ignore
/// use taskboard_api::api::extractors::AppJson;
/// use taskboard_api::domain::User;
///
/// async fn create_user(AppJson(user): AppJson<User>) {
///     // every field of `user` was present and well-typed
/// }
/// ```
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(AppJson(value))
    }
}
