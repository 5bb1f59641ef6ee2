/// Request extractors with API-shaped rejections
///
/// axum's stock `Path` and `Json` extractors reject with plain-text bodies
/// and a mix of 400/415/422 statuses. These wrappers reject with [`ApiError`]
/// so every client error leaves the API as a JSON 400.

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use std::fmt;
use validator::Validate;

/// Task ID parsed from the `:id` path segment
///
/// Non-numeric or out-of-range values are rejected, never coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskId(pub i32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TaskId {
    /// Parses the textual path form
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        raw.parse::<i32>()
            .map(TaskId)
            .map_err(|_| ApiError::BadRequest(format!("Invalid task ID: {}", raw)))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for TaskId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        TaskId::parse(&raw)
    }
}

/// JSON body that has been deserialized and passed `validator` rules
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_parses_integers() {
        assert_eq!(TaskId::parse("1").unwrap(), TaskId(1));
        assert_eq!(TaskId::parse("2147483647").unwrap(), TaskId(i32::MAX));
    }

    #[test]
    fn test_task_id_rejects_non_numeric() {
        for raw in ["abc", "1.5", "", "12abc", "2147483648"] {
            let err = TaskId::parse(raw).unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(_)), "accepted {:?}", raw);
        }
    }
}
