use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use shared::errors::HttpError;

/// Numeric id segment whose rejection stays inside the JSON envelope
/// instead of axum's plain-text body.
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

        Ok(Self(id))
    }
}
