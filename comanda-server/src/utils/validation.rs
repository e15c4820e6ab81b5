//! Input validation
//!
//! Request-shape checks run before any handler logic:
//! - [`ValidatedJson`] - JSON body, deserialized then checked with `validator`
//! - [`IdPath`] - single `{id}` path segment, must be 24 hex chars
//!
//! Both reject with [`AppError::Validation`] (HTTP 400).

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use shared::ObjectId;
use validator::Validate;

use crate::utils::AppError;

/// JSON body that passed deserialization and `Validate`
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// `{id}` path parameter parsed as an [`ObjectId`]
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub ObjectId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(Self(raw.parse()?))
    }
}
