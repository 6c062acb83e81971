//! Extractors whose rejections use the service's JSON error envelope.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::Json;
use cv_core::validation::ValidatePayload;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body that has been deserialized and passed [`ValidatePayload`].
///
/// Malformed JSON, unknown fields and wrong types are rejected with 400
/// `BAD_REQUEST`; rule violations with 400 `VALIDATION_ERROR`. Handlers
/// therefore only ever see well-formed payloads.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + ValidatePayload,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(AppError::from)?;
        value.validate_payload()?;
        Ok(ValidatedJson(value))
    }
}

/// Path parameters. A segment that does not parse (e.g. a record id that is
/// not a UUID) is rejected with 400 `BAD_REQUEST`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct PathParams<T>(pub T);
