//! Request extractors that reject with `AppError`
//!
//! axum's built-in rejections answer with plain text; these wrap `Json` and
//! `Query` so malformed input gets the same JSON error envelope as every
//! other failure.

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use http::request::Parts;
use serde::de::DeserializeOwned;
use shared::error::AppError;
use validator::{Validate, ValidationErrors};

/// JSON body that has been deserialized and validated
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid_request(rejection.body_text()))?;
        value.validate().map_err(validation_error)?;
        Ok(Self(value))
    }
}

/// Query string deserialized into `T`
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::invalid_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Collapse validator output into one error naming the offending fields
fn validation_error(errors: ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();
    let mut fields: Vec<String> = field_errors.keys().map(|k| k.to_string()).collect();
    fields.sort();

    let Some(first) = fields.first().cloned() else {
        return AppError::validation("Invalid request body");
    };
    AppError::validation(format!("Invalid value for {}", fields.join(", ")))
        .with_detail("field", first)
        .with_detail("fields", fields)
}
