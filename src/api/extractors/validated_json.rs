//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::domain;
use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// Validation is fail-fast: the first failing field is reported, with
/// its path as the envelope's `invalidField`.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!("request body rejected: {}", e.body_text());
            AppError::from(domain::Error::value_is_invalid())
        })?;

        value.validate().map_err(|e| first_failure(&e))?;

        Ok(ValidatedJson(value))
    }
}

/// Map the first validation failure back to a domain error.
///
/// Rules created by [`crate::api::validators`] smuggle a serialized
/// domain error in the message; anything else degrades to a generic
/// invalid-value error.
fn first_failure(errors: &ValidationErrors) -> AppError {
    match walk("", errors) {
        Some((field, failure)) => {
            let error = failure
                .message
                .as_deref()
                .and_then(domain::Error::deserialize)
                .unwrap_or_else(domain::Error::value_is_invalid);

            AppError::Domain {
                error,
                invalid_field: Some(field),
            }
        }
        None => domain::Error::value_is_invalid().into(),
    }
}

fn walk(prefix: &str, errors: &ValidationErrors) -> Option<(String, ValidationError)> {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(failures) => {
                if let Some(failure) = failures.first() {
                    return Some((path, failure.clone()));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                if let Some(found) = walk(&path, nested) {
                    return Some(found);
                }
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let item_path = format!("{path}[{index}]");
                    if let Some(found) = walk(&item_path, nested) {
                        return Some(found);
                    }
                }
            }
        }
    }
    None
}
