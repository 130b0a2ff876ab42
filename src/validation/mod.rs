/**
 * Request Payload Validation
 *
 * Field-level validation for JSON payloads and query parameters. Request
 * types derive `validator::Validate`; failures are normalized into
 * `FieldError` values carried by `ApiError::Validation`, so the client
 * sees every violated field with a human-readable message.
 *
 * Two entry points:
 *
 * - [`ValidatedJson`] - an extractor that deserializes and validates the
 *   body before the handler runs. Used where validation is the first step
 *   (signup, login, issue create).
 * - [`decode`] + [`check`] - explicit deserialization and validation for
 *   handlers that must resolve the target entity and authorize first
 *   (issue update, comment create), so a missing entity yields 404
 *   before any 400.
 */

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::ApiError;

/// A single violated field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                details.push(FieldError::new(field.to_string(), message));
            }
        }
        ApiError::Validation(details)
    }
}

/// Validate an already-deserialized payload.
pub fn check<T: Validate>(value: &T) -> Result<(), ApiError> {
    value.validate().map_err(ApiError::from)
}

/// Deserialize a raw JSON value into a request type.
///
/// Used by handlers that must not touch the body until the target entity
/// is resolved and authorized; shape failures are reported in the same
/// envelope as field-level failures.
pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::Validation(vec![FieldError::new("body", e.to_string())]))
}

/// JSON extractor that validates the payload before the handler runs.
///
/// Deserialization failures (malformed JSON, wrong types) are reported in
/// the same `{error, details}` envelope as field-level failures.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(vec![FieldError::new("body", rejection.body_text())])
            })?;

        check(&value)?;
        Ok(ValidatedJson(value))
    }
}

/// Shared custom validator: enum membership with a field-level message.
pub(crate) fn enum_member(value: &str, allowed: &[&str], message: &'static str) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        let mut error = ValidationError::new("enum");
        error.message = Some(message.into());
        Err(error)
    }
}
