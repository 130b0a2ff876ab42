/**
 * Error Conversion
 *
 * Implements `IntoResponse` for `ApiError` so handlers can return it
 * directly with `?`.
 *
 * # Response Format
 *
 * ```json
 * { "error": "Invalid input", "details": [{ "field": "...", "message": "..." }] }
 * ```
 *
 * `details` is present only for validation failures.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error handling request: {}", self);
        }

        let body = match self.details() {
            Some(details) => serde_json::json!({
                "error": self.client_message(),
                "details": details,
            }),
            None => serde_json::json!({
                "error": self.client_message(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_response_includes_details() {
        let err = ApiError::Validation(vec![FieldError::new("email", "Invalid email address")]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid input");
        assert_eq!(json["details"][0]["field"], "email");
        assert_eq!(json["details"][0]["message"], "Invalid email address");
    }

    #[tokio::test]
    async fn test_internal_response_is_generic() {
        let err = ApiError::Database(sqlx::Error::PoolClosed);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Internal server error");
        assert!(json.get("details").is_none());
    }
}
