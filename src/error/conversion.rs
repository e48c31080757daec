/**
 * Error Conversion
 *
 * This module converts `ApiError` values into HTTP responses.
 *
 * # Response Format
 *
 * Error responses are JSON objects with an `error` field and the numeric
 * status code:
 * ```json
 * {
 *   "error": "Blog not found",
 *   "status": 404
 * }
 * ```
 *
 * Validation errors carry the per-field violation list instead of a
 * single message:
 * ```json
 * {
 *   "error": [{"field": "title", "message": "Title is required"}],
 *   "status": 400
 * }
 * ```
 *
 * Infrastructure failures (database, token signing, hashing) are logged
 * with their full detail and surfaced as a generic 500 message.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::Validation { errors } => serde_json::json!({
                "error": errors,
                "status": status.as_u16(),
            }),
            ApiError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                generic_body(status)
            }
            ApiError::Token(e) => {
                tracing::error!("Token error: {:?}", e);
                generic_body(status)
            }
            ApiError::Hash(e) => {
                tracing::error!("Password hashing error: {:?}", e);
                generic_body(status)
            }
            other => serde_json::json!({
                "error": other.to_string(),
                "status": status.as_u16(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

fn generic_body(status: StatusCode) -> serde_json::Value {
    serde_json::json!({
        "error": "An unexpected error occurred",
        "status": status.as_u16(),
    })
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
    async fn test_not_found_response_body() {
        let response = ApiError::not_found("Blog not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Blog not found");
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn test_validation_response_carries_field_errors() {
        let error = ApiError::validation(vec![
            FieldError::new("title", "Title is required"),
            FieldError::new("content", "Content is required"),
        ]);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        let errors = body["error"].as_array().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0]["field"], "title");
        assert_eq!(errors[0]["message"], "Title is required");
    }

    #[tokio::test]
    async fn test_database_error_is_generic() {
        let response = ApiError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "An unexpected error occurred");
    }
}
