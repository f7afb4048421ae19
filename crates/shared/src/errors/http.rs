use crate::errors::{ErrorResponse, ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Internal { message: String, detail: Option<String> },
}

impl HttpError {
    /// Translates a service failure into the wire taxonomy. Validation and
    /// not-found keep their own message; anything else becomes a 500 that
    /// uses `fallback` as the message and surfaces the source error text.
    pub fn from_service(err: ServiceError, fallback: &str) -> Self {
        match err {
            ServiceError::Validation(msg) => HttpError::BadRequest(msg),
            ServiceError::NotFound(msg) => HttpError::NotFound(msg),
            other => HttpError::Internal {
                message: fallback.to_string(),
                detail: Some(other.to_string()),
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            HttpError::Internal { message, detail } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, detail)
            }
        };

        let body = Json(ErrorResponse {
            status: false,
            message,
            error,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RepositoryError;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn validation_maps_to_bad_request() {
        let err = HttpError::from_service(
            ServiceError::Validation("Name, Price, and Stock are required!".to_string()),
            "Failed to create product",
        );

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], false);
        assert_eq!(body["message"], "Name, Price, and Stock are required!");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn repository_failure_maps_to_internal_with_detail() {
        let err = HttpError::from_service(
            ServiceError::Repo(RepositoryError::Custom("connection refused".to_string())),
            "Can't Fetch from Database",
        );

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], false);
        assert_eq!(body["message"], "Can't Fetch from Database");
        assert_eq!(body["error"], "connection refused");
    }

    #[tokio::test]
    async fn not_found_keeps_its_message() {
        let err = HttpError::from_service(
            ServiceError::NotFound("Product with ID: 42 not found".to_string()),
            "Can't Fetch from Database",
        );

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
