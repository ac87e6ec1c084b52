//! Application error taxonomy and HTTP mapping.
//!
//! Every failure surfaced to a caller is an [`AppError`]. The JSON body always
//! carries `{"success": false, "error": <string>}`; individual variants merge
//! contextual fields (`message`, `redirect_to`, `short_code`) into the body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};

/// Application-level error with an HTTP status mapping.
///
/// - `Validation` — malformed input (400)
/// - `DestinationRejected` — destination probe veto (400)
/// - `NotFound` — unknown short code (404)
/// - `Conflict` — duplicate short code (409)
/// - `Internal` — store/log/infrastructure failure (500)
#[derive(Debug)]
pub enum AppError {
    Validation { error: String, extra: Value },
    DestinationRejected { error: String, extra: Value },
    NotFound { error: String, extra: Value },
    Conflict { error: String, extra: Value },
    Internal { error: String, extra: Value },
}

impl AppError {
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::Validation {
            error: error.into(),
            extra: json!({}),
        }
    }

    pub fn destination_rejected(error: impl Into<String>, extra: Value) -> Self {
        Self::DestinationRejected {
            error: error.into(),
            extra,
        }
    }

    pub fn not_found(error: impl Into<String>, extra: Value) -> Self {
        Self::NotFound {
            error: error.into(),
            extra,
        }
    }

    pub fn conflict(error: impl Into<String>) -> Self {
        Self::Conflict {
            error: error.into(),
            extra: json!({}),
        }
    }

    pub fn internal(error: impl Into<String>) -> Self {
        Self::Internal {
            error: error.into(),
            extra: json!({}),
        }
    }

    fn into_parts(self) -> (StatusCode, String, Value) {
        match self {
            AppError::Validation { error, extra } => (StatusCode::BAD_REQUEST, error, extra),
            AppError::DestinationRejected { error, extra } => {
                (StatusCode::BAD_REQUEST, error, extra)
            }
            AppError::NotFound { error, extra } => (StatusCode::NOT_FOUND, error, extra),
            AppError::Conflict { error, extra } => (StatusCode::CONFLICT, error, extra),
            AppError::Internal { error, extra } => {
                (StatusCode::INTERNAL_SERVER_ERROR, error, extra)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, extra) = self.into_parts();

        let mut body = Map::new();
        body.insert("success".to_string(), Value::Bool(false));
        body.insert("error".to_string(), Value::String(error));

        if let Value::Object(fields) = extra {
            for (key, value) in fields {
                body.insert(key, value);
            }
        }

        (status, Json(Value::Object(body))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_code(&e) {
            return AppError::conflict("This short code is already in use");
        }

        // Internal/admin-facing tool: the raw error message is exposed to the
        // caller. A hardened deployment should redact this.
        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(format!("Invalid request: {e}"))
    }
}

/// Returns true when the error is a unique-constraint violation on
/// `urls.short_code`.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some("urls_short_code_key"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_maps_to_400() {
        let (status, body) = body_json(AppError::bad_request("Fields must not be empty")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Fields must not be empty"));
    }

    #[tokio::test]
    async fn conflict_maps_to_409() {
        let (status, body) =
            body_json(AppError::conflict("This short code is already in use")).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], json!("This short code is already in use"));
    }

    #[tokio::test]
    async fn not_found_merges_extra_fields() {
        let err = AppError::not_found(
            "URL not found",
            json!({ "short_code": "abc", "message": "gone" }),
        );
        let (status, body) = body_json(err).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["short_code"], json!("abc"));
        assert_eq!(body["message"], json!("gone"));
    }

    #[tokio::test]
    async fn destination_rejected_carries_redirect_target() {
        let err = AppError::destination_rejected(
            "The destination URL is a redirect (HTTP 301)",
            json!({ "redirect_to": "https://example.com/moved" }),
        );
        let (status, body) = body_json(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["redirect_to"], json!("https://example.com/moved"));
    }

    #[tokio::test]
    async fn internal_maps_to_500() {
        let (status, _) = body_json(AppError::internal("Database error: boom")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
