use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use portal_core::error::CoreError;
use portal_submission::SubmissionError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps domain, database, and submission errors and renders every one of
/// them as a `{ "error", "code" }` JSON body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A submission that failed as a whole.
    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::Submission(err) => classify_submission_error(err),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string()),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            internal()
        }
    }
}

/// Missing identity is a 401, a missing portal a 403. Backend write
/// failures surface as 502 with the failing service or image named, but
/// never the backend's own text.
fn classify_submission_error(err: &SubmissionError) -> (StatusCode, &'static str, String) {
    match err {
        SubmissionError::AuthenticationRequired => {
            (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", err.to_string())
        }
        SubmissionError::PortalMissing => {
            (StatusCode::FORBIDDEN, "PORTAL_MISSING", err.to_string())
        }
        SubmissionError::AmendCreationFailed { service_id, source } => {
            tracing::error!(service_id = %service_id, error = %source, "Amend creation failed");
            (
                StatusCode::BAD_GATEWAY,
                "AMEND_CREATION_FAILED",
                format!("Could not create the amend request for service '{service_id}'"),
            )
        }
        SubmissionError::AnnotationCreationFailed { image_url, source } => {
            tracing::error!(image_url = %image_url, error = %source, "Annotation creation failed");
            (
                StatusCode::BAD_GATEWAY,
                "ANNOTATION_CREATION_FAILED",
                format!("Could not attach image '{image_url}'"),
            )
        }
    }
}

/// `RowNotFound` maps to 404; everything else is a sanitized 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
