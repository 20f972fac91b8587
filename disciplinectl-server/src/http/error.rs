//! API error types with IntoResponse
//!
//! Errors are rendered as the HTML error page with a matching status code.
//! Database failures are logged and replaced by a generic message.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::db::DbError;
use crate::models::ValidationError;
use crate::views;

pub const USER_ID_REQUIRED: &str = "User ID is required. Please log in.";
pub const UNAUTHORIZED: &str = "Unauthorized access";
pub const INTERNAL: &str = "An internal error occurred. Please try again later.";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Protected route called without a user id (400)
    MissingParameter,

    /// Validation failed (400)
    Validation(ValidationError),

    /// Credentials did not match any account (401)
    Unauthenticated { username: String },

    /// Caller's role does not allow this route (403)
    Forbidden,

    /// Resource not found (404)
    NotFound { resource: &'static str },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the user.
    pub fn message(&self) -> String {
        match self {
            Self::MissingParameter => USER_ID_REQUIRED.to_string(),
            Self::Validation(e) => format!("Validation error: {}", e),
            Self::Unauthenticated { username } => {
                format!("Invalid credentials for username: {}. Please try again.", username)
            }
            Self::Forbidden => UNAUTHORIZED.to_string(),
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::Database(_) => INTERNAL.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                views::error_page(&self.message())
            }
            Self::Unauthenticated { username } => {
                views::auth::login(Some(&self.message()), username)
            }
            _ => views::error_page(&self.message()),
        };

        (status, Html(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn missing_parameter_is_400() {
        let response = ApiError::MissingParameter.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_of(response).await.contains(USER_ID_REQUIRED));
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "name" });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn forbidden_is_403() {
        let response = ApiError::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(body_of(response).await.contains(UNAUTHORIZED));
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::NotFound { resource: "Student" }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_of(response).await.contains("Student not found"));
    }

    #[tokio::test]
    async fn database_error_is_generic_500() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert!(body.contains(INTERNAL));
        assert!(!body.contains("pool timed out"));
    }

    #[tokio::test]
    async fn unauthenticated_renders_login_with_username() {
        let err = ApiError::Unauthenticated {
            username: "mallory".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_of(response).await;
        assert!(body.contains("Invalid credentials for username: mallory. Please try again."));
        assert!(body.contains(r#"action="/login""#));
    }
}
