//! Route handlers organized by audience

pub mod admin;
pub mod auth;
pub mod committee;
pub mod faculty;
pub mod health;
pub mod principal;
pub mod staff;
pub mod student_portal;
pub mod students;

use axum::http::StatusCode;
use axum::response::Redirect;

use crate::db::DbError;
use crate::http::error::INTERNAL;

/// 303 redirect carrying a `message=` banner and, for role pages, the caller's id.
pub(crate) fn see_other(path: &str, user_id: Option<i64>, message: &str) -> Redirect {
    let message = urlencoding::encode(message);
    let location = match user_id {
        Some(id) => format!("{path}?user_id={id}&message={message}"),
        None => format!("{path}?message={message}"),
    };
    Redirect::to(&location)
}

/// Status and banner for a write the database refused.
///
/// Constraint violations are the caller's fault (400); anything else is
/// logged and reported generically (500).
pub(crate) fn write_failure(context: &str, err: DbError) -> (StatusCode, String) {
    if err.is_unique_violation() {
        (
            StatusCode::BAD_REQUEST,
            format!("{context}: username is already taken"),
        )
    } else if err.is_foreign_key_violation() {
        (
            StatusCode::BAD_REQUEST,
            format!("{context}: referenced record does not exist"),
        )
    } else {
        tracing::error!("{}: {}", context, err);
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{context}: {INTERNAL}"))
    }
}
