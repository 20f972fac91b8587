//! Home, login and logout

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::views;

/// Login form fields
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// GET /
async fn home() -> Html<String> {
    Html(views::auth::home())
}

/// GET /login
async fn login_form() -> Html<String> {
    Html(views::auth::login(None, ""))
}

/// POST /login - admin, then students, then staff; first match wins
async fn login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, ApiError> {
    tracing::debug!(username = %form.username, "Login attempt");

    if state.auth.is_admin(&form.username, &form.password) {
        tracing::info!("Admin login successful");
        return Ok(Redirect::to("/admindashboard"));
    }

    if let Some(student) = state
        .students()
        .find_by_credentials(&form.username, &form.password)
        .await?
    {
        tracing::info!(username = %form.username, "Student login successful");
        return Ok(Redirect::to(&format!("/studentdashboard?user_id={}", student.id)));
    }

    if let Some(staff) = state
        .staff()
        .find_by_credentials(&form.username, &form.password)
        .await?
    {
        tracing::info!(username = %form.username, role = %staff.role, "Staff login successful");
        return Ok(Redirect::to(&format!(
            "{}?user_id={}",
            staff.role.dashboard_path(),
            staff.id
        )));
    }

    tracing::warn!(username = %form.username, "Invalid login attempt");
    Err(ApiError::Unauthenticated {
        username: form.username,
    })
}

/// GET /logout - nothing to clear, identity lives in the request
async fn logout() -> Redirect {
    tracing::info!("User logged out");
    Redirect::to("/login")
}

/// Auth routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
}
