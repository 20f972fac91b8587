//! Student management (admin)

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use super::{see_other, write_failure};
use crate::http::error::ApiError;
use crate::http::extractors::{FlashParams, RecordId};
use crate::http::server::AppState;
use crate::models::NewStudent;
use crate::views::{self, admin::StudentFields, Notice};

/// Student create/edit form fields
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StudentForm {
    pub name: String,
    pub username: String,
    pub password: String,
}

impl StudentForm {
    fn fields(&self) -> StudentFields<'_> {
        StudentFields {
            name: &self.name,
            username: &self.username,
        }
    }
}

/// GET /students
async fn list_students(
    State(state): State<Arc<AppState>>,
    Query(flash): Query<FlashParams>,
) -> Result<Html<String>, ApiError> {
    let students = state.students().list().await?;
    let notice = flash.notice();
    Ok(Html(views::admin::students(&students, notice, StudentFields::default())))
}

/// POST /add_student
async fn add_student(
    State(state): State<Arc<AppState>>,
    Form(form): Form<StudentForm>,
) -> Result<Response, ApiError> {
    let result = NewStudent::new(&form.name, &form.username, &form.password);
    let (status, error) = match result {
        Ok(new) => match state.students().create(&new).await {
            Ok(student) => {
                tracing::info!(username = %student.username, "Student added");
                let redirect = see_other("/students", None, "Student added successfully");
                return Ok(redirect.into_response());
            }
            Err(e) => write_failure("Error adding student", e),
        },
        Err(e) => (StatusCode::BAD_REQUEST, format!("Error adding student: {e}")),
    };

    let students = state.students().list().await?;
    let html = views::admin::students(&students, Notice::error(&error), form.fields());
    Ok((status, Html(html)).into_response())
}

/// GET /edit_student/{id}
async fn edit_student_form(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Html<String>, ApiError> {
    let student = state
        .students()
        .get(id)
        .await?
        .ok_or(ApiError::NotFound { resource: "Student" })?;

    Ok(Html(views::admin::edit_student(id, StudentFields::from(&student), Notice::none())))
}

/// POST /edit_student/{id}
async fn update_student(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    Form(form): Form<StudentForm>,
) -> Result<Response, ApiError> {
    let result = NewStudent::new(&form.name, &form.username, &form.password);
    let (status, error) = match result {
        Ok(new) => match state.students().update(id, &new).await {
            Ok(Some(_)) => {
                tracing::info!(id, "Student updated");
                let redirect = see_other("/students", None, "Student updated successfully");
                return Ok(redirect.into_response());
            }
            Ok(None) => {
                tracing::warn!(id, "Student not found for update");
                return Err(ApiError::NotFound { resource: "Student" });
            }
            Err(e) => write_failure("Error updating student", e),
        },
        Err(e) => (StatusCode::BAD_REQUEST, format!("Error updating student: {e}")),
    };

    let html = views::admin::edit_student(id, form.fields(), Notice::error(&error));
    Ok((status, Html(html)).into_response())
}

/// POST /delete_student/{id}
async fn delete_student(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Response, ApiError> {
    if !state.students().delete(id).await? {
        tracing::warn!(id, "Student not found for deletion");
        return Err(ApiError::NotFound { resource: "Student" });
    }

    tracing::info!(id, "Student deleted");
    Ok(see_other("/students", None, "Student deleted successfully").into_response())
}

/// Student management routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/students", get(list_students))
        .route("/add_student", post(add_student))
        .route("/edit_student/{id}", get(edit_student_form).post(update_student))
        .route("/delete_student/{id}", post(delete_student))
}
