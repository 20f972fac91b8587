//! Staff member management (admin)

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
use crate::models::{NewStaffMember, ValidationError};
use crate::views::{self, admin::StaffFields, Notice};

/// Staff create/edit form fields
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StaffForm {
    pub name: String,
    pub username: String,
    pub password: String,
    pub role: String,
}

impl StaffForm {
    fn validate(&self) -> Result<NewStaffMember, ValidationError> {
        NewStaffMember::new(&self.name, &self.username, &self.password, &self.role)
    }

    fn fields(&self) -> StaffFields<'_> {
        StaffFields {
            name: &self.name,
            username: &self.username,
            role: &self.role,
        }
    }
}

/// GET /staffmembers
async fn list_staff(
    State(state): State<Arc<AppState>>,
    Query(flash): Query<FlashParams>,
) -> Result<Html<String>, ApiError> {
    let staff = state.staff().list().await?;
    let notice = flash.notice();
    Ok(Html(views::admin::staff_members(&staff, notice, StaffFields::default())))
}

/// POST /add_staff
async fn add_staff(
    State(state): State<Arc<AppState>>,
    Form(form): Form<StaffForm>,
) -> Result<Response, ApiError> {
    let (status, error) = match form.validate() {
        Ok(new) => match state.staff().create(&new).await {
            Ok(staff) => {
                tracing::info!(username = %staff.username, role = %staff.role, "Staff added");
                let redirect = see_other("/staffmembers", None, "Staff added successfully");
                return Ok(redirect.into_response());
            }
            Err(e) => write_failure("Error adding staff", e),
        },
        Err(e) => (StatusCode::BAD_REQUEST, format!("Error adding staff: {e}")),
    };

    let staff = state.staff().list().await?;
    let html = views::admin::staff_members(&staff, Notice::error(&error), form.fields());
    Ok((status, Html(html)).into_response())
}

/// GET /edit_staff/{id}
async fn edit_staff_form(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Html<String>, ApiError> {
    let staff = state
        .staff()
        .get(id)
        .await?
        .ok_or(ApiError::NotFound { resource: "Staff" })?;

    Ok(Html(views::admin::edit_staff(id, StaffFields::from(&staff), Notice::none())))
}

/// POST /edit_staff/{id} - full overwrite
async fn update_staff(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    Form(form): Form<StaffForm>,
) -> Result<Response, ApiError> {
    let (status, error) = match form.validate() {
        Ok(new) => match state.staff().update(id, &new).await {
            Ok(Some(_)) => {
                tracing::info!(id, "Staff updated");
                let redirect = see_other("/staffmembers", None, "Staff updated successfully");
                return Ok(redirect.into_response());
            }
            Ok(None) => {
                tracing::warn!(id, "Staff not found for update");
                return Err(ApiError::NotFound { resource: "Staff" });
            }
            Err(e) => write_failure("Error updating staff", e),
        },
        Err(e) => (StatusCode::BAD_REQUEST, format!("Error updating staff: {e}")),
    };

    let html = views::admin::edit_staff(id, form.fields(), Notice::error(&error));
    Ok((status, Html(html)).into_response())
}

/// POST /delete_staff/{id}
async fn delete_staff(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Response, ApiError> {
    if !state.staff().delete(id).await? {
        tracing::warn!(id, "Staff not found for deletion");
        return Err(ApiError::NotFound { resource: "Staff" });
    }

    tracing::info!(id, "Staff deleted");
    Ok(see_other("/staffmembers", None, "Staff deleted successfully").into_response())
}

/// Staff management routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/staffmembers", get(list_staff))
        .route("/add_staff", post(add_staff))
        .route("/edit_staff/{id}", get(edit_staff_form).post(update_staff))
        .route("/delete_staff/{id}", post(delete_staff))
}
