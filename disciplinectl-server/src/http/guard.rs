//! Per-request role checks
//!
//! Identity is the unsigned `user_id` the caller sends. Each protected
//! handler reloads that row and checks it before doing anything else.

use super::error::ApiError;
use super::server::AppState;
use crate::db::{StaffMember, Student};
use crate::models::Role;

/// Load the staff member behind `user_id` and require `role`.
///
/// A missing row and a role mismatch both answer 403.
pub async fn require_staff(
    state: &AppState,
    user_id: i64,
    role: Role,
) -> Result<StaffMember, ApiError> {
    match state.staff().get(user_id).await? {
        Some(staff) if staff.role == role => Ok(staff),
        other => {
            tracing::warn!(
                user_id,
                required = %role,
                actual = ?other.map(|s| s.role),
                "Unauthorized access"
            );
            Err(ApiError::Forbidden)
        }
    }
}

/// Load the student behind `user_id`; unknown ids answer 404.
pub async fn require_student(state: &AppState, user_id: i64) -> Result<Student, ApiError> {
    state.students().get(user_id).await?.ok_or_else(|| {
        tracing::warn!(user_id, "Student not found");
        ApiError::NotFound { resource: "Student" }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthConfig, PasswordHasher, MIN_BCRYPT_COST};
    use crate::db::create_memory_pool;
    use crate::models::{NewStaffMember, NewStudent};

    async fn state() -> AppState {
        let pool = create_memory_pool().await.unwrap();
        AppState::new(pool, AuthConfig::with_hasher(PasswordHasher::new(MIN_BCRYPT_COST)))
    }

    #[tokio::test]
    async fn staff_role_must_match() {
        let state = state().await;
        let faculty = state
            .staff()
            .create(&NewStaffMember::new("Fay", "fay", "pw", "faculty").unwrap())
            .await
            .unwrap();

        assert!(require_staff(&state, faculty.id, Role::Faculty).await.is_ok());
        assert!(matches!(
            require_staff(&state, faculty.id, Role::Committee).await,
            Err(ApiError::Forbidden)
        ));
        assert!(matches!(
            require_staff(&state, faculty.id + 1, Role::Faculty).await,
            Err(ApiError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn unknown_student_is_not_found() {
        let state = state().await;
        let tom = state
            .students()
            .create(&NewStudent::new("Tom", "tom", "pw").unwrap())
            .await
            .unwrap();

        assert_eq!(require_student(&state, tom.id).await.unwrap().name, "Tom");
        assert!(matches!(
            require_student(&state, tom.id + 1).await,
            Err(ApiError::NotFound { resource: "Student" })
        ));
    }
}
