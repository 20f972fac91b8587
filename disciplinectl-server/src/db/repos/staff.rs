//! Staff repository
//!
//! Full CRUD plus the lookups the dashboards need:
//! - credentials: fetch by username, verify bcrypt hash
//! - committee members: id + role filter for incident assignment

use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::auth::{verify_password, PasswordHasher};
use crate::models::{NewStaffMember, Role};

const COLUMNS: &str = "id, name, username, password_hash, role";

/// Staff member record from database
#[derive(Debug, Clone, FromRow)]
pub struct StaffMember {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
}

/// Staff repository
pub struct StaffRepo<'a> {
    pool: &'a SqlitePool,
    hasher: PasswordHasher,
}

impl<'a> StaffRepo<'a> {
    pub fn new(pool: &'a SqlitePool, hasher: PasswordHasher) -> Self {
        Self { pool, hasher }
    }

    /// Insert a staff member, returning the row with its assigned id.
    ///
    /// A duplicate username fails with a unique violation.
    pub async fn create(&self, staff: &NewStaffMember) -> Result<StaffMember, DbError> {
        let password_hash = self.hasher.hash(staff.password()).await?;

        let row = sqlx::query_as::<_, StaffMember>(&format!(
            "INSERT INTO staff_members (name, username, password_hash, role) \
             VALUES (?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(staff.name())
        .bind(staff.username())
        .bind(&password_hash)
        .bind(staff.role().as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Staff member whose username and password both match.
    pub async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<StaffMember>, DbError> {
        let Some(staff) = self.get_by_username(username).await? else {
            return Ok(None);
        };

        if verify_password(password, &staff.password_hash).await? {
            Ok(Some(staff))
        } else {
            Ok(None)
        }
    }

    pub async fn get(&self, id: i64) -> Result<Option<StaffMember>, DbError> {
        let row = sqlx::query_as::<_, StaffMember>(&format!(
            "SELECT {COLUMNS} FROM staff_members WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<StaffMember>, DbError> {
        let row = sqlx::query_as::<_, StaffMember>(&format!(
            "SELECT {COLUMNS} FROM staff_members WHERE username = ?"
        ))
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// All staff members in insertion order.
    pub async fn list(&self) -> Result<Vec<StaffMember>, DbError> {
        let rows = sqlx::query_as::<_, StaffMember>(&format!(
            "SELECT {COLUMNS} FROM staff_members ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn list_by_role(&self, role: Role) -> Result<Vec<StaffMember>, DbError> {
        let rows = sqlx::query_as::<_, StaffMember>(&format!(
            "SELECT {COLUMNS} FROM staff_members WHERE role = ? ORDER BY id"
        ))
        .bind(role.as_str())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Staff member with this id, but only when their role is committee.
    pub async fn find_committee_member(&self, id: i64) -> Result<Option<StaffMember>, DbError> {
        let row = sqlx::query_as::<_, StaffMember>(&format!(
            "SELECT {COLUMNS} FROM staff_members WHERE id = ? AND role = ?"
        ))
        .bind(id)
        .bind(Role::Committee.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Overwrite every field of an existing staff member.
    ///
    /// Returns `None` when no row has this id; nothing is written then.
    pub async fn update(
        &self,
        id: i64,
        staff: &NewStaffMember,
    ) -> Result<Option<StaffMember>, DbError> {
        let password_hash = self.hasher.hash(staff.password()).await?;

        let row = sqlx::query_as::<_, StaffMember>(&format!(
            "UPDATE staff_members SET name = ?, username = ?, password_hash = ?, role = ? \
             WHERE id = ? RETURNING {COLUMNS}"
        ))
        .bind(staff.name())
        .bind(staff.username())
        .bind(&password_hash)
        .bind(staff.role().as_str())
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Delete by id. `false` when nothing matched.
    pub async fn delete(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM staff_members WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
