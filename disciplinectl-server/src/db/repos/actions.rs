//! Disciplinary action repository

use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::NewAction;

const COLUMNS: &str = "id, incident_id, student_id, action_description, assigned_date";

/// Disciplinary action record from database
#[derive(Debug, Clone, FromRow)]
pub struct Action {
    pub id: i64,
    pub incident_id: i64,
    pub student_id: String,
    pub action_description: String,
    pub assigned_date: String,
}

/// Disciplinary action repository
pub struct ActionRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ActionRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Record an action. The incident must exist (foreign key).
    pub async fn create(&self, action: &NewAction) -> Result<Action, DbError> {
        let row = sqlx::query_as::<_, Action>(&format!(
            "INSERT INTO disciplinary_actions (incident_id, student_id, action_description, assigned_date) \
             VALUES (?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(action.incident_id)
        .bind(&action.student_id)
        .bind(&action.action_description)
        .bind(&action.assigned_date)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list(&self) -> Result<Vec<Action>, DbError> {
        let rows = sqlx::query_as::<_, Action>(&format!(
            "SELECT {COLUMNS} FROM disciplinary_actions ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Actions whose student id equals `student_id` (string comparison).
    pub async fn list_by_student(&self, student_id: &str) -> Result<Vec<Action>, DbError> {
        let rows = sqlx::query_as::<_, Action>(&format!(
            "SELECT {COLUMNS} FROM disciplinary_actions WHERE student_id = ? ORDER BY id"
        ))
        .bind(student_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
