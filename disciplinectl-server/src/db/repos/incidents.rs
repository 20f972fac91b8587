//! Incident repository
//!
//! Incidents are immutable once reported: there is no update or delete.

use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::NewIncident;

const COLUMNS: &str = "id, student_id, student_name, class_name, department, \
                       committee_member_id, incident_date, description";

/// Discipline incident record from database
#[derive(Debug, Clone, FromRow)]
pub struct Incident {
    pub id: i64,
    pub student_id: String,
    pub student_name: String,
    pub class_name: String,
    pub department: String,
    pub committee_member_id: Option<i64>,
    pub incident_date: String,
    pub description: String,
}

/// Incident repository
pub struct IncidentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> IncidentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Report an incident.
    ///
    /// Runs in a transaction: on any failure the transaction is dropped
    /// uncommitted, which rolls it back.
    pub async fn create(&self, incident: &NewIncident) -> Result<Incident, DbError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, Incident>(&format!(
            "INSERT INTO discipline_incidents \
             (student_id, student_name, class_name, department, committee_member_id, \
              incident_date, description) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(&incident.student_id)
        .bind(&incident.student_name)
        .bind(&incident.class_name)
        .bind(&incident.department)
        .bind(incident.committee_member_id)
        .bind(&incident.incident_date)
        .bind(&incident.description)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Incident>, DbError> {
        let row = sqlx::query_as::<_, Incident>(&format!(
            "SELECT {COLUMNS} FROM discipline_incidents WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list(&self) -> Result<Vec<Incident>, DbError> {
        let rows = sqlx::query_as::<_, Incident>(&format!(
            "SELECT {COLUMNS} FROM discipline_incidents ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Incidents assigned to one committee member.
    pub async fn list_by_committee_member(
        &self,
        committee_member_id: i64,
    ) -> Result<Vec<Incident>, DbError> {
        let rows = sqlx::query_as::<_, Incident>(&format!(
            "SELECT {COLUMNS} FROM discipline_incidents WHERE committee_member_id = ? ORDER BY id"
        ))
        .bind(committee_member_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Incidents whose free-text student id equals `student_id` exactly.
    pub async fn list_by_student(&self, student_id: &str) -> Result<Vec<Incident>, DbError> {
        let rows = sqlx::query_as::<_, Incident>(&format!(
            "SELECT {COLUMNS} FROM discipline_incidents WHERE student_id = ? ORDER BY id"
        ))
        .bind(student_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{PasswordHasher, MIN_BCRYPT_COST};
    use crate::db::{create_memory_pool, StaffRepo};
    use crate::models::NewStaffMember;

    fn incident(student_id: &str, committee_member_id: Option<i64>) -> NewIncident {
        NewIncident::new(
            student_id,
            "Tom",
            "10B",
            "Science",
            committee_member_id,
            "2024-03-01",
            "Broke a beaker",
        )
        .unwrap()
    }

    async fn committee_member(pool: &SqlitePool, username: &str) -> i64 {
        let staff = NewStaffMember::new("Member", username, "pw", "committee").unwrap();
        StaffRepo::new(pool, PasswordHasher::new(MIN_BCRYPT_COST))
            .create(&staff)
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn create_returns_persisted_row() {
        let pool = create_memory_pool().await.unwrap();
        let repo = IncidentRepo::new(&pool);

        let created = repo.create(&incident("7", None)).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.committee_member_id, None);

        let fetched = repo.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.description, "Broke a beaker");
    }

    #[tokio::test]
    async fn list_by_committee_member_is_exact() {
        let pool = create_memory_pool().await.unwrap();
        let first = committee_member(&pool, "c1").await;
        let second = committee_member(&pool, "c2").await;
        let repo = IncidentRepo::new(&pool);

        let a = repo.create(&incident("1", Some(first))).await.unwrap();
        let b = repo.create(&incident("2", Some(first))).await.unwrap();
        repo.create(&incident("3", Some(second))).await.unwrap();
        repo.create(&incident("4", None)).await.unwrap();

        let mine: Vec<i64> = repo
            .list_by_committee_member(first)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(mine, vec![a.id, b.id]);

        let theirs = repo.list_by_committee_member(second).await.unwrap();
        assert_eq!(theirs.len(), 1);
        assert!(theirs.iter().all(|i| i.committee_member_id == Some(second)));

        assert_eq!(repo.list().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn failed_insert_rolls_back() {
        let pool = create_memory_pool().await.unwrap();
        let repo = IncidentRepo::new(&pool);

        // No staff row 77: the foreign key rejects the insert
        let err = repo.create(&incident("7", Some(77))).await.unwrap_err();
        assert!(err.is_foreign_key_violation());
        assert!(repo.list().await.unwrap().is_empty());

        // The single pooled connection is usable again afterwards
        assert!(repo.create(&incident("7", None)).await.is_ok());
    }

    #[tokio::test]
    async fn list_by_student_matches_string_exactly() {
        let pool = create_memory_pool().await.unwrap();
        let repo = IncidentRepo::new(&pool);

        repo.create(&incident("7", None)).await.unwrap();
        repo.create(&incident("07", None)).await.unwrap();

        let found = repo.list_by_student("7").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].student_id, "7");
    }

    #[tokio::test]
    async fn deleting_committee_member_unassigns_incidents() {
        let pool = create_memory_pool().await.unwrap();
        let member = committee_member(&pool, "c1").await;
        let repo = IncidentRepo::new(&pool);

        let created = repo.create(&incident("7", Some(member))).await.unwrap();
        StaffRepo::new(&pool, PasswordHasher::new(MIN_BCRYPT_COST))
            .delete(member)
            .await
            .unwrap();

        let fetched = repo.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.committee_member_id, None);
    }
}
