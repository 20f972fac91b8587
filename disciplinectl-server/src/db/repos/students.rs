//! Student repository - mirrors the staff repository without roles

use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::auth::{verify_password, PasswordHasher};
use crate::models::NewStudent;

const COLUMNS: &str = "id, name, username, password_hash";

/// Student record from database
#[derive(Debug, Clone, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub password_hash: String,
}

/// Student repository
pub struct StudentRepo<'a> {
    pool: &'a SqlitePool,
    hasher: PasswordHasher,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a SqlitePool, hasher: PasswordHasher) -> Self {
        Self { pool, hasher }
    }

    pub async fn create(&self, student: &NewStudent) -> Result<Student, DbError> {
        let password_hash = self.hasher.hash(student.password()).await?;

        let row = sqlx::query_as::<_, Student>(&format!(
            "INSERT INTO students (name, username, password_hash) VALUES (?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(student.name())
        .bind(student.username())
        .bind(&password_hash)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    pub async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Student>, DbError> {
        let row = sqlx::query_as::<_, Student>(&format!(
            "SELECT {COLUMNS} FROM students WHERE username = ?"
        ))
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some(student) => {
                let valid = verify_password(password, &student.password_hash).await?;
                Ok(valid.then_some(student))
            }
            None => Ok(None),
        }
    }

    pub async fn get(&self, id: i64) -> Result<Option<Student>, DbError> {
        let row = sqlx::query_as::<_, Student>(&format!(
            "SELECT {COLUMNS} FROM students WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list(&self) -> Result<Vec<Student>, DbError> {
        let rows = sqlx::query_as::<_, Student>(&format!(
            "SELECT {COLUMNS} FROM students ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Overwrite every field of an existing student; `None` if the id is unknown.
    pub async fn update(&self, id: i64, student: &NewStudent) -> Result<Option<Student>, DbError> {
        let password_hash = self.hasher.hash(student.password()).await?;

        let row = sqlx::query_as::<_, Student>(&format!(
            "UPDATE students SET name = ?, username = ?, password_hash = ? \
             WHERE id = ? RETURNING {COLUMNS}"
        ))
        .bind(student.name())
        .bind(student.username())
        .bind(&password_hash)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MIN_BCRYPT_COST;
    use crate::db::create_memory_pool;

    fn repo(pool: &SqlitePool) -> StudentRepo<'_> {
        StudentRepo::new(pool, PasswordHasher::new(MIN_BCRYPT_COST))
    }

    #[tokio::test]
    async fn create_and_login() {
        let pool = create_memory_pool().await.unwrap();
        let repo = repo(&pool);

        let student = repo
            .create(&NewStudent::new("Tom", "tom", "pw").unwrap())
            .await
            .unwrap();

        let found = repo.find_by_credentials("tom", "pw").await.unwrap().unwrap();
        assert_eq!(found.id, student.id);
        assert!(repo.find_by_credentials("tom", "PW").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn usernames_are_unique_per_table_only() {
        let pool = create_memory_pool().await.unwrap();
        let students = repo(&pool);
        let staff = super::super::StaffRepo::new(&pool, PasswordHasher::new(MIN_BCRYPT_COST));

        students
            .create(&NewStudent::new("Tom", "tom", "pw").unwrap())
            .await
            .unwrap();
        let dup = students
            .create(&NewStudent::new("Tommy", "tom", "pw2").unwrap())
            .await
            .unwrap_err();
        assert!(dup.is_unique_violation());

        let staff_tom = crate::models::NewStaffMember::new("Tom", "tom", "pw", "faculty").unwrap();
        assert!(staff.create(&staff_tom).await.is_ok());
    }

    #[tokio::test]
    async fn update_and_delete_missing() {
        let pool = create_memory_pool().await.unwrap();
        let repo = repo(&pool);

        let replacement = NewStudent::new("Nobody", "nobody", "pw").unwrap();
        assert!(repo.update(42, &replacement).await.unwrap().is_none());
        assert!(!repo.delete(42).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_existing() {
        let pool = create_memory_pool().await.unwrap();
        let repo = repo(&pool);

        let tom = repo
            .create(&NewStudent::new("Tom", "tom", "pw").unwrap())
            .await
            .unwrap();
        let updated = repo
            .update(tom.id, &NewStudent::new("Thomas", "thomas", "pw2").unwrap())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Thomas");
        assert_eq!(repo.get(tom.id).await.unwrap().unwrap().username, "thomas");
    }
}
