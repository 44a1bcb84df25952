//! Student repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::models::student::{CreateStudentRequest, Student};
use crate::utils::errors::EventraError;

#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new student
    pub async fn create(&self, request: CreateStudentRequest) -> Result<Student, EventraError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, email, contact_no, usn, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, contact_no, usn, created_at
            "#,
        )
        .bind(request.name)
        .bind(request.email)
        .bind(request.contact_no)
        .bind(request.usn)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(student)
    }

    /// Find student by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Student>, EventraError> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, name, email, contact_no, usn, created_at FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    /// Find student by exact email match
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Student>, EventraError> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, name, email, contact_no, usn, created_at FROM students WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    /// Count total students
    pub async fn count(&self) -> Result<i64, EventraError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
