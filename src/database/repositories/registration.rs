//! Registration repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::models::registration::{CreateRegistrationRequest, RegisteredEvent, Registration};
use crate::utils::errors::EventraError;

#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a registration row.
    ///
    /// The store enforces the one-registration-per-(student, event) invariant;
    /// a violation surfaces as a database unique-violation error which the
    /// service layer translates.
    pub async fn insert(
        &self,
        request: CreateRegistrationRequest,
    ) -> Result<Registration, EventraError> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (student_id, event_id, sub_event, registered_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, student_id, event_id, sub_event, registered_at
            "#,
        )
        .bind(request.student_id)
        .bind(request.event_id)
        .bind(request.sub_event)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(registration)
    }

    /// Find registration by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Registration>, EventraError> {
        let registration = sqlx::query_as::<_, Registration>(
            "SELECT id, student_id, event_id, sub_event, registered_at FROM registrations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(registration)
    }

    /// Delete a registration row
    pub async fn delete(&self, id: i64) -> Result<u64, EventraError> {
        let result = sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// List a student's registrations joined with the event fields the
    /// dashboard displays, most recently registered first
    pub async fn list_for_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<RegisteredEvent>, EventraError> {
        let registrations = sqlx::query_as::<_, RegisteredEvent>(
            r#"
            SELECT r.id, r.student_id, r.event_id, r.sub_event, r.registered_at,
                   e.title, e.event_date, e.venue, e.event_type
            FROM registrations r
            INNER JOIN events e ON e.id = r.event_id
            WHERE r.student_id = $1
            ORDER BY r.registered_at DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(registrations)
    }

    /// Check if a student holds a registration for an event
    pub async fn is_registered(&self, student_id: i64, event_id: i64) -> Result<bool, EventraError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM registrations WHERE student_id = $1 AND event_id = $2",
        )
        .bind(student_id)
        .bind(event_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0 > 0)
    }
}
