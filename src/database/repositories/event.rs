//! Event repository implementation

use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::event::{CreateEventRequest, Event};
use crate::utils::errors::EventraError;

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event. Events are maintained out-of-band by organizers,
    /// so this is exercised by seeding and tests rather than the portal flow.
    pub async fn create(&self, request: CreateEventRequest) -> Result<Event, EventraError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, description, event_date, venue, event_type, sub_events, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, title, description, event_date, venue, event_type, sub_events, created_at, updated_at
            "#,
        )
        .bind(request.title)
        .bind(request.description)
        .bind(request.event_date)
        .bind(request.venue)
        .bind(request.event_type)
        .bind(Json(request.sub_events))
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, EventraError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, title, description, event_date, venue, event_type, sub_events, created_at, updated_at FROM events WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// List all events ordered ascending by date
    pub async fn list_by_date(&self) -> Result<Vec<Event>, EventraError> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, title, description, event_date, venue, event_type, sub_events, created_at, updated_at FROM events ORDER BY event_date ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Count total events
    pub async fn count(&self) -> Result<i64, EventraError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
