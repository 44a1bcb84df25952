//! Registration model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The join record expressing that a student has claimed a slot for an event,
/// optionally within a named sub-event. At most one row may exist per
/// (student_id, event_id) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registration {
    pub id: i64,
    pub student_id: i64,
    pub event_id: i64,
    pub sub_event: Option<String>,
    pub registered_at: DateTime<Utc>,
}

/// A registration joined with the event fields the dashboard displays
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RegisteredEvent {
    pub id: i64,
    pub student_id: i64,
    pub event_id: i64,
    pub sub_event: Option<String>,
    pub registered_at: DateTime<Utc>,
    pub title: String,
    pub event_date: DateTime<Utc>,
    pub venue: String,
    pub event_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRegistrationRequest {
    pub student_id: i64,
    pub event_id: i64,
    pub sub_event: Option<String>,
}
