//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A named session within a parent event. Students registering for an event
/// that defines sub-events must pick exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubEvent {
    pub name: String,
    pub time: String,
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub venue: String,
    pub event_type: String,
    pub sub_events: Json<Vec<SubEvent>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Whether registering for this event requires a sub-event choice
    pub fn has_sub_events(&self) -> bool {
        !self.sub_events.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub venue: String,
    pub event_type: String,
    pub sub_events: Vec<SubEvent>,
}
