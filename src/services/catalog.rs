//! Event catalog service
//!
//! Fetches the event catalog ordered by date and buckets it into upcoming and
//! past relative to a caller-supplied reference instant.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::database::EventRepository;
use crate::models::Event;
use crate::utils::errors::Result;

/// The catalog split the home page renders: upcoming first, recent below.
#[derive(Debug, Clone, Serialize)]
pub struct EventBoard {
    pub upcoming: Vec<Event>,
    pub past: Vec<Event>,
}

/// Partition events against a reference instant.
///
/// An event dated exactly `now` counts as upcoming; the comparison uses the
/// full timestamp, so an event earlier in the current day is already past.
/// Relative order within each bucket is preserved.
pub fn partition_by_date(events: Vec<Event>, now: DateTime<Utc>) -> EventBoard {
    let (upcoming, past) = events
        .into_iter()
        .partition(|event| event.event_date >= now);

    EventBoard { upcoming, past }
}

/// Catalog reader over the events table
#[derive(Debug, Clone)]
pub struct CatalogService {
    events: EventRepository,
}

impl CatalogService {
    pub fn new(events: EventRepository) -> Self {
        Self { events }
    }

    /// All events, ascending by date
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        self.events.list_by_date().await
    }

    /// The catalog partitioned against `now`, captured once by the caller
    pub async fn board(&self, now: DateTime<Utc>) -> Result<EventBoard> {
        let events = self.list_events().await?;
        debug!(total = events.len(), "Partitioning event catalog");
        Ok(partition_by_date(events, now))
    }
}
