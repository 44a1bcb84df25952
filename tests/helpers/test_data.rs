//! Test data builders

use chrono::{DateTime, Duration, Utc};

use eventra::models::event::{CreateEventRequest, SubEvent};
use eventra::models::student::CreateStudentRequest;

/// A complete signup request
pub fn signup_request(name: &str, email: &str) -> CreateStudentRequest {
    CreateStudentRequest {
        name: name.to_string(),
        email: email.to_string(),
        usn: "1AB21CS001".to_string(),
        contact_no: "9876543210".to_string(),
    }
}

/// An event without sub-events
pub fn simple_event(title: &str, event_date: DateTime<Utc>) -> CreateEventRequest {
    CreateEventRequest {
        title: title.to_string(),
        description: Some("An evening of performances".to_string()),
        event_date,
        venue: "Main Auditorium".to_string(),
        event_type: "Cultural".to_string(),
        sub_events: vec![],
    }
}

/// An event carrying the given sub-events
pub fn event_with_sub_events(
    title: &str,
    event_date: DateTime<Utc>,
    sub_events: Vec<SubEvent>,
) -> CreateEventRequest {
    CreateEventRequest {
        sub_events,
        ..simple_event(title, event_date)
    }
}

/// A named sub-event entry
pub fn sub_event(name: &str) -> SubEvent {
    SubEvent {
        name: name.to_string(),
        time: "10:00 AM".to_string(),
        details: "On-stage round, 3 minutes per entry".to_string(),
    }
}

/// A date comfortably in the future
pub fn next_week() -> DateTime<Utc> {
    Utc::now() + Duration::days(7)
}
