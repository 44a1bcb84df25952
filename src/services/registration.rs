//! Registration service implementation
//!
//! This service handles the event registration workflow: validating the
//! registering student and their sub-event choice, translating the store's
//! uniqueness violation into a distinguishable conflict, cancelling, and
//! listing a student's registrations.

use tracing::{debug, info};

use crate::database::{EventRepository, RegistrationRepository, StudentRepository};
use crate::models::event::Event;
use crate::models::registration::{CreateRegistrationRequest, RegisteredEvent, Registration};
use crate::utils::errors::{EventraError, Result};
use crate::utils::logging::{log_registration_action, log_registration_conflict};

/// Resolve the submitted sub-event choice against the event's sub-events.
///
/// Events without sub-events always store NULL, whatever was submitted. Events
/// with sub-events require a choice matching one of them by name.
fn choose_sub_event(event: &Event, choice: Option<String>) -> Result<Option<String>> {
    if !event.has_sub_events() {
        return Ok(None);
    }

    match choice {
        Some(name) if event.sub_events.iter().any(|s| s.name == name) => Ok(Some(name)),
        _ => Err(EventraError::SubEventRequired { event_id: event.id }),
    }
}

/// Registration workflow service
#[derive(Debug, Clone)]
pub struct RegistrationService {
    registrations: RegistrationRepository,
    events: EventRepository,
    students: StudentRepository,
}

impl RegistrationService {
    /// Create a new RegistrationService instance
    pub fn new(
        registrations: RegistrationRepository,
        events: EventRepository,
        students: StudentRepository,
    ) -> Self {
        Self {
            registrations,
            events,
            students,
        }
    }

    /// Register a student for an event, optionally within a sub-event.
    ///
    /// The (student, event) uniqueness rule is enforced by the store; a
    /// violation is translated into `AlreadyRegistered` by inspecting the
    /// structured database error rather than pre-checking, so concurrent
    /// attempts for the same pair race safely.
    pub async fn register(
        &self,
        student_id: i64,
        event_id: i64,
        sub_event: Option<String>,
    ) -> Result<Registration> {
        debug!(student_id = student_id, event_id = event_id, "Attempting registration");

        self.students
            .find_by_id(student_id)
            .await?
            .ok_or(EventraError::NotAuthenticated)?;

        let event = self
            .events
            .find_by_id(event_id)
            .await?
            .ok_or(EventraError::EventNotFound { event_id })?;

        let sub_event = choose_sub_event(&event, sub_event)?;

        let request = CreateRegistrationRequest {
            student_id,
            event_id,
            sub_event,
        };

        match self.registrations.insert(request).await {
            Ok(registration) => {
                log_registration_action(event_id, "register", student_id, registration.sub_event.as_deref());
                Ok(registration)
            }
            Err(EventraError::Database(sqlx::Error::Database(db_err)))
                if db_err.is_unique_violation() =>
            {
                log_registration_conflict(event_id, student_id);
                Err(EventraError::AlreadyRegistered {
                    student_id,
                    event_id,
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Cancel a registration on behalf of the requesting student.
    ///
    /// Only the student who owns the registration may cancel it.
    pub async fn cancel(&self, registration_id: i64, requester_id: i64) -> Result<()> {
        let registration = self
            .registrations
            .find_by_id(registration_id)
            .await?
            .ok_or(EventraError::RegistrationNotFound { registration_id })?;

        if registration.student_id != requester_id {
            return Err(EventraError::PermissionDenied(
                "registration belongs to another student".to_string(),
            ));
        }

        self.registrations.delete(registration_id).await?;
        info!(
            registration_id = registration_id,
            student_id = requester_id,
            event_id = registration.event_id,
            "Registration cancelled"
        );

        Ok(())
    }

    /// A student's registrations joined with event details, most recent first
    pub async fn list_for_student(&self, student_id: i64) -> Result<Vec<RegisteredEvent>> {
        debug!(student_id = student_id, "Listing registrations for student");
        self.registrations.list_for_student(student_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::SubEvent;
    use assert_matches::assert_matches;
    use chrono::Utc;
    use sqlx::types::Json;

    fn event_with_sub_events(sub_events: Vec<SubEvent>) -> Event {
        let now = Utc::now();
        Event {
            id: 7,
            title: "Kalotsava".to_string(),
            description: Some("Annual cultural fest".to_string()),
            event_date: now,
            venue: "Open Grounds".to_string(),
            event_type: "Cultural".to_string(),
            sub_events: Json(sub_events),
            created_at: now,
            updated_at: now,
        }
    }

    fn sub_event(name: &str) -> SubEvent {
        SubEvent {
            name: name.to_string(),
            time: "10:00 AM".to_string(),
            details: "On-stage round".to_string(),
        }
    }

    #[test]
    fn test_event_without_sub_events_stores_null() {
        let event = event_with_sub_events(vec![]);
        assert_eq!(choose_sub_event(&event, None).unwrap(), None);
        // A stray submitted choice is normalized away
        assert_eq!(
            choose_sub_event(&event, Some("Solo Dance".to_string())).unwrap(),
            None
        );
    }

    #[test]
    fn test_missing_choice_is_rejected() {
        let event = event_with_sub_events(vec![sub_event("Solo Dance"), sub_event("Group Dance")]);
        assert_matches!(
            choose_sub_event(&event, None),
            Err(EventraError::SubEventRequired { event_id: 7 })
        );
    }

    #[test]
    fn test_unknown_choice_is_rejected() {
        let event = event_with_sub_events(vec![sub_event("Solo Dance")]);
        assert_matches!(
            choose_sub_event(&event, Some("Beatboxing".to_string())),
            Err(EventraError::SubEventRequired { event_id: 7 })
        );
        // An empty choice string matches no sub-event
        assert_matches!(
            choose_sub_event(&event, Some(String::new())),
            Err(EventraError::SubEventRequired { event_id: 7 })
        );
    }

    #[test]
    fn test_matching_choice_is_kept() {
        let event = event_with_sub_events(vec![sub_event("Solo Dance"), sub_event("Group Dance")]);
        assert_eq!(
            choose_sub_event(&event, Some("Group Dance".to_string())).unwrap(),
            Some("Group Dance".to_string())
        );
    }
}
