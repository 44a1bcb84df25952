//! Integration tests for the registration workflow
//!
//! These tests exercise the real Postgres-backed services and skip with a
//! note when `TEST_DATABASE_URL` is unset.

mod helpers;

use assert_matches::assert_matches;
use serial_test::serial;

use eventra::services::{CatalogService, RegistrationService};
use eventra::utils::errors::EventraError;

use helpers::database_helper::TestDatabase;
use helpers::test_data;

fn registration_service(database: &eventra::DatabaseService) -> RegistrationService {
    RegistrationService::new(
        database.registrations.clone(),
        database.events.clone(),
        database.students.clone(),
    )
}

#[tokio::test]
#[serial]
async fn test_duplicate_registration_yields_conflict() {
    let Some(db) = TestDatabase::connect().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };
    db.reset().await;
    let database = db.database();
    let service = registration_service(&database);

    let student = database
        .students
        .create(test_data::signup_request("Ann", "ann@x.edu"))
        .await
        .unwrap();
    let event = database
        .events
        .create(test_data::event_with_sub_events(
            "Kalotsava",
            test_data::next_week(),
            vec![test_data::sub_event("Solo Dance"), test_data::sub_event("Group Dance")],
        ))
        .await
        .unwrap();

    let first = service
        .register(student.id, event.id, Some("Solo Dance".to_string()))
        .await
        .unwrap();
    assert_eq!(first.student_id, student.id);
    assert_eq!(first.sub_event.as_deref(), Some("Solo Dance"));

    // A different sub-event choice does not sidestep the uniqueness rule
    let second = service
        .register(student.id, event.id, Some("Group Dance".to_string()))
        .await;
    assert_matches!(second, Err(EventraError::AlreadyRegistered { .. }));

    let registrations = service.list_for_student(student.id).await.unwrap();
    assert_eq!(registrations.len(), 1);
}

#[tokio::test]
#[serial]
async fn test_sub_event_choice_is_required_and_validated() {
    let Some(db) = TestDatabase::connect().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };
    db.reset().await;
    let database = db.database();
    let service = registration_service(&database);

    let student = database
        .students
        .create(test_data::signup_request("Ben", "ben@x.edu"))
        .await
        .unwrap();
    let event = database
        .events
        .create(test_data::event_with_sub_events(
            "Hackathon",
            test_data::next_week(),
            vec![test_data::sub_event("Web Track")],
        ))
        .await
        .unwrap();

    assert_matches!(
        service.register(student.id, event.id, None).await,
        Err(EventraError::SubEventRequired { .. })
    );
    assert_matches!(
        service
            .register(student.id, event.id, Some("Quantum Track".to_string()))
            .await,
        Err(EventraError::SubEventRequired { .. })
    );

    // Nothing was inserted by the rejected attempts
    let registrations = service.list_for_student(student.id).await.unwrap();
    assert!(registrations.is_empty());
}

#[tokio::test]
#[serial]
async fn test_register_requires_known_student_and_event() {
    let Some(db) = TestDatabase::connect().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };
    db.reset().await;
    let database = db.database();
    let service = registration_service(&database);

    let event = database
        .events
        .create(test_data::simple_event("Tech Talk", test_data::next_week()))
        .await
        .unwrap();

    assert_matches!(
        service.register(9999, event.id, None).await,
        Err(EventraError::NotAuthenticated)
    );

    let student = database
        .students
        .create(test_data::signup_request("Cara", "cara@x.edu"))
        .await
        .unwrap();
    assert_matches!(
        service.register(student.id, 9999, None).await,
        Err(EventraError::EventNotFound { event_id: 9999 })
    );
}

#[tokio::test]
#[serial]
async fn test_listing_is_most_recent_first_with_event_fields() {
    let Some(db) = TestDatabase::connect().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };
    db.reset().await;
    let database = db.database();
    let service = registration_service(&database);

    let student = database
        .students
        .create(test_data::signup_request("Dev", "dev@x.edu"))
        .await
        .unwrap();
    let talk = database
        .events
        .create(test_data::simple_event("Tech Talk", test_data::next_week()))
        .await
        .unwrap();
    let fest = database
        .events
        .create(test_data::simple_event("Spring Fest", test_data::next_week()))
        .await
        .unwrap();

    service.register(student.id, talk.id, None).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    service.register(student.id, fest.id, None).await.unwrap();

    let registrations = service.list_for_student(student.id).await.unwrap();
    assert_eq!(registrations.len(), 2);
    assert_eq!(registrations[0].title, "Spring Fest");
    assert_eq!(registrations[1].title, "Tech Talk");
    assert_eq!(registrations[1].venue, "Main Auditorium");
    assert_eq!(registrations[1].event_type, "Cultural");
}

#[tokio::test]
#[serial]
async fn test_cancel_enforces_ownership() {
    let Some(db) = TestDatabase::connect().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };
    db.reset().await;
    let database = db.database();
    let service = registration_service(&database);

    let ann = database
        .students
        .create(test_data::signup_request("Ann", "ann@x.edu"))
        .await
        .unwrap();
    let ben = database
        .students
        .create(test_data::signup_request("Ben", "ben@x.edu"))
        .await
        .unwrap();
    let event = database
        .events
        .create(test_data::simple_event("Tech Talk", test_data::next_week()))
        .await
        .unwrap();

    let registration = service.register(ann.id, event.id, None).await.unwrap();
    assert!(database
        .registrations
        .is_registered(ann.id, event.id)
        .await
        .unwrap());

    assert_matches!(
        service.cancel(registration.id, ben.id).await,
        Err(EventraError::PermissionDenied(_))
    );
    assert_matches!(
        service.cancel(9999, ann.id).await,
        Err(EventraError::RegistrationNotFound { .. })
    );

    service.cancel(registration.id, ann.id).await.unwrap();
    assert!(!database
        .registrations
        .is_registered(ann.id, event.id)
        .await
        .unwrap());
    let registrations = service.list_for_student(ann.id).await.unwrap();
    assert!(registrations.is_empty());
}

#[tokio::test]
#[serial]
async fn test_catalog_lists_events_ascending_by_date() {
    let Some(db) = TestDatabase::connect().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };
    db.reset().await;
    let database = db.database();
    let catalog = CatalogService::new(database.events.clone());

    let base = test_data::next_week();
    for (title, offset_days) in [("Third", 3i64), ("First", 1), ("Second", 2)] {
        database
            .events
            .create(test_data::simple_event(
                title,
                base + chrono::Duration::days(offset_days),
            ))
            .await
            .unwrap();
    }

    assert_eq!(database.events.count().await.unwrap(), 3);

    let events = catalog.list_events().await.unwrap();
    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);

    // All three are in the future, so the board puts them all upcoming
    let board = catalog.board(chrono::Utc::now()).await.unwrap();
    assert_eq!(board.upcoming.len(), 3);
    assert!(board.past.is_empty());
}
