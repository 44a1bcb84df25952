//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod event;
pub mod registration;
pub mod student;

// Re-export commonly used models
pub use event::{CreateEventRequest, Event, SubEvent};
pub use registration::{CreateRegistrationRequest, RegisteredEvent, Registration};
pub use student::{CreateStudentRequest, Student};
