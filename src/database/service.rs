//! Database service layer
//!
//! This module provides a high-level interface to database operations

use crate::database::{DatabasePool, EventRepository, RegistrationRepository, StudentRepository};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub students: StudentRepository,
    pub events: EventRepository,
    pub registrations: RegistrationRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            students: StudentRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            registrations: RegistrationRepository::new(pool),
        }
    }
}
