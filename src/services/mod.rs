//! Services module
//!
//! This module contains business logic services

pub mod account;
pub mod catalog;
pub mod registration;

// Re-export commonly used services
pub use account::AccountService;
pub use catalog::{partition_by_date, CatalogService, EventBoard};
pub use registration::RegistrationService;

use crate::database::DatabaseService;
use crate::session::SessionStore;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub account_service: AccountService,
    pub catalog_service: CatalogService,
    pub registration_service: RegistrationService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(database: DatabaseService, sessions: SessionStore) -> Self {
        let account_service = AccountService::new(database.students.clone(), sessions);
        let catalog_service = CatalogService::new(database.events.clone());
        let registration_service = RegistrationService::new(
            database.registrations,
            database.events,
            database.students,
        );

        Self {
            account_service,
            catalog_service,
            registration_service,
        }
    }
}
