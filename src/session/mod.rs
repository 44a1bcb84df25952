//! Session management module
//!
//! The client-persisted pointer to the currently active student, substituting
//! for authenticated login. One opaque token corresponds to one browser tab.

pub mod store;

pub use store::{SessionData, SessionStore};
