//! Shared helpers for the integration suite

pub mod database_helper;
pub mod test_data;
