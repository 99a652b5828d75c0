//! Business logic service layer

mod people_service;

pub use people_service::{MAX_PAGE_SIZE, PeopleService};

use std::sync::Arc;

use people_manager_provider::{PeopleRepository, ProviderError};

use crate::error::CoreError;

/// Service context: holds the injected dependencies
///
/// The front end builds this once per session with the data source it wants.
pub struct ServiceContext {
    /// People data source
    pub people_repository: Arc<dyn PeopleRepository>,
}

impl ServiceContext {
    #[must_use]
    pub fn new(people_repository: Arc<dyn PeopleRepository>) -> Self {
        Self { people_repository }
    }

    /// Log a data source failure at the level its kind calls for and lift it into [`CoreError`]
    pub fn handle_provider_error(&self, operation: &str, error: ProviderError) -> CoreError {
        let source = self.people_repository.id();
        if error.is_expected() {
            log::warn!("[{source}] {operation} failed: {error}");
        } else {
            log::error!("[{source}] {operation} failed: {error}");
        }
        CoreError::Provider(error)
    }
}
