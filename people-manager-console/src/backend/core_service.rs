//! Core service wiring
//!
//! Builds the data source and service context the screens run on.

use std::sync::Arc;
use std::time::Duration;

use people_manager_core::{CoreError, PeopleRepository, PeopleService, ServiceContext};
use people_manager_provider::{HttpClientOptions, ODataPeopleRepository};

use super::config_service::AppConfig;
use crate::error::ConsoleResult;

/// Holds the service context for one session
pub struct CoreService {
    ctx: Arc<ServiceContext>,
}

impl CoreService {
    pub fn new(people_repository: Arc<dyn PeopleRepository>) -> Self {
        Self {
            ctx: Arc::new(ServiceContext::new(people_repository)),
        }
    }

    /// OData repository for `config.service_url`
    pub fn from_config(config: &AppConfig) -> ConsoleResult<Self> {
        let options = HttpClientOptions {
            base_url: config.service_url.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            max_retries: config.max_retries,
        };
        let repository = ODataPeopleRepository::new(&options).map_err(CoreError::from)?;
        log::info!("Using people service at {}", config.service_url);
        Ok(Self::new(Arc::new(repository)))
    }

    pub fn people(&self) -> PeopleService {
        PeopleService::new(self.ctx.clone())
    }
}
