//! Backend layer: configuration and the services behind the screens

mod config_service;
mod core_service;

pub use config_service::{
    AppConfig, ConfigService, LocalConfigService, PAGE_SIZE_ENV, PaginationMode, SERVICE_URL_ENV,
};
pub use core_service::CoreService;
