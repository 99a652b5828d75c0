//! Configuration service

use std::path::{Path, PathBuf};

use people_manager_provider::{
    DEFAULT_MAX_RETRIES, DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVICE_URL,
};
use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ConsoleResult};

/// Overrides `service_url`
pub const SERVICE_URL_ENV: &str = "PEOPLE_MANAGER_SERVICE_URL";
/// Overrides `page_size`
pub const PAGE_SIZE_ENV: &str = "PEOPLE_MANAGER_PAGE_SIZE";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root of the OData service
    pub service_url: String,
    /// People per list page
    pub page_size: u32,
    pub pagination_mode: PaginationMode,
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
    pub max_retries: u32,
    pub request_timeout_secs: u64,
}

/// How list pages are traversed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationMode {
    /// "Next Page" / "Previous Page" menu entries
    #[default]
    Menu,
    /// Left/right arrow keys before the numbered menu
    ArrowKeys,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            pagination_mode: PaginationMode::default(),
            log_level: "info".to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Apply environment overrides; `lookup` is `std::env::var` in production
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConsoleResult<()> {
        if let Some(url) = lookup(SERVICE_URL_ENV) {
            self.service_url = url;
        }
        if let Some(size) = lookup(PAGE_SIZE_ENV) {
            self.page_size = size.trim().parse().map_err(|_| {
                ConsoleError::Config(format!(
                    "{PAGE_SIZE_ENV} must be a positive number, got '{size}'"
                ))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> ConsoleResult<()> {
        if self.service_url.trim().is_empty() {
            return Err(ConsoleError::Config(
                "service_url must not be empty".to_string(),
            ));
        }
        if self.page_size == 0 {
            return Err(ConsoleError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

pub trait ConfigService: Send + Sync {
    fn load(&self) -> ConsoleResult<AppConfig>;

    fn save(&self, config: &AppConfig) -> ConsoleResult<()>;
}

/// TOML file in the user's config directory
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// `<config dir>/people-manager/config.toml`
    pub fn new() -> ConsoleResult<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| ConsoleError::Config("no configuration directory".to_string()))?;
        Ok(Self::with_path(
            dir.join("people-manager").join(CONFIG_FILE_NAME),
        ))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File contents only; defaults when the file does not exist
    pub fn load_file(&self) -> ConsoleResult<AppConfig> {
        if !self.path.exists() {
            log::debug!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }
        let text = std::fs::read_to_string(&self.path)?;
        toml::from_str(&text)
            .map_err(|e| ConsoleError::Config(format!("{}: {e}", self.path.display())))
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> ConsoleResult<AppConfig> {
        let mut config = self.load_file()?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> ConsoleResult<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(config)
            .map_err(|e| ConsoleError::Config(e.to_string()))?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}
