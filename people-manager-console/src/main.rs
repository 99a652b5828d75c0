//! People Manager entry point
//!
//! ```text
//! fn main() {
//!     LocalConfigService::load()   // config.toml + environment overrides
//!     init_logging()               // daily log file, keep the guard
//!     CoreService::from_config()   // OData repository + people service
//!     App::run()                   // navigation loop on the real terminal
//! }
//! ```

use anyhow::Result;
use tracing::{info, warn};

use people_manager_console::App;
use people_manager_console::backend::{AppConfig, ConfigService, CoreService, LocalConfigService};
use people_manager_console::util::{StdConsole, default_log_dir, init_logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Configuration
    let config_service = LocalConfigService::new()?;
    let config = config_service.load()?;

    // 2. Logging (flushed when the guard drops)
    let _log_guard = init_logging(&default_log_dir(), &config.log_level)?;
    info!(
        "Loaded configuration from {}",
        config_service.path().display()
    );

    // First run: leave a file behind to edit
    if !config_service.path().exists()
        && let Err(e) = config_service.save(&AppConfig::default())
    {
        warn!("Could not write default configuration: {e}");
    }

    // 3. Services
    let core = CoreService::from_config(&config)?;

    // 4. Session
    let mut app = App::new(StdConsole::new(), core.people(), &config);
    app.run().await?;

    Ok(())
}
