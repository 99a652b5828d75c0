//! Terminal and process plumbing

mod logging;
mod terminal;

pub use logging::{default_log_dir, init_logging};
pub use terminal::StdConsole;
