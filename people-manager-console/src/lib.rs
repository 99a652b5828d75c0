//! People Manager console
//!
//! ## Layout
//!
//! - **Console**: line and key I/O behind a trait (`console`, `util::terminal`)
//! - **Menu**: numbered options and their dispatch (`menu`, `action`)
//! - **View**: one page per screen (`view/pages/`)
//! - **App**: the navigation loop (`app`)
//! - **Backend**: configuration and service wiring (`backend/`)
//! - **Event**: arrow-key translation for paging (`event/`)

pub mod action;
pub mod app;
pub mod backend;
pub mod cancel;
pub mod console;
pub mod error;
pub mod event;
pub mod menu;
pub mod prompt;
pub mod util;
pub mod view;

pub use action::{Action, ListQuery, ListRequest};
pub use app::App;
pub use cancel::CancellationToken;
pub use console::{Console, Key, MemoryConsole};
pub use error::{ConsoleError, ConsoleResult};
pub use menu::{Dispatch, Menu, MenuOption};
pub use view::{Screens, Step};
