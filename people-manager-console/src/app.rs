//! Navigation loop
//!
//! Starts at the main screen and alternates between running actions and
//! showing menus until the session is cancelled:
//!
//! ```text
//! loop {
//!     if cancelled { break }
//!     Step::Go(action) => screens.dispatch(action)   // prints, may fetch
//!     Step::Menu(menu) => menu.display(screens)      // reads a key, dispatches
//!     Step::Quit       => break
//! }
//! ```
//!
//! A closed input stream ends the session the same way "Exit" does.

use people_manager_core::PeopleService;
use tracing::{debug, error, info};

use crate::action::Action;
use crate::backend::AppConfig;
use crate::cancel::CancellationToken;
use crate::console::Console;
use crate::error::{ConsoleError, ConsoleResult};
use crate::menu::Dispatch;
use crate::view::pages::home::main_screen_option;
use crate::view::{Screens, Step};

pub struct App<C: Console> {
    console: C,
    screens: Screens,
    cancel: CancellationToken,
}

impl<C: Console> App<C> {
    pub fn new(console: C, people: PeopleService, config: &AppConfig) -> Self {
        let screens = Screens::new(
            people,
            config.page_size,
            config.pagination_mode,
            main_screen_option(),
        );
        Self {
            console,
            screens,
            cancel: CancellationToken::new(),
        }
    }

    /// Shares the session's cancellation state
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Run until "Exit" is chosen, input closes or a screen fails
    #[tracing::instrument(name = "session", skip_all)]
    pub async fn run(&mut self) -> ConsoleResult<()> {
        info!("Session started");
        match self.navigate().await {
            Ok(()) => {}
            Err(ConsoleError::InputClosed) => {
                info!("Input closed, ending session");
                self.cancel.cancel();
            }
            Err(e) => {
                error!("Session failed: {e}");
                return Err(e);
            }
        }
        info!("Session ended");
        Ok(())
    }

    async fn navigate(&mut self) -> ConsoleResult<()> {
        let Self {
            console,
            screens,
            cancel,
        } = self;

        let mut step = Step::Go(Action::MainScreen);
        while !cancel.is_cancelled() {
            step = match step {
                Step::Go(action) => {
                    debug!("Running {action:?}");
                    screens.dispatch(&mut *console, &action, cancel).await?
                }
                Step::Menu(menu) => {
                    menu.display(&mut *console, &mut *screens, cancel).await?
                }
                Step::Quit => break,
            };
        }
        Ok(())
    }
}
