//! Screens
//!
//! Each page prints its content and answers with a [`Step`]: either the
//! next action to run or a menu for the user to choose from. [`Screens`]
//! routes an [`Action`] to the page that handles it.

pub mod pages;

use async_trait::async_trait;
use people_manager_core::PeopleService;

use crate::action::Action;
use crate::backend::PaginationMode;
use crate::cancel::CancellationToken;
use crate::console::Console;
use crate::error::ConsoleResult;
use crate::menu::{Dispatch, Menu, MenuOption};

/// What the navigation loop does after a screen returns
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Run this action without asking
    Go(Action),
    /// Let the user pick from this menu
    Menu(Menu<Action>),
    /// Session over
    Quit,
}

/// Page handlers and what they share
pub struct Screens {
    people: PeopleService,
    page_size: u32,
    pagination_mode: PaginationMode,
    home: MenuOption<Action>,
}

impl Screens {
    /// `home` is appended to every child screen's menu
    pub fn new(
        people: PeopleService,
        page_size: u32,
        pagination_mode: PaginationMode,
        home: MenuOption<Action>,
    ) -> Self {
        Self {
            people,
            page_size,
            pagination_mode,
            home,
        }
    }

    pub fn people(&self) -> &PeopleService {
        &self.people
    }

    pub fn pagination_mode(&self) -> PaginationMode {
        self.pagination_mode
    }

    pub fn home(&self) -> &MenuOption<Action> {
        &self.home
    }

    /// A menu holding only the way back to the main screen
    pub fn home_only(&self) -> Menu<Action> {
        std::iter::once(self.home.clone()).collect()
    }
}

#[async_trait]
impl Dispatch<Action> for Screens {
    type Output = Step;

    async fn dispatch(
        &mut self,
        console: &mut dyn Console,
        action: &Action,
        cancel: &CancellationToken,
    ) -> ConsoleResult<Step> {
        match action {
            Action::MainScreen => pages::home::show(console, self.page_size).map(Step::Menu),
            Action::Exit => {
                log::info!("Exit selected, ending session");
                cancel.cancel();
                Ok(Step::Quit)
            }
            Action::List(request) => pages::people::show(self, console, request).await,
            Action::ShowPerson { username } => pages::person::show(self, console, username).await,
            Action::EditPerson(person) => Ok(Step::Menu(pages::person_update::field_menu(
                person, &self.home,
            ))),
            Action::EditField { person, field } => {
                pages::person_update::edit_field(self, console, person, field).await
            }
        }
    }
}
