//! Main screen

use crate::action::{Action, ListRequest};
use crate::console::Console;
use crate::error::ConsoleResult;
use crate::menu::{Menu, MenuOption};

/// Entry that leads back here from any other screen
pub fn main_screen_option() -> MenuOption<Action> {
    MenuOption::new("Main Screen 🖥️", Action::MainScreen)
}

/// The top-level menu
pub fn main_menu(page_size: u32) -> Menu<Action> {
    let mut menu = Menu::new();
    menu.insert(
        1,
        MenuOption::new("List People 👫", Action::List(ListRequest::all(page_size))),
    );
    menu.insert(
        2,
        MenuOption::new(
            "Search 🔍",
            Action::List(ListRequest::search(None, page_size)),
        ),
    );
    menu.insert(3, MenuOption::new("Exit 🚫", Action::Exit));
    menu
}

pub fn show(console: &mut dyn Console, page_size: u32) -> ConsoleResult<Menu<Action>> {
    console.clear()?;
    console.write_line("***  Welcome to the People Manager!  ***")?;
    console.write_line(
        "***  This is a simple console application to manage people.  ***",
    )?;
    console.blank_line()?;
    console.write_line("Please select an option:")?;
    Ok(main_menu(page_size))
}
