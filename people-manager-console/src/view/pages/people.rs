//! People listing
//!
//! Lists one page of people (all or a search result) as a numbered menu.
//! Paging works either through "Next Page" / "Previous Page" entries or
//! through the arrow keys, depending on [`PaginationMode`].

use people_manager_core::{PaginatedResponse, Person};

use crate::action::{Action, ListQuery, ListRequest};
use crate::backend::PaginationMode;
use crate::console::{Console, Key};
use crate::error::ConsoleResult;
use crate::menu::{Menu, MenuOption};
use crate::prompt;
use crate::view::{Screens, Step};

const SEARCH_PROMPT: &str = "Enter search query";
const ARROW_HINT: &str = "You can use arrows(<- | ->) to navigate, or press any key to continue.";

/// Result of rendering one page
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// Show this menu
    Menu(Menu<Action>),
    /// An arrow key asked for another page
    Navigate(ListRequest),
}

/// Fetch and render the page `request` describes.
///
/// An unbound search asks for the term first.
pub async fn show(
    screens: &Screens,
    console: &mut dyn Console,
    request: &ListRequest,
) -> ConsoleResult<Step> {
    console.clear()?;

    let term = match &request.query {
        ListQuery::All => None,
        ListQuery::Search(Some(term)) => Some(term.clone()),
        ListQuery::Search(None) => Some(prompt::read_text(console, SEARCH_PROMPT)?),
    };

    console.write_line("Loading...")?;
    let (request, page) = match term {
        None => {
            let page = screens
                .people()
                .get_people(request.page, request.page_size)
                .await?;
            (request.clone(), page)
        }
        Some(term) => {
            let page = screens
                .people()
                .search_people(&term, request.page, request.page_size)
                .await?;
            (request.with_term(term), page)
        }
    };

    let outcome = render_page(
        console,
        &page,
        &request,
        screens.home(),
        screens.pagination_mode(),
    )?;

    Ok(match outcome {
        PageOutcome::Menu(menu) => Step::Menu(menu),
        PageOutcome::Navigate(next) => Step::Go(Action::List(next)),
    })
}

/// Print `page` and build its menu.
///
/// People take keys 1..=n in page order, followed by the paging entries,
/// the way back into the listing and `home`. Rendering the same page twice
/// yields the same menu.
pub fn render_page(
    console: &mut dyn Console,
    page: &PaginatedResponse<Person>,
    request: &ListRequest,
    home: &MenuOption<Action>,
    mode: PaginationMode,
) -> ConsoleResult<PageOutcome> {
    console.clear()?;
    console.write_line("People: ")?;

    let mut menu = Menu::new();
    for (index, person) in page.items.iter().enumerate() {
        let name = person.full_name();
        console.write_line(&format!("{}.{} ({})", index + 1, name, person.user_name))?;
        menu.push(MenuOption::new(
            name,
            Action::ShowPerson {
                username: person.user_name.clone(),
            },
        ));
    }
    console.blank_line()?;

    if page.is_empty() {
        console.write_line("No people found.")?;
    } else {
        console.write_line(&format!(
            "Page #{} of {}",
            page.page,
            page.total_pages().max(1)
        ))?;

        match mode {
            PaginationMode::Menu => {
                if page.page < page.total_pages() {
                    menu.push(MenuOption::new(
                        "Next Page ➡️",
                        Action::List(request.with_page(page.page + 1)),
                    ));
                }
                if page.page > 1 {
                    menu.push(MenuOption::new(
                        "Previous Page ⬅️",
                        Action::List(request.with_page(page.page - 1)),
                    ));
                }
            }
            PaginationMode::ArrowKeys => {
                if let Some(next) = read_arrow(console, page, request)? {
                    return Ok(PageOutcome::Navigate(next));
                }
                console.clear()?;
                console.write_line("Enter a number of a person to get detailed information.")?;
            }
        }
    }

    match mode {
        PaginationMode::Menu if request.is_search() => {
            menu.push(MenuOption::new(
                "New search 🔍",
                Action::List(ListRequest::search(None, request.page_size)),
            ));
        }
        PaginationMode::Menu => {}
        PaginationMode::ArrowKeys => {
            menu.push(MenuOption::new(
                "Back to list ⏪",
                Action::List(request.clone()),
            ));
        }
    }
    menu.push(home.clone());

    Ok(PageOutcome::Menu(menu))
}

/// Wait for an arrow that leads to another page, or any other key.
fn read_arrow(
    console: &mut dyn Console,
    page: &PaginatedResponse<Person>,
    request: &ListRequest,
) -> ConsoleResult<Option<ListRequest>> {
    loop {
        console.write_line(ARROW_HINT)?;
        match console.read_key()? {
            Key::Left if page.page > 1 => return Ok(Some(request.with_page(page.page - 1))),
            Key::Left => {
                console.blank_line()?;
                console.write_line("You are already on the first page.")?;
            }
            Key::Right if page.page < page.total_pages() => {
                return Ok(Some(request.with_page(page.page + 1)));
            }
            Key::Right => {
                console.blank_line()?;
                console.write_line("You are already on the last page.")?;
            }
            Key::Other => return Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;
    use crate::view::pages::home::main_screen_option;

    fn people(names: &[&str]) -> Vec<Person> {
        names.iter().map(|name| Person::new(*name)).collect()
    }

    fn entry_names(outcome: &PageOutcome) -> Vec<String> {
        match outcome {
            PageOutcome::Menu(menu) => menu.iter().map(|(_, o)| o.name.clone()).collect(),
            PageOutcome::Navigate(_) => Vec::new(),
        }
    }

    fn render(
        page: &PaginatedResponse<Person>,
        request: &ListRequest,
        mode: PaginationMode,
        console: &mut MemoryConsole,
    ) -> PageOutcome {
        render_page(console, page, request, &main_screen_option(), mode).unwrap()
    }

    #[test]
    fn first_page_offers_next_only() {
        let page = PaginatedResponse::new(people(&["a", "b"]), 1, 2, 4);
        let mut console = MemoryConsole::new();

        let outcome = render(
            &page,
            &ListRequest::all(2),
            PaginationMode::Menu,
            &mut console,
        );

        assert_eq!(
            entry_names(&outcome),
            vec!["a", "b", "Next Page ➡️", "Main Screen 🖥️"]
        );
        assert!(console.output().contains("1.a (a)\n2.b (b)\n"));
        assert!(console.output().contains("Page #1 of 2"));
    }

    #[test]
    fn last_page_offers_previous_only() {
        let page = PaginatedResponse::new(people(&["c", "d"]), 2, 2, 4);
        let request = ListRequest::all(2).with_page(2);
        let mut console = MemoryConsole::new();

        let outcome = render(&page, &request, PaginationMode::Menu, &mut console);

        let PageOutcome::Menu(menu) = outcome else {
            panic!("expected a menu");
        };
        assert_eq!(
            menu.get(3).map(|o| o.name.as_str()),
            Some("Previous Page ⬅️")
        );
        assert_eq!(
            menu.get(3).map(|o| &o.action),
            Some(&Action::List(ListRequest::all(2)))
        );
        assert_eq!(menu.len(), 4);
    }

    #[test]
    fn middle_page_offers_next_before_previous() {
        let page = PaginatedResponse::new(people(&["c"]), 2, 1, 3);
        let request = ListRequest::all(1).with_page(2);
        let mut console = MemoryConsole::new();

        let outcome = render(&page, &request, PaginationMode::Menu, &mut console);

        assert_eq!(
            entry_names(&outcome),
            vec!["c", "Next Page ➡️", "Previous Page ⬅️", "Main Screen 🖥️"]
        );
    }

    #[test]
    fn empty_page_has_no_paging() {
        let page = PaginatedResponse::new(Vec::new(), 1, 10, 0);
        let request = ListRequest::search(Some("zzz".to_string()), 10);
        let mut console = MemoryConsole::new();

        let outcome = render(&page, &request, PaginationMode::Menu, &mut console);

        assert!(console.output().contains("No people found."));
        assert!(!console.output().contains("Page #"));
        assert_eq!(
            entry_names(&outcome),
            vec!["New search 🔍", "Main Screen 🖥️"]
        );
    }

    #[test]
    fn rendering_is_repeatable() {
        let page = PaginatedResponse::new(people(&["a", "b", "c"]), 1, 3, 7);
        let request = ListRequest::all(3);
        let mut first = MemoryConsole::new();
        let mut second = MemoryConsole::new();

        let a = render(&page, &request, PaginationMode::Menu, &mut first);
        let b = render(&page, &request, PaginationMode::Menu, &mut second);

        assert_eq!(a, b);
        assert_eq!(first.output(), second.output());
    }

    #[test]
    fn next_page_request_is_new_value() {
        let page = PaginatedResponse::new(people(&["a"]), 1, 1, 2);
        let request = ListRequest::search(Some("a".to_string()), 1);
        let mut console = MemoryConsole::new();

        let PageOutcome::Menu(menu) = render(&page, &request, PaginationMode::Menu, &mut console)
        else {
            panic!("expected a menu");
        };

        assert_eq!(
            menu.get(2).map(|o| &o.action),
            Some(&Action::List(request.with_page(2)))
        );
        assert_eq!(request.page, 1);
    }

    #[test]
    fn arrow_right_navigates() {
        let page = PaginatedResponse::new(people(&["a"]), 1, 1, 2);
        let request = ListRequest::all(1);
        let mut console = MemoryConsole::new().with_keys([Key::Right]);

        let outcome = render(&page, &request, PaginationMode::ArrowKeys, &mut console);

        assert_eq!(outcome, PageOutcome::Navigate(request.with_page(2)));
    }

    #[test]
    fn arrows_at_boundaries_warn_then_continue() {
        let page = PaginatedResponse::new(people(&["a"]), 1, 10, 1);
        let request = ListRequest::all(10);
        let mut console =
            MemoryConsole::new().with_keys([Key::Left, Key::Right, Key::Other]);

        let outcome = render(&page, &request, PaginationMode::ArrowKeys, &mut console);

        let output = console.output();
        assert!(output.contains("You are already on the first page."));
        assert!(output.contains("You are already on the last page."));
        assert_eq!(output.matches(ARROW_HINT).count(), 3);
        assert!(
            output.ends_with("Enter a number of a person to get detailed information.\n")
        );
        assert_eq!(
            entry_names(&outcome),
            vec!["a", "Back to list ⏪", "Main Screen 🖥️"]
        );
    }
}
