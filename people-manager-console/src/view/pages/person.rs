//! Person details

use people_manager_core::{CoreError, Person};

use crate::action::Action;
use crate::console::Console;
use crate::error::ConsoleResult;
use crate::menu::{Menu, MenuOption};
use crate::view::{Screens, Step};

const NOT_AVAILABLE: &str = "N/A";

/// Detail lines for `person`, in display order
pub fn person_lines(person: &Person) -> Vec<String> {
    let emails = person.emails.iter().flatten().flatten().cloned();
    let addresses = person
        .address_info
        .iter()
        .flatten()
        .flatten()
        .filter_map(|location| location.address.clone());
    let features = person.features.iter().flatten().map(ToString::to_string);
    let friends = person
        .friends
        .iter()
        .flatten()
        .flatten()
        .map(Person::full_name);
    let home_address = person
        .home_address
        .as_ref()
        .and_then(|l| l.address.as_deref());
    let trips = person
        .trips
        .iter()
        .flatten()
        .flatten()
        .filter_map(|trip| trip.name.clone());

    vec![
        format!(
            "Detailed information about {} ({}):",
            person.full_name(),
            person.user_name
        ),
        format!("Gender: {}", or_na(person.gender)),
        format!("Age: {}", or_na(person.age)),
        format!("Home Address: {}", or_na(home_address)),
        format!(
            "Best Friend: {}",
            or_na(person.best_friend.as_ref().map(|f| f.full_name()))
        ),
        format!("Favorite Feature: {}", or_na(person.favorite_feature)),
        format!("Emails: {}", joined(emails)),
        format!("Addresses: {}", joined(addresses)),
        format!("Features: {}", joined(features)),
        format!("Friends: {}", joined(friends)),
        format!("Trips: {}", joined(trips)),
    ]
}

pub fn render_person(console: &mut dyn Console, person: &Person) -> ConsoleResult<()> {
    for line in person_lines(person) {
        console.write_line(&line)?;
    }
    Ok(())
}

/// Menu under a displayed person
pub fn person_menu(person: &Person, home: &MenuOption<Action>) -> Menu<Action> {
    let edit = Action::EditPerson(Box::new(person.clone()));
    [MenuOption::new("Update info ℹ️", edit), home.clone()]
        .into_iter()
        .collect()
}

/// Load and display the person stored under `username`.
///
/// An unknown user name is reported here and leads back to the main screen.
pub async fn show(
    screens: &Screens,
    console: &mut dyn Console,
    username: &str,
) -> ConsoleResult<Step> {
    if username.trim().is_empty() {
        console.write_line("Username is required.")?;
        return Ok(Step::Menu(screens.home_only()));
    }

    console.write_line("Loading...")?;
    match screens.people().get_person_by_username(username).await {
        Ok(person) => {
            console.clear()?;
            render_person(console, &person)?;
            Ok(Step::Menu(person_menu(&person, screens.home())))
        }
        Err(e @ CoreError::PersonNotFound(_)) => {
            log::info!("{e}");
            console.write_line(&e.to_string())?;
            Ok(Step::Menu(screens.home_only()))
        }
        Err(e) => Err(e.into()),
    }
}

fn or_na<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

fn joined(values: impl Iterator<Item = String>) -> String {
    let values: Vec<String> = values.collect();
    if values.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        values.join(" | ")
    }
}
