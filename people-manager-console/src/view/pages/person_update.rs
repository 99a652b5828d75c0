//! Person editing
//!
//! Lists every person field, then reads and stores a new value for the one
//! selected. Fields the service cannot take are refused before any prompt.

use people_manager_core::{CoreError, FieldKind, FieldValue, PERSON_FIELDS, Person, find_field};

use crate::action::Action;
use crate::console::Console;
use crate::error::ConsoleResult;
use crate::menu::{Menu, MenuOption};
use crate::prompt::{self, DEFAULT_NUMBER_PROMPT};
use crate::view::pages::person::{person_menu, render_person};
use crate::view::{Screens, Step};

const TEXT_PROMPT: &str = "Enter new value for the field";

/// All fields in declaration order at keys 1..=14, then `home`
pub fn field_menu(person: &Person, home: &MenuOption<Action>) -> Menu<Action> {
    let mut menu: Menu<Action> = PERSON_FIELDS
        .iter()
        .map(|field| {
            MenuOption::new(
                field.name(),
                Action::EditField {
                    person: Box::new(person.clone()),
                    field: field.name().to_string(),
                },
            )
        })
        .collect();
    menu.push(home.clone());
    menu
}

/// Read a new value for `field_name` and store it.
///
/// Unknown and read-only fields go back to the field list, as does a value
/// the service rejects. `person` is never modified.
pub async fn edit_field(
    screens: &Screens,
    console: &mut dyn Console,
    person: &Person,
    field_name: &str,
) -> ConsoleResult<Step> {
    let back_to_fields = || Step::Go(Action::EditPerson(Box::new(person.clone())));

    if field_name.is_empty() {
        console.write_line("Person and property name are required.")?;
        return Ok(Step::Menu(screens.home_only()));
    }

    let Some(field) = find_field(field_name) else {
        let message = CoreError::FieldNotFound(field_name.to_string()).to_string();
        console.write_line(&message)?;
        return Ok(back_to_fields());
    };

    let value = match field.kind() {
        FieldKind::Unsupported => {
            let message = CoreError::UnsupportedField(field_name.to_string()).to_string();
            console.write_line(&message)?;
            return Ok(back_to_fields());
        }
        FieldKind::Text => {
            announce(console, field.name())?;
            FieldValue::Text(prompt::read_text(console, TEXT_PROMPT)?)
        }
        FieldKind::NullableInt => {
            announce(console, field.name())?;
            FieldValue::Integer(prompt::read_int(console, DEFAULT_NUMBER_PROMPT)?)
        }
    };

    console.write_line("Updating...")?;
    match screens.people().update_person(person, field, value).await {
        Ok(updated) => {
            console.clear()?;
            render_person(console, &updated)?;
            Ok(Step::Menu(person_menu(&updated, screens.home())))
        }
        Err(e) if is_rejection(&e) => {
            console.write_line(&e.to_string())?;
            console.blank_line()?;
            Ok(back_to_fields())
        }
        Err(e @ CoreError::PersonNotFound(_)) => {
            console.write_line(&e.to_string())?;
            Ok(Step::Menu(screens.home_only()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Refusals that send the user back to pick another field
fn is_rejection(err: &CoreError) -> bool {
    matches!(
        err,
        CoreError::ValidationError(_) | CoreError::UnsupportedField(_)
    )
}

fn announce(console: &mut dyn Console, field_name: &str) -> ConsoleResult<()> {
    console.blank_line()?;
    console.write_line(&format!("Updating the {field_name}"))
}
