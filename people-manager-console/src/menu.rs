//! Numbered option menus
//!
//! A [`Menu`] maps positive integer keys to named actions. Displaying it
//! prints the entries in key order, reads a key until a valid one is
//! entered, and hands the bound action to a [`Dispatch`] implementation.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::cancel::CancellationToken;
use crate::console::Console;
use crate::error::ConsoleResult;

const BANNER: &str = "******** Options ********";

/// A named action. Cloning copies the action value, so two entries built
/// from one template never share state.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuOption<A> {
    pub name: String,
    pub action: A,
}

impl<A> MenuOption<A> {
    pub fn new(name: impl Into<String>, action: A) -> Self {
        Self {
            name: name.into(),
            action,
        }
    }
}

/// Runs the action bound to a selected menu entry.
#[async_trait]
pub trait Dispatch<A: Send + Sync>: Send {
    type Output: Send;

    async fn dispatch(
        &mut self,
        console: &mut dyn Console,
        action: &A,
        cancel: &CancellationToken,
    ) -> ConsoleResult<Self::Output>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Menu<A> {
    entries: BTreeMap<u32, MenuOption<A>>,
}

impl<A> Default for Menu<A> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<A> FromIterator<MenuOption<A>> for Menu<A> {
    /// Keys 1, 2, 3, ... in iteration order
    fn from_iter<I: IntoIterator<Item = MenuOption<A>>>(iter: I) -> Self {
        let mut menu = Self::new();
        for option in iter {
            menu.push(option);
        }
        menu
    }
}

impl<A> Menu<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `option` to `key`, replacing any previous entry.
    ///
    /// Key 0 is not a valid menu key and is refused; returns whether the
    /// option was stored.
    pub fn insert(&mut self, key: u32, option: MenuOption<A>) -> bool {
        if key == 0 {
            return false;
        }
        self.entries.insert(key, option);
        true
    }

    /// Bind `option` to the key after the current largest one. Returns that key.
    pub fn push(&mut self, option: MenuOption<A>) -> u32 {
        let key = self.entries.keys().next_back().map_or(1, |last| last + 1);
        self.entries.insert(key, option);
        key
    }

    pub fn get(&self, key: u32) -> Option<&MenuOption<A>> {
        self.entries.get(&key)
    }

    /// Valid keys, ascending
    pub fn keys(&self) -> Vec<u32> {
        self.entries.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &MenuOption<A>)> {
        self.entries.iter().map(|(key, option)| (*key, option))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self, console: &mut dyn Console) -> ConsoleResult<()> {
        console.blank_line()?;
        console.write_line(BANNER)?;
        console.blank_line()?;
        for (key, option) in &self.entries {
            console.write_line(&format!("{key}. {}", option.name))?;
        }
        Ok(())
    }

    /// Read keys until one in the menu is entered.
    ///
    /// Only a closed input stream ends the loop without a selection.
    pub fn select(&self, console: &mut dyn Console) -> ConsoleResult<&MenuOption<A>> {
        loop {
            console.write("Please enter a number: ")?;
            let input = console.read_line()?;
            let Ok(number) = input.trim().parse::<i64>() else {
                console.write_line("Please enter a valid number.")?;
                continue;
            };
            if let Some(option) = u32::try_from(number)
                .ok()
                .and_then(|key| self.entries.get(&key))
            {
                console.blank_line()?;
                return Ok(option);
            }
            console.write_line(&format!(
                "Please enter a valid number ({}).",
                self.key_list()
            ))?;
        }
    }

    /// Render, select, then run the selected action to completion
    pub async fn display<D>(
        &self,
        console: &mut dyn Console,
        dispatcher: &mut D,
        cancel: &CancellationToken,
    ) -> ConsoleResult<D::Output>
    where
        A: Send + Sync,
        D: Dispatch<A>,
    {
        self.render(console)?;
        let option = self.select(console)?;
        log::debug!("Selected '{}'", option.name);
        dispatcher.dispatch(console, &option.action, cancel).await
    }

    fn key_list(&self) -> String {
        self.entries
            .keys()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;
    use crate::error::ConsoleError;

    /// Records every action it is asked to run
    #[derive(Default)]
    struct Recorder {
        seen: Vec<&'static str>,
    }

    #[async_trait]
    impl Dispatch<&'static str> for Recorder {
        type Output = &'static str;

        async fn dispatch(
            &mut self,
            _console: &mut dyn Console,
            action: &&'static str,
            _cancel: &CancellationToken,
        ) -> ConsoleResult<&'static str> {
            self.seen.push(*action);
            Ok(*action)
        }
    }

    fn sample() -> Menu<&'static str> {
        let mut menu = Menu::new();
        menu.insert(1, MenuOption::new("List People 👫", "list"));
        menu.insert(2, MenuOption::new("Search 🔍", "search"));
        menu.insert(10, MenuOption::new("Exit 🚫", "exit"));
        menu
    }

    #[tokio::test]
    async fn valid_key_runs_bound_action() {
        let mut console = MemoryConsole::new().with_lines(["2"]);
        let mut recorder = Recorder::default();

        let out = sample()
            .display(&mut console, &mut recorder, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(out, "search");
        assert_eq!(recorder.seen, vec!["search"]);
    }

    #[tokio::test]
    async fn invalid_input_reprompts_without_dispatch() {
        let mut console = MemoryConsole::new().with_lines(["abc", "7", "", "10"]);
        let mut recorder = Recorder::default();

        sample()
            .display(&mut console, &mut recorder, &CancellationToken::new())
            .await
            .unwrap();

        let output = console.output();
        assert_eq!(output.matches("Please enter a valid number.").count(), 2);
        assert_eq!(
            output.matches("Please enter a valid number (1, 2, 10).").count(),
            1
        );
        assert_eq!(output.matches("Please enter a number: ").count(), 4);
        assert_eq!(recorder.seen, vec!["exit"]);
    }

    #[test]
    fn negative_number_lists_valid_keys() {
        let mut menu = Menu::new();
        menu.insert(1, MenuOption::new("a", ()));
        menu.insert(2, MenuOption::new("b", ()));
        let mut console = MemoryConsole::new().with_lines(["-1", "1"]);

        let option = menu.select(&mut console).unwrap();

        let output = console.output();
        assert_eq!(option.name, "a");
        assert_eq!(
            output.matches("Please enter a valid number (1, 2).").count(),
            1
        );
        assert!(!output.contains("Please enter a valid number.\n"));
    }

    #[tokio::test]
    async fn closed_input_dispatches_nothing() {
        let mut console = MemoryConsole::new().with_lines(["99"]);
        let mut recorder = Recorder::default();

        let result = sample()
            .display(&mut console, &mut recorder, &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(ConsoleError::InputClosed)));
        assert!(recorder.seen.is_empty());
    }

    #[test]
    fn render_lists_entries_in_key_order() {
        let mut menu = Menu::new();
        menu.insert(3, MenuOption::new("c", ()));
        menu.insert(1, MenuOption::new("a", ()));
        let mut console = MemoryConsole::new();

        menu.render(&mut console).unwrap();

        assert_eq!(
            console.output(),
            "\n******** Options ********\n\n1. a\n3. c\n"
        );
    }

    #[test]
    fn push_continues_after_largest_key() {
        let mut menu = Menu::new();
        assert_eq!(menu.push(MenuOption::new("a", ())), 1);
        menu.insert(5, MenuOption::new("b", ()));
        assert_eq!(menu.push(MenuOption::new("c", ())), 6);
        assert_eq!(menu.keys(), vec![1, 5, 6]);
    }

    #[test]
    fn key_zero_is_refused() {
        let mut menu = Menu::new();
        assert!(!menu.insert(0, MenuOption::new("zero", ())));
        assert!(menu.is_empty());
    }

    #[test]
    fn cloned_option_is_independent() {
        let template = MenuOption::new("Next Page ➡️", vec![1, 2]);
        let mut next = template.clone();
        next.action[0] = 2;
        assert_eq!(template.action, vec![1, 2]);
        assert_eq!(next.action, vec![2, 2]);
    }
}
