//! Console abstraction
//!
//! Screens write through [`Console`] and never touch stdin/stdout directly.
//! [`StdConsole`](crate::util::StdConsole) drives the real terminal;
//! [`MemoryConsole`] replays scripted input and captures output for tests.

use std::collections::VecDeque;

use crate::error::{ConsoleError, ConsoleResult};

/// A single key press, reduced to what paging cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Other,
}

pub trait Console: Send {
    /// Write text without a trailing newline
    fn write(&mut self, text: &str) -> ConsoleResult<()>;

    /// Read one line without its line terminator.
    ///
    /// Returns [`ConsoleError::InputClosed`] at end of input.
    fn read_line(&mut self) -> ConsoleResult<String>;

    /// Block until a key is pressed
    fn read_key(&mut self) -> ConsoleResult<Key>;

    /// Clear the screen and move the cursor home
    fn clear(&mut self) -> ConsoleResult<()>;

    fn write_line(&mut self, text: &str) -> ConsoleResult<()> {
        self.write(text)?;
        self.write("\n")
    }

    fn blank_line(&mut self) -> ConsoleResult<()> {
        self.write("\n")
    }
}

/// Scripted console: input is queued up front, output is collected.
///
/// Running out of scripted input behaves like a closed stream.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: VecDeque<String>,
    keys: VecDeque<Key>,
    output: String,
    clears: usize,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue input lines
    #[must_use]
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Queue key presses
    #[must_use]
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    /// Everything written so far
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of times the screen was cleared
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Input lines not consumed yet
    pub fn remaining_lines(&self) -> usize {
        self.lines.len()
    }
}

impl Console for MemoryConsole {
    fn write(&mut self, text: &str) -> ConsoleResult<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> ConsoleResult<String> {
        self.lines.pop_front().ok_or(ConsoleError::InputClosed)
    }

    fn read_key(&mut self) -> ConsoleResult<Key> {
        self.keys.pop_front().ok_or(ConsoleError::InputClosed)
    }

    fn clear(&mut self) -> ConsoleResult<()> {
        self.clears += 1;
        Ok(())
    }
}
