//! Validated line input

use crate::console::Console;
use crate::error::ConsoleResult;

/// Prompt used by [`read_int`] when the caller has nothing more specific
pub const DEFAULT_NUMBER_PROMPT: &str = "Enter number";

/// Read a non-blank line, reprompting until one arrives. Returns it trimmed.
pub fn read_text(console: &mut dyn Console, prompt: &str) -> ConsoleResult<String> {
    loop {
        console.write(&format!("{prompt}: "))?;
        let input = console.read_line()?;
        let trimmed = input.trim();
        if !trimmed.is_empty() {
            console.blank_line()?;
            return Ok(trimmed.to_string());
        }
        console.write_line("Input cannot be empty. Please try again.")?;
    }
}

/// Read an integer, reprompting until the line parses. No range check.
pub fn read_int(console: &mut dyn Console, prompt: &str) -> ConsoleResult<i64> {
    loop {
        console.write(&format!("{prompt}: "))?;
        if let Ok(number) = console.read_line()?.trim().parse() {
            console.blank_line()?;
            return Ok(number);
        }
        console.write_line("Please enter a number.")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;
    use crate::error::ConsoleError;

    #[test]
    fn text_rejects_blank_lines() {
        let mut console = MemoryConsole::new().with_lines(["", "   ", "  Russell "]);
        let text = read_text(&mut console, "Enter search query").unwrap();
        assert_eq!(text, "Russell");
        assert_eq!(
            console
                .output()
                .matches("Input cannot be empty. Please try again.")
                .count(),
            2
        );
        assert!(console.output().starts_with("Enter search query: "));
    }

    #[test]
    fn int_reprompts_until_number() {
        let mut console = MemoryConsole::new().with_lines(["abc", "4.5", " 42 "]);
        assert_eq!(read_int(&mut console, DEFAULT_NUMBER_PROMPT).unwrap(), 42);
        assert_eq!(
            console.output().matches("Please enter a number.").count(),
            2
        );
        assert_eq!(console.output().matches("Enter number: ").count(), 3);
    }

    #[test]
    fn int_accepts_negative() {
        let mut console = MemoryConsole::new().with_lines(["-7"]);
        assert_eq!(read_int(&mut console, DEFAULT_NUMBER_PROMPT).unwrap(), -7);
    }

    #[test]
    fn closed_input_propagates() {
        let mut console = MemoryConsole::new().with_lines([""]);
        let result = read_text(&mut console, "Name");
        assert!(matches!(result, Err(ConsoleError::InputClosed)));
    }
}
