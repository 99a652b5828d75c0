//! Standard terminal console

use std::io::{self, BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};

use crate::console::{Console, Key};
use crate::error::{ConsoleError, ConsoleResult};
use crate::event::wait_for_key;

/// Raw mode for the lifetime of the guard
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            log::warn!("Failed to leave raw mode: {e}");
        }
    }
}

/// Line-buffered console over stdin/stdout.
///
/// Raw mode is entered only while waiting for a single key.
pub struct StdConsole {
    stdout: io::Stdout,
    stdin: io::Stdin,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            stdin: io::stdin(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn write(&mut self, text: &str) -> ConsoleResult<()> {
        self.stdout.write_all(text.as_bytes())?;
        self.stdout.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> ConsoleResult<String> {
        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn read_key(&mut self) -> ConsoleResult<Key> {
        let key = {
            let _raw = RawModeGuard::enable()?;
            wait_for_key()
        };
        // The key is not echoed in raw mode
        self.write("\n")?;
        key
    }

    fn clear(&mut self) -> ConsoleResult<()> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}
