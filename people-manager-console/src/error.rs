//! Console error type

use people_manager_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Terminal read/write failure
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input reached end of stream; ends the session
    #[error("Input stream closed")]
    InputClosed,

    /// Unrecoverable service failure
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;
