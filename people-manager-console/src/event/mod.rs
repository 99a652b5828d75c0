//! Keyboard input for arrow-key paging

mod handler;
mod keymap;

pub use handler::{translate_key, wait_for_key};
pub use keymap::{DefaultKeymap, KeyBinding};
