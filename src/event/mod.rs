//! Event system: keyboard input, field edits, host messages.

pub mod edit;
pub mod input;
pub mod message;

pub use edit::EditEvent;
pub use input::{try_from_crossterm, InputEvent, Key, KeyEvent, Modifiers};
pub use message::{Message, Submitted, ValueChanged};
