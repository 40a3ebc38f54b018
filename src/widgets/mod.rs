//! Built-in widgets: MaskedInput.

pub mod masked_input;

pub use masked_input::MaskedInput;
