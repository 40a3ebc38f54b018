//! Headless testing framework: Pilot, snapshot helpers.
//!
//! Use the [`Pilot`] to script keystrokes against a
//! [`MaskedInput`](crate::widgets::MaskedInput) without a terminal. Use
//! [`render_field`] and related helpers to capture field state as plain text
//! for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::{render_field, render_frames, render_update};
