//! Edit reconciler: field state and caret placement.

pub mod cursor;
pub mod state;

pub use state::{FieldUpdate, MaskedField};
