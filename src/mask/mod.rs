//! Mask engine: pattern interpreter, raw/display conversion, configuration.

pub mod config;
pub mod convert;
pub mod pattern;

pub use config::{MaskConfig, MaskError, DEFAULT_PLACEHOLDER};
pub use convert::{apply, extract, filter};
pub use pattern::{Mask, MaskToken, SlotKind};
