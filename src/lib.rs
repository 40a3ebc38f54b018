//! # maskfield
//!
//! A masked text-input engine for terminal forms.
//!
//! A mask such as `(###) ###-####` fixes literal characters and typed slots.
//! The engine keeps the raw value the user entered, renders the formatted
//! display string, filters keystrokes their slot would not accept, and places
//! the caret after every edit. It is pure and synchronous, so it can back any
//! host: a crossterm loop, a retained-mode widget tree, or a headless test.
//!
//! ## Core Systems
//!
//! - **[`mask`]**: Pattern interpreter, `apply`/`extract`/`filter`, validated config
//! - **[`field`]**: Edit reconciler: raw value, caret placement, `FieldUpdate`
//! - **[`event`]**: Key/paste events (converted from crossterm), edit events, messages
//! - **[`widgets`]**: `MaskedInput`, the key-driven binding over a field
//! - **[`testing`]**: Headless `Pilot` and snapshot helpers
//!
//! ## Example
//!
//! ```
//! use maskfield::field::MaskedField;
//! use maskfield::mask::MaskConfig;
//!
//! let mut field = MaskedField::try_new(MaskConfig::new("AA-####"))?;
//! let update = field.typed_change("ab-1234");
//! assert_eq!(update.raw, "ab1234");
//!
//! let update = field.backspace();
//! assert_eq!(update.display, "ab-123_");
//! # Ok::<(), maskfield::mask::MaskError>(())
//! ```

// Engine
pub mod field;
pub mod mask;

// Binding layer
pub mod event;
pub mod widgets;

// Test support
pub mod testing;
