//! MaskedField: the raw value and caret of one masked input.
//!
//! The field owns the only mutable state in the engine. Every edit goes
//! through [`MaskedField::handle`], which reconciles the raw value, re-renders
//! the display string and moves the caret, then reports a [`FieldUpdate`].

use super::cursor;
use crate::event::edit::EditEvent;
use crate::mask::{apply, extract, filter, Mask, MaskConfig, MaskError};

// ---------------------------------------------------------------------------
// FieldUpdate
// ---------------------------------------------------------------------------

/// What the host should render after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    /// The raw value after the edit.
    pub raw: String,
    /// The display string to render.
    pub display: String,
    /// Caret position in the display string (chars).
    pub cursor: usize,
    /// Whether the raw value differs from before the edit.
    pub changed: bool,
}

// ---------------------------------------------------------------------------
// MaskedField
// ---------------------------------------------------------------------------

/// State record for one masked input.
///
/// # Examples
///
/// ```
/// use maskfield::field::MaskedField;
/// use maskfield::mask::MaskConfig;
///
/// let mut field = MaskedField::new(MaskConfig::new("(###) ###-####"));
/// let update = field.typed_change("(555_) ___-____");
/// assert_eq!(update.raw, "555");
/// assert_eq!(update.display, "(555) ___-____");
/// assert_eq!(update.cursor, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedField {
    config: MaskConfig,
    raw: String,
    cursor: usize,
}

impl MaskedField {
    /// Create an empty field. The config is not validated.
    pub fn new(config: MaskConfig) -> Self {
        let cursor = cursor::after_typing(&config.mask, 0);
        tracing::debug!(mask = %config.mask, placeholder = %config.placeholder, "masked field created");
        Self {
            config,
            raw: String::new(),
            cursor,
        }
    }

    /// Create an empty field, rejecting configs whose placeholder collides with a slot.
    pub fn try_new(config: MaskConfig) -> Result<Self, MaskError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Seed the initial value (builder). Invalid chars are dropped.
    pub fn with_value(mut self, raw: &str) -> Self {
        self.set_value(raw);
        self
    }

    /// The field's configuration.
    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    /// The field's mask.
    pub fn mask(&self) -> &Mask {
        &self.config.mask
    }

    /// The current raw value.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The current display string.
    pub fn display(&self) -> String {
        apply(&self.raw, &self.config.mask, self.config.placeholder)
    }

    /// Caret position in the display string (chars).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the caret, clamped to the display length.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.display_len());
    }

    /// Number of chars in the display string.
    pub fn display_len(&self) -> usize {
        if self.config.mask.is_empty() {
            self.raw.chars().count()
        } else {
            self.config.mask.len()
        }
    }

    /// Whether every slot is filled. A passthrough field is never complete.
    pub fn is_complete(&self) -> bool {
        !self.config.mask.is_empty() && self.raw.chars().count() == self.config.mask.slot_count()
    }

    /// Reconcile one edit event.
    pub fn handle(&mut self, event: EditEvent) -> FieldUpdate {
        let before = self.raw.clone();
        match &event {
            EditEvent::TypedChange(display) => {
                let candidate = extract(display, &self.config.mask, self.config.placeholder);
                self.accept(&candidate);
            }
            EditEvent::Backspace => {
                if self.raw.pop().is_some() {
                    self.cursor = cursor::after_backspace(&self.config.mask, self.filled());
                }
            }
            EditEvent::Clear => {
                self.raw.clear();
                self.cursor = cursor::after_clear(&self.config.mask);
            }
            EditEvent::SetValue(raw) => self.accept(raw),
        }

        let changed = before != self.raw;
        tracing::debug!(
            event = event.name(),
            before = %before,
            after = %self.raw,
            cursor = self.cursor,
            changed,
            "reconciled edit"
        );
        FieldUpdate {
            raw: self.raw.clone(),
            display: self.display(),
            cursor: self.cursor,
            changed,
        }
    }

    /// The display string was replaced by normal input.
    pub fn typed_change(&mut self, display: &str) -> FieldUpdate {
        self.handle(EditEvent::TypedChange(display.to_owned()))
    }

    /// Delete the last raw character. No-op when the field is empty.
    pub fn backspace(&mut self) -> FieldUpdate {
        self.handle(EditEvent::Backspace)
    }

    /// Empty the field.
    pub fn clear(&mut self) -> FieldUpdate {
        self.handle(EditEvent::Clear)
    }

    /// Resynchronize from a host-supplied raw value.
    pub fn set_value(&mut self, raw: &str) -> FieldUpdate {
        self.handle(EditEvent::SetValue(raw.to_owned()))
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Filter a raw candidate into the field and place the caret after it.
    fn accept(&mut self, candidate: &str) {
        self.raw = filter(candidate, &self.config.mask);
        self.cursor = cursor::after_typing(&self.config.mask, self.filled());
    }

    fn filled(&self) -> usize {
        self.raw.chars().count()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
