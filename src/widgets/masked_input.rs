//! MaskedInput widget: a focusable text input bound to a mask.
//!
//! Turns keystrokes into [`EditEvent`]s for its [`MaskedField`] and reports
//! [`ValueChanged`] / [`Submitted`] messages to the host.

use crate::event::edit::EditEvent;
use crate::event::input::{InputEvent, Key, KeyEvent};
use crate::event::message::{Message, Submitted, ValueChanged};
use crate::field::{FieldUpdate, MaskedField};
use crate::mask::{MaskConfig, MaskError, MaskToken};

// ---------------------------------------------------------------------------
// MaskedInput
// ---------------------------------------------------------------------------

/// A masked text input.
///
/// The cursor position is a char offset into the display string. Typing
/// overwrites the slot under the cursor, so the display keeps the mask's
/// length; with an empty mask the input behaves like a plain text field.
///
/// # Examples
///
/// ```
/// use maskfield::widgets::MaskedInput;
///
/// let mut input = MaskedInput::new().with_mask("(###) ###-####");
/// for ch in "5551234567".chars() {
///     input.insert_char(ch);
/// }
/// assert_eq!(input.display(), "(555) 123-4567");
/// assert_eq!(input.value(), "5551234567");
/// ```
#[derive(Debug, Clone)]
pub struct MaskedInput {
    field: MaskedField,
}

impl MaskedInput {
    /// Create a passthrough input with no mask.
    pub fn new() -> Self {
        Self {
            field: MaskedField::new(MaskConfig::default()),
        }
    }

    /// Create an input from a validated config.
    pub fn try_with_config(config: MaskConfig) -> Result<Self, MaskError> {
        Ok(Self {
            field: MaskedField::try_new(config)?,
        })
    }

    /// Set the mask pattern (builder pattern). The value is re-filtered against it.
    ///
    /// Does not validate the placeholder against the new mask; use
    /// [`try_with_mask`](Self::try_with_mask) for that.
    pub fn with_mask(self, mask: &str) -> Self {
        let config = self.field.config().clone();
        Self::rebuilt(MaskConfig { mask: mask.into(), ..config }, self.field.raw())
    }

    /// Set the mask pattern, rejecting it if the current placeholder collides with a slot.
    pub fn try_with_mask(self, mask: &str) -> Result<Self, MaskError> {
        let config = MaskConfig {
            mask: mask.into(),
            ..self.field.config().clone()
        };
        config.validate()?;
        Ok(Self::rebuilt(config, self.field.raw()))
    }

    /// Set the placeholder char (builder pattern).
    ///
    /// Does not validate; use [`try_with_placeholder`](Self::try_with_placeholder)
    /// to reject a placeholder that a slot would accept.
    pub fn with_placeholder(self, placeholder: char) -> Self {
        let config = self.field.config().clone().with_placeholder(placeholder);
        Self::rebuilt(config, self.field.raw())
    }

    /// Set the placeholder char, rejecting it if a slot would accept it.
    pub fn try_with_placeholder(self, placeholder: char) -> Result<Self, MaskError> {
        let config = self.field.config().clone().with_placeholder(placeholder);
        config.validate()?;
        Ok(Self::rebuilt(config, self.field.raw()))
    }

    /// Set the initial raw value (builder pattern). Invalid chars are dropped.
    pub fn with_value(mut self, raw: &str) -> Self {
        self.field.set_value(raw);
        self
    }

    /// The current raw value.
    pub fn value(&self) -> &str {
        self.field.raw()
    }

    /// The current display string.
    pub fn display(&self) -> String {
        self.field.display()
    }

    /// Cursor position (char offset into the display string).
    pub fn cursor_position(&self) -> usize {
        self.field.cursor()
    }

    /// Whether every slot is filled.
    pub fn is_complete(&self) -> bool {
        self.field.is_complete()
    }

    /// The underlying field state.
    pub fn field(&self) -> &MaskedField {
        &self.field
    }

    /// Resynchronize from a host-controlled raw value. Never notifies.
    pub fn set_value(&mut self, raw: &str) {
        self.field.set_value(raw);
    }

    /// Clear the input.
    pub fn clear(&mut self) -> Option<ValueChanged> {
        self.edit(EditEvent::Clear)
    }

    /// Type a character at the cursor.
    ///
    /// A char the target slot rejects is dropped before it reaches the
    /// field, so the raw value is left untouched.
    pub fn insert_char(&mut self, ch: char) -> Option<ValueChanged> {
        let mut display: Vec<char> = self.field.display().chars().collect();
        if self.field.mask().is_empty() {
            let at = self.field.cursor().min(display.len());
            display.insert(at, ch);
        } else {
            let at = self.next_slot_from(self.field.cursor());
            if let Some(MaskToken::Slot(kind)) = self.field.mask().tokens().get(at) {
                if !kind.accepts(ch) {
                    tracing::trace!(%ch, %kind, at, "keystroke rejected by slot under cursor");
                    return None;
                }
            }
            match display.get_mut(at) {
                Some(cell) => *cell = ch,
                None => display.push(ch),
            }
        }
        self.edit(EditEvent::TypedChange(display.into_iter().collect()))
    }

    /// Delete the last entered character (backspace).
    pub fn delete_char(&mut self) -> Option<ValueChanged> {
        self.edit(EditEvent::Backspace)
    }

    /// Type every char of `text` in order. Reports one change for the whole paste.
    pub fn paste(&mut self, text: &str) -> Option<ValueChanged> {
        let before = self.field.raw().to_owned();
        for ch in text.chars() {
            self.insert_char(ch);
        }
        (before != self.field.raw()).then(|| self.value_changed())
    }

    /// Move the cursor left by one position.
    pub fn move_cursor_left(&mut self) {
        let cursor = self.field.cursor();
        self.field.set_cursor(cursor.saturating_sub(1));
    }

    /// Move the cursor right by one position.
    pub fn move_cursor_right(&mut self) {
        let cursor = self.field.cursor();
        self.field.set_cursor(cursor + 1);
    }

    /// Move the cursor to the start of the input.
    pub fn move_cursor_home(&mut self) {
        self.field.set_cursor(0);
    }

    /// Move the cursor to the end of the input.
    pub fn move_cursor_end(&mut self) {
        let end = self.field.display_len();
        self.field.set_cursor(end);
    }

    /// Handle a key press. Returns the message to report upward, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Box<dyn Message>> {
        match key.code {
            Key::Char(ch) if !key.modifiers.is_command() => boxed(self.insert_char(ch)),
            Key::Backspace => boxed(self.delete_char()),
            Key::Delete => boxed(self.clear()),
            Key::Left => {
                self.move_cursor_left();
                None
            }
            Key::Right => {
                self.move_cursor_right();
                None
            }
            Key::Home => {
                self.move_cursor_home();
                None
            }
            Key::End => {
                self.move_cursor_end();
                None
            }
            Key::Enter => boxed(Some(Submitted {
                raw: self.field.raw().to_owned(),
                complete: self.field.is_complete(),
            })),
            _ => None,
        }
    }

    /// Handle a key press or paste.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<Box<dyn Message>> {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Paste(text) => boxed(self.paste(&text)),
        }
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    fn rebuilt(config: MaskConfig, raw: &str) -> Self {
        Self {
            field: MaskedField::new(config).with_value(raw),
        }
    }

    fn edit(&mut self, event: EditEvent) -> Option<ValueChanged> {
        let notifies = event.notifies();
        let FieldUpdate { changed, .. } = self.field.handle(event);
        (changed && notifies).then(|| self.value_changed())
    }

    fn value_changed(&self) -> ValueChanged {
        ValueChanged {
            raw: self.field.raw().to_owned(),
            display: self.field.display(),
            complete: self.field.is_complete(),
        }
    }

    /// First slot at or after `from`, or the mask end.
    fn next_slot_from(&self, from: usize) -> usize {
        let tokens = self.field.mask().tokens();
        tokens
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, token)| matches!(token, MaskToken::Slot(_)))
            .map_or(tokens.len(), |(index, _)| index)
    }
}

impl Default for MaskedInput {
    fn default() -> Self {
        Self::new()
    }
}

fn boxed<M: Message>(message: Option<M>) -> Option<Box<dyn Message>> {
    message.map(|m| Box::new(m) as Box<dyn Message>)
}

// ===========================================================================
// Tests
// ===========================================================================
