//! Pilot: programmatic interaction with a headless MaskedInput.
//!
//! The `Pilot` owns a [`MaskedInput`], simulates key presses, typing, pastes
//! and raw crossterm events, and records every message the input reports.

use crate::event::input::{try_from_crossterm, InputEvent, Key, KeyEvent, Modifiers};
use crate::event::message::{downcast_ref, Message, Submitted, ValueChanged};
use crate::widgets::MaskedInput;

use super::snapshot::render_field;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless driver for testing masked inputs.
///
/// # Examples
///
/// ```
/// use maskfield::testing::Pilot;
///
/// let mut pilot = Pilot::with_mask("(###) ###-####");
/// pilot.type_text("5551234567");
/// assert_eq!(pilot.input().display(), "(555) 123-4567");
/// assert_eq!(pilot.changes().len(), 10);
/// ```
pub struct Pilot {
    input: MaskedInput,
    messages: Vec<Box<dyn Message>>,
}

impl Pilot {
    /// Drive an existing input.
    pub fn new(input: MaskedInput) -> Self {
        Self {
            input,
            messages: Vec::new(),
        }
    }

    /// Drive a fresh input with the given mask.
    pub fn with_mask(mask: &str) -> Self {
        Self::new(MaskedInput::new().with_mask(mask))
    }

    // -----------------------------------------------------------------------
    // Input simulation
    // -----------------------------------------------------------------------

    /// Simulate a key press with no modifiers.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.press_key_with(key, Modifiers::NONE)
    }

    /// Simulate a key press with modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) -> &mut Self {
        self.dispatch(InputEvent::Key(KeyEvent::new(key, modifiers)))
    }

    /// Simulate typing each character in order.
    pub fn type_text(&mut self, text: &str) -> &mut Self {
        for ch in text.chars() {
            self.press_key(Key::Char(ch));
        }
        self
    }

    /// Press Backspace `times` times.
    pub fn backspace(&mut self, times: usize) -> &mut Self {
        for _ in 0..times {
            self.press_key(Key::Backspace);
        }
        self
    }

    /// Simulate a bracketed paste.
    pub fn paste(&mut self, text: &str) -> &mut Self {
        self.dispatch(InputEvent::Paste(text.to_owned()))
    }

    /// Feed a raw crossterm event, as a terminal host would.
    pub fn send(&mut self, event: crossterm::event::Event) -> &mut Self {
        if let Some(event) = try_from_crossterm(event) {
            self.dispatch(event);
        }
        self
    }

    fn dispatch(&mut self, event: InputEvent) -> &mut Self {
        if let Some(message) = self.input.handle_event(event) {
            self.messages.push(message);
        }
        self
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    /// The driven input.
    pub fn input(&self) -> &MaskedInput {
        &self.input
    }

    /// Mutable access for host-side calls such as `set_value`.
    pub fn input_mut(&mut self) -> &mut MaskedInput {
        &mut self.input
    }

    /// All messages reported so far.
    pub fn messages(&self) -> &[Box<dyn Message>] {
        &self.messages
    }

    /// Drain the recorded messages.
    pub fn take_messages(&mut self) -> Vec<Box<dyn Message>> {
        std::mem::take(&mut self.messages)
    }

    /// Recorded [`ValueChanged`] messages, oldest first.
    pub fn changes(&self) -> Vec<&ValueChanged> {
        self.messages
            .iter()
            .filter_map(|m| downcast_ref::<ValueChanged>(m.as_ref()))
            .collect()
    }

    /// The most recent [`Submitted`] message, if any.
    pub fn last_submit(&self) -> Option<&Submitted> {
        self.messages
            .iter()
            .rev()
            .find_map(|m| downcast_ref::<Submitted>(m.as_ref()))
    }

    /// Render the input as a text frame (display line plus caret line).
    pub fn render(&self) -> String {
        render_field(&self.input)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn type_text_records_changes() {
        let mut pilot = Pilot::with_mask("##-##");
        pilot.type_text("12x3");
        // 'x' is rejected and reports nothing.
        assert_eq!(pilot.changes().len(), 3);
        assert_eq!(pilot.input().value(), "123");
    }

    #[test]
    fn backspace_many_times_stops_at_empty() {
        let mut pilot = Pilot::with_mask("###");
        pilot.type_text("12").backspace(5);
        assert_eq!(pilot.input().value(), "");
        assert_eq!(pilot.changes().len(), 4);
    }

    #[test]
    fn enter_records_submit() {
        let mut pilot = Pilot::with_mask("##");
        pilot.type_text("4").press_key(Key::Enter);
        let submit = pilot.last_submit().unwrap();
        assert_eq!(submit.raw, "4");
        assert!(!submit.complete);
    }

    #[test]
    fn send_crossterm_backspace() {
        let mut pilot = Pilot::with_mask("###");
        pilot.type_text("123");
        pilot.send(crossterm::event::Event::Key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Backspace,
            crossterm::event::KeyModifiers::NONE,
        )));
        assert_eq!(pilot.input().value(), "12");
    }

    #[test]
    fn send_ignores_resize() {
        let mut pilot = Pilot::with_mask("###");
        pilot.send(crossterm::event::Event::Resize(10, 10));
        assert!(pilot.messages().is_empty());
    }

    #[test]
    fn take_messages_drains() {
        let mut pilot = Pilot::with_mask("#");
        pilot.type_text("1");
        assert_eq!(pilot.take_messages().len(), 1);
        assert!(pilot.messages().is_empty());
    }

    #[test]
    fn host_set_value_is_not_recorded() {
        let mut pilot = Pilot::with_mask("###");
        pilot.input_mut().set_value("987");
        assert!(pilot.messages().is_empty());
        assert_eq!(pilot.render(), "987\n   ^");
    }
}
