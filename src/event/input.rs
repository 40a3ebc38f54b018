//! Keyboard and paste events, decoupled from crossterm.
//!
//! Crossterm events are converted via `From` impls and [`try_from_crossterm`]
//! so the field layer never matches on crossterm types directly.

use std::ops::BitOr;

use crossterm::event as ct;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key relevant to a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Enter,
    Tab,
    Escape,
    /// Any key a text field ignores (function keys, media keys, ...).
    Unsupported,
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Held modifier keys. Only the three a text field cares about are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Modifiers = Modifiers { shift: true, ..Self::NONE };
    pub const CTRL: Modifiers = Modifiers { ctrl: true, ..Self::NONE };
    pub const ALT: Modifiers = Modifiers { alt: true, ..Self::NONE };

    /// Whether every modifier held in `other` is also held in `self`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.shift || !other.shift) && (self.ctrl || !other.ctrl) && (self.alt || !other.alt)
    }

    /// No modifier is held.
    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    /// Ctrl or Alt is held, so a `Char` key is a shortcut rather than text.
    pub fn is_command(self) -> bool {
        self.ctrl || self.alt
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers {
            shift: self.shift || rhs.shift,
            ctrl: self.ctrl || rhs.ctrl,
            alt: self.alt || rhs.alt,
        }
    }
}

impl From<ct::KeyModifiers> for Modifiers {
    fn from(m: ct::KeyModifiers) -> Self {
        Modifiers {
            shift: m.contains(ct::KeyModifiers::SHIFT),
            ctrl: m.contains(ct::KeyModifiers::CONTROL),
            alt: m.contains(ct::KeyModifiers::ALT),
        }
    }
}

// ---------------------------------------------------------------------------
// KeyEvent / InputEvent
// ---------------------------------------------------------------------------

/// A keyboard event with key and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event.
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key press without modifiers.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }
}

/// Input a field can react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Paste(String),
}

// ---------------------------------------------------------------------------
// From<crossterm> conversions
// ---------------------------------------------------------------------------

impl From<ct::KeyCode> for Key {
    fn from(code: ct::KeyCode) -> Self {
        use ct::KeyCode as C;
        match code {
            C::Char(c) => Key::Char(c),
            C::Backspace => Key::Backspace,
            C::Delete => Key::Delete,
            C::Left => Key::Left,
            C::Right => Key::Right,
            C::Home => Key::Home,
            C::End => Key::End,
            C::Enter => Key::Enter,
            C::Tab => Key::Tab,
            C::Esc => Key::Escape,
            _ => Key::Unsupported,
        }
    }
}

impl From<ct::KeyEvent> for KeyEvent {
    fn from(event: ct::KeyEvent) -> Self {
        KeyEvent::new(event.code.into(), event.modifiers.into())
    }
}

/// Convert a crossterm `Event` into an [`InputEvent`].
///
/// Returns `None` for key releases and for events a text field does not
/// handle (mouse, resize, focus).
pub fn try_from_crossterm(event: ct::Event) -> Option<InputEvent> {
    match event {
        ct::Event::Key(ke) if ke.kind != ct::KeyEventKind::Release => {
            Some(InputEvent::Key(KeyEvent::from(ke)))
        }
        ct::Event::Paste(text) => Some(InputEvent::Paste(text)),
        _ => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Modifiers ────────────────────────────────────────────────────

    #[test]
    fn modifiers_none_is_empty() {
        assert!(Modifiers::NONE.is_empty());
        assert!(!Modifiers::NONE.is_command());
    }

    #[test]
    fn modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::SHIFT | Modifiers::CTRL));
        assert!(!mods.contains(Modifiers::ALT));
        assert!(mods.contains(Modifiers::NONE));
    }

    #[test]
    fn modifiers_from_crossterm() {
        let mods = Modifiers::from(
            crossterm::event::KeyModifiers::ALT | crossterm::event::KeyModifiers::SHIFT,
        );
        assert_eq!(mods, Modifiers::ALT | Modifiers::SHIFT);
        // Super/Hyper/Meta are not tracked.
        assert!(Modifiers::from(crossterm::event::KeyModifiers::SUPER).is_empty());
    }

    #[test]
    fn shift_alone_is_not_a_command() {
        assert!(!Modifiers::SHIFT.is_command());
        assert!(Modifiers::ALT.is_command());
        assert!((Modifiers::SHIFT | Modifiers::CTRL).is_command());
    }

    // ── From<crossterm::event::KeyEvent> ─────────────────────────────

    #[test]
    fn from_crossterm_key_char() {
        let ct = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('7'),
            crossterm::event::KeyModifiers::NONE,
        );
        let ke = KeyEvent::from(ct);
        assert_eq!(ke.code, Key::Char('7'));
        assert!(ke.modifiers.is_empty());
    }

    #[test]
    fn from_crossterm_key_with_ctrl() {
        let ct = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('v'),
            crossterm::event::KeyModifiers::CONTROL,
        );
        let ke = KeyEvent::from(ct);
        assert_eq!(ke.code, Key::Char('v'));
        assert!(ke.modifiers.contains(Modifiers::CTRL));
    }

    #[test]
    fn from_crossterm_editing_keys() {
        for (ct_code, expected) in [
            (crossterm::event::KeyCode::Backspace, Key::Backspace),
            (crossterm::event::KeyCode::Delete, Key::Delete),
            (crossterm::event::KeyCode::Left, Key::Left),
            (crossterm::event::KeyCode::Right, Key::Right),
            (crossterm::event::KeyCode::Home, Key::Home),
            (crossterm::event::KeyCode::End, Key::End),
            (crossterm::event::KeyCode::Esc, Key::Escape),
        ] {
            let ke = KeyEvent::from(crossterm::event::KeyEvent::new(
                ct_code,
                crossterm::event::KeyModifiers::NONE,
            ));
            assert_eq!(ke.code, expected);
        }
    }

    #[test]
    fn from_crossterm_unsupported_key() {
        assert_eq!(Key::from(crossterm::event::KeyCode::F(5)), Key::Unsupported);
        assert_eq!(Key::from(crossterm::event::KeyCode::Up), Key::Unsupported);
    }

    // ── try_from_crossterm ───────────────────────────────────────────

    #[test]
    fn try_from_crossterm_key_press() {
        let ct = crossterm::event::Event::Key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Backspace,
            crossterm::event::KeyModifiers::NONE,
        ));
        assert_eq!(
            try_from_crossterm(ct),
            Some(InputEvent::Key(KeyEvent::plain(Key::Backspace)))
        );
    }

    #[test]
    fn try_from_crossterm_skips_release() {
        let ct = crossterm::event::Event::Key(crossterm::event::KeyEvent::new_with_kind(
            crossterm::event::KeyCode::Char('1'),
            crossterm::event::KeyModifiers::NONE,
            crossterm::event::KeyEventKind::Release,
        ));
        assert_eq!(try_from_crossterm(ct), None);
    }

    #[test]
    fn try_from_crossterm_paste() {
        let ct = crossterm::event::Event::Paste("555-1234".to_string());
        assert_eq!(
            try_from_crossterm(ct),
            Some(InputEvent::Paste("555-1234".to_string()))
        );
    }

    #[test]
    fn try_from_crossterm_ignores_resize_and_focus() {
        assert_eq!(try_from_crossterm(crossterm::event::Event::Resize(80, 24)), None);
        assert_eq!(try_from_crossterm(crossterm::event::Event::FocusGained), None);
    }
}
