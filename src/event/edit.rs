//! Edit events consumed by [`MaskedField`](crate::field::MaskedField).

/// A discrete change to a masked field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// The display string was replaced by normal input (typing, paste).
    TypedChange(String),
    /// Explicit deletion of the last raw character.
    Backspace,
    /// Programmatic clear.
    Clear,
    /// The host pushes a raw value (controlled field resync).
    SetValue(String),
}

impl EditEvent {
    /// Whether the host should hear about a raw value change caused by this event.
    ///
    /// A controlled resync never notifies: the host already knows the value.
    pub fn notifies(&self) -> bool {
        !matches!(self, Self::SetValue(_))
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TypedChange(_) => "TypedChange",
            Self::Backspace => "Backspace",
            Self::Clear => "Clear",
            Self::SetValue(_) => "SetValue",
        }
    }
}
