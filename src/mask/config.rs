//! Field configuration: mask pattern plus placeholder char.

use super::pattern::{Mask, SlotKind};

/// Placeholder used when none is configured.
pub const DEFAULT_PLACEHOLDER: char = '_';

/// Errors from validating a [`MaskConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaskError {
    #[error("placeholder {placeholder:?} is a valid {kind} and would hide typed input")]
    PlaceholderCollision { placeholder: char, kind: SlotKind },
    #[error("placeholder must be exactly one character, got {0:?}")]
    InvalidPlaceholder(String),
}

/// Mask and placeholder for one field.
///
/// # Examples
///
/// ```
/// use maskfield::mask::MaskConfig;
///
/// let config = MaskConfig::new("##/##/####").with_placeholder(' ');
/// assert!(config.validate().is_ok());
///
/// // '0' would be indistinguishable from a typed zero.
/// assert!(MaskConfig::new("###").with_placeholder('0').validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskConfig {
    /// The parsed mask pattern.
    pub mask: Mask,
    /// Char shown in unfilled slots.
    pub placeholder: char,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            mask: Mask::default(),
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

impl MaskConfig {
    /// Create a config for `mask` with the default placeholder.
    pub fn new(mask: impl Into<Mask>) -> Self {
        Self {
            mask: mask.into(),
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }

    /// Build a config from string-typed settings, validating both.
    pub fn from_strs(mask: &str, placeholder: &str) -> Result<Self, MaskError> {
        let mut chars = placeholder.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => return Err(MaskError::InvalidPlaceholder(placeholder.to_owned())),
        };
        let config = Self::new(mask).with_placeholder(ch);
        config.validate()?;
        Ok(config)
    }

    /// Set the placeholder char (builder).
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Reject placeholders that a slot in this mask would accept.
    pub fn validate(&self) -> Result<(), MaskError> {
        match self.mask.any_slot_accepts(self.placeholder) {
            Some(kind) => Err(MaskError::PlaceholderCollision {
                placeholder: self.placeholder,
                kind,
            }),
            None => Ok(()),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_placeholder_is_underscore() {
        let config = MaskConfig::new("###");
        assert_eq!(config.placeholder, '_');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_config_is_passthrough() {
        let config = MaskConfig::default();
        assert!(config.mask.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn digit_placeholder_collides_with_digit_slot() {
        let err = MaskConfig::new("(###)").with_placeholder('0').validate().unwrap_err();
        assert_eq!(
            err,
            MaskError::PlaceholderCollision {
                placeholder: '0',
                kind: SlotKind::Digit
            }
        );
    }

    #[test]
    fn letter_placeholder_is_fine_for_digit_only_mask() {
        assert!(MaskConfig::new("##-##").with_placeholder('x').validate().is_ok());
    }

    #[test]
    fn letter_placeholder_collides_with_alnum_slot() {
        let err = MaskConfig::new("**").with_placeholder('x').validate().unwrap_err();
        assert!(matches!(
            err,
            MaskError::PlaceholderCollision { kind: SlotKind::Alnum, .. }
        ));
    }

    #[test]
    fn from_strs_accepts_single_char() {
        let config = MaskConfig::from_strs("AA-####", "*").unwrap();
        assert_eq!(config.placeholder, '*');
        assert_eq!(config.mask.slot_count(), 6);
    }

    #[test]
    fn from_strs_rejects_empty_placeholder() {
        assert_eq!(
            MaskConfig::from_strs("###", ""),
            Err(MaskError::InvalidPlaceholder(String::new()))
        );
    }

    #[test]
    fn from_strs_rejects_multi_char_placeholder() {
        assert!(matches!(
            MaskConfig::from_strs("###", "__"),
            Err(MaskError::InvalidPlaceholder(_))
        ));
    }

    #[test]
    fn from_strs_validates_collision() {
        assert!(matches!(
            MaskConfig::from_strs("###", "5"),
            Err(MaskError::PlaceholderCollision { .. })
        ));
    }

    #[test]
    fn error_messages() {
        let err = MaskError::PlaceholderCollision {
            placeholder: '1',
            kind: SlotKind::Digit,
        };
        assert_eq!(
            err.to_string(),
            "placeholder '1' is a valid digit and would hide typed input"
        );
        assert_eq!(
            MaskError::InvalidPlaceholder("ab".into()).to_string(),
            "placeholder must be exactly one character, got \"ab\""
        );
    }
}
