//! Mask pattern interpreter.
//!
//! A mask is a string where `#`, `A` and `*` are input slots and every other
//! character is a literal copied verbatim into the display string.

use std::fmt;

// ---------------------------------------------------------------------------
// SlotKind
// ---------------------------------------------------------------------------

/// The character class a slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// `#`: ASCII digits `0-9`.
    Digit,
    /// `A`: ASCII letters.
    Letter,
    /// `*`: ASCII letters or digits.
    Alnum,
}

impl SlotKind {
    /// Classify a mask character. Returns `None` for literals.
    pub fn from_mask_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Digit),
            'A' => Some(Self::Letter),
            '*' => Some(Self::Alnum),
            _ => None,
        }
    }

    /// The mask character that produces this slot kind.
    pub fn mask_char(self) -> char {
        match self {
            Self::Digit => '#',
            Self::Letter => 'A',
            Self::Alnum => '*',
        }
    }

    /// Whether `ch` is a valid entry for this slot.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Self::Digit => ch.is_ascii_digit(),
            Self::Letter => ch.is_ascii_alphabetic(),
            Self::Alnum => ch.is_ascii_alphanumeric(),
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Digit => "digit",
            Self::Letter => "letter",
            Self::Alnum => "alphanumeric",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// MaskToken
// ---------------------------------------------------------------------------

/// One classified mask position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskToken {
    Slot(SlotKind),
    Literal(char),
}

impl MaskToken {
    /// Classify a single mask character.
    pub fn classify(ch: char) -> Self {
        match SlotKind::from_mask_char(ch) {
            Some(kind) => Self::Slot(kind),
            None => Self::Literal(ch),
        }
    }

    /// Whether this position is an input slot.
    pub fn is_slot(self) -> bool {
        matches!(self, Self::Slot(_))
    }
}

// ---------------------------------------------------------------------------
// Mask
// ---------------------------------------------------------------------------

/// A parsed mask pattern.
///
/// Positions are counted in `char`s, so literals outside ASCII occupy one
/// position each just like slots do.
///
/// # Examples
///
/// ```
/// use maskfield::mask::{Mask, MaskToken, SlotKind};
///
/// let mask = Mask::parse("AA-##");
/// assert_eq!(mask.len(), 5);
/// assert_eq!(mask.slot_count(), 4);
/// assert_eq!(mask.tokens()[2], MaskToken::Literal('-'));
/// assert_eq!(mask.tokens()[3], MaskToken::Slot(SlotKind::Digit));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Mask {
    tokens: Vec<MaskToken>,
    slot_count: usize,
}

impl Mask {
    /// Parse a mask string. Never fails; unknown characters are literals.
    pub fn parse(pattern: &str) -> Self {
        let tokens: Vec<MaskToken> = pattern.chars().map(MaskToken::classify).collect();
        let slot_count = tokens.iter().filter(|t| t.is_slot()).count();
        Self { tokens, slot_count }
    }

    /// The classified positions, left to right.
    pub fn tokens(&self) -> &[MaskToken] {
        &self.tokens
    }

    /// Number of positions in the mask.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// An empty mask turns the field into passthrough input.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of input slots.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Slot kinds in mask order, literals skipped.
    pub fn kinds(&self) -> impl Iterator<Item = SlotKind> + '_ {
        self.tokens.iter().filter_map(|t| match t {
            MaskToken::Slot(kind) => Some(*kind),
            MaskToken::Literal(_) => None,
        })
    }

    /// Mask index of the `n`-th slot (0-based), if the mask has that many.
    pub fn slot_position(&self, n: usize) -> Option<usize> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_slot())
            .nth(n)
            .map(|(index, _)| index)
    }

    /// Whether any slot in this mask would accept `ch`.
    pub fn any_slot_accepts(&self, ch: char) -> Option<SlotKind> {
        self.kinds().find(|kind| kind.accepts(ch))
    }
}

impl From<&str> for Mask {
    fn from(pattern: &str) -> Self {
        Self::parse(pattern)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            let ch = match token {
                MaskToken::Slot(kind) => kind.mask_char(),
                MaskToken::Literal(ch) => *ch,
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
