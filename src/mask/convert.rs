//! Raw/display conversion.
//!
//! [`apply`] renders a raw value into the mask, [`extract`] recovers the raw
//! value from a display string, and [`filter`] drops candidate characters
//! their slot would not accept. All three are pure and total.

use super::pattern::{Mask, MaskToken};

/// Render `raw` into `mask`, padding unfilled slots with `placeholder`.
///
/// The result always has `mask.len()` chars. Raw chars beyond the slot count
/// are ignored. An empty mask returns `raw` unchanged.
///
/// # Examples
///
/// ```
/// use maskfield::mask::{apply, Mask};
///
/// let mask = Mask::parse("(###) ###-####");
/// assert_eq!(apply("5551234567", &mask, '_'), "(555) 123-4567");
/// assert_eq!(apply("55", &mask, '_'), "(55_) ___-____");
/// ```
pub fn apply(raw: &str, mask: &Mask, placeholder: char) -> String {
    if mask.is_empty() {
        return raw.to_owned();
    }

    let mut chars = raw.chars();
    let mut out = String::with_capacity(mask.len());
    for token in mask.tokens() {
        match token {
            MaskToken::Slot(_) => out.push(chars.next().unwrap_or(placeholder)),
            MaskToken::Literal(ch) => out.push(*ch),
        }
    }
    out
}

/// Recover the raw characters from a display string.
///
/// Display and mask are walked in lockstep up to the shorter of the two.
/// Slot positions contribute their display char unless it is the
/// placeholder; literal positions are skipped. An empty mask returns
/// `display` unchanged.
pub fn extract(display: &str, mask: &Mask, placeholder: char) -> String {
    if mask.is_empty() {
        return display.to_owned();
    }

    display
        .chars()
        .zip(mask.tokens())
        .filter_map(|(ch, token)| match token {
            MaskToken::Slot(_) if ch != placeholder => Some(ch),
            _ => None,
        })
        .collect()
}

/// Keep each candidate char only if the slot at the same ordinal accepts it.
///
/// The k-th candidate char is tested against the k-th slot. A rejected char
/// is dropped and its slot is consumed anyway, so later chars keep their
/// ordinal pairing. Stops when either the candidate or the slots run out.
pub fn filter(candidate: &str, mask: &Mask) -> String {
    if mask.is_empty() {
        return candidate.to_owned();
    }

    candidate
        .chars()
        .zip(mask.kinds())
        .filter_map(|(ch, kind)| {
            if kind.accepts(ch) {
                Some(ch)
            } else {
                tracing::trace!(%ch, %kind, "dropping character rejected by slot");
                None
            }
        })
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================
