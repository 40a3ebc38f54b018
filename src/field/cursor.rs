//! Caret placement after an edit.
//!
//! Offsets are display indices counted in chars.

use crate::mask::Mask;

/// Caret after a typed change: the first unfilled slot, or the mask end.
///
/// Landing right after the last filled slot and skipping the literal run
/// that follows is the same as landing on slot number `filled`.
/// With an empty mask the caret follows the passthrough text.
pub fn after_typing(mask: &Mask, filled: usize) -> usize {
    if mask.is_empty() {
        return filled;
    }
    mask.slot_position(filled).unwrap_or(mask.len())
}

/// Caret after a backspace.
///
/// Walks forward counting slots until the count exceeds `filled` and lands on
/// that slot. Lands on the mask end when nothing is left filled or no such
/// slot exists.
pub fn after_backspace(mask: &Mask, filled: usize) -> usize {
    if mask.is_empty() {
        return filled;
    }
    if filled == 0 {
        return mask.len();
    }
    let mut seen = 0;
    for (index, token) in mask.tokens().iter().enumerate() {
        if token.is_slot() {
            seen += 1;
            if seen > filled {
                return index;
            }
        }
    }
    mask.len()
}

/// Caret after a clear: the first slot, or 0 for a mask without slots.
pub fn after_clear(mask: &Mask) -> usize {
    mask.slot_position(0).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> Mask {
        Mask::parse("(###) ###-####")
    }

    #[test]
    fn typing_lands_on_first_slot_when_empty() {
        assert_eq!(after_typing(&phone(), 0), 1);
    }

    #[test]
    fn typing_skips_literal_run() {
        // After "555" the caret jumps over ") " to the fourth slot.
        assert_eq!(after_typing(&phone(), 3), 6);
        // After "555123" it jumps over "-".
        assert_eq!(after_typing(&phone(), 6), 10);
    }

    #[test]
    fn typing_full_lands_on_end() {
        assert_eq!(after_typing(&phone(), 10), 14);
    }

    #[test]
    fn typing_trailing_literal_lands_on_end() {
        let mask = Mask::parse("##%");
        assert_eq!(after_typing(&mask, 2), 3);
    }

    #[test]
    fn typing_empty_mask_follows_text() {
        assert_eq!(after_typing(&Mask::parse(""), 7), 7);
    }

    #[test]
    fn backspace_lands_after_remaining_slots() {
        assert_eq!(after_backspace(&phone(), 2), 3);
        assert_eq!(after_backspace(&phone(), 3), 6);
    }

    #[test]
    fn backspace_to_empty_lands_on_end() {
        assert_eq!(after_backspace(&phone(), 0), 14);
    }

    #[test]
    fn backspace_empty_mask_follows_text() {
        assert_eq!(after_backspace(&Mask::parse(""), 4), 4);
    }

    #[test]
    fn clear_lands_on_first_slot() {
        assert_eq!(after_clear(&phone()), 1);
        assert_eq!(after_clear(&Mask::parse("--")), 0);
        assert_eq!(after_clear(&Mask::parse("")), 0);
    }
}
