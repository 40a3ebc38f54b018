//! Snapshot rendering helpers.
//!
//! Functions for turning field state into plain-text frames suitable for
//! snapshot testing: the display string on one line and a caret marker
//! under the cursor on the next.

use crate::field::FieldUpdate;
use crate::widgets::MaskedInput;

/// Render an input as two lines: display string, then `^` under the cursor.
///
/// # Examples
///
/// ```
/// use maskfield::testing::render_field;
/// use maskfield::widgets::MaskedInput;
///
/// let input = MaskedInput::new().with_mask("##/##").with_value("1");
/// assert_eq!(render_field(&input), "1_/__\n ^");
/// ```
pub fn render_field(input: &MaskedInput) -> String {
    render_frame(&input.display(), input.cursor_position())
}

/// Render a [`FieldUpdate`] the same way as [`render_field`].
pub fn render_update(update: &FieldUpdate) -> String {
    render_frame(&update.display, update.cursor)
}

/// Render several frames separated by a blank line.
pub fn render_frames<'a>(frames: impl IntoIterator<Item = &'a str>) -> String {
    frames.into_iter().collect::<Vec<_>>().join("\n\n")
}

fn render_frame(display: &str, cursor: usize) -> String {
    format!("{display}\n{}^", " ".repeat(cursor))
}

// ===========================================================================
// Tests
// ===========================================================================
