#![forbid(unsafe_code)]

//! Field rendering: plain input, masked input, and the session selector.
//!
//! A field is an anchored, width-limited viewport into an unbounded text
//! buffer. Scroll state (the visible start offset) is maintained by the
//! editing layer; rendering only consumes it.

use glimt_render::alloc::AllocationError;
use glimt_render::buffer::Buffer;
use glimt_render::cell::{Cell, PackedRgba};

use crate::text::strn_cells;

/// An anchored, width-limited viewport for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldView {
    /// Leftmost column of the visible window.
    pub x: u16,
    /// Row of the field.
    pub y: u16,
    /// Width of the visible window, in cells.
    pub visible_len: u16,
}

/// Render the visible slice of a text value into the field's window.
///
/// Writes up to `visible_len` glyphs, then pads the remainder of the
/// window with blanks so a shorter value leaves no residue from a longer
/// one rendered earlier.
pub fn draw_input(
    buf: &mut Buffer,
    field: FieldView,
    visible_text: &str,
    fg: PackedRgba,
    bg: PackedRgba,
) -> Result<(), AllocationError> {
    let window = field.visible_len as usize;
    let cells = strn_cells(visible_text, window, fg, bg)?;

    buf.blit(field.x, field.y, cells.len() as u16, 1, &cells);

    let blank = Cell::blank(fg, bg);
    for i in cells.len() as u16..field.visible_len {
        buf.set(field.x.saturating_add(i), field.y, blank);
    }
    Ok(())
}

/// Render a masked field: one mask glyph per filled position.
///
/// Columns whose index falls within `[visible_start, cursor_end)` show the
/// mask glyph, the rest are blank. Only the count of filled positions is
/// revealed, matching the plain field's scroll window exactly.
pub fn draw_input_mask(
    buf: &mut Buffer,
    field: FieldView,
    cursor_end: usize,
    visible_start: usize,
    mask: char,
    fg: PackedRgba,
    bg: PackedRgba,
) {
    let filled = Cell::new(mask, fg, bg);
    let blank = Cell::blank(fg, bg);

    for i in 0..field.visible_len {
        let cell = if visible_start + (i as usize) < cursor_end {
            filled
        } else {
            blank
        };
        buf.set(field.x.saturating_add(i), field.y, cell);
    }
}

/// Render the session selector: `<` and `>` rails with the current item's
/// label between them.
///
/// The label starts two columns in and is silently truncated to
/// `visible_len - 3` glyphs.
pub fn draw_selector(
    buf: &mut Buffer,
    field: FieldView,
    label: &str,
    fg: PackedRgba,
    bg: PackedRgba,
) {
    if field.visible_len == 0 {
        return;
    }

    buf.set(field.x, field.y, Cell::new('<', fg, bg));
    buf.set(
        field.x + field.visible_len - 1,
        field.y,
        Cell::new('>', fg, bg),
    );

    let max_label = field.visible_len.saturating_sub(3) as usize;
    for (i, ch) in label.chars().take(max_label).enumerate() {
        buf.set(
            field.x.saturating_add(2 + i as u16),
            field.y,
            Cell::new(ch, fg, bg),
        );
    }
}
