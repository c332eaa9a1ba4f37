#![forbid(unsafe_code)]

//! UTF-8 text to cell runs.
//!
//! One unrenderable label must never prevent the rest of the screen from
//! drawing: decoding returns a `Result` and the call site logs the error
//! and moves on to the next element.

use glimt_render::alloc::AllocationError;
use glimt_render::buffer::Buffer;
use glimt_render::cell::{Cell, PackedRgba};

/// Decode up to `max_chars` scalar values of `text` into colored cells.
///
/// Stops early when the input runs out of complete characters; never reads
/// past the input. On allocation failure nothing is written and
/// [`AllocationError`] is returned.
pub fn strn_cells(
    text: &str,
    max_chars: usize,
    fg: PackedRgba,
    bg: PackedRgba,
) -> Result<Vec<Cell>, AllocationError> {
    let count = text.chars().take(max_chars).count();
    let mut cells = Vec::new();
    cells.try_reserve_exact(count)?;
    cells.extend(text.chars().take(count).map(|ch| Cell::new(ch, fg, bg)));
    Ok(cells)
}

/// Decode the whole of `text` into colored cells.
pub fn str_cells(text: &str, fg: PackedRgba, bg: PackedRgba) -> Result<Vec<Cell>, AllocationError> {
    strn_cells(text, usize::MAX, fg, bg)
}

/// Decode `text` and blit it horizontally starting at (x, y).
///
/// Callers catch the error, log it, and continue the frame.
pub fn draw_text(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    text: &str,
    fg: PackedRgba,
    bg: PackedRgba,
) -> Result<(), AllocationError> {
    let cells = str_cells(text, fg, bg)?;
    let len = cells.len().min(u16::MAX as usize) as u16;
    buf.blit(x, y, len, 1, &cells);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_roundtrips_exactly() {
        let cells = str_cells("login:", PackedRgba::WHITE, PackedRgba::BLACK).unwrap();
        let decoded: String = cells.iter().map(|c| c.ch).collect();
        assert_eq!(decoded, "login:");
    }

    #[test]
    fn max_chars_truncates() {
        let cells = strn_cells("abcdef", 3, PackedRgba::WHITE, PackedRgba::BLACK).unwrap();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[2].ch, 'c');
    }

    #[test]
    fn short_input_stops_early() {
        let cells = strn_cells("ab", 10, PackedRgba::WHITE, PackedRgba::BLACK).unwrap();
        assert_eq!(cells.len(), 2);
    }

    #[test]
    fn multibyte_input_decodes_scalar_values() {
        let cells = strn_cells("héllo", 4, PackedRgba::WHITE, PackedRgba::BLACK).unwrap();
        let decoded: String = cells.iter().map(|c| c.ch).collect();
        assert_eq!(decoded, "héll");
    }

    #[test]
    fn draw_text_lands_at_the_anchor() {
        let mut buf = Buffer::new(20, 3);
        draw_text(&mut buf, 4, 1, "hi", PackedRgba::WHITE, PackedRgba::BLACK).unwrap();
        assert_eq!(buf.get(4, 1).unwrap().ch, 'h');
        assert_eq!(buf.get(5, 1).unwrap().ch, 'i');
        assert!(buf.get(6, 1).unwrap().is_blank());
    }

    mod property {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn never_yields_more_than_max_chars(
                text in "\\PC{0,40}",
                max in 0usize..48,
            ) {
                let cells = strn_cells(&text, max, PackedRgba::WHITE, PackedRgba::BLACK).unwrap();
                prop_assert!(cells.len() <= max);
                prop_assert!(cells.len() <= text.chars().count());
            }

            #[test]
            fn decoded_glyphs_match_the_input(text in "\\PC{0,40}") {
                let cells = str_cells(&text, PackedRgba::WHITE, PackedRgba::BLACK).unwrap();
                let decoded: String = cells.iter().map(|c| c.ch).collect();
                prop_assert_eq!(decoded, text);
            }
        }
    }
}
