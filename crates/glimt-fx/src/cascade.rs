#![forbid(unsafe_code)]

//! Cascade collapse transition.
//!
//! A one-shot, frame-driven letter drop: every non-blank glyph directly
//! above a blank cell falls one row with probability 8/10, the skipped
//! 2/10 giving the fall its staggered look. The transition is re-derived
//! from the grid contents on every call and keeps no per-cell state.

use std::time::Duration;

use glimt_render::buffer::Buffer;

use crate::rng::XorShift32;

/// Outcome of one cascade frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum CascadeStatus {
    /// Glyphs are still falling; keep invoking every tick.
    Running,
    /// Nothing left to drop. The caller owns the settle pause
    /// ([`Cascade::SETTLE_COOLDOWN`]) and resets its retry/fail counter.
    Settled,
}

impl CascadeStatus {
    /// True while the transition still has frames to run.
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

/// The cascade transition.
#[derive(Debug, Clone)]
pub struct Cascade {
    rng: XorShift32,
}

impl Cascade {
    /// How long the driving loop should pause after the transition
    /// settles, before its next action.
    pub const SETTLE_COOLDOWN: Duration = Duration::from_secs(7);

    /// Create a cascade with a seeded drop pattern.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: XorShift32::new(seed),
        }
    }

    /// Advance one frame.
    ///
    /// Scans rows from second-to-last up to the top and drops eligible
    /// glyphs one row. Returns [`CascadeStatus::Settled`] on the first
    /// scan that finds no glyph above a blank.
    pub fn advance(&mut self, buf: &mut Buffer) -> CascadeStatus {
        let w = buf.width() as usize;
        let h = buf.height() as usize;
        let cells = buf.cells_mut();
        let mut changes = false;

        if h >= 2 {
            for y in (0..h - 1).rev() {
                for x in 0..w {
                    let cell = cells[y * w + x];
                    if cell.is_blank() {
                        continue;
                    }
                    if !cells[(y + 1) * w + x].is_blank() {
                        continue;
                    }

                    changes = true;

                    if self.rng.next_u32() % 10 > 7 {
                        continue;
                    }

                    cells[(y + 1) * w + x] = cell;
                    cells[y * w + x].ch = ' ';
                }
            }
        }

        if changes {
            CascadeStatus::Running
        } else {
            CascadeStatus::Settled
        }
    }
}

impl Default for Cascade {
    fn default() -> Self {
        Self::new(0x5EED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimt_render::cell::Cell;

    #[test]
    fn lone_glyph_falls_to_the_bottom() {
        let mut buf = Buffer::new(5, 6);
        buf.set(2, 0, Cell::from_char('@'));
        let mut cascade = Cascade::new(1);

        let mut frames = 0;
        loop {
            let status = cascade.advance(&mut buf);
            frames += 1;
            if !status.is_running() {
                break;
            }
            assert!(frames < 1000, "cascade failed to settle");
        }

        assert_eq!(buf.get(2, 5).unwrap().ch, '@');
        for y in 0..5 {
            assert!(buf.get(2, y).unwrap().is_blank());
        }
    }

    #[test]
    fn settled_is_reported_when_no_pair_remains() {
        let mut buf = Buffer::new(4, 4);
        let mut cascade = Cascade::new(1);
        // empty grid: nothing to drop
        assert_eq!(cascade.advance(&mut buf), CascadeStatus::Settled);

        // fully supported glyphs on the bottom row: still settled
        for x in 0..4 {
            buf.set(x, 3, Cell::from_char('#'));
        }
        assert_eq!(cascade.advance(&mut buf), CascadeStatus::Settled);
    }

    #[test]
    fn stacked_glyphs_keep_their_count() {
        let mut buf = Buffer::new(3, 8);
        buf.set(1, 0, Cell::from_char('a'));
        buf.set(1, 2, Cell::from_char('b'));
        buf.set(1, 4, Cell::from_char('c'));
        let mut cascade = Cascade::new(9);

        while cascade.advance(&mut buf).is_running() {}

        let remaining: String = (0..8)
            .filter_map(|y| {
                let ch = buf.get(1, y).unwrap().ch;
                (!ch.is_whitespace()).then_some(ch)
            })
            .collect();
        assert_eq!(remaining, "abc");
        // settled as a solid stack on the bottom rows
        assert_eq!(buf.get(1, 7).unwrap().ch, 'c');
        assert_eq!(buf.get(1, 6).unwrap().ch, 'b');
        assert_eq!(buf.get(1, 5).unwrap().ch, 'a');
    }

    #[test]
    fn falling_glyph_keeps_its_colors() {
        use glimt_render::palette::Ansi16;

        let mut buf = Buffer::new(3, 3);
        let cell = Cell::new('x', Ansi16::Red.rgb(), Ansi16::Blue.rgb());
        buf.set(0, 0, cell);
        let mut cascade = Cascade::new(3);

        while cascade.advance(&mut buf).is_running() {}

        assert_eq!(*buf.get(0, 2).unwrap(), cell);
    }

    #[test]
    fn same_seed_same_fall() {
        let mut a = Buffer::new(10, 10);
        let mut b = Buffer::new(10, 10);
        for x in 0..10 {
            a.set(x, 0, Cell::from_char('z'));
            b.set(x, 0, Cell::from_char('z'));
        }
        let mut ca = Cascade::new(77);
        let mut cb = Cascade::new(77);
        let _ = ca.advance(&mut a);
        let _ = cb.advance(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn single_row_grid_settles_immediately() {
        let mut buf = Buffer::new(4, 1);
        buf.set(0, 0, Cell::from_char('q'));
        let mut cascade = Cascade::new(5);
        assert_eq!(cascade.advance(&mut buf), CascadeStatus::Settled);
    }
}
