#![forbid(unsafe_code)]

//! Cellular-automaton fire.
//!
//! Thirteen intensity levels, 0 (out) through 12 (the source), each mapped
//! to a fixed glyph/color pair: shade blocks in red on black, then yellow
//! on red, then white on yellow. The bottom row burns at 12 forever; each
//! frame every other cell pulls intensity from below with a random lateral
//! offset and a one-in-two chance of cooling by one. Intensities that
//! would leave the 0..=12 range wrap to 0.

use glimt_render::alloc::{AllocationError, try_filled};
use glimt_render::buffer::Buffer;
use glimt_render::cell::Cell;
use glimt_render::palette::Ansi16;

use crate::ScratchIndex;
use crate::rng::XorShift32;

/// Number of discrete fire intensity levels.
pub const FIRE_STEPS: usize = 13;

/// Glyph/color pair for each intensity level.
const FIRE_TABLE: [Cell; FIRE_STEPS] = [
    Cell::new(' ', Ansi16::White.rgb(), Ansi16::Black.rgb()),
    Cell::new('░', Ansi16::Red.rgb(), Ansi16::Black.rgb()),
    Cell::new('▒', Ansi16::Red.rgb(), Ansi16::Black.rgb()),
    Cell::new('▓', Ansi16::Red.rgb(), Ansi16::Black.rgb()),
    Cell::new('█', Ansi16::Red.rgb(), Ansi16::Black.rgb()),
    Cell::new('░', Ansi16::Yellow.rgb(), Ansi16::Red.rgb()),
    Cell::new('▒', Ansi16::Yellow.rgb(), Ansi16::Red.rgb()),
    Cell::new('▓', Ansi16::Yellow.rgb(), Ansi16::Red.rgb()),
    Cell::new('█', Ansi16::Yellow.rgb(), Ansi16::Red.rgb()),
    Cell::new('░', Ansi16::White.rgb(), Ansi16::Yellow.rgb()),
    Cell::new('▒', Ansi16::White.rgb(), Ansi16::Yellow.rgb()),
    Cell::new('▓', Ansi16::White.rgb(), Ansi16::Yellow.rgb()),
    Cell::new('█', Ansi16::White.rgb(), Ansi16::Yellow.rgb()),
];

/// The fire effect and its per-cell intensity scratch.
#[derive(Debug, Clone)]
pub struct FireFx {
    levels: Vec<u8>,
    index: ScratchIndex,
    rng: XorShift32,
}

impl FireFx {
    /// Allocate intensity scratch for the given dimensions: all cells out,
    /// the bottom row at full intensity.
    pub fn new(width: u16, height: u16, seed: u32) -> Result<Self, AllocationError> {
        let index = ScratchIndex::new(width, height);
        let mut levels = try_filled(0u8, index.len())?;

        let w = width as usize;
        if height > 0 {
            let bottom = levels.len() - w;
            for level in &mut levels[bottom..] {
                *level = (FIRE_STEPS - 1) as u8;
            }
        }

        Ok(Self {
            levels,
            index,
            rng: XorShift32::new(seed),
        })
    }

    /// Dimensions the scratch was sized for.
    pub const fn index(&self) -> ScratchIndex {
        self.index
    }

    /// Current intensity levels, row-major.
    pub fn levels(&self) -> &[u8] {
        &self.levels
    }

    /// Advance one frame.
    ///
    /// No-op when the buffer no longer matches the dimensions the scratch
    /// was sized for; scratch addressing is only valid for those.
    pub fn advance(&mut self, buf: &mut Buffer) {
        if !self.index.matches(buf) {
            return;
        }

        let w = self.index.width();
        let h = self.index.height();
        if w == 0 || h < 2 {
            return;
        }

        let row = w as i64;
        let cells = buf.cells_mut();

        for x in 0..w {
            for y in 1..h {
                let src = self.index.at(x, y);
                let r = (self.rng.next_u32() % 7) & 3;

                // One row up, shifted by 1 - r columns; destinations that
                // would land above the grid clamp to index 0.
                let dst = src as i64 - r as i64 + 1;
                let dst = if dst < row { 0 } else { (dst - row) as usize };

                let propagated = self.levels[src].wrapping_sub((r & 1) as u8);
                self.levels[dst] = if propagated as usize > FIRE_STEPS - 1 {
                    0
                } else {
                    propagated
                };

                cells[dst] = FIRE_TABLE[self.levels[dst] as usize];
                cells[src] = FIRE_TABLE[self.levels[src] as usize];
            }
        }
    }
}
