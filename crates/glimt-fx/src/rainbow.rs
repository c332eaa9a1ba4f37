#![forbid(unsafe_code)]

//! Color-cycling stripe sweep.
//!
//! Every row is filled with one solid-block color picked from a 16-entry
//! table (8 colors doubled, so the sweep can run through indices 0-15).
//! Two 8-bit counters persist in the scratch buffer: a fast one ticking
//! every frame and resetting to 0 on reaching the terminal height, and a
//! slow one ticking down once per 15 fast ticks, resetting to the height
//! when it would fall below 1. The counters are deliberately 8-bit:
//! modular arithmetic on the narrow width is what keeps the cycle bounded.

use glimt_render::alloc::{AllocationError, try_filled};
use glimt_render::buffer::Buffer;
use glimt_render::cell::Cell;
use glimt_render::palette::Ansi16;

use crate::ScratchIndex;

/// Stripe table: 8 colors doubled so the cycle can sweep indices 0-15.
const STRIPES: [Cell; 16] = [
    Cell::new('█', Ansi16::Black.rgb(), Ansi16::Black.rgb()),
    Cell::new('█', Ansi16::Red.rgb(), Ansi16::Black.rgb()),
    Cell::new('█', Ansi16::Yellow.rgb(), Ansi16::Black.rgb()),
    Cell::new('█', Ansi16::Green.rgb(), Ansi16::Black.rgb()),
    Cell::new('█', Ansi16::Cyan.rgb(), Ansi16::Black.rgb()),
    Cell::new('█', Ansi16::Blue.rgb(), Ansi16::Black.rgb()),
    Cell::new('█', Ansi16::Magenta.rgb(), Ansi16::Black.rgb()),
    Cell::new('█', Ansi16::White.rgb(), Ansi16::Black.rgb()),
    Cell::new('█', Ansi16::Black.rgb(), Ansi16::Black.rgb()),
    Cell::new('█', Ansi16::Red.rgb(), Ansi16::Black.rgb()),
    Cell::new('█', Ansi16::Yellow.rgb(), Ansi16::Black.rgb()),
    Cell::new('█', Ansi16::Green.rgb(), Ansi16::Black.rgb()),
    Cell::new('█', Ansi16::Cyan.rgb(), Ansi16::Black.rgb()),
    Cell::new('█', Ansi16::Blue.rgb(), Ansi16::Black.rgb()),
    Cell::new('█', Ansi16::Magenta.rgb(), Ansi16::Black.rgb()),
    Cell::new('█', Ansi16::White.rgb(), Ansi16::Black.rgb()),
];

/// How many fast ticks pass between slow-counter ticks.
const SLOW_TICK_EVERY: u8 = 15;

/// The rainbow sweep and its two-byte cycle scratch.
#[derive(Debug, Clone)]
pub struct RainbowFx {
    cycle: Vec<u8>,
    index: ScratchIndex,
}

impl RainbowFx {
    /// Allocate the two-byte cycle scratch, zeroed.
    pub fn new(width: u16, height: u16) -> Result<Self, AllocationError> {
        Ok(Self {
            cycle: try_filled(0u8, 2)?,
            index: ScratchIndex::new(width, height),
        })
    }

    /// Dimensions the effect was initialized for.
    pub const fn index(&self) -> ScratchIndex {
        self.index
    }

    /// The (fast, slow) cycle counters.
    pub fn counters(&self) -> (u8, u8) {
        (self.cycle[0], self.cycle[1])
    }

    /// Advance one frame: fill every row with its stripe color, then tick
    /// the counters.
    ///
    /// No-op when the buffer no longer matches the initialized dimensions.
    pub fn advance(&mut self, buf: &mut Buffer) {
        if !self.index.matches(buf) {
            return;
        }

        let w = self.index.width();
        let h = self.index.height();
        if w == 0 || h == 0 {
            return;
        }

        let cells = buf.cells_mut();
        for y in 0..h {
            let color = ((8.0 / h as f64) * (y as f64 + self.cycle[1] as f64)) as usize
                % STRIPES.len();
            let start = self.index.at(0, y);
            cells[start..start + w as usize].fill(STRIPES[color]);
        }

        let height = self.index.height();
        if (self.cycle[0] as u16) < height {
            self.cycle[0] = self.cycle[0].wrapping_add(1);
            if self.cycle[0] % SLOW_TICK_EVERY == 0 {
                // Reset to the height (8-bit truncated) instead of ticking
                // below 1; the sweep restarts from the bottom.
                self.cycle[1] = if self.cycle[1] <= 1 {
                    height as u8
                } else {
                    self.cycle[1] - 1
                };
            }
        } else {
            self.cycle[0] = 0;
        }

        if self.cycle[1] < 1 {
            self.cycle[1] = height as u8;
        }
    }
}
