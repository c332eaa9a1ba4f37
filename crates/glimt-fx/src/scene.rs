#![forbid(unsafe_code)]

//! Static decorative scene.
//!
//! A fixed composition — three kinds of stars, a six-band rainbow stripe,
//! and a blocky figure — positioned as proportional fractions of the
//! current width and height so it rescales with the terminal. The whole
//! scene is recomputed every frame; the scratch buffer is allocated for
//! lifecycle parity with the other effects but never read.

use glimt_render::alloc::{AllocationError, try_filled};
use glimt_render::buffer::Buffer;
use glimt_render::cell::Cell;
use glimt_render::palette::Ansi16;

use crate::ScratchIndex;

const RED: Cell = Cell::new('█', Ansi16::Red.rgb(), Ansi16::Black.rgb());
const ORANGE: Cell = Cell::new('▒', Ansi16::Red.rgb(), Ansi16::Yellow.rgb());
const YELLOW: Cell = Cell::new('█', Ansi16::Yellow.rgb(), Ansi16::Black.rgb());
const GREEN: Cell = Cell::new('█', Ansi16::Green.rgb(), Ansi16::Black.rgb());
const BLUE: Cell = Cell::new('█', Ansi16::Blue.rgb(), Ansi16::Black.rgb());
const MAGENTA: Cell = Cell::new('█', Ansi16::Magenta.rgb(), Ansi16::Black.rgb());
const WHITE: Cell = Cell::new('█', Ansi16::White.rgb(), Ansi16::Black.rgb());
const GREY: Cell = Cell::new('▒', Ansi16::White.rgb(), Ansi16::Black.rgb());
const PINK: Cell = Cell::new('▒', Ansi16::Red.rgb(), Ansi16::White.rgb());

/// The scene effect.
#[derive(Debug, Clone)]
pub struct SceneFx {
    scratch: Vec<u8>,
    index: ScratchIndex,
}

impl SceneFx {
    /// Allocate the (unread) two-byte scratch.
    pub fn new(width: u16, height: u16) -> Result<Self, AllocationError> {
        Ok(Self {
            scratch: try_filled(0u8, 2)?,
            index: ScratchIndex::new(width, height),
        })
    }

    /// Dimensions the effect was initialized for.
    pub const fn index(&self) -> ScratchIndex {
        self.index
    }

    /// Bytes of scratch kept between frames.
    pub fn scratch_len(&self) -> usize {
        self.scratch.len()
    }

    /// Redraw the whole scene.
    ///
    /// No-op when the buffer no longer matches the initialized dimensions.
    /// Every write is bounds-checked and skipped off-grid, so tiny
    /// terminals degrade to a partial scene instead of panicking.
    pub fn advance(&mut self, buf: &mut Buffer) {
        if !self.index.matches(buf) {
            return;
        }

        let w = self.index.width() as i64;
        let h = self.index.height() as i64;
        if w == 0 || h == 0 {
            return;
        }

        self.draw_stars(buf, w, h);
        self.draw_rainbow_bands(buf, w, h);
        self.draw_figure(buf, w, h);
    }

    fn put(buf: &mut Buffer, x: i64, y: i64, cell: Cell) {
        if x >= 0 && y >= 0 && x <= u16::MAX as i64 && y <= u16::MAX as i64 {
            buf.set(x as u16, y as u16, cell);
        }
    }

    /// Three star shapes per row band: a dot, a hollow plus, and an
    /// octagon, anchored near the right edge.
    fn draw_stars(&self, buf: &mut Buffer, w: i64, h: i64) {
        let x = w - 10;

        for k in 1..8 {
            let row = (h / 7) * k;

            // dot
            Self::put(buf, x, row, WHITE);

            // hollow plus
            Self::put(buf, x - 12, row, WHITE);
            Self::put(buf, x - 14, row, WHITE);
            Self::put(buf, x - 13, row + 1, WHITE);
            Self::put(buf, x - 13, row - 1, WHITE);

            // octagon
            Self::put(buf, x - 21, row, WHITE);
            Self::put(buf, x - 25, row, WHITE);
            Self::put(buf, x - 23, row + 2, WHITE);
            Self::put(buf, x - 23, row - 2, WHITE);
            Self::put(buf, x - 22, row + 1, WHITE);
            Self::put(buf, x - 22, row - 1, WHITE);
            Self::put(buf, x - 24, row + 1, WHITE);
            Self::put(buf, x - 24, row - 1, WHITE);
        }
    }

    /// Six horizontal bands over the left half, two rows apart.
    fn draw_rainbow_bands(&self, buf: &mut Buffer, w: i64, h: i64) {
        const BANDS: [Cell; 6] = [RED, ORANGE, YELLOW, GREEN, BLUE, MAGENTA];

        for x in 0..(4 * w / 8) {
            for y in (20 * h / 32)..(21 * h / 32) {
                for (i, band) in BANDS.iter().enumerate() {
                    Self::put(buf, x, y + 2 * i as i64, *band);
                }
            }
        }
    }

    /// The blocky figure: body, head, feet.
    fn draw_figure(&self, buf: &mut Buffer, w: i64, h: i64) {
        for x in (8 * w / 16)..(11 * w / 16) {
            for y in (10 * h / 16)..(14 * h / 16) {
                Self::put(buf, x, y, PINK);
            }
        }

        for x in (20 * w / 32)..(23 * w / 32) {
            for y in (23 * h / 32)..(28 * h / 32) {
                Self::put(buf, x, y, GREY);
            }
        }

        for x in (16 * w / 32)..(17 * w / 32) {
            for y in (28 * h / 32)..(29 * h / 32) {
                Self::put(buf, x, y, GREY);
                Self::put(buf, x + 3 * w / 64, y, GREY);
                Self::put(buf, x + 7 * w / 64, y, GREY);
                Self::put(buf, x + 5 * w / 32, y, GREY);
            }
        }
    }
}
