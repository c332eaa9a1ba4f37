#![forbid(unsafe_code)]

//! Runtime configuration.
//!
//! Loading these values from disk belongs to the embedding application;
//! the engine only consumes the resolved struct.

use std::path::PathBuf;

use glimt_core::animation::AnimationKind;
use glimt_render::cell::PackedRgba;
use glimt_render::drawing::BorderChars;
use glimt_render::palette::Ansi16;

/// Resolved prompt configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Horizontal interior margin of the box, in cells.
    pub margin_box_h: u16,
    /// Vertical interior margin of the box, in cells.
    pub margin_box_v: u16,
    /// Width of the input fields, in cells.
    pub input_len: u16,
    /// Skip drawing the frame around the box.
    pub hide_borders: bool,
    /// Blank the box interior before drawing on it.
    pub blank_box: bool,
    /// Foreground color for prompt text.
    pub fg: PackedRgba,
    /// Background color for prompt text.
    pub bg: PackedRgba,
    /// Mask glyph for the password field.
    pub asterisk: char,
    /// Run a background animation.
    pub animate: bool,
    /// Which animation to run when `animate` is set.
    pub animation: AnimationKind,
    /// Console device queried for the keyboard lock LEDs.
    pub console_dev: PathBuf,
    /// Glyph set for the box frame.
    pub border_chars: BorderChars,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            margin_box_h: 2,
            margin_box_v: 1,
            input_len: 34,
            hide_borders: false,
            blank_box: true,
            fg: Ansi16::White.rgb(),
            bg: Ansi16::Black.rgb(),
            asterisk: '*',
            animate: false,
            animation: AnimationKind::default(),
            console_dev: PathBuf::from("/dev/console"),
            border_chars: BorderChars::SQUARE,
        }
    }
}
