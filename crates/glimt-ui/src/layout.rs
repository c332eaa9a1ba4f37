#![forbid(unsafe_code)]

//! Prompt box geometry.
//!
//! Pure functions of terminal size, label widths, and the configured
//! margins. A box larger than the terminal is a degraded layout, not an
//! error: the origin clamps to 0 and callers skip fields whose visible
//! window would be negative.

use unicode_width::UnicodeWidthStr;

use glimt_core::geometry::Rect;
use glimt_render::buffer::Buffer;

use crate::config::Config;
use crate::input::FieldView;
use crate::labels::Labels;

/// Computed geometry of the centered prompt box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptLayout {
    /// The box rectangle, centered in the terminal.
    pub rect: Rect,
    /// Display width of the wider of the two field labels.
    pub labels_max_len: u16,
}

/// The three positioned input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSlots {
    /// Desktop-session selector.
    pub selector: FieldView,
    /// Login field.
    pub login: FieldView,
    /// Password field.
    pub password: FieldView,
}

impl PromptLayout {
    /// Compute the box geometry for the given terminal size.
    ///
    /// `width = 2 * margin_h + (input_len + 1) + max(label widths)`,
    /// `height = 7 + 2 * margin_v`, centered with truncating division.
    pub fn compute(
        terminal_width: u16,
        terminal_height: u16,
        labels: &Labels,
        config: &Config,
    ) -> Self {
        let len_login = labels.login.width() as u16;
        let len_password = labels.password.width() as u16;
        let labels_max_len = len_login.max(len_password);

        let box_width = config
            .margin_box_h
            .saturating_mul(2)
            .saturating_add(config.input_len.saturating_add(1))
            .saturating_add(labels_max_len);
        let box_height = 7u16.saturating_add(config.margin_box_v.saturating_mul(2));

        Self {
            rect: Rect::centered_in(terminal_width, terminal_height, box_width, box_height),
            labels_max_len,
        }
    }

    /// Convenience: compute the layout for a buffer's current size.
    pub fn for_buffer(buf: &Buffer, labels: &Labels, config: &Config) -> Self {
        Self::compute(buf.width(), buf.height(), labels, config)
    }

    /// Anchor the three fields inside the box.
    ///
    /// Fields share one column, `box.x + margin_h + labels_max_len + 1`,
    /// and sit on fixed rows of the box template: selector at
    /// `margin_v + 2`, login at `+ 4`, password at `+ 6`. Returns `None`
    /// when the visible window would be negative; callers skip rendering
    /// the fields entirely in that case.
    pub fn position_fields(&self, config: &Config) -> Option<FieldSlots> {
        let x = self.rect.x as i32 + config.margin_box_h as i32 + self.labels_max_len as i32 + 1;
        let visible_len =
            self.rect.x as i32 + self.rect.width as i32 - config.margin_box_h as i32 - x;

        if visible_len < 0 {
            return None;
        }

        let x = x as u16;
        let visible_len = visible_len as u16;
        let field = |y: u16| FieldView {
            x,
            y,
            visible_len,
        };

        Some(FieldSlots {
            selector: field(self.rect.y + config.margin_box_v + 2),
            login: field(self.rect.y + config.margin_box_v + 4),
            password: field(self.rect.y + config.margin_box_v + 6),
        })
    }
}
