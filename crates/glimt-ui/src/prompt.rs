#![forbid(unsafe_code)]

//! The composed prompt renderer.
//!
//! Draws the centered box, its labels and status line, the function-key
//! hints, the lock indicators, and the three fields. Every label renders
//! independently: an allocation failure skips that one element and the
//! rest of the frame still draws.

use tracing::{debug, warn};
use unicode_width::UnicodeWidthStr;

use glimt_core::console::{LedState, LockStateSource};
use glimt_render::buffer::Buffer;
use glimt_render::cell::Cell;

use crate::config::Config;
use crate::input::{draw_input, draw_input_mask, draw_selector};
use crate::labels::Labels;
use crate::layout::PromptLayout;
use crate::text::draw_text;

/// Per-frame prompt content supplied by the editing layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptState<'a> {
    /// Optional centered info/status line (e.g. the hostname).
    pub info_line: Option<&'a str>,
    /// Desktop session labels for the selector.
    pub sessions: &'a [&'a str],
    /// Index of the selected session.
    pub current_session: usize,
    /// Visible slice of the login value, starting at its scroll offset.
    pub login: &'a str,
    /// Number of password characters typed (cursor end).
    pub password_len: usize,
    /// Scroll offset of the password window.
    pub password_scroll: usize,
}

/// Renders the login prompt into a buffer.
#[derive(Debug, Clone, Copy)]
pub struct Prompt<'a> {
    config: &'a Config,
    labels: &'a Labels,
}

impl<'a> Prompt<'a> {
    /// Create a prompt renderer over resolved configuration and strings.
    pub fn new(config: &'a Config, labels: &'a Labels) -> Self {
        Self { config, labels }
    }

    /// Draw the box frame and, if configured, blank its interior.
    pub fn draw_box(&self, buf: &mut Buffer, layout: &PromptLayout) {
        use glimt_render::drawing::Draw;

        if !self.config.hide_borders {
            buf.draw_border_outside(
                layout.rect,
                self.config.border_chars,
                self.config.fg,
                self.config.bg,
            );
        }

        if self.config.blank_box {
            buf.fill(layout.rect, Cell::blank(self.config.fg, self.config.bg));
        }
    }

    /// Draw the field labels and the optional centered info line.
    pub fn draw_labels(&self, buf: &mut Buffer, layout: &PromptLayout, info_line: Option<&str>) {
        let x = layout.rect.x + self.config.margin_box_h;

        if let Err(err) = draw_text(
            buf,
            x,
            layout.rect.y + self.config.margin_box_v + 4,
            &self.labels.login,
            self.config.fg,
            self.config.bg,
        ) {
            warn!(%err, "skipping login label");
        }

        if let Err(err) = draw_text(
            buf,
            x,
            layout.rect.y + self.config.margin_box_v + 6,
            &self.labels.password,
            self.config.fg,
            self.config.bg,
        ) {
            warn!(%err, "skipping password label");
        }

        if let Some(info) = info_line {
            self.draw_info_line(buf, layout, info);
        }
    }

    fn draw_info_line(&self, buf: &mut Buffer, layout: &PromptLayout, info: &str) {
        let len = info.width() as u16;
        let x = layout.rect.x + layout.rect.width.saturating_sub(len) / 2;
        if let Err(err) = draw_text(
            buf,
            x,
            layout.rect.y + self.config.margin_box_v,
            info,
            self.config.fg,
            self.config.bg,
        ) {
            warn!(%err, "skipping info line");
        }
    }

    /// Draw the two function-key hints at the top-left corner, side by
    /// side; the second starts one column after the first ends.
    pub fn draw_hints(&self, buf: &mut Buffer) {
        if let Err(err) = draw_text(buf, 0, 0, &self.labels.f1, self.config.fg, self.config.bg) {
            warn!(%err, "skipping first hint");
        }

        let x = self.labels.f1.width() as u16 + 1;
        if let Err(err) = draw_text(buf, x, 0, &self.labels.f2, self.config.fg, self.config.bg) {
            warn!(%err, "skipping second hint");
        }
    }

    /// Query the lock LEDs and draw the indicators right-aligned at the
    /// top edge with a one-column gap between them.
    ///
    /// On a device error the explanatory string takes the info-line slot
    /// instead of the indicators.
    pub fn draw_lock_state(
        &self,
        buf: &mut Buffer,
        layout: &PromptLayout,
        source: &dyn LockStateSource,
    ) {
        let leds = match source.read_lock_state() {
            Ok(leds) => leds,
            Err(err) => {
                debug!(%err, "lock state unavailable");
                self.draw_info_line(buf, layout, &self.labels.err_console_dev);
                return;
            }
        };

        let mut pos_x = buf.width().saturating_sub(self.labels.numlock.width() as u16);
        if leds.contains(LedState::NUMLOCK) {
            if let Err(err) = draw_text(
                buf,
                pos_x,
                0,
                &self.labels.numlock,
                self.config.fg,
                self.config.bg,
            ) {
                warn!(%err, "skipping numlock indicator");
            }
        }

        pos_x = pos_x.saturating_sub(self.labels.capslock.width() as u16 + 1);
        if leds.contains(LedState::CAPSLOCK) {
            if let Err(err) = draw_text(
                buf,
                pos_x,
                0,
                &self.labels.capslock,
                self.config.fg,
                self.config.bg,
            ) {
                warn!(%err, "skipping capslock indicator");
            }
        }
    }

    /// Render one full prompt frame and return the layout it used.
    pub fn render(
        &self,
        buf: &mut Buffer,
        source: &dyn LockStateSource,
        state: &PromptState<'_>,
    ) -> PromptLayout {
        let layout = PromptLayout::for_buffer(buf, self.labels, self.config);

        self.draw_box(buf, &layout);
        self.draw_labels(buf, &layout, state.info_line);
        self.draw_hints(buf);
        self.draw_lock_state(buf, &layout, source);

        if let Some(slots) = layout.position_fields(self.config) {
            let session = state
                .sessions
                .get(state.current_session)
                .copied()
                .unwrap_or("");
            draw_selector(buf, slots.selector, session, self.config.fg, self.config.bg);

            if let Err(err) = draw_input(buf, slots.login, state.login, self.config.fg, self.config.bg)
            {
                warn!(%err, "skipping login field");
            }

            draw_input_mask(
                buf,
                slots.password,
                state.password_len,
                state.password_scroll,
                self.config.asterisk,
                self.config.fg,
                self.config.bg,
            );
        }

        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimt_core::console::DeviceError;

    fn row_string(buf: &Buffer, y: u16) -> String {
        buf.row_cells(y).iter().map(|c| c.ch).collect()
    }

    fn leds(state: LedState) -> impl LockStateSource {
        move || -> Result<LedState, DeviceError> { Ok(state) }
    }

    #[test]
    fn hints_sit_side_by_side() {
        let config = Config::default();
        let labels = Labels::default();
        let mut buf = Buffer::new(60, 20);
        Prompt::new(&config, &labels).draw_hints(&mut buf);

        let row = row_string(&buf, 0);
        assert!(row.starts_with("F1 shutdown F2 reboot"));
    }

    #[test]
    fn labels_land_on_their_template_rows() {
        let config = Config::default();
        let labels = Labels::default();
        let mut buf = Buffer::new(80, 24);
        let prompt = Prompt::new(&config, &labels);
        let layout = PromptLayout::for_buffer(&buf, &labels, &config);
        prompt.draw_labels(&mut buf, &layout, None);

        let login_row = row_string(&buf, layout.rect.y + config.margin_box_v + 4);
        let password_row = row_string(&buf, layout.rect.y + config.margin_box_v + 6);
        assert!(login_row.contains("login:"));
        assert!(password_row.contains("password:"));
    }

    #[test]
    fn info_line_is_centered_in_the_box() {
        let config = Config::default();
        let labels = Labels::default();
        let mut buf = Buffer::new(80, 24);
        let prompt = Prompt::new(&config, &labels);
        let layout = PromptLayout::for_buffer(&buf, &labels, &config);
        prompt.draw_labels(&mut buf, &layout, Some("myhost"));

        let row = row_string(&buf, layout.rect.y + config.margin_box_v);
        // column of the first glyph, counted in cells (the border glyphs
        // are multibyte, so byte offsets would lie)
        let start = row
            .chars()
            .collect::<Vec<_>>()
            .windows(6)
            .position(|w| w.iter().collect::<String>() == "myhost")
            .unwrap() as u16;
        let left = start - layout.rect.x;
        let right = layout.rect.right() - (start + 6);
        assert!(left.abs_diff(right) <= 1);
    }

    #[test]
    fn lit_leds_draw_right_aligned_indicators() {
        let config = Config::default();
        let labels = Labels::default();
        let mut buf = Buffer::new(60, 20);
        let prompt = Prompt::new(&config, &labels);
        let layout = PromptLayout::for_buffer(&buf, &labels, &config);
        prompt.draw_lock_state(
            &mut buf,
            &layout,
            &leds(LedState::NUMLOCK | LedState::CAPSLOCK),
        );

        let row = row_string(&buf, 0);
        assert!(row.ends_with("capslock numlock"));
    }

    #[test]
    fn unlit_leds_draw_nothing() {
        let config = Config::default();
        let labels = Labels::default();
        let mut buf = Buffer::new(60, 20);
        let prompt = Prompt::new(&config, &labels);
        let layout = PromptLayout::for_buffer(&buf, &labels, &config);
        prompt.draw_lock_state(&mut buf, &layout, &leds(LedState::empty()));

        assert!(buf.cells().iter().all(Cell::is_blank));
    }

    #[test]
    fn device_error_substitutes_the_status_line() {
        let config = Config::default();
        let labels = Labels::default();
        let mut buf = Buffer::new(80, 24);
        let prompt = Prompt::new(&config, &labels);
        let layout = PromptLayout::for_buffer(&buf, &labels, &config);
        let failing = || -> Result<LedState, DeviceError> {
            Err(DeviceError::Unavailable("/dev/console".into()))
        };
        prompt.draw_lock_state(&mut buf, &layout, &failing);

        let info_row = row_string(&buf, layout.rect.y + config.margin_box_v);
        assert!(info_row.contains("failed to access console device"));
        assert!(!row_string(&buf, 0).contains("numlock"));
    }

    #[test]
    fn full_render_draws_every_element() {
        let config = Config {
            margin_box_h: 1,
            margin_box_v: 1,
            input_len: 20,
            ..Config::default()
        };
        let labels = Labels::default();
        let prompt = Prompt::new(&config, &labels);
        let mut buf = Buffer::new(60, 20);
        let state = PromptState {
            info_line: Some("myhost"),
            sessions: &["xfce", "sway"],
            current_session: 1,
            login: "ada",
            password_len: 4,
            password_scroll: 0,
        };
        let layout = prompt.render(&mut buf, &leds(LedState::NUMLOCK), &state);

        let slots = layout.position_fields(&config).unwrap();
        assert_eq!(buf.get(slots.selector.x, slots.selector.y).unwrap().ch, '<');
        let selector_row = row_string(&buf, slots.selector.y);
        assert!(selector_row.contains("sway"));
        let login_row = row_string(&buf, slots.login.y);
        assert!(login_row.contains("ada"));
        let password_row = row_string(&buf, slots.password.y);
        assert!(password_row.contains("****"));
        assert!(row_string(&buf, 0).contains("numlock"));
    }
}
