//! End-to-end frame rendering against a 40x10 terminal.

use glimt::DeviceError;
use glimt::prelude::*;

fn leds(state: LedState) -> impl LockStateSource {
    move || -> Result<LedState, DeviceError> { Ok(state) }
}

fn reference_config() -> Config {
    Config {
        margin_box_h: 1,
        margin_box_v: 1,
        input_len: 20,
        ..Config::default()
    }
}

fn reference_labels() -> Labels {
    Labels {
        login: "Login:".into(),
        password: "Password:".into(),
        ..Labels::default()
    }
}

fn row_string(buf: &Buffer, y: u16) -> String {
    buf.row_cells(y).iter().map(|c| c.ch).collect()
}

#[test]
fn reference_box_geometry() {
    let config = reference_config();
    let labels = reference_labels();
    let layout = PromptLayout::compute(40, 10, &labels, &config);

    assert_eq!(layout.rect.width, 32);
    assert_eq!(layout.rect.height, 9);
    assert_eq!(layout.rect.x, 4);
    assert_eq!(layout.rect.y, 0);
}

#[test]
fn full_frame_renders_all_elements() {
    let config = reference_config();
    let labels = reference_labels();
    let prompt = Prompt::new(&config, &labels);
    let mut buf = Buffer::new(40, 10);

    let state = PromptState {
        info_line: Some("darkstar"),
        sessions: &["i3", "xfce"],
        current_session: 0,
        login: "ada",
        password_len: 5,
        password_scroll: 0,
    };
    let layout = prompt.render(&mut buf, &leds(LedState::CAPSLOCK), &state);
    let slots = layout.position_fields(&config).unwrap();

    // labels on their rows
    assert!(row_string(&buf, slots.login.y).contains("Login:"));
    assert!(row_string(&buf, slots.password.y).contains("Password:"));

    // info line centered inside the box
    assert!(row_string(&buf, layout.rect.y + 1).contains("darkstar"));

    // selector rails around the current session
    let selector_row = row_string(&buf, slots.selector.y);
    assert!(selector_row.contains("< i3"));
    assert!(selector_row.contains('>'));

    // login value and exactly five mask glyphs
    assert!(row_string(&buf, slots.login.y).contains("ada"));
    let masks = row_string(&buf, slots.password.y)
        .chars()
        .filter(|&c| c == '*')
        .count();
    assert_eq!(masks, 5);

    // hints top-left, capslock indicator top-right
    let top = row_string(&buf, 0);
    assert!(top.starts_with("F1 shutdown F2 reboot"));
    assert!(top.contains("capslock"));
    assert!(!top.contains("numlock"));
}

#[test]
fn animation_lifecycle_against_the_prompt() {
    let mut buf = Buffer::new(40, 10);

    let mut animator = Animator::new(AnimationKind::Fire, 40, 10, 0xA5).unwrap();
    for _ in 0..30 {
        animator.advance(&mut buf);
    }
    assert!(buf.cells().iter().any(|c| !c.is_blank()));

    // a resize freezes the animation until re-initialization
    let mut resized = Buffer::new(39, 10);
    animator.advance(&mut resized);
    assert!(resized.cells().iter().all(|c| c.is_blank()));

    let mut animator = Animator::new(AnimationKind::Fire, 39, 10, 0xA5).unwrap();
    animator.advance(&mut resized);
    assert!(resized.cells().iter().any(|c| !c.is_blank()));
}

#[test]
fn cascade_collapses_a_rendered_frame() {
    let config = reference_config();
    let labels = reference_labels();
    let prompt = Prompt::new(&config, &labels);
    let mut buf = Buffer::new(40, 10);

    let state = PromptState {
        info_line: None,
        sessions: &["i3"],
        current_session: 0,
        login: "ada",
        password_len: 3,
        password_scroll: 0,
    };
    prompt.render(&mut buf, &leds(LedState::empty()), &state);

    let glyphs_before = buf.cells().iter().filter(|c| !c.is_blank()).count();
    assert!(glyphs_before > 0);

    let mut cascade = Cascade::new(0xD0D0);
    let mut frames = 0;
    while cascade.advance(&mut buf).is_running() {
        frames += 1;
        assert!(frames < 10_000, "cascade failed to settle");
    }

    // every glyph survived the fall and ended in a settled pile
    let glyphs_after = buf.cells().iter().filter(|c| !c.is_blank()).count();
    assert_eq!(glyphs_before, glyphs_after);

    // settled means no glyph sits above a blank cell
    for y in 0..9u16 {
        for x in 0..40u16 {
            let above = buf.get(x, y).unwrap();
            let below = buf.get(x, y + 1).unwrap();
            assert!(
                above.is_blank() || !below.is_blank(),
                "unsettled glyph at ({x}, {y})"
            );
        }
    }

    // the driving loop owns the settle pause
    assert_eq!(Cascade::SETTLE_COOLDOWN.as_secs(), 7);
}
