#![forbid(unsafe_code)]

//! glimt public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude.

// --- Core re-exports -------------------------------------------------------

pub use glimt_core::animation::AnimationKind;
pub use glimt_core::console::{DeviceError, LedState, LockStateSource};
pub use glimt_core::geometry::Rect;

// --- Render re-exports -----------------------------------------------------

pub use glimt_render::alloc::AllocationError;
pub use glimt_render::buffer::Buffer;
pub use glimt_render::cell::{Cell, PackedRgba};
pub use glimt_render::drawing::{BorderChars, Draw};
pub use glimt_render::palette::{ANSI16_PALETTE, Ansi16};

// --- UI re-exports ---------------------------------------------------------

pub use glimt_ui::config::Config;
pub use glimt_ui::input::FieldView;
pub use glimt_ui::labels::Labels;
pub use glimt_ui::layout::{FieldSlots, PromptLayout};
pub use glimt_ui::prompt::{Prompt, PromptState};

// --- FX re-exports ---------------------------------------------------------

pub use glimt_fx::{Animator, Cascade, CascadeStatus, FireFx, RainbowFx, SceneFx, ScratchIndex};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AnimationKind, Animator, Buffer, Cascade, CascadeStatus, Cell, Config, Labels, LedState,
        LockStateSource, PackedRgba, Prompt, PromptLayout, PromptState, Rect,
    };
}
