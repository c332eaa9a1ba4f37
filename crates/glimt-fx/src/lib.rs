#![forbid(unsafe_code)]

//! Per-frame visual effects and the cascade transition.
//!
//! An [`Animator`] owns one effect and the scratch state it persists
//! between frames. The scratch is tagged with the dimensions it was sized
//! for; a frame arriving after a terminal resize is dropped silently until
//! the caller re-initializes. Scratch is released by ownership, exactly
//! once, when the animator is dropped.

pub mod cascade;
pub mod fire;
pub mod rainbow;
mod rng;
pub mod scene;

pub use cascade::{Cascade, CascadeStatus};
pub use fire::FireFx;
pub use rainbow::RainbowFx;
pub use scene::SceneFx;

use tracing::trace;

use glimt_core::animation::AnimationKind;
use glimt_render::alloc::AllocationError;
use glimt_render::buffer::Buffer;

/// A `(x, y) -> index` accessor tagged with the dimensions it was built
/// for.
///
/// Effects address their scratch (and the grid's raw cells) only through
/// an index created at initialization time, which makes the stale-geometry
/// guard a property of the accessor rather than an ad hoc comparison at
/// every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScratchIndex {
    width: u16,
    height: u16,
}

impl ScratchIndex {
    /// Record the dimensions addressing will be valid for.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Recorded width.
    #[inline]
    pub const fn width(self) -> u16 {
        self.width
    }

    /// Recorded height.
    #[inline]
    pub const fn height(self) -> u16 {
        self.height
    }

    /// Cells addressable under these dimensions.
    #[inline]
    pub const fn len(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when the recorded area is zero.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether a buffer still has the recorded dimensions.
    #[inline]
    pub fn matches(self, buf: &Buffer) -> bool {
        buf.width() == self.width && buf.height() == self.height
    }

    /// Linear index of (x, y) under the recorded dimensions.
    #[inline]
    pub const fn at(self, x: u16, y: u16) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }
}

enum Fx {
    Fire(FireFx),
    Rainbow(RainbowFx),
    Scene(SceneFx),
}

/// One background animation: kind, effect state, and dimension-tagged
/// scratch.
pub struct Animator {
    kind: AnimationKind,
    fx: Fx,
}

impl Animator {
    /// Initialize an animation for the current terminal dimensions.
    ///
    /// Allocates the per-kind scratch (one byte per cell for fire, two
    /// bytes otherwise) and records the dimensions it is valid for.
    pub fn new(
        kind: AnimationKind,
        width: u16,
        height: u16,
        seed: u32,
    ) -> Result<Self, AllocationError> {
        let fx = match kind {
            AnimationKind::Fire => Fx::Fire(FireFx::new(width, height, seed)?),
            AnimationKind::Rainbow => Fx::Rainbow(RainbowFx::new(width, height)?),
            AnimationKind::Scene => Fx::Scene(SceneFx::new(width, height)?),
        };
        Ok(Self { kind, fx })
    }

    /// Which effect this animator runs.
    pub const fn kind(&self) -> AnimationKind {
        self.kind
    }

    /// The dimensions recorded at initialization.
    pub const fn index(&self) -> ScratchIndex {
        match &self.fx {
            Fx::Fire(fx) => fx.index(),
            Fx::Rainbow(fx) => fx.index(),
            Fx::Scene(fx) => fx.index(),
        }
    }

    /// Bytes of scratch persisted between frames.
    pub fn scratch_len(&self) -> usize {
        match &self.fx {
            Fx::Fire(fx) => fx.levels().len(),
            Fx::Rainbow(_) => 2,
            Fx::Scene(fx) => fx.scratch_len(),
        }
    }

    /// Advance the animation by one frame.
    ///
    /// A frame whose buffer no longer matches the recorded dimensions is
    /// dropped; the animation freezes until the caller re-initializes for
    /// the new geometry.
    pub fn advance(&mut self, buf: &mut Buffer) {
        if !self.index().matches(buf) {
            trace!(
                init_width = self.index().width(),
                init_height = self.index().height(),
                width = buf.width(),
                height = buf.height(),
                "dropping stale animation frame"
            );
            return;
        }

        match &mut self.fx {
            Fx::Fire(fx) => fx.advance(buf),
            Fx::Rainbow(fx) => fx.advance(buf),
            Fx::Scene(fx) => fx.advance(buf),
        }
    }
}
