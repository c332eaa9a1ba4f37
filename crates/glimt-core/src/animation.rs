#![forbid(unsafe_code)]

//! Animation vocabulary shared by the effect engine and its callers.

/// Which per-frame background effect an animator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationKind {
    /// Cellular-automaton fire rising from the bottom row.
    #[default]
    Fire,
    /// Color-cycling horizontal stripe sweep.
    Rainbow,
    /// Static decorative scene, rescaled from current dimensions.
    Scene,
}

impl AnimationKind {
    /// Bytes of scratch state this effect persists between frames.
    ///
    /// Fire keeps one intensity byte per cell; the other effects keep two
    /// cycle counters (the scene allocates them but never reads them).
    #[must_use]
    pub const fn scratch_len(self, width: u16, height: u16) -> usize {
        match self {
            Self::Fire => width as usize * height as usize,
            Self::Rainbow | Self::Scene => 2,
        }
    }
}
