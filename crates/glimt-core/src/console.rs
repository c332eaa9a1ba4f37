#![forbid(unsafe_code)]

//! Console keyboard-LED capability.
//!
//! Reading the LED state requires a console device ioctl, which is an
//! OS-facing concern owned by the embedding application. The renderer
//! consumes the [`LockStateSource`] trait and degrades to an explanatory
//! status line when the query fails.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Keyboard lock LEDs.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LedState: u8 {
        const NUMLOCK = 1 << 0;
        const CAPSLOCK = 1 << 1;
    }
}

/// Errors from querying the console device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The device could not be opened.
    Unavailable(String),
    /// The query itself failed.
    Io(String),
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(dev) => write!(f, "console device unavailable: {dev}"),
            Self::Io(msg) => write!(f, "console device query failed: {msg}"),
        }
    }
}

impl std::error::Error for DeviceError {}

/// Source of the current keyboard lock-LED state.
pub trait LockStateSource {
    /// Query numlock/capslock state from the console device.
    fn read_lock_state(&self) -> Result<LedState, DeviceError>;
}

impl<F> LockStateSource for F
where
    F: Fn() -> Result<LedState, DeviceError>,
{
    fn read_lock_state(&self) -> Result<LedState, DeviceError> {
        self()
    }
}
