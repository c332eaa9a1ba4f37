#![forbid(unsafe_code)]

//! Fallible allocation for cell runs and effect scratch.
//!
//! Rendering one label or initializing one effect must be allowed to fail
//! without taking the frame down with it: allocation goes through
//! `try_reserve_exact` and surfaces [`AllocationError`] instead of
//! aborting. Nothing is written on failure.

use std::collections::TryReserveError;
use std::fmt;

/// A cell-run or scratch buffer could not be allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationError(TryReserveError);

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buffer allocation failed: {}", self.0)
    }
}

impl std::error::Error for AllocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<TryReserveError> for AllocationError {
    fn from(err: TryReserveError) -> Self {
        Self(err)
    }
}

/// Allocate a vector of `len` copies of `value`, fallibly.
pub fn try_filled<T: Clone>(value: T, len: usize) -> Result<Vec<T>, AllocationError> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)?;
    out.resize(len, value);
    Ok(out)
}
