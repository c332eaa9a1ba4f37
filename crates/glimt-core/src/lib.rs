#![forbid(unsafe_code)]

//! Core: geometry, animation vocabulary, and console capabilities.

pub mod animation;
pub mod console;
pub mod geometry;
