//! Color model shared between the frame loop and renderers.
//!
//! Scope:
//! - straight-alpha RGBA color with named constants
//! - per-frame channel rotation with selectable overflow policy

pub mod color;
pub mod rotate;

pub use color::Color;
pub use rotate::{
    rotate, rotate_digit_wrap, rotate_with, rotate_wrap, Overflow, RgbChannels, Rotation,
};
