//! Reality engine crate.
//!
//! Owns the window runtime and wgpu device layer, plus the small amount of
//! color and mesh math a frame loop drives once per redraw.

pub mod core;
pub mod device;
pub mod logging;
pub mod mesh;
pub mod paint;
pub mod render;
pub mod time;
pub mod window;
