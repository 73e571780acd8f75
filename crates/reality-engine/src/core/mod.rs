//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the
//! application that owns per-frame state.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
