//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into a
//! `RenderTarget` supplied by the frame context.
//!
//! Convention:
//! - CPU geometry is already in NDC.
//! - Color reaches the fragment stage through a uniform at group 0, binding 0.

mod ctx;
mod mesh_renderer;
mod shader;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh_renderer::MeshRenderer;
pub use shader::{ShaderError, WgslShader, FRAGMENT_ENTRY, VERTEX_ENTRY};
