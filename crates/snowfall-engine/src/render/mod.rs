//! GPU rendering subsystem.
//!
//! Renderers consume `scene` descriptions and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - mesh geometry lives in world units; the orthographic camera maps one
//!   unit to one logical pixel
//! - fragment stages read physical pixels from `@builtin(position)`

mod ctx;
mod quad;
mod surface_renderer;

pub use ctx::{RenderCtx, RenderTarget};
pub use surface_renderer::SurfaceRenderer;
