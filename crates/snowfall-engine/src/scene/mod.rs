//! Scene description handed from the shader surface to the renderer.
//!
//! Responsibilities:
//! - describe what to draw (one mesh, one material) without touching the GPU
//! - stay a plain value so descriptions can be compared and cached

mod material;
mod mesh;
mod program;

pub use material::Material;
pub use mesh::{Mesh, PlaneGeometry};
pub use program::ShaderProgram;

/// Everything the renderer needs for one frame of the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDescription {
    pub mesh: Mesh,
    pub material: Material,
}
