use crate::surface::FrameUniforms;

use super::ShaderProgram;

/// Shader program bound to a snapshot of the surface uniforms.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub program: ShaderProgram,
    pub uniforms: FrameUniforms,
}
