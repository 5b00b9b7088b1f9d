//! Shader surface.
//!
//! Drives a full-screen shader by feeding it elapsed time and the physical
//! resolution of the window every frame. The surface owns its uniform record
//! exclusively; the host passes it by reference into each tick and render.
//!
//! Per frame:
//! - `tick()` once, with the host's frame delta (`tick_or_mount()` also
//!   creates the surface on the first frame)
//! - `render()` to obtain the scene description for the renderer

mod providers;
mod uniforms;

pub use providers::{DevicePixelRatioProvider, WindowSizeProvider};
pub use uniforms::{FrameUniforms, GpuUniforms};

use crate::coords::Viewport;
use crate::scene::{Material, Mesh, PlaneGeometry, SceneDescription, ShaderProgram};

/// Owns the uniform record and the program it feeds.
#[derive(Debug, Clone)]
pub struct ShaderSurface {
    program: ShaderProgram,
    uniforms: FrameUniforms,
}

impl ShaderSurface {
    pub fn new(
        program: ShaderProgram,
        size: &impl WindowSizeProvider,
        dpr: &impl DevicePixelRatioProvider,
    ) -> Self {
        Self {
            program,
            uniforms: FrameUniforms::initialize(size.window_size(), dpr.device_pixel_ratio()),
        }
    }

    pub fn uniforms(&self) -> &FrameUniforms {
        &self.uniforms
    }

    /// Advances the surface by one frame, reading size and ratio now.
    pub fn tick(
        &mut self,
        delta_seconds: f32,
        size: &impl WindowSizeProvider,
        dpr: &impl DevicePixelRatioProvider,
    ) {
        self.uniforms
            .tick(delta_seconds, size.window_size(), dpr.device_pixel_ratio());
    }

    pub fn render(&self, viewport: Viewport) -> SceneDescription {
        render(&self.uniforms, &self.program, viewport.width, viewport.height)
    }
}

/// Runs one frame of the surface held in `slot`.
///
/// The first call mounts the surface from the providers' current values;
/// every call, the first included, then ticks it with `delta_seconds`.
pub fn tick_or_mount<'s>(
    slot: &'s mut Option<ShaderSurface>,
    program: &ShaderProgram,
    delta_seconds: f32,
    size: &impl WindowSizeProvider,
    dpr: &impl DevicePixelRatioProvider,
) -> &'s mut ShaderSurface {
    let surface = slot.get_or_insert_with(|| {
        let surface = ShaderSurface::new(program.clone(), size, dpr);
        log::debug!(
            "shader surface '{}' mounted at {}x{} physical px",
            program.label,
            surface.uniforms.resolution.x,
            surface.uniforms.resolution.y
        );
        surface
    });
    surface.tick(delta_seconds, size, dpr);
    surface
}

/// Projects uniforms + program into a unit plane scaled to the viewport.
///
/// Pure: `uniforms` is only read.
pub fn render(
    uniforms: &FrameUniforms,
    program: &ShaderProgram,
    viewport_width: f32,
    viewport_height: f32,
) -> SceneDescription {
    SceneDescription {
        mesh: Mesh {
            geometry: PlaneGeometry::UNIT,
            scale: [viewport_width, viewport_height, 1.0],
        },
        material: Material {
            program: program.clone(),
            uniforms: *uniforms,
        },
    }
}
