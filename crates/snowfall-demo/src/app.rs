use snowfall_engine::core::{App, AppControl, FrameCtx};
use snowfall_engine::render::SurfaceRenderer;
use snowfall_engine::scene::ShaderProgram;
use snowfall_engine::surface::{self, ShaderSurface};
use snowfall_engine::time::FpsCounter;

/// Backdrop shown for any pixel the quad does not cover.
const CLEAR: wgpu::Color = wgpu::Color::BLACK;

/// Drives one [`ShaderSurface`] and draws it every frame.
pub struct SnowApp {
    program: ShaderProgram,
    /// Mounted on the first frame, once the window can be queried.
    surface: Option<ShaderSurface>,
    renderer: SurfaceRenderer,
    fps: FpsCounter,
}

impl SnowApp {
    pub fn new(program: ShaderProgram) -> Self {
        Self {
            program,
            surface: None,
            renderer: SurfaceRenderer::new(),
            fps: FpsCounter::default(),
        }
    }
}

impl App for SnowApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let surface = surface::tick_or_mount(
            &mut self.surface,
            &self.program,
            ctx.time.dt,
            &ctx.window,
            &ctx.window,
        );

        if let Some(fps) = self.fps.record(&ctx.time) {
            log::debug!(
                "{fps:.1} fps, t = {:.2}s, frame {}",
                surface.uniforms().elapsed_time,
                ctx.time.frame_index
            );
        }

        let scene = surface.render(ctx.viewport());
        let renderer = &mut self.renderer;

        if ctx.render(CLEAR, |rctx, target| renderer.render(rctx, target, &scene)) == AppControl::Exit {
            log::error!("surface can no longer be presented; shutting down");
            ctx.runtime.exit();
        }

        AppControl::Continue
    }
}
