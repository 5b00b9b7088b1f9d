use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// What the runtime should do after an app callback returns.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    /// Close the window and leave the event loop.
    Exit,
}

/// Hooks the runtime calls on the app that owns the shader surface.
pub trait App {
    /// Sees every window event first; resize and scale-factor handling in
    /// the runtime happens afterwards.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Runs once per redraw with a freshly ticked `FrameTime`; tick the
    /// surface and draw it here.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
