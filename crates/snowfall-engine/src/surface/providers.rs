use crate::coords::Vec2;

/// Source of the current window size in logical pixels.
pub trait WindowSizeProvider {
    fn window_size(&self) -> Vec2;
}

/// Source of the current device pixel ratio (physical px per logical px).
///
/// The ratio may change while the surface is alive (window dragged onto a
/// display with a different density), so it is queried on every tick.
pub trait DevicePixelRatioProvider {
    fn device_pixel_ratio(&self) -> f32;
}

impl<F> WindowSizeProvider for F
where
    F: Fn() -> Vec2,
{
    fn window_size(&self) -> Vec2 {
        self()
    }
}

impl<F> DevicePixelRatioProvider for F
where
    F: Fn() -> f32,
{
    fn device_pixel_ratio(&self) -> f32 {
        self()
    }
}
