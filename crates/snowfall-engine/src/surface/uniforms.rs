use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::coords::Vec2;

/// Per-surface shader inputs.
///
/// `elapsed_time` accumulates frame deltas from construction onwards and is
/// kept in `f64` so long sessions do not lose sub-frame precision; it is
/// narrowed to `f32` only when packed for the GPU.
///
/// `resolution` is in physical pixels (logical size × device pixel ratio) and
/// is overwritten on every tick.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FrameUniforms {
    pub elapsed_time: f64,
    pub resolution: Vec2,
}

impl FrameUniforms {
    /// Creates the record with zero elapsed time.
    pub fn initialize(window_size: Vec2, device_pixel_ratio: f32) -> Self {
        Self {
            elapsed_time: 0.0,
            resolution: window_size * device_pixel_ratio,
        }
    }

    /// Advances time by `delta_seconds` and recomputes the resolution.
    ///
    /// The delta is applied as given; clamping is the caller's concern.
    pub fn tick(&mut self, delta_seconds: f32, window_size: Vec2, device_pixel_ratio: f32) {
        self.elapsed_time += f64::from(delta_seconds);
        self.resolution = window_size * device_pixel_ratio;
    }

    /// Packs the record into the uniform block layout shared by the shaders.
    pub fn to_gpu(&self, mvp: Mat4) -> GpuUniforms {
        GpuUniforms {
            mvp: mvp.to_cols_array_2d(),
            resolution: self.resolution.to_array(),
            time: self.elapsed_time as f32,
            _pad: 0.0,
        }
    }
}

/// Uniform block at `@group(0) @binding(0)`:
///
/// ```wgsl
/// struct FrameUniforms {
///     mvp: mat4x4<f32>,
///     resolution: vec2<f32>,
///     time: f32,
/// }
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuUniforms {
    pub mvp: [[f32; 4]; 4], // column-major
    pub resolution: [f32; 2],
    pub time: f32,
    pub _pad: f32, // 16-byte alignment
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    // ── initialize ────────────────────────────────────────────────────────

    #[test]
    fn initialize_scales_by_pixel_ratio() {
        let u = FrameUniforms::initialize(Vec2::new(800.0, 600.0), 2.0);
        assert_eq!(u.elapsed_time, 0.0);
        assert_eq!(u.resolution, Vec2::new(1600.0, 1200.0));
    }

    // ── tick ──────────────────────────────────────────────────────────────

    #[test]
    fn tick_same_window_keeps_resolution() {
        let mut u = FrameUniforms::initialize(Vec2::new(800.0, 600.0), 2.0);
        u.tick(0.016, Vec2::new(800.0, 600.0), 2.0);
        assert!(approx(u.elapsed_time, 0.016));
        assert_eq!(u.resolution, Vec2::new(1600.0, 1200.0));
    }

    #[test]
    fn tick_follows_window_and_ratio_changes() {
        let mut u = FrameUniforms::initialize(Vec2::new(800.0, 600.0), 2.0);
        u.tick(0.016, Vec2::new(800.0, 600.0), 2.0);
        u.tick(0.016, Vec2::new(1024.0, 768.0), 1.0);
        assert!(approx(u.elapsed_time, 0.032));
        assert_eq!(u.resolution, Vec2::new(1024.0, 768.0));
    }

    #[test]
    fn zero_delta_still_recomputes_resolution() {
        let mut u = FrameUniforms::initialize(Vec2::new(800.0, 600.0), 2.0);
        u.tick(0.5, Vec2::new(800.0, 600.0), 2.0);
        u.tick(0.0, Vec2::new(640.0, 480.0), 1.5);
        assert!(approx(u.elapsed_time, 0.5));
        assert_eq!(u.resolution, Vec2::new(960.0, 720.0));
    }

    #[test]
    fn elapsed_time_is_sum_of_deltas() {
        let deltas = [0.016f32, 0.017, 0.0, 0.033, 0.25, 0.0001, 0.016];
        let mut u = FrameUniforms::initialize(Vec2::new(100.0, 100.0), 1.0);
        for d in deltas {
            u.tick(d, Vec2::new(100.0, 100.0), 1.0);
        }
        let expected: f64 = deltas.iter().map(|&d| f64::from(d)).sum();
        assert!(approx(u.elapsed_time, expected));
    }

    #[test]
    fn elapsed_time_never_decreases_for_non_negative_deltas() {
        let mut u = FrameUniforms::initialize(Vec2::new(100.0, 100.0), 1.0);
        let mut prev = u.elapsed_time;
        for i in 0..1000 {
            u.tick((i % 7) as f32 * 0.004, Vec2::new(100.0, 100.0), 1.0);
            assert!(u.elapsed_time >= prev);
            prev = u.elapsed_time;
        }
    }

    #[test]
    fn resolution_ignores_prior_values() {
        let mut u = FrameUniforms::initialize(Vec2::new(3000.0, 2000.0), 3.0);
        u.tick(0.016, Vec2::new(10.0, 20.0), 1.0);
        assert_eq!(u.resolution, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn negative_delta_is_passed_through() {
        let mut u = FrameUniforms::initialize(Vec2::new(100.0, 100.0), 1.0);
        u.tick(1.0, Vec2::new(100.0, 100.0), 1.0);
        u.tick(-0.25, Vec2::new(100.0, 100.0), 1.0);
        assert!(approx(u.elapsed_time, 0.75));
    }

    // ── gpu layout ────────────────────────────────────────────────────────

    #[test]
    fn gpu_block_is_80_bytes() {
        assert_eq!(std::mem::size_of::<GpuUniforms>(), 80);
        assert_eq!(std::mem::size_of::<GpuUniforms>() % 16, 0);
    }

    #[test]
    fn to_gpu_narrows_time_and_copies_resolution() {
        let mut u = FrameUniforms::initialize(Vec2::new(800.0, 600.0), 2.0);
        u.tick(1.5, Vec2::new(800.0, 600.0), 2.0);
        let g = u.to_gpu(Mat4::IDENTITY);
        assert_eq!(g.time, 1.5);
        assert_eq!(g.resolution, [1600.0, 1200.0]);
        assert_eq!(g.mvp, Mat4::IDENTITY.to_cols_array_2d());
    }
}
