//! Orthographic camera for the full-screen quad.
//!
//! Right-handed world space, camera looks down -Z, clip-space depth 0..1.

use glam::{Mat4, Vec3};

use crate::coords::Viewport;

/// Orthographic camera whose frustum is one world unit per logical pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrthographicCamera {
    pub viewport: Viewport,
    pub position: Vec3,
    pub near: f32,
    pub far: f32,
}

impl OrthographicCamera {
    pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 6.0);

    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            position: Self::DEFAULT_POSITION,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Projection for a frustum centered on the camera axis.
    pub fn projection(&self) -> Mat4 {
        let half_w = self.viewport.width.max(1.0) * 0.5;
        let half_h = self.viewport.height.max(1.0) * 0.5;
        Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, self.near, self.far)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn scaled_unit_plane_covers_ndc() {
        let vp = Viewport::new(800.0, 600.0);
        let cam = OrthographicCamera::new(vp);
        let mvp = cam.view_projection() * Mat4::from_scale(Vec3::new(vp.width, vp.height, 1.0));

        let tr = mvp * Vec4::new(0.5, 0.5, 0.0, 1.0);
        let bl = mvp * Vec4::new(-0.5, -0.5, 0.0, 1.0);

        assert!(approx(tr.x, 1.0) && approx(tr.y, 1.0));
        assert!(approx(bl.x, -1.0) && approx(bl.y, -1.0));
        assert!(approx(tr.w, 1.0));
    }

    #[test]
    fn plane_depth_lies_inside_clip_range() {
        let cam = OrthographicCamera::new(Viewport::new(1024.0, 768.0));
        let p = cam.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(p.z > 0.0 && p.z < 1.0, "depth {} outside 0..1", p.z);
    }

    #[test]
    fn view_moves_world_opposite_to_camera() {
        let cam = OrthographicCamera::new(Viewport::new(100.0, 100.0));
        let p = cam.view().transform_point3(Vec3::ZERO);
        assert_eq!(p, Vec3::new(0.0, 0.0, -6.0));
    }

    #[test]
    fn degenerate_viewport_stays_finite() {
        let cam = OrthographicCamera::new(Viewport::new(0.0, 0.0));
        assert!(cam.projection().is_finite());
    }
}
