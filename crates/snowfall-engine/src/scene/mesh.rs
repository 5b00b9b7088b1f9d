use glam::{Mat4, Vec3};

/// Flat plane centered on the origin in the XY plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneGeometry {
    pub width: f32,
    pub height: f32,
}

impl PlaneGeometry {
    pub const UNIT: PlaneGeometry = PlaneGeometry { width: 1.0, height: 1.0 };
}

/// Plane geometry with a per-axis scale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mesh {
    pub geometry: PlaneGeometry,
    pub scale: [f32; 3],
}

impl Mesh {
    /// Model matrix: geometry extent folded into the mesh scale.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale(Vec3::new(
            self.scale[0] * self.geometry.width,
            self.scale[1] * self.geometry.height,
            self.scale[2],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_matrix_scales_unit_plane_corner() {
        let mesh = Mesh { geometry: PlaneGeometry::UNIT, scale: [800.0, 600.0, 1.0] };
        let p = mesh.model_matrix().transform_point3(Vec3::new(0.5, 0.5, 0.0));
        assert_eq!(p, Vec3::new(400.0, 300.0, 0.0));
    }
}
