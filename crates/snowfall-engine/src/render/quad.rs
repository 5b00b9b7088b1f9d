//! Static plane geometry shared by quad-based renderers.

use bytemuck::{Pod, Zeroable};

use crate::surface::GpuUniforms;

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // -0.5..0.5, unit plane centered on the origin
    pub uv: [f32; 2],  // 0..1, bottom-left origin
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x2  // uv
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [-0.5, -0.5], uv: [0.0, 0.0] },
    QuadVertex { pos: [ 0.5, -0.5], uv: [1.0, 0.0] },
    QuadVertex { pos: [ 0.5,  0.5], uv: [1.0, 1.0] },
    QuadVertex { pos: [-0.5,  0.5], uv: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── uniform UBO binding size ──────────────────────────────────────────────

/// Returns the `wgpu` minimum binding size for the frame uniform buffer.
///
/// `GpuUniforms` is a fixed 80-byte block, so the size is never zero.
pub(super) fn uniforms_min_binding_size() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(std::mem::size_of::<GpuUniforms>() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_is_ccw_unit_square() {
        // Signed area of each triangle must be positive for CCW winding.
        for tri in QUAD_INDICES.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| QUAD_VERTICES[i as usize].pos);
            let area = (b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1]);
            assert!(area > 0.0);
        }

        let xs: Vec<f32> = QUAD_VERTICES.iter().map(|v| v.pos[0]).collect();
        let width = xs.iter().cloned().fold(f32::MIN, f32::max) - xs.iter().cloned().fold(f32::MAX, f32::min);
        assert_eq!(width, 1.0);
    }

    #[test]
    fn uniform_binding_size_is_nonzero() {
        assert_eq!(uniforms_min_binding_size().map(|n| n.get()), Some(80));
    }
}
