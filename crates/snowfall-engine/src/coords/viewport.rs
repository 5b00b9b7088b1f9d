use super::Vec2;

/// Viewport size in logical pixels.
///
/// The full-screen quad is scaled to this size; the orthographic camera maps
/// it onto the whole of NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

impl From<Vec2> for Viewport {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_requires_positive_finite_extent() {
        assert!(Viewport::new(800.0, 600.0).is_valid());
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::new(800.0, -1.0).is_valid());
        assert!(!Viewport::new(f32::INFINITY, 600.0).is_valid());
    }

    #[test]
    fn from_vec2_keeps_components() {
        let vp = Viewport::from(Vec2::new(1024.0, 768.0));
        assert_eq!(vp, Viewport::new(1024.0, 768.0));
    }
}
