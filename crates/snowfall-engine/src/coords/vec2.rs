use std::ops::Mul;

/// 2D vector of pixel quantities.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_scales_both_axes() {
        assert_eq!(Vec2::new(800.0, 600.0) * 2.0, Vec2::new(1600.0, 1200.0));
    }

    #[test]
    fn mul_by_fractional_ratio() {
        assert_eq!(Vec2::new(1000.0, 500.0) * 1.5, Vec2::new(1500.0, 750.0));
    }

    #[test]
    fn to_array_is_xy() {
        assert_eq!(Vec2::new(3.0, 4.0).to_array(), [3.0, 4.0]);
    }
}
