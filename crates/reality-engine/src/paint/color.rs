use std::ops::AddAssign;

use super::rotate::{rotate, Rotation};

/// Straight-alpha RGBA color.
///
/// Channels are nominally in `[0, 1]` but nothing here enforces it: the
/// unchecked rotation is allowed to push them outside that range, and the GPU
/// clamps on write to a unorm target.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0, 1.0);
    pub const PURPLE: Self = Self::new(1.0, 0.0, 1.0, 1.0);
    pub const CYAN: Self = Self::new(0.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Channels in uniform-buffer order.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// True when no channel is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl From<Color> for wgpu::Color {
    #[inline]
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

/// `color += rotation` is the unchecked rotation; alpha is left alone.
impl AddAssign<Rotation> for Color {
    #[inline]
    fn add_assign(&mut self, rhs: Rotation) {
        rotate(self, rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_constants_are_opaque() {
        for c in [
            Color::RED,
            Color::GREEN,
            Color::BLUE,
            Color::YELLOW,
            Color::PURPLE,
            Color::CYAN,
            Color::BLACK,
            Color::WHITE,
        ] {
            assert_eq!(c.a, 1.0);
        }
    }

    #[test]
    fn array_conversion_keeps_channel_order() {
        let c = Color::from([0.1, 0.2, 0.3, 0.4]);
        assert_eq!(c, Color::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(<[f32; 4]>::from(c), [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn add_assign_moves_rgb_only() {
        let mut c = Color::new(0.25, 0.5, 0.75, 0.3);
        c += Rotation::new(0.5, 0.5, 0.5);
        assert_eq!(c, Color::new(0.75, 1.0, 1.25, 0.3));
    }

    #[test]
    fn non_finite_channel_is_detected() {
        assert!(Color::BLACK.is_finite());
        assert!(!Color::new(f32::NAN, 0.0, 0.0, 1.0).is_finite());
    }
}
