/// Linear RGBA color.
///
/// Values are expected in linear space. Used for clear colors and material
/// blocks; both are uploaded as four `f32` components.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Steel blue (70, 130, 180), the default background.
    #[inline]
    pub const fn steel_blue() -> Self {
        Self::new(70.0 / 255.0, 130.0 / 255.0, 180.0 / 255.0, 1.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<ColorRgba> for wgpu::Color {
    fn from(c: ColorRgba) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steel_blue_is_opaque_and_finite() {
        let c = ColorRgba::steel_blue();
        assert_eq!(c.a, 1.0);
        assert!(c.is_finite());
        assert!(c.b > c.g && c.g > c.r);
    }

    #[test]
    fn converts_to_wgpu_color() {
        let c: wgpu::Color = ColorRgba::new(0.25, 0.5, 0.75, 1.0).into();
        assert_eq!(c.r, 0.25);
        assert_eq!(c.g, 0.5);
        assert_eq!(c.b, 0.75);
        assert_eq!(c.a, 1.0);
    }
}
