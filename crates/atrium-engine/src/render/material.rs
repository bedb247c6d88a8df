use crate::color::ColorRgba;

/// Per-object surface colors uploaded alongside the transforms.
///
/// The fragment stage modulates the diffuse texture by `diffuse`; `ambient`
/// and `specular` are carried for shaders that light the scene.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    pub diffuse: ColorRgba,
    pub ambient: ColorRgba,
    pub specular: ColorRgba,
}

impl Material {
    /// Untinted: the texture shows through unchanged.
    pub const PLAIN: Material = Material {
        diffuse: ColorRgba::white(),
        ambient: ColorRgba::black(),
        specular: ColorRgba::black(),
    };

    /// Slight blue tint with a glossy highlight color.
    pub const WATER: Material = Material {
        diffuse: ColorRgba::new(0.85, 0.92, 1.0, 1.0),
        ambient: ColorRgba::new(0.1, 0.15, 0.2, 1.0),
        specular: ColorRgba::new(0.8, 0.8, 0.8, 1.0),
    };
}

impl Default for Material {
    fn default() -> Self {
        Self::PLAIN
    }
}
