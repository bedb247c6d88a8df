/// Polygon fill mode selected by the frame loop.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FillMode {
    #[default]
    Solid,
    Wireframe,
}

impl FillMode {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            FillMode::Solid => FillMode::Wireframe,
            FillMode::Wireframe => FillMode::Solid,
        }
    }

    #[inline]
    pub fn is_wireframe(self) -> bool {
        self == FillMode::Wireframe
    }
}

/// The two fixed raster configurations.
///
/// Solid culls counter-clockwise (front) faces; scene meshes are wound so
/// their visible side is clockwise. Wireframe draws every edge with no culling.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RasterPresets {
    pub solid: wgpu::PrimitiveState,
    pub wireframe: wgpu::PrimitiveState,
    /// False when the adapter lacks `POLYGON_MODE_LINE`.
    pub wireframe_supported: bool,
}

impl RasterPresets {
    pub fn new(wireframe_supported: bool) -> Self {
        let base = wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Front),
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        };

        Self {
            solid: base,
            wireframe: wgpu::PrimitiveState {
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Line,
                ..base
            },
            wireframe_supported,
        }
    }

    /// Primitive state for `mode`.
    ///
    /// Falls back to solid when wireframe is unsupported; the fill mode itself
    /// is still tracked so toggling stays an involution.
    pub fn for_mode(&self, mode: FillMode) -> &wgpu::PrimitiveState {
        match mode {
            FillMode::Wireframe if self.wireframe_supported => &self.wireframe,
            _ => &self.solid,
        }
    }
}

/// Shared anisotropic sampler: repeat addressing, all-linear filtering.
///
/// wgpu requires linear min/mag/mipmap filters when `anisotropy_clamp > 1`.
pub(crate) fn create_anisotropic_sampler(device: &wgpu::Device, anisotropy: u16) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("atrium anisotropic sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::MipmapFilterMode::Linear,
        anisotropy_clamp: anisotropy.clamp(1, 16),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_identity() {
        for mode in [FillMode::Solid, FillMode::Wireframe] {
            assert_eq!(mode.toggled().toggled(), mode);
            assert_ne!(mode.toggled(), mode);
        }
    }

    #[test]
    fn presets_are_mutually_exclusive() {
        let presets = RasterPresets::new(true);
        assert_eq!(presets.solid.polygon_mode, wgpu::PolygonMode::Fill);
        assert_eq!(presets.solid.cull_mode, Some(wgpu::Face::Front));
        assert_eq!(presets.wireframe.polygon_mode, wgpu::PolygonMode::Line);
        assert_eq!(presets.wireframe.cull_mode, None);
        assert_eq!(presets.solid.topology, presets.wireframe.topology);
    }

    #[test]
    fn unsupported_wireframe_falls_back_to_solid() {
        let presets = RasterPresets::new(false);
        assert_eq!(presets.for_mode(FillMode::Wireframe), &presets.solid);

        let presets = RasterPresets::new(true);
        assert_eq!(presets.for_mode(FillMode::Wireframe), &presets.wireframe);
        assert_eq!(presets.for_mode(FillMode::Solid), &presets.solid);
    }
}
