/// Initialization parameters for the surface manager.
#[derive(Debug, Clone)]
pub struct SurfaceInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// Off by default: diffuse textures are uploaded as `Rgba8Unorm` and the
    /// back buffer should match.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). `AutoNoVsync` never blocks in present.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    pub desired_maximum_frame_latency: u32,

    /// Highest multisample count to probe for. The largest supported count
    /// not above this value is used; 1 disables multisampling.
    pub msaa_samples: u32,

    /// Anisotropy clamp for the shared texture sampler.
    pub max_anisotropy: u16,
}

impl Default for SurfaceInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::AutoNoVsync,
            alpha_mode: None,
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            msaa_samples: 4,
            max_anisotropy: 8,
        }
    }
}
