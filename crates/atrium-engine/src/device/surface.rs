use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

/// Depth-stencil format: 24-bit depth, 8-bit stencil.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24PlusStencil8;

pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if caps.formats.is_empty() {
        return None;
    }

    let preferred: &[wgpu::TextureFormat] = if prefer_srgb {
        &[
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ]
    } else {
        &[
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureFormat::Bgra8Unorm,
        ]
    };

    preferred
        .iter()
        .copied()
        .find(|f| caps.formats.contains(f))
        .or_else(|| caps.formats.first().copied())
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Format capabilities the device will actually validate against.
///
/// wgpu only honours the adapter's own flags when the device was created with
/// `TEXTURE_ADAPTER_SPECIFIC_FORMAT_FEATURES`; otherwise textures are checked
/// against the format's guaranteed set (1x and 4x for the common formats).
pub(crate) fn usable_format_flags(
    format: wgpu::TextureFormat,
    device_features: wgpu::Features,
    adapter_flags: wgpu::TextureFormatFeatureFlags,
) -> wgpu::TextureFormatFeatureFlags {
    if device_features.contains(wgpu::Features::TEXTURE_ADAPTER_SPECIFIC_FORMAT_FEATURES) {
        adapter_flags
    } else {
        format.guaranteed_format_features(device_features).flags
    }
}

/// Largest sample count `<= requested` that the color format can render and
/// resolve at and the depth format can render at.
///
/// Returns 1 (no multisampling) when nothing larger is supported.
pub(crate) fn pick_sample_count(
    color: wgpu::TextureFormatFeatureFlags,
    depth: wgpu::TextureFormatFeatureFlags,
    requested: u32,
) -> u32 {
    if !color.contains(wgpu::TextureFormatFeatureFlags::MULTISAMPLE_RESOLVE) {
        return 1;
    }
    [16, 8, 4, 2]
        .into_iter()
        .filter(|&count| count <= requested)
        .find(|&count| color.sample_count_supported(count) && depth.sample_count_supported(count))
        .unwrap_or(1)
}

/// Per-size render targets. Always created and replaced as a pair so their
/// dimensions match the surface configuration.
pub(crate) struct RenderTargets {
    /// Multisampled color target resolved into the swap-chain image.
    /// `None` when rendering straight to the swap chain (1 sample).
    pub color: Option<wgpu::TextureView>,
    pub depth: wgpu::TextureView,
}

impl RenderTargets {
    pub fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        sample_count: u32,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: config.width.max(1),
            height: config.height.max(1),
            depth_or_array_layers: 1,
        };

        let color = (sample_count > 1).then(|| {
            device
                .create_texture(&wgpu::TextureDescriptor {
                    label: Some("atrium msaa color"),
                    size,
                    mip_level_count: 1,
                    sample_count,
                    dimension: wgpu::TextureDimension::D2,
                    format: config.format,
                    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                    view_formats: &[],
                })
                .create_view(&wgpu::TextureViewDescriptor::default())
        });

        let depth = device
            .create_texture(&wgpu::TextureDescriptor {
                label: Some("atrium depth-stencil"),
                size,
                mip_level_count: 1,
                sample_count,
                dimension: wgpu::TextureDimension::D2,
                format: DEPTH_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            })
            .create_view(&wgpu::TextureViewDescriptor::default());

        Self { color, depth }
    }
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width > 0 && size.height > 0 {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormatFeatureFlags as Flags;

    fn caps(formats: Vec<wgpu::TextureFormat>) -> wgpu::SurfaceCapabilities {
        wgpu::SurfaceCapabilities {
            formats,
            alpha_modes: vec![wgpu::CompositeAlphaMode::Opaque],
            ..Default::default()
        }
    }

    // ── sample count ──────────────────────────────────────────────────────

    #[test]
    fn picks_four_when_both_formats_support_it() {
        let color = Flags::MULTISAMPLE_X4 | Flags::MULTISAMPLE_RESOLVE;
        let depth = Flags::MULTISAMPLE_X4;
        assert_eq!(pick_sample_count(color, depth, 4), 4);
    }

    #[test]
    fn never_exceeds_request() {
        let all = Flags::MULTISAMPLE_X2
            | Flags::MULTISAMPLE_X4
            | Flags::MULTISAMPLE_X8
            | Flags::MULTISAMPLE_RESOLVE;
        assert_eq!(pick_sample_count(all, all, 4), 4);
        assert_eq!(pick_sample_count(all, all, 1), 1);
    }

    #[test]
    fn falls_back_to_single_sample() {
        let color = Flags::MULTISAMPLE_X4 | Flags::MULTISAMPLE_RESOLVE;
        let depth = Flags::empty();
        assert_eq!(pick_sample_count(color, depth, 4), 1);
    }

    #[test]
    fn steps_down_to_lower_supported_count() {
        let flags = Flags::MULTISAMPLE_X2 | Flags::MULTISAMPLE_RESOLVE;
        assert_eq!(pick_sample_count(flags, flags, 4), 2);
    }

    #[test]
    fn color_without_resolve_stays_single_sampled() {
        let color = Flags::MULTISAMPLE_X4;
        let depth = Flags::MULTISAMPLE_X4;
        assert_eq!(pick_sample_count(color, depth, 4), 1);
    }

    #[test]
    fn adapter_flags_need_the_adapter_specific_feature() {
        let adapter = Flags::MULTISAMPLE_X2
            | Flags::MULTISAMPLE_X4
            | Flags::MULTISAMPLE_X8
            | Flags::MULTISAMPLE_RESOLVE;
        let plain = wgpu::Features::POLYGON_MODE_LINE;
        let specific = plain | wgpu::Features::TEXTURE_ADAPTER_SPECIFIC_FORMAT_FEATURES;

        let color = wgpu::TextureFormat::Bgra8Unorm;
        assert_eq!(
            usable_format_flags(color, plain, adapter),
            color.guaranteed_format_features(plain).flags
        );
        assert_eq!(usable_format_flags(color, specific, adapter), adapter);
    }

    #[test]
    fn count_is_valid_for_a_device_without_adapter_specific_formats() {
        let features = wgpu::Features::POLYGON_MODE_LINE;
        // Adapter advertises 2x/8x but the device only validates the guaranteed set.
        let adapter = Flags::MULTISAMPLE_X2
            | Flags::MULTISAMPLE_X4
            | Flags::MULTISAMPLE_X8
            | Flags::MULTISAMPLE_RESOLVE;
        let color_format = wgpu::TextureFormat::Bgra8Unorm;

        let color = usable_format_flags(color_format, features, adapter);
        let depth = usable_format_flags(DEPTH_FORMAT, features, adapter);
        let allowed = |count: u32| {
            color_format
                .guaranteed_format_features(features)
                .flags
                .sample_count_supported(count)
                && DEPTH_FORMAT
                    .guaranteed_format_features(features)
                    .flags
                    .sample_count_supported(count)
        };

        for requested in [8, 4, 2] {
            let picked = pick_sample_count(color, depth, requested);
            assert!(allowed(picked), "{picked}x chosen for request {requested}");
        }
        assert_eq!(pick_sample_count(color, depth, 8), 4);
        assert_eq!(pick_sample_count(color, depth, 2), 1);
    }

    // ── format / alpha ────────────────────────────────────────────────────

    #[test]
    fn prefers_linear_format_by_default() {
        let c = caps(vec![
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Bgra8Unorm,
        ]);
        assert_eq!(choose_surface_format(&c, false), Some(wgpu::TextureFormat::Bgra8Unorm));
        assert_eq!(choose_surface_format(&c, true), Some(wgpu::TextureFormat::Bgra8UnormSrgb));
    }

    #[test]
    fn falls_back_to_first_reported_format() {
        let c = caps(vec![wgpu::TextureFormat::Rgb10a2Unorm]);
        assert_eq!(choose_surface_format(&c, false), Some(wgpu::TextureFormat::Rgb10a2Unorm));
        assert_eq!(choose_surface_format(&caps(vec![]), false), None);
    }

    #[test]
    fn unsupported_alpha_request_is_replaced() {
        let c = caps(vec![wgpu::TextureFormat::Bgra8Unorm]);
        assert_eq!(
            choose_alpha_mode(&c, Some(wgpu::CompositeAlphaMode::PreMultiplied)),
            wgpu::CompositeAlphaMode::Opaque
        );
        assert_eq!(
            choose_alpha_mode(&c, Some(wgpu::CompositeAlphaMode::Opaque)),
            wgpu::CompositeAlphaMode::Opaque
        );
    }
}
