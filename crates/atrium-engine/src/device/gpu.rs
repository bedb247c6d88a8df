use anyhow::{Context, Result};
use wgpu::SurfaceError;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::color::ColorRgba;

use super::raster::create_anisotropic_sampler;
use super::surface::{
    choose_alpha_mode, choose_surface_format, map_surface_error, pick_sample_count,
    usable_format_flags, RenderTargets, DEPTH_FORMAT,
};
use super::{FillMode, GpuFrame, RasterPresets, SurfaceErrorAction, SurfaceInit, Viewport};

/// Owns the wgpu device, the window surface and every size-dependent target.
///
/// Responsibilities:
/// - creates and stores Instance/Adapter/Device/Queue
/// - configures the swap chain and its depth-stencil (and MSAA) targets
/// - owns the raster presets, the shared sampler and the full-window viewport
/// - acquires, clears and presents frames
///
/// All size-dependent state is replaced together in [`Gpu::resize`].
pub struct Gpu<'w> {
    /// Kept alive for the lifetime of the surface.
    #[allow(dead_code)]
    instance: wgpu::Instance,

    /// Surface bound to the window. The window must outlive the `Gpu`.
    surface: wgpu::Surface<'w>,

    device: wgpu::Device,
    queue: wgpu::Queue,

    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,

    window: &'w Window,

    sample_count: u32,
    targets: RenderTargets,
    viewport: Viewport,

    raster: RasterPresets,
    fill_mode: FillMode,
    sampler: wgpu::Sampler,
}

impl<'w> Gpu<'w> {
    /// Creates the device and swap chain for `window`.
    ///
    /// Fails when no adapter, device or surface format is available.
    pub async fn new(window: &'w Window, init: SurfaceInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let info = adapter.get_info();
        log::info!("adapter: {} ({:?})", info.name, info.backend);

        let wireframe_supported = adapter.features().contains(wgpu::Features::POLYGON_MODE_LINE);
        if !wireframe_supported {
            log::warn!("adapter lacks POLYGON_MODE_LINE; wireframe toggle will render solid");
        }

        // Adapter-specific format features unlock sample counts beyond the
        // guaranteed 1x/4x; without them only the guaranteed set is valid.
        let required_features = adapter.features()
            & (wgpu::Features::POLYGON_MODE_LINE
                | wgpu::Features::TEXTURE_ADAPTER_SPECIFIC_FORMAT_FEATURES);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("atrium device"),
                required_features,
                required_limits: init.required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = surface.get_capabilities(&adapter);
        let format = choose_surface_format(&caps, init.prefer_srgb)
            .context("no supported surface formats")?;
        let alpha_mode = choose_alpha_mode(&caps, init.alpha_mode);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: init.present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };
        surface.configure(&device, &config);

        let format_flags = |fmt: wgpu::TextureFormat| {
            usable_format_flags(
                fmt,
                device.features(),
                adapter.get_texture_format_features(fmt).flags,
            )
        };
        let sample_count =
            pick_sample_count(format_flags(format), format_flags(DEPTH_FORMAT), init.msaa_samples);
        if sample_count < init.msaa_samples {
            log::warn!(
                "{}x multisampling unsupported for {format:?}; using {sample_count}x",
                init.msaa_samples
            );
        }
        log::info!("surface {format:?} {}x{}, msaa samples: {sample_count}", size.width, size.height);

        let targets = RenderTargets::new(&device, &config, sample_count);
        let sampler = create_anisotropic_sampler(&device, init.max_anisotropy);

        Ok(Gpu {
            instance,
            surface,
            device,
            queue,
            config,
            size,
            window,
            sample_count,
            targets,
            viewport: Viewport::from_size(size.width, size.height),
            raster: RasterPresets::new(wireframe_supported),
            fill_mode: FillMode::default(),
            sampler,
        })
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn depth_format(&self) -> wgpu::TextureFormat {
        DEPTH_FORMAT
    }

    /// Current drawable size in physical pixels.
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn limits(&self) -> wgpu::Limits {
        self.device.limits()
    }

    /// Multisample state every pipeline drawing into this surface must use.
    pub fn multisample_state(&self) -> wgpu::MultisampleState {
        wgpu::MultisampleState {
            count: self.sample_count,
            mask: !0,
            alpha_to_coverage_enabled: false,
        }
    }

    pub fn raster(&self) -> &RasterPresets {
        &self.raster
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    pub fn set_fill_mode(&mut self, mode: FillMode) {
        if mode.is_wireframe() && !self.raster.wireframe_supported {
            log::debug!("wireframe requested but unsupported; drawing solid");
        }
        self.fill_mode = mode;
    }

    /// Shared anisotropic sampler used by every textured draw.
    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    /// Resizes the swap chain and recreates the depth (and MSAA) targets.
    ///
    /// wgpu cannot configure a 0x0 surface; in that case only the recorded
    /// size changes and the previous targets stay in place.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }

        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);

        self.targets = RenderTargets::new(&self.device, &self.config, self.sample_count);
        self.viewport = Viewport::from_size(new_size.width, new_size.height);
    }

    /// Acquires the next swap-chain image and opens a command encoder.
    pub fn begin_frame(&self) -> std::result::Result<GpuFrame, SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("atrium frame encoder"),
            });

        Ok(GpuFrame {
            surface_texture,
            view,
            encoder,
        })
    }

    /// Opens the scene pass: clears color to `clear`, depth to 1.0 and
    /// stencil to 0, then sets the full-window viewport.
    ///
    /// With multisampling the pass renders into the MSAA target and resolves
    /// into the swap-chain image when the pass ends.
    pub fn clear<'f>(&self, frame: &'f mut GpuFrame, clear: ColorRgba) -> wgpu::RenderPass<'f> {
        let (view, resolve_target) = match &self.targets.color {
            Some(msaa) => (msaa, Some(&frame.view)),
            None => (&frame.view, None),
        };

        let mut pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("atrium scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear.into()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.targets.depth,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(0),
                    store: wgpu::StoreOp::Store,
                }),
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if self.viewport.is_valid() {
            self.viewport.apply(&mut pass);
        }
        pass
    }

    /// Submits the recorded commands and presents the swap-chain image.
    pub fn present(&self, frame: GpuFrame) {
        let GpuFrame {
            surface_texture,
            view,
            encoder,
        } = frame;

        self.queue.submit(std::iter::once(encoder.finish()));
        drop(view);

        self.window.pre_present_notify();
        surface_texture.present();
    }

    /// Converts a `SurfaceError` into a higher-level action, reconfiguring
    /// the surface when it was lost or outdated.
    pub fn handle_surface_error(&mut self, err: SurfaceError) -> SurfaceErrorAction {
        log::warn!("surface error: {err}");
        map_surface_error(&self.surface, &self.device, &self.config, self.size, err)
    }
}
