use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;

use crate::assets::ShaderSource;
use crate::camera::Camera;
use crate::color::ColorRgba;
use crate::device::{FillMode, Gpu, SurfaceErrorAction};
use crate::frame_loop::{FrameStatus, FrameTarget};
use crate::render::ScenePipeline;
use crate::time::FrameTime;

use super::{Crate, DrawCtx, Drawable, Floor, LoadCtx, Pillar, Water};

/// Shader used by every drawable, relative to the asset root.
pub const SCENE_SHADER: &str = "shaders/textured.wgsl";

/// X placement of the two pillars.
pub const PILLAR_XS: [f32; 2] = [-3.0, 3.0];

/// Scene objects in render order.
pub fn default_drawables() -> Vec<Box<dyn Drawable>> {
    vec![
        Box::new(Crate::new()),
        Box::new(Floor::new()),
        Box::new(Water::new()),
        Box::new(Pillar::new(PILLAR_XS[0])),
        Box::new(Pillar::new(PILLAR_XS[1])),
    ]
}

/// Scene settings taken from the runtime configuration.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub asset_root: PathBuf,
    pub clear_color: ColorRgba,
}

/// The GPU side of the viewer: surface manager, pipeline and loaded drawables.
pub struct SceneRenderer<'w> {
    gpu: Gpu<'w>,
    pipeline: ScenePipeline,
    drawables: Vec<Box<dyn Drawable>>,
    clear_color: ColorRgba,
}

impl<'w> SceneRenderer<'w> {
    /// Builds the pipeline and loads every drawable in `drawables`.
    ///
    /// Any load failure aborts construction.
    pub fn new(
        gpu: Gpu<'w>,
        config: &SceneConfig,
        mut drawables: Vec<Box<dyn Drawable>>,
    ) -> Result<Self> {
        let shader = load_shader(&config.asset_root)?;
        let pipeline = ScenePipeline::new(&gpu, &shader);

        let ctx = LoadCtx {
            device: gpu.device(),
            queue: gpu.queue(),
            object_layout: pipeline.object_layout(),
            asset_root: &config.asset_root,
        };

        for drawable in drawables.iter_mut() {
            let label = drawable.label();
            drawable
                .load(&ctx)
                .with_context(|| format!("failed to load {label}"))?;
            log::info!("loaded {label}");
        }

        Ok(Self {
            gpu,
            pipeline,
            drawables,
            clear_color: config.clear_color,
        })
    }
}

fn load_shader(asset_root: &Path) -> Result<ShaderSource> {
    let path = asset_root.join(SCENE_SHADER);
    let shader = ShaderSource::from_file(&path).context("failed to load scene shader")?;
    Ok(shader)
}

impl FrameTarget for SceneRenderer<'_> {
    fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(PhysicalSize::new(width, height));
    }

    fn set_fill_mode(&mut self, mode: FillMode) {
        self.gpu.set_fill_mode(mode);
    }

    fn render_frame(&mut self, camera: &Camera, time: FrameTime) -> Result<FrameStatus> {
        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                let message = err.to_string();
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => {
                        Err(anyhow::anyhow!("unrecoverable surface error: {message}"))
                    }
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        Ok(FrameStatus::Skipped)
                    }
                };
            }
        };

        {
            let mut pass = self.gpu.clear(&mut frame, self.clear_color);
            self.pipeline.activate(&mut pass, self.gpu.fill_mode());

            let ctx = DrawCtx {
                queue: self.gpu.queue(),
                camera,
                time,
            };
            for drawable in self.drawables.iter_mut() {
                drawable.render(&ctx, &mut pass);
            }
        }

        self.gpu.present(frame);
        Ok(FrameStatus::Presented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawables_render_in_fixed_order() {
        let labels: Vec<_> = default_drawables().iter().map(|d| d.label()).collect();
        assert_eq!(
            labels,
            ["crate", "floor", "water", "pillar (left)", "pillar (right)"]
        );
    }

    #[test]
    fn nothing_is_loaded_before_startup() {
        assert!(default_drawables().iter().all(|d| !d.is_loaded()));
    }

    #[test]
    fn missing_shader_is_reported() {
        let root = std::env::temp_dir().join("atrium-no-assets-here");
        let err = load_shader(&root).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load scene shader"));
    }
}
