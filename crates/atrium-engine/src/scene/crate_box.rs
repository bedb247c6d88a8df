use anyhow::Result;
use glam::Mat4;

use crate::camera::Camera;
use crate::mesh::create_box;
use crate::render::{Material, ObjectUniforms};

use super::{DrawCtx, Drawable, GpuMesh, LoadCtx};

pub const CRATE_TEXTURE: &str = "textures/crate_diffuse.png";

/// Unit box resting at the origin.
#[derive(Default)]
pub struct Crate {
    mesh: Option<GpuMesh>,
}

impl Crate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn world_matrix(&self) -> Mat4 {
        Mat4::IDENTITY
    }

    pub fn uniforms(&self, camera: &Camera) -> ObjectUniforms {
        ObjectUniforms::new(
            self.world_matrix(),
            camera.view(),
            camera.projection(),
            Mat4::IDENTITY,
            &Material::PLAIN,
        )
    }
}

impl Drawable for Crate {
    fn label(&self) -> &'static str {
        "crate"
    }

    fn load(&mut self, ctx: &LoadCtx<'_>) -> Result<()> {
        let mesh = create_box(1.0, 1.0, 1.0);
        self.mesh = Some(GpuMesh::upload(ctx, self.label(), &mesh, CRATE_TEXTURE)?);
        Ok(())
    }

    fn is_loaded(&self) -> bool {
        self.mesh.is_some()
    }

    fn render(&mut self, ctx: &DrawCtx<'_>, pass: &mut wgpu::RenderPass<'_>) {
        if let Some(mesh) = &self.mesh {
            mesh.draw(ctx.queue, pass, &self.uniforms(ctx.camera));
        }
    }
}
