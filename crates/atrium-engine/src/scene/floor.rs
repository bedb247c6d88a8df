use anyhow::Result;
use glam::{Mat4, Vec3};

use crate::camera::Camera;
use crate::mesh::create_grid;
use crate::render::{Material, ObjectUniforms};

use super::{DrawCtx, Drawable, GpuMesh, LoadCtx};

pub const FLOOR_TEXTURE: &str = "textures/stone_wall_diffuse.png";

/// Floor placement: one unit below the crate's center.
pub const FLOOR_OFFSET: Vec3 = Vec3::new(0.0, -1.0, 0.0);

/// 10 x 10 stone slab.
#[derive(Default)]
pub struct Floor {
    mesh: Option<GpuMesh>,
}

impl Floor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_translation(FLOOR_OFFSET)
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

impl Drawable for Floor {
    fn label(&self) -> &'static str {
        "floor"
    }

    fn load(&mut self, ctx: &LoadCtx<'_>) -> Result<()> {
        let mesh = create_grid(10.0, 10.0, 2, 2);
        self.mesh = Some(GpuMesh::upload(ctx, self.label(), &mesh, FLOOR_TEXTURE)?);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lies_one_unit_below_origin() {
        let floor = Floor::new();
        let origin = floor.world_matrix().transform_point3(Vec3::ZERO);
        assert_eq!(origin, Vec3::new(0.0, -1.0, 0.0));

        let u = floor.uniforms(&Camera::new(800, 600));
        assert_eq!(u.world[1][3], -1.0);
        assert_eq!(u.texture_transform, Mat4::IDENTITY.to_cols_array_2d());
    }
}
