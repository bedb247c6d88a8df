use anyhow::Result;
use glam::{Mat4, Vec3};

use crate::camera::Camera;
use crate::mesh::create_cylinder;
use crate::render::{Material, ObjectUniforms};

use super::{DrawCtx, Drawable, GpuMesh, LoadCtx};

pub const PILLAR_TEXTURE: &str = "textures/rock_diffuse.png";

/// Height of every pillar's center; the 4-unit column then spans y in [-1, 3].
pub const PILLAR_Y: f32 = 1.0;

/// Stone column. Pillars differ only in their X placement.
pub struct Pillar {
    x: f32,
    mesh: Option<GpuMesh>,
}

impl Pillar {
    pub fn new(x: f32) -> Self {
        Self { x, mesh: None }
    }

    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(self.x, PILLAR_Y, 0.0))
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

impl Drawable for Pillar {
    fn label(&self) -> &'static str {
        if self.x < 0.0 {
            "pillar (left)"
        } else {
            "pillar (right)"
        }
    }

    fn load(&mut self, ctx: &LoadCtx<'_>) -> Result<()> {
        let mesh = create_cylinder(0.5, 0.5, 4.0, 8, 8);
        self.mesh = Some(GpuMesh::upload(ctx, self.label(), &mesh, PILLAR_TEXTURE)?);
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
    fn pillars_differ_only_in_x() {
        let left = Pillar::new(-3.0).world_matrix();
        let right = Pillar::new(3.0).world_matrix();

        assert_eq!(right.w_axis.x - left.w_axis.x, 6.0);
        assert_eq!(left.w_axis.y, 1.0);
        assert_eq!(right.w_axis.y, 1.0);
        assert_eq!(left.w_axis.z, 0.0);
        assert_eq!(right.w_axis.z, 0.0);

        // Everything but the translation column is identical.
        assert_eq!(left.x_axis, right.x_axis);
        assert_eq!(left.y_axis, right.y_axis);
        assert_eq!(left.z_axis, right.z_axis);
        assert_eq!(left.w_axis.w, right.w_axis.w);
    }

    #[test]
    fn labels_name_the_side() {
        assert_eq!(Pillar::new(-3.0).label(), "pillar (left)");
        assert_eq!(Pillar::new(3.0).label(), "pillar (right)");
    }

    #[test]
    fn uniform_translation_is_in_last_row_entries() {
        let u = Pillar::new(-3.0).uniforms(&Camera::new(800, 600));
        assert_eq!(u.world[0][3], -3.0);
        assert_eq!(u.world[1][3], 1.0);
        assert_eq!(u.world[2][3], 0.0);
    }
}
