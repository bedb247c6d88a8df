use anyhow::Result;
use glam::{Mat4, Vec2, Vec3};

use crate::camera::Camera;
use crate::mesh::create_grid;
use crate::render::{Material, ObjectUniforms};

use super::{DrawCtx, Drawable, GpuMesh, LoadCtx};

pub const WATER_TEXTURE: &str = "textures/water_diffuse.png";

/// Water plane sits just under the floor so it shows around its edges.
pub const WATER_OFFSET: Vec3 = Vec3::new(0.0, -1.2, 0.0);

/// Texture repeats per side of the 30 x 30 plane.
pub const WATER_UV_TILES: f32 = 6.0;

/// Texture-space scroll speed, in texture widths per second.
pub const WATER_UV_VELOCITY: Vec2 = Vec2::new(0.1, 0.02);

/// Large tiled plane whose texture coordinates scroll over time.
#[derive(Default)]
pub struct Water {
    uv_offset: Vec2,
    mesh: Option<GpuMesh>,
}

impl Water {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the scroll by `dt` seconds. The offset is kept in [0, 1) so
    /// it never loses precision over long sessions.
    pub fn animate(&mut self, dt: f32) {
        let next = self.uv_offset + WATER_UV_VELOCITY * dt;
        self.uv_offset = next - next.floor();
    }

    pub fn uv_offset(&self) -> Vec2 {
        self.uv_offset
    }

    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_translation(WATER_OFFSET)
    }

    /// Tiles the texture, then scrolls it by the current offset.
    pub fn texture_transform(&self) -> Mat4 {
        Mat4::from_translation(self.uv_offset.extend(0.0))
            * Mat4::from_scale(Vec3::new(WATER_UV_TILES, WATER_UV_TILES, 1.0))
    }

    pub fn uniforms(&self, camera: &Camera) -> ObjectUniforms {
        ObjectUniforms::new(
            self.world_matrix(),
            camera.view(),
            camera.projection(),
            self.texture_transform(),
            &Material::WATER,
        )
    }
}

impl Drawable for Water {
    fn label(&self) -> &'static str {
        "water"
    }

    fn load(&mut self, ctx: &LoadCtx<'_>) -> Result<()> {
        let mesh = create_grid(30.0, 30.0, 2, 2);
        self.mesh = Some(GpuMesh::upload(ctx, self.label(), &mesh, WATER_TEXTURE)?);
        Ok(())
    }

    fn is_loaded(&self) -> bool {
        self.mesh.is_some()
    }

    fn render(&mut self, ctx: &DrawCtx<'_>, pass: &mut wgpu::RenderPass<'_>) {
        self.animate(ctx.time.dt);

        if let Some(mesh) = &self.mesh {
            mesh.draw(ctx.queue, pass, &self.uniforms(ctx.camera));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_tiled_without_scroll() {
        let water = Water::new();
        let uv = water.texture_transform().transform_point3(Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(uv, Vec3::new(WATER_UV_TILES, WATER_UV_TILES, 0.0));
    }

    #[test]
    fn default_is_unloaded_and_unscrolled() {
        let water = Water::default();
        assert_eq!(water.uv_offset(), Vec2::ZERO);
        assert!(!water.is_loaded());
    }

    #[test]
    fn animation_scrolls_by_velocity() {
        let mut water = Water::new();
        water.animate(0.5);
        assert!(water.uv_offset().abs_diff_eq(WATER_UV_VELOCITY * 0.5, 1e-6));

        let origin = water.texture_transform().transform_point3(Vec3::ZERO);
        assert!(origin.truncate().abs_diff_eq(water.uv_offset(), 1e-6));
    }

    #[test]
    fn offset_wraps_into_unit_range() {
        let mut water = Water::new();
        for _ in 0..10_000 {
            water.animate(0.25);
        }
        let off = water.uv_offset();
        assert!((0.0..1.0).contains(&off.x));
        assert!((0.0..1.0).contains(&off.y));
    }

    #[test]
    fn zero_dt_leaves_offset_unchanged() {
        let mut water = Water::new();
        water.animate(0.3);
        let before = water.uv_offset();
        water.animate(0.0);
        assert_eq!(water.uv_offset(), before);
    }

    #[test]
    fn sits_below_floor_with_water_material() {
        let water = Water::new();
        let u = water.uniforms(&Camera::new(800, 600));
        assert_eq!(u.world[1][3], -1.2);
        assert_eq!(u.diffuse, Material::WATER.diffuse.to_array());
    }
}
