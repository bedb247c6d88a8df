use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::Material;

/// Per-object uniform block (group 1, binding 0).
///
/// Matrices are stored transposed; the shader multiplies row vectors on the
/// left (`v * M`), so the transposed storage reads back as the original
/// matrix. Layout matches `ObjectUniforms` in `textured.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ObjectUniforms {
    pub world: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub texture_transform: [[f32; 4]; 4],
    pub diffuse: [f32; 4],
    pub ambient: [f32; 4],
    pub specular: [f32; 4],
}

impl ObjectUniforms {
    /// Size of the block in bytes (four matrices and three colors).
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    pub fn new(
        world: Mat4,
        view: Mat4,
        projection: Mat4,
        texture_transform: Mat4,
        material: &Material,
    ) -> Self {
        Self {
            world: transposed(world),
            view: transposed(view),
            projection: transposed(projection),
            texture_transform: transposed(texture_transform),
            diffuse: material.diffuse.to_array(),
            ambient: material.ambient.to_array(),
            specular: material.specular.to_array(),
        }
    }
}

#[inline]
fn transposed(m: Mat4) -> [[f32; 4]; 4] {
    m.transpose().to_cols_array_2d()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn block_is_sixteen_byte_aligned() {
        assert_eq!(ObjectUniforms::SIZE, 4 * 64 + 3 * 16);
        assert_eq!(ObjectUniforms::SIZE % 16, 0);
    }

    #[test]
    fn matrices_are_uploaded_transposed() {
        let world = Mat4::from_translation(Vec3::new(2.0, -1.0, 5.0));
        let u = ObjectUniforms::new(
            world,
            Mat4::IDENTITY,
            Mat4::IDENTITY,
            Mat4::IDENTITY,
            &Material::PLAIN,
        );

        // Translation lives in the last column of `world`, so after the
        // transpose it is the fourth component of the first three rows.
        assert_eq!(u.world[0][3], 2.0);
        assert_eq!(u.world[1][3], -1.0);
        assert_eq!(u.world[2][3], 5.0);
        assert_eq!(u.world[3], [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Mat4::from_cols_array_2d(&u.world).transpose(), world);
    }

    #[test]
    fn material_colors_copied_verbatim() {
        let u = ObjectUniforms::new(
            Mat4::IDENTITY,
            Mat4::IDENTITY,
            Mat4::IDENTITY,
            Mat4::IDENTITY,
            &Material::WATER,
        );
        assert_eq!(u.diffuse, Material::WATER.diffuse.to_array());
        assert_eq!(u.ambient, Material::WATER.ambient.to_array());
        assert_eq!(u.specular, Material::WATER.specular.to_array());
    }

    #[test]
    fn bytes_cover_whole_block() {
        let u = ObjectUniforms::zeroed();
        assert_eq!(bytemuck::bytes_of(&u).len() as u64, ObjectUniforms::SIZE);
    }
}
