use anyhow::{Context, Result};
use wgpu::util::DeviceExt;

use crate::assets::Texture;
use crate::mesh::MeshData;
use crate::render::{create_object_bind_group, ObjectUniforms, OBJECT_GROUP};

use super::LoadCtx;

/// GPU resources of one drawable: immutable geometry, a writable uniform
/// block, the diffuse texture and the bind group tying them together.
///
/// Built in one step; if any part fails the already created handles are
/// dropped with the partial value.
pub struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,

    uniform_buffer: wgpu::Buffer,
    _texture: Texture,
    bind_group: wgpu::BindGroup,
}

impl GpuMesh {
    /// Uploads `mesh` and loads `texture_path` (relative to the asset root).
    ///
    /// The CPU mesh is not retained.
    pub fn upload(
        ctx: &LoadCtx<'_>,
        label: &str,
        mesh: &MeshData,
        texture_path: &str,
    ) -> Result<Self> {
        anyhow::ensure!(!mesh.is_empty(), "{label}: mesh has no triangles");

        let max = ctx.device.limits().max_buffer_size;
        for (what, bytes) in [("vertex", mesh.vertex_bytes()), ("index", mesh.index_bytes())] {
            if bytes > max {
                anyhow::bail!("{label}: {what} buffer of {bytes} bytes exceeds device limit {max}");
            }
        }

        let index_count =
            u32::try_from(mesh.indices.len()).context("index count does not fit in u32")?;

        let vertex_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} vbo")),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let index_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} ibo")),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        let uniform_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label} ubo")),
            size: ObjectUniforms::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let path = ctx.asset_root.join(texture_path);
        let texture = Texture::from_file(ctx.device, ctx.queue, &path)
            .with_context(|| format!("{label}: failed to load diffuse texture"))?;

        let bind_group = create_object_bind_group(
            ctx.device,
            ctx.object_layout,
            &uniform_buffer,
            &texture.view,
            &format!("{label} bind group"),
        );

        log::debug!(
            "{label}: {} vertices, {} triangles, texture {}x{}",
            mesh.vertices.len(),
            mesh.triangle_count(),
            texture.size.0,
            texture.size.1
        );

        Ok(Self {
            vertex_buffer,
            index_buffer,
            index_count,
            uniform_buffer,
            _texture: texture,
            bind_group,
        })
    }

    /// Writes `uniforms`, binds this mesh's buffers and bind group, and draws
    /// every index once.
    pub fn draw(
        &self,
        queue: &wgpu::Queue,
        pass: &mut wgpu::RenderPass<'_>,
        uniforms: &ObjectUniforms,
    ) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));

        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.set_bind_group(OBJECT_GROUP, &self.bind_group, &[]);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
