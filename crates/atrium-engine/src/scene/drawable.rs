use std::path::Path;

use anyhow::Result;

use crate::camera::Camera;
use crate::time::FrameTime;

/// Resources available while a drawable uploads its GPU data.
pub struct LoadCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    /// Layout of the per-object bind group (uniforms + diffuse texture).
    pub object_layout: &'a wgpu::BindGroupLayout,
    /// Directory texture paths are resolved against.
    pub asset_root: &'a Path,
}

/// Per-frame inputs for [`Drawable::render`]. The camera is read-only.
pub struct DrawCtx<'a> {
    pub queue: &'a wgpu::Queue,
    pub camera: &'a Camera,
    pub time: FrameTime,
}

/// Contract every scene object follows.
///
/// `load` runs once before the first frame; `render` once per frame inside
/// the scene pass, after the pipeline and shared sampler are bound. A draw
/// binds everything it uses and never relies on state left by the previous
/// object. GPU handles are released when the object is dropped.
pub trait Drawable {
    fn label(&self) -> &'static str;

    /// Generates the mesh, uploads buffers, loads the texture and builds the
    /// bind group. Errors are fatal at startup.
    fn load(&mut self, ctx: &LoadCtx<'_>) -> Result<()>;

    fn is_loaded(&self) -> bool;

    /// Updates uniforms and issues one indexed draw. Unloaded objects skip the draw.
    fn render(&mut self, ctx: &DrawCtx<'_>, pass: &mut wgpu::RenderPass<'_>);
}
