use crate::assets::ShaderSource;
use crate::device::{FillMode, Gpu};
use crate::mesh::Vertex;

use super::ObjectUniforms;

/// Bind group slot of the shared sampler (set once per activation).
pub const SAMPLER_GROUP: u32 = 0;
/// Bind group slot of each object's uniforms and texture.
pub const OBJECT_GROUP: u32 = 1;

/// Textured-mesh pipeline shared by every drawable.
///
/// One pipeline per raster preset. Both share a layout:
/// - group 0: the anisotropic sampler
/// - group 1: object uniforms (vertex + fragment) and diffuse texture (fragment)
pub struct ScenePipeline {
    solid: wgpu::RenderPipeline,
    /// `None` when the adapter cannot rasterize lines.
    wireframe: Option<wgpu::RenderPipeline>,

    object_layout: wgpu::BindGroupLayout,
    sampler_group: wgpu::BindGroup,
}

impl ScenePipeline {
    pub fn new(gpu: &Gpu<'_>, shader: &ShaderSource) -> Self {
        let device = gpu.device();
        let module = shader.create_module(device);

        let sampler_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("atrium sampler bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            }],
        });

        let sampler_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("atrium sampler bind group"),
            layout: &sampler_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Sampler(gpu.sampler()),
            }],
        });

        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("atrium object bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(ObjectUniforms::SIZE),
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
            ],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("atrium scene pipeline layout"),
            bind_group_layouts: &[&sampler_layout, &object_layout],
            immediate_size: 0,
        });

        let raster = gpu.raster();
        let build = |label: &str, primitive: wgpu::PrimitiveState| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&layout),

                vertex: wgpu::VertexState {
                    module: &module,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[Vertex::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &module,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: gpu.surface_format(),
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive,

                depth_stencil: Some(wgpu::DepthStencilState {
                    format: gpu.depth_format(),
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: gpu.multisample_state(),

                multiview_mask: None,
                cache: None,
            })
        };

        let solid = build("atrium solid pipeline", raster.solid);
        let wireframe = raster
            .wireframe_supported
            .then(|| build("atrium wireframe pipeline", raster.wireframe));

        Self {
            solid,
            wireframe,
            object_layout,
            sampler_group,
        }
    }

    /// Layout drawables build their per-object bind group against.
    pub fn object_layout(&self) -> &wgpu::BindGroupLayout {
        &self.object_layout
    }

    /// Binds the pipeline for `mode` and the shared sampler.
    pub fn activate(&self, pass: &mut wgpu::RenderPass<'_>, mode: FillMode) {
        let pipeline = match (mode, &self.wireframe) {
            (FillMode::Wireframe, Some(wireframe)) => wireframe,
            _ => &self.solid,
        };
        pass.set_pipeline(pipeline);
        pass.set_bind_group(SAMPLER_GROUP, &self.sampler_group, &[]);
    }
}

/// Builds the group-1 bind group for one object.
pub fn create_object_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    uniforms: &wgpu::Buffer,
    texture: &wgpu::TextureView,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(texture),
            },
        ],
    })
}
