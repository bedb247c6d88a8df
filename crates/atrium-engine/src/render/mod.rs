//! Scene rendering state shared by every drawable.
//!
//! Convention:
//! - world space is left-handed, +Y up
//! - matrices reach the GPU transposed; shaders multiply row vectors (`v * M`)

mod material;
mod pipeline;
mod uniforms;

pub use material::Material;
pub use pipeline::{create_object_bind_group, ScenePipeline, OBJECT_GROUP, SAMPLER_GROUP};
pub use uniforms::ObjectUniforms;
