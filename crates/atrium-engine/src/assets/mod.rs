//! On-disk assets: diffuse textures and WGSL shaders.
//!
//! Paths are resolved by callers against the configured asset root.

mod error;
mod shader;
mod texture;

pub use error::AssetError;
pub use shader::ShaderSource;
pub use texture::{ImageData, Texture};
