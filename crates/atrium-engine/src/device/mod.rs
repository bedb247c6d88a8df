//! Surface manager.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - configuring the swap chain with matching depth-stencil and MSAA targets
//! - the solid/wireframe raster presets and the shared texture sampler
//! - acquiring, clearing and presenting frames

mod error;
mod frame;
mod gpu;
mod init;
mod raster;
mod surface;
mod viewport;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::SurfaceInit;
pub use raster::{FillMode, RasterPresets};
pub use surface::DEPTH_FORMAT;
pub use viewport::Viewport;
