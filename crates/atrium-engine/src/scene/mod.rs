//! Scene objects and the drawable protocol.
//!
//! Every object owns its GPU handles and follows [`Drawable`]: load once,
//! then draw once per frame from the current camera matrices.

mod crate_box;
mod drawable;
mod floor;
mod gpu_mesh;
mod pillar;
mod renderer;
mod water;

pub use crate_box::{Crate, CRATE_TEXTURE};
pub use drawable::{DrawCtx, Drawable, LoadCtx};
pub use floor::{Floor, FLOOR_OFFSET, FLOOR_TEXTURE};
pub use gpu_mesh::GpuMesh;
pub use pillar::{Pillar, PILLAR_TEXTURE, PILLAR_Y};
pub use renderer::{default_drawables, SceneConfig, SceneRenderer, PILLAR_XS, SCENE_SHADER};
pub use water::{Water, WATER_OFFSET, WATER_TEXTURE, WATER_UV_TILES, WATER_UV_VELOCITY};
