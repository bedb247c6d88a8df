//! Atrium engine crate.
//!
//! A small real-time 3D scene viewer: the surface manager, orbit camera,
//! drawable protocol and frame loop, plus the window, input, asset and timing
//! plumbing they run on.

pub mod assets;
pub mod camera;
pub mod color;
pub mod device;
pub mod frame_loop;
pub mod input;
pub mod logging;
pub mod mesh;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;
