//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the viewer window, and wires window events
//! to the frame loop and the GPU scene.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
