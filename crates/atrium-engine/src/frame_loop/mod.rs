//! Frame loop: event routing and per-frame orchestration.
//!
//! The loop never touches the GPU directly; it talks to a [`FrameTarget`].

mod state;
mod target;

pub use state::{FrameLoop, LoopEvent, LoopState};
pub use target::{FrameStatus, FrameTarget};
