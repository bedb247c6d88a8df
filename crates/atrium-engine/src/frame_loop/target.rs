use anyhow::Result;

use crate::camera::Camera;
use crate::device::FillMode;
use crate::time::FrameTime;

/// Outcome of one [`FrameTarget::render_frame`] call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameStatus {
    Presented,
    /// No image was acquired (surface reconfigured or timed out).
    Skipped,
}

/// What the frame loop drives: the GPU scene in the viewer, a recorder in tests.
pub trait FrameTarget {
    /// Called with non-zero sizes only.
    fn resize(&mut self, width: u32, height: u32);

    fn set_fill_mode(&mut self, mode: FillMode);

    /// Clears, activates the pipeline, renders every drawable in order and presents.
    fn render_frame(&mut self, camera: &Camera, time: FrameTime) -> Result<FrameStatus>;
}
