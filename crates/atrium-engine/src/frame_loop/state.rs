use anyhow::Result;

use crate::camera::Camera;
use crate::device::FillMode;
use crate::input::{InputEvent, InputState, Key, MouseButton};
use crate::time::FrameTime;

use super::{FrameStatus, FrameTarget};

/// Frame loop phase.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Polling,
    Rendering,
    Terminated,
}

/// Events the loop consumes, already translated from the platform.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopEvent {
    /// New drawable size in physical pixels.
    Resize { width: u32, height: u32 },
    Input(InputEvent),
    Quit,
}

/// Per-frame driver: routes events to the camera and target, then runs frames.
///
/// Owns the fill mode so toggling has no hidden global state.
#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    fill_mode: FillMode,
    wireframe_key: Key,
}

impl FrameLoop {
    pub fn new(wireframe_key: Key) -> Self {
        Self {
            state: LoopState::Polling,
            fill_mode: FillMode::Solid,
            wireframe_key,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == LoopState::Terminated
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    /// Consumes one event. `input` must already include it (held buttons).
    ///
    /// Each event kind is handled on its own; nothing falls through.
    pub fn handle<T: FrameTarget>(
        &mut self,
        event: &LoopEvent,
        input: &InputState,
        camera: &mut Camera,
        target: &mut T,
    ) {
        if self.is_terminated() {
            return;
        }

        match event {
            LoopEvent::Resize { width, height } => {
                if *width == 0 || *height == 0 {
                    log::debug!("ignoring zero-area resize {width}x{height}");
                    return;
                }
                log::debug!("resize {width}x{height}");
                target.resize(*width, *height);
                camera.resize(*width, *height);
            }

            LoopEvent::Input(InputEvent::PointerMoved { dx, dy, .. }) => {
                if input.button_down(MouseButton::Left) {
                    camera.update(*dx, *dy);
                }
            }

            LoopEvent::Input(InputEvent::Wheel { lines }) => {
                camera.update_fov(*lines);
            }

            LoopEvent::Input(InputEvent::Key {
                key,
                pressed: true,
                repeat: false,
            }) if *key == self.wireframe_key => {
                self.fill_mode = self.fill_mode.toggled();
                log::debug!("fill mode -> {:?}", self.fill_mode);
                target.set_fill_mode(self.fill_mode);
            }

            LoopEvent::Quit => {
                self.state = LoopState::Terminated;
            }

            LoopEvent::Input(_) => {}
        }
    }

    /// Runs one frame on `target`. A failed frame terminates the loop.
    pub fn frame<T: FrameTarget>(
        &mut self,
        target: &mut T,
        camera: &Camera,
        time: FrameTime,
    ) -> Result<FrameStatus> {
        if self.is_terminated() {
            return Ok(FrameStatus::Skipped);
        }

        self.state = LoopState::Rendering;
        let result = target.render_frame(camera, time);
        self.state = match result {
            Ok(_) => LoopState::Polling,
            Err(_) => LoopState::Terminated,
        };
        result
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(Key::Digit(1))
    }
}
