use std::collections::HashSet;

use super::types::{InputEvent, MouseButton};

/// Pointer position and held mouse buttons, updated from `InputEvent`s.
#[derive(Debug, Default)]
pub struct InputState {
    pointer: Option<(f32, f32)>,
    buttons: HashSet<MouseButton>,
}

impl InputState {
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match *ev {
            InputEvent::PointerMoved { x, y, .. } => self.pointer = Some((x, y)),
            InputEvent::PointerLeft => self.pointer = None,
            InputEvent::Button { button, pressed: true } => {
                self.buttons.insert(button);
            }
            InputEvent::Button { button, pressed: false } => {
                self.buttons.remove(&button);
            }
            // A release can be lost while unfocused; never leave a drag latched.
            InputEvent::Focused(false) => self.buttons.clear(),
            InputEvent::Focused(true) | InputEvent::Wheel { .. } | InputEvent::Key { .. } => {}
        }
    }

    /// Movement from the last known pointer position to `(x, y)`, or zero
    /// when the position is unknown.
    pub fn pointer_delta_to(&self, x: f32, y: f32) -> (f32, f32) {
        self.pointer.map_or((0.0, 0.0), |(px, py)| (x - px, y - py))
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }
}
