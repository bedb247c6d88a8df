use winit::dpi::PhysicalPosition;
use winit::event::{MouseButton as WinitButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{InputEvent, InputState, Key, MouseButton};

/// Logical pixels of touchpad travel that count as one wheel notch.
const PIXELS_PER_LINE: f32 = 40.0;

const DIGIT_ROW: [KeyCode; 10] = [
    KeyCode::Digit0, KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4,
    KeyCode::Digit5, KeyCode::Digit6, KeyCode::Digit7, KeyCode::Digit8, KeyCode::Digit9,
];

const LETTERS: [KeyCode; 26] = [
    KeyCode::KeyA, KeyCode::KeyB, KeyCode::KeyC, KeyCode::KeyD, KeyCode::KeyE, KeyCode::KeyF,
    KeyCode::KeyG, KeyCode::KeyH, KeyCode::KeyI, KeyCode::KeyJ, KeyCode::KeyK, KeyCode::KeyL,
    KeyCode::KeyM, KeyCode::KeyN, KeyCode::KeyO, KeyCode::KeyP, KeyCode::KeyQ, KeyCode::KeyR,
    KeyCode::KeyS, KeyCode::KeyT, KeyCode::KeyU, KeyCode::KeyV, KeyCode::KeyW, KeyCode::KeyX,
    KeyCode::KeyY, KeyCode::KeyZ,
];

/// Converts the window events that steer the camera and the fill mode.
///
/// `state` must not yet include `event`: drag deltas are measured from the
/// position it holds. Resize, close and redraw belong to the runtime and
/// yield `None`, as does anything else the viewer ignores.
pub fn translate_window_event(
    scale_factor: f64,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    let ev = match event {
        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical(*position, scale_factor);
            let (dx, dy) = state.pointer_delta_to(x, y);
            InputEvent::PointerMoved { x, y, dx, dy }
        }
        WindowEvent::CursorLeft { .. } => InputEvent::PointerLeft,
        WindowEvent::MouseInput { state: st, button, .. } => InputEvent::Button {
            button: map_button(*button),
            pressed: st.is_pressed(),
        },
        WindowEvent::MouseWheel { delta, .. } => InputEvent::Wheel {
            lines: wheel_lines(*delta, scale_factor),
        },
        WindowEvent::KeyboardInput { event, .. } => InputEvent::Key {
            key: map_key(event.physical_key),
            pressed: event.state.is_pressed(),
            repeat: event.repeat,
        },
        WindowEvent::Focused(focused) => InputEvent::Focused(*focused),
        _ => return None,
    };
    Some(ev)
}

fn to_logical(pos: PhysicalPosition<f64>, scale_factor: f64) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(scale_factor);
    (logical.x as f32, logical.y as f32)
}

/// Notched wheels report lines directly; touchpads report pixels.
fn wheel_lines(delta: MouseScrollDelta, scale_factor: f64) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(p) => to_logical(p, scale_factor).1 / PIXELS_PER_LINE,
    }
}

fn map_button(button: WinitButton) -> MouseButton {
    match button {
        WinitButton::Left => MouseButton::Left,
        WinitButton::Right => MouseButton::Right,
        WinitButton::Middle => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}

fn map_key(key: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = key else {
        return Key::Other(0);
    };
    if let Some(d) = DIGIT_ROW.iter().position(|c| *c == code) {
        return Key::Digit(d as u8);
    }
    if let Some(l) = LETTERS.iter().position(|c| *c == code) {
        return Key::Letter(char::from(b'a' + l as u8));
    }
    Key::Other(code as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_row_and_letters_are_bindable() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Digit1)), Key::Digit(1));
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Digit0)), Key::Digit(0));
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyA)), Key::Letter('a'));
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyW)), Key::Letter('w'));
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyZ)), Key::Letter('z'));
    }

    #[test]
    fn other_keys_keep_their_code() {
        assert_eq!(
            map_key(PhysicalKey::Code(KeyCode::Escape)),
            Key::Other(KeyCode::Escape as u32)
        );
        assert_ne!(map_key(PhysicalKey::Code(KeyCode::Numpad1)), Key::Digit(1));
    }

    #[test]
    fn line_wheel_passes_through() {
        assert_eq!(wheel_lines(MouseScrollDelta::LineDelta(0.5, -2.0), 2.0), -2.0);
    }

    #[test]
    fn pixel_wheel_is_scaled_then_converted_to_lines() {
        let delta = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 160.0));
        assert_eq!(wheel_lines(delta, 2.0), 2.0);
        assert_eq!(wheel_lines(delta, 1.0), 4.0);
    }

    #[test]
    fn window_management_events_are_not_input() {
        let state = InputState::default();
        let resized = WindowEvent::Resized(winit::dpi::PhysicalSize::new(640, 480));
        assert_eq!(translate_window_event(1.0, &state, &resized), None);
        assert_eq!(
            translate_window_event(1.0, &state, &WindowEvent::Focused(false)),
            Some(InputEvent::Focused(false))
        );
    }

    #[test]
    fn extra_buttons_collapse_to_other() {
        assert_eq!(map_button(WinitButton::Left), MouseButton::Left);
        assert_eq!(map_button(WinitButton::Back), MouseButton::Other);
        assert_eq!(map_button(WinitButton::Other(7)), MouseButton::Other);
    }
}
