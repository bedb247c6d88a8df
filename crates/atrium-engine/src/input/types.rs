/// Bindable keyboard key, identified by physical position (US layout names).
///
/// Only the digit row and letters can be bound; the rest of the keyboard
/// arrives as `Other` with the platform code so it can still be logged.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    /// Top-row digit `0..=9`.
    Digit(u8),
    /// Lowercase ASCII letter.
    Letter(char),
    Other(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other,
}

/// Input the viewer reacts to, already in logical pixels and wheel notches.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor position plus its movement since the previous known position.
    /// The first move after entering the window carries a zero delta.
    PointerMoved { x: f32, y: f32, dx: f32, dy: f32 },

    Button { button: MouseButton, pressed: bool },

    /// Vertical wheel travel in notches; positive scrolls away from the user.
    Wheel { lines: f32 },

    Key { key: Key, pressed: bool, repeat: bool },

    PointerLeft,

    Focused(bool),
}
