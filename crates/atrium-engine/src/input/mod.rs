//! Input subsystem.
//!
//! The types here carry no winit dependency; `platform::winit` converts
//! window events into them.

pub mod platform;
mod state;
mod types;

pub use state::InputState;
pub use types::{InputEvent, Key, MouseButton};
