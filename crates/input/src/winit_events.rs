//! Feeds winit window and device events into an [`InputState`].

use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::bindings::Key;
use crate::state::InputState;

/// Map a physical winit key to a navigation key.
pub fn key_from_winit(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyA => Some(Key::A),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::KeyD => Some(Key::D),
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowDown => Some(Key::Down),
        KeyCode::ArrowLeft => Some(Key::Left),
        KeyCode::ArrowRight => Some(Key::Right),
        _ => None,
    }
}

impl InputState {
    /// Returns true if the event changed input state.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => {
                let Some(key) = key_from_winit(*code) else {
                    return false;
                };
                match state {
                    ElementState::Pressed => self.key_down(key),
                    ElementState::Released => self.key_up(key),
                }
                true
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                match state {
                    ElementState::Pressed => self.primary_down(),
                    ElementState::Released => self.primary_up(),
                }
                true
            }
            WindowEvent::Focused(false) => {
                tracing::debug!("focus lost, releasing input");
                self.release_all();
                true
            }
            _ => false,
        }
    }

    /// Raw mouse motion arrives as a device event.
    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.mouse_motion(delta.0 as f32, delta.1 as f32);
        }
    }
}
