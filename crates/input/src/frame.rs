use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::bindings::Key;

/// Input as seen by a behavior during one frame.
///
/// `mouse_delta` is in axis units: +x is rightward motion, +y is upward motion.
/// Missing fields deserialize to their idle values so scripts only spell out
/// what changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputFrame {
    /// Primary (left) mouse button is down this frame.
    pub primary_held: bool,
    /// Primary button went down during this frame.
    pub primary_pressed: bool,
    /// Primary button went up during this frame.
    pub primary_released: bool,
    pub mouse_delta: Vec2,
    /// Keys held down this frame.
    pub keys: BTreeSet<Key>,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, key: Key) -> Self {
        self.keys.insert(key);
        self
    }

    /// Button held with the given mouse motion.
    pub fn drag(delta: Vec2) -> Self {
        Self {
            primary_held: true,
            mouse_delta: delta,
            ..Self::default()
        }
    }

    /// The frame on which the button comes back up.
    pub fn release() -> Self {
        Self {
            primary_released: true,
            ..Self::default()
        }
    }

    pub fn is_key_held(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let f = InputFrame::default();
        assert!(!f.primary_held);
        assert!(!f.primary_released);
        assert_eq!(f.mouse_delta, Vec2::ZERO);
        assert!(f.keys.is_empty());
    }

    #[test]
    fn builders() {
        let f = InputFrame::drag(Vec2::new(3.0, -1.0)).with_key(Key::A);
        assert!(f.primary_held);
        assert!(f.is_key_held(Key::A));
        assert!(!f.is_key_held(Key::D));
        assert!(InputFrame::release().primary_released);
    }

    #[test]
    fn sparse_json_fills_defaults() {
        let f: InputFrame = serde_json::from_str(r#"{"keys":["W","Left"]}"#).unwrap();
        assert!(f.is_key_held(Key::W));
        assert!(f.is_key_held(Key::Left));
        assert!(!f.primary_held);
    }
}
