use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::frame::InputFrame;

/// Host-neutral identifiers for the keys navigation cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
}

/// A movement direction a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveAxis {
    Forward,
    Back,
    Left,
    Right,
}

/// Maps keys to movement directions.
///
/// Several keys may drive the same direction (WASD and arrows by default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: HashMap<Key, MoveAxis>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(Key::W, MoveAxis::Forward);
        bindings.bind(Key::S, MoveAxis::Back);
        bindings.bind(Key::A, MoveAxis::Left);
        bindings.bind(Key::D, MoveAxis::Right);

        // Arrow keys as alternative
        bindings.bind(Key::Up, MoveAxis::Forward);
        bindings.bind(Key::Down, MoveAxis::Back);
        bindings.bind(Key::Left, MoveAxis::Left);
        bindings.bind(Key::Right, MoveAxis::Right);
        bindings
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindings with no keys mapped.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind a key to a direction, replacing any previous binding of that key.
    pub fn bind(&mut self, key: Key, axis: MoveAxis) {
        self.bindings.insert(key, axis);
    }

    pub fn unbind(&mut self, key: Key) {
        self.bindings.remove(&key);
    }

    pub fn axis_of(&self, key: Key) -> Option<MoveAxis> {
        self.bindings.get(&key).copied()
    }

    fn held(&self, frame: &InputFrame, axis: MoveAxis) -> bool {
        frame
            .keys
            .iter()
            .any(|k| self.axis_of(*k) == Some(axis))
    }

    /// `-1.0` if any back key is held, `1.0` if only forward keys are held,
    /// `None` if neither.
    pub fn forward_back(&self, frame: &InputFrame) -> Option<f32> {
        if self.held(frame, MoveAxis::Back) {
            Some(-1.0)
        } else if self.held(frame, MoveAxis::Forward) {
            Some(1.0)
        } else {
            None
        }
    }

    /// `-1.0` if any left key is held, `1.0` if only right keys are held,
    /// `None` if neither.
    pub fn left_right(&self, frame: &InputFrame) -> Option<f32> {
        if self.held(frame, MoveAxis::Left) {
            Some(-1.0)
        } else if self.held(frame, MoveAxis::Right) {
            Some(1.0)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_wasd_and_arrows() {
        let b = KeyBindings::default();
        assert_eq!(b.axis_of(Key::W), Some(MoveAxis::Forward));
        assert_eq!(b.axis_of(Key::Up), Some(MoveAxis::Forward));
        assert_eq!(b.axis_of(Key::S), Some(MoveAxis::Back));
        assert_eq!(b.axis_of(Key::Down), Some(MoveAxis::Back));
        assert_eq!(b.axis_of(Key::A), Some(MoveAxis::Left));
        assert_eq!(b.axis_of(Key::Right), Some(MoveAxis::Right));
    }

    #[test]
    fn nothing_held_gives_none() {
        let b = KeyBindings::default();
        let frame = InputFrame::default();
        assert_eq!(b.forward_back(&frame), None);
        assert_eq!(b.left_right(&frame), None);
    }

    #[test]
    fn back_wins_over_forward() {
        let b = KeyBindings::default();
        let frame = InputFrame::default().with_key(Key::W).with_key(Key::Down);
        assert_eq!(b.forward_back(&frame), Some(-1.0));
    }

    #[test]
    fn left_wins_over_right() {
        let b = KeyBindings::default();
        let frame = InputFrame::default().with_key(Key::D).with_key(Key::A);
        assert_eq!(b.left_right(&frame), Some(-1.0));
        let frame = InputFrame::default().with_key(Key::Right);
        assert_eq!(b.left_right(&frame), Some(1.0));
    }

    #[test]
    fn rebinding_replaces() {
        let mut b = KeyBindings::default();
        b.bind(Key::W, MoveAxis::Back);
        let frame = InputFrame::default().with_key(Key::W);
        assert_eq!(b.forward_back(&frame), Some(-1.0));
        b.unbind(Key::W);
        assert_eq!(b.forward_back(&frame), None);
    }
}
