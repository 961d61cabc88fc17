use glam::Vec2;
use std::collections::BTreeSet;

use crate::bindings::Key;
use crate::frame::InputFrame;

/// Pixel-to-axis scale applied to raw mouse motion by default.
pub const DEFAULT_MOUSE_SCALE: f32 = 0.1;

/// Accumulates raw input events between frames.
///
/// Feed it events as the window delivers them, then call [`InputState::end_frame`]
/// once per frame to get the snapshot and reset per-frame edges.
#[derive(Debug, Clone)]
pub struct InputState {
    keys: BTreeSet<Key>,
    primary_down: bool,
    primary_pressed: bool,
    primary_released: bool,
    mouse_delta: Vec2,
    mouse_scale: f32,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            keys: BTreeSet::new(),
            primary_down: false,
            primary_pressed: false,
            primary_released: false,
            mouse_delta: Vec2::ZERO,
            mouse_scale: DEFAULT_MOUSE_SCALE,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different pixel-to-axis scale for mouse motion.
    pub fn with_mouse_scale(mut self, scale: f32) -> Self {
        self.mouse_scale = scale;
        self
    }

    pub fn key_down(&mut self, key: Key) {
        self.keys.insert(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.keys.remove(&key);
    }

    pub fn primary_down(&mut self) {
        if !self.primary_down {
            self.primary_pressed = true;
        }
        self.primary_down = true;
    }

    pub fn primary_up(&mut self) {
        if self.primary_down {
            self.primary_released = true;
        }
        self.primary_down = false;
    }

    /// Raw pointer motion in pixels, screen convention (+y down).
    pub fn mouse_motion(&mut self, dx: f32, dy: f32) {
        self.mouse_delta += Vec2::new(dx, -dy) * self.mouse_scale;
    }

    /// Snapshot of the current frame without clearing anything.
    pub fn snapshot(&self) -> InputFrame {
        InputFrame {
            primary_held: self.primary_down,
            primary_pressed: self.primary_pressed,
            primary_released: self.primary_released,
            mouse_delta: self.mouse_delta,
            keys: self.keys.clone(),
        }
    }

    /// Snapshot this frame, then clear edges and accumulated motion.
    pub fn end_frame(&mut self) -> InputFrame {
        let frame = self.snapshot();
        self.primary_pressed = false;
        self.primary_released = false;
        self.mouse_delta = Vec2::ZERO;
        tracing::trace!(
            held = frame.primary_held,
            keys = frame.keys.len(),
            "input frame"
        );
        frame
    }

    /// Release everything, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.keys.clear();
        self.primary_up();
        self.mouse_delta = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_hold_release_edges() {
        let mut s = InputState::new();
        s.primary_down();
        let f = s.end_frame();
        assert!(f.primary_held && f.primary_pressed && !f.primary_released);

        let f = s.end_frame();
        assert!(f.primary_held && !f.primary_pressed);

        s.primary_up();
        let f = s.end_frame();
        assert!(!f.primary_held && f.primary_released);

        let f = s.end_frame();
        assert!(!f.primary_released);
    }

    #[test]
    fn tap_within_one_frame_reports_both_edges() {
        let mut s = InputState::new();
        s.primary_down();
        s.primary_up();
        let f = s.end_frame();
        assert!(f.primary_pressed && f.primary_released && !f.primary_held);
    }

    #[test]
    fn mouse_motion_accumulates_and_flips_y() {
        let mut s = InputState::new().with_mouse_scale(1.0);
        s.mouse_motion(3.0, 4.0);
        s.mouse_motion(1.0, -1.0);
        let f = s.end_frame();
        assert_eq!(f.mouse_delta, Vec2::new(4.0, -3.0));
        assert_eq!(s.end_frame().mouse_delta, Vec2::ZERO);
    }

    #[test]
    fn keys_persist_until_released() {
        let mut s = InputState::new();
        s.key_down(Key::W);
        assert!(s.end_frame().is_key_held(Key::W));
        assert!(s.end_frame().is_key_held(Key::W));
        s.key_up(Key::W);
        assert!(!s.end_frame().is_key_held(Key::W));
    }

    #[test]
    fn release_all_emits_release_edge() {
        let mut s = InputState::new();
        s.key_down(Key::S);
        s.primary_down();
        s.end_frame();
        s.release_all();
        let f = s.end_frame();
        assert!(f.keys.is_empty());
        assert!(f.primary_released);
    }

    #[test]
    fn up_without_down_is_ignored() {
        let mut s = InputState::new();
        s.primary_up();
        assert!(!s.end_frame().primary_released);
    }
}
