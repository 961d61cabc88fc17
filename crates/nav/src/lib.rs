//! Camera navigation: a per-frame behavior that turns input snapshots into
//! camera pose changes.
//!
//! # Invariants
//! - Yaw stays in `[0, 360)`.
//! - In freeform mode pitch stays within the configured limit.
//! - A finished animation leaves the camera exactly on its target and does
//!   not interpolate again until retargeted.
//! - Fixed-view left/right keys turn the camera; they never move it.

mod animation;
mod behavior;
mod config;
mod controller;
mod event;

pub use animation::PositionAnimation;
pub use behavior::{Behavior, FrameContext};
pub use config::{ConfigError, NavigationConfig, NavigationMode};
pub use controller::{CameraController, Pose};
pub use event::NavEvent;

pub fn crate_info() -> &'static str {
    "navcam-nav v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("nav"));
    }
}
