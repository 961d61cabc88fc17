use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Something the controller did during a frame or in response to a trigger.
///
/// Hosts and replay logs use these to observe navigation without diffing
/// transforms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NavEvent {
    /// Click-to-advance started an animation.
    Advanced { from: Vec3, to: Vec3 },
    /// A matching trigger started a bounce-back animation.
    Bounced { from: Vec3, to: Vec3 },
    /// A running animation reached its target.
    Arrived { position: Vec3 },
    /// Drag look changed the orientation.
    Looked { yaw: f32, pitch: f32 },
    /// Forward/back keys moved the camera.
    Moved { direction: f32, position: Vec3 },
    /// Left/right keys strafed the camera (freeform).
    Strafed { direction: f32, position: Vec3 },
    /// Left/right keys turned the camera (fixed view).
    Turned { yaw: f32 },
}

impl NavEvent {
    /// Short label used in logs and summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Advanced { .. } => "advanced",
            Self::Bounced { .. } => "bounced",
            Self::Arrived { .. } => "arrived",
            Self::Looked { .. } => "looked",
            Self::Moved { .. } => "moved",
            Self::Strafed { .. } => "strafed",
            Self::Turned { .. } => "turned",
        }
    }
}
