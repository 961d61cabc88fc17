use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::angle::{wrap_degrees, wrap_signed_degrees};

/// Unique identifier for an object in the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Transform at `position` looking along the given yaw and pitch (degrees).
    pub fn from_yaw_pitch(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut t = Self {
            position,
            ..Self::default()
        };
        t.set_yaw_pitch(yaw, pitch);
        t
    }

    /// Replace the orientation with yaw about +Y followed by pitch about local X.
    /// No roll.
    pub fn set_yaw_pitch(&mut self, yaw: f32, pitch: f32) {
        self.rotation =
            Quat::from_rotation_y(-yaw.to_radians()) * Quat::from_rotation_x(-pitch.to_radians());
    }

    /// Yaw in `[0, 360)` and pitch in `(-180, 180]`, degrees. Roll is discarded.
    pub fn yaw_pitch(&self) -> (f32, f32) {
        let (y, x, _z) = self.rotation.to_euler(EulerRot::YXZ);
        (
            wrap_degrees(-y.to_degrees()),
            wrap_signed_degrees(-x.to_degrees()),
        )
    }

    /// Unit vector the transform looks along.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Unit vector to the transform's right.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Forward with the vertical component dropped, normalized.
    /// Zero when looking straight up or down.
    pub fn ground_forward(&self) -> Vec3 {
        ground_project(self.forward())
    }

    /// Right with the vertical component dropped, normalized.
    pub fn ground_right(&self) -> Vec3 {
        ground_project(self.right())
    }
}

fn ground_project(v: Vec3) -> Vec3 {
    let flat = Vec3::new(v.x, 0.0, v.z);
    if flat.length_squared() < 1e-10 {
        Vec3::ZERO
    } else {
        flat.normalize()
    }
}

/// Delivered by the host when the camera's trigger volume starts overlapping
/// another object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerEvent {
    /// The object that entered the trigger.
    #[serde(default)]
    pub other: EntityId,
    /// Tag carried by the other object.
    pub tag: String,
}

impl TriggerEvent {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            other: EntityId::new(),
            tag: tag.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn entity_id_uniqueness() {
        let a = EntityId::new();
        let b = EntityId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
        assert!(approx(t.forward(), Vec3::NEG_Z));
        assert!(approx(t.right(), Vec3::X));
    }

    #[test]
    fn positive_yaw_turns_right() {
        let t = Transform::from_yaw_pitch(Vec3::ZERO, 90.0, 0.0);
        assert!(approx(t.forward(), Vec3::X));
        assert!(approx(t.right(), Vec3::Z));
    }

    #[test]
    fn positive_pitch_looks_down() {
        let t = Transform::from_yaw_pitch(Vec3::ZERO, 0.0, 30.0);
        assert!(t.forward().y < 0.0);
        assert!(approx(t.ground_forward(), Vec3::NEG_Z));
        assert!((t.ground_forward().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn yaw_pitch_recovered_from_rotation() {
        let t = Transform::from_yaw_pitch(Vec3::ZERO, 250.0, -35.0);
        let (yaw, pitch) = t.yaw_pitch();
        assert!((yaw - 250.0).abs() < 1e-3);
        assert!((pitch + 35.0).abs() < 1e-3);
    }

    #[test]
    fn ground_forward_zero_when_vertical() {
        let t = Transform::from_yaw_pitch(Vec3::ZERO, 0.0, 90.0);
        assert!(t.ground_forward().length() < 1e-3);
    }

    #[test]
    fn trigger_event_other_defaults_when_missing() {
        let ev: TriggerEvent = serde_json::from_str(r#"{"tag":"Wall"}"#).unwrap();
        assert_eq!(ev.tag, "Wall");
    }
}
