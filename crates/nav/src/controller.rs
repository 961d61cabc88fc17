use glam::Vec3;
use navcam_common::{Transform, TriggerEvent, clamp_pitch, wrap_degrees};
use navcam_input::{InputFrame, KeyBindings};
use serde::{Deserialize, Serialize};

use crate::animation::PositionAnimation;
use crate::behavior::{Behavior, FrameContext};
use crate::config::{NavigationConfig, NavigationMode};
use crate::event::NavEvent;

/// Camera position and orientation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

/// First-person navigation: drag to look, keys to move or turn, click to
/// advance, bounce back from tagged triggers.
///
/// Yaw and pitch are cached here and written to the transform whenever they
/// change; position is read back from the transform every frame so the host
/// may still move the camera.
#[derive(Debug, Clone)]
pub struct CameraController {
    config: NavigationConfig,
    bindings: KeyBindings,
    pose: Pose,
    animation: PositionAnimation,
    dragging: bool,
    /// +1 after moving forward (or right), -1 after moving back (or left).
    last_direction: f32,
}

impl CameraController {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config,
            bindings: KeyBindings::default(),
            pose: Pose {
                position: Vec3::ZERO,
                yaw: 0.0,
                pitch: 0.0,
            },
            animation: PositionAnimation::settled(Vec3::ZERO),
            dragging: false,
            last_direction: 1.0,
        }
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Take the initial pose from `transform` and reset all per-session state.
    ///
    /// In freeform mode a pitch outside the limit is clamped and written back.
    pub fn activate(&mut self, transform: &mut Transform) {
        let (yaw, mut pitch) = transform.yaw_pitch();
        if self.config.mode == NavigationMode::Freeform {
            let clamped = clamp_pitch(pitch, self.config.pitch_limit);
            if clamped != pitch {
                pitch = clamped;
                transform.set_yaw_pitch(yaw, pitch);
            }
        }
        self.pose = Pose {
            position: transform.position,
            yaw,
            pitch,
        };
        self.animation = PositionAnimation::settled(transform.position);
        self.dragging = false;
        self.last_direction = 1.0;
        tracing::debug!(
            position = ?self.pose.position,
            yaw,
            pitch,
            mode = ?self.config.mode,
            "camera controller activated"
        );
    }

    /// Run one frame of navigation.
    pub fn update(
        &mut self,
        dt: f32,
        input: &InputFrame,
        transform: &mut Transform,
    ) -> Vec<NavEvent> {
        let mut events = Vec::new();

        if let Some(position) = self.animation.advance(dt) {
            transform.position = position;
            if self.animation.is_finished() {
                events.push(NavEvent::Arrived { position });
            }
        }

        if input.primary_released && !self.dragging && self.config.click_to_move_forward {
            let from = transform.position;
            let to = from + transform.ground_forward() * self.config.animation_step;
            self.animation.retarget(from, to);
            self.last_direction = 1.0;
            tracing::debug!(?from, ?to, "click advance");
            events.push(NavEvent::Advanced { from, to });
        }

        if input.primary_held {
            self.look(input, transform, &mut events);
        } else {
            self.dragging = false;
        }

        if let Some(direction) = self.bindings.forward_back(input) {
            transform.position += transform.ground_forward() * direction * self.config.key_speed;
            self.last_direction = direction;
            events.push(NavEvent::Moved {
                direction,
                position: transform.position,
            });
        }

        if let Some(direction) = self.bindings.left_right(input) {
            match self.config.mode {
                NavigationMode::Freeform => {
                    transform.position +=
                        transform.ground_right() * direction * self.config.key_speed;
                    self.last_direction = direction;
                    events.push(NavEvent::Strafed {
                        direction,
                        position: transform.position,
                    });
                }
                NavigationMode::FixedView => {
                    self.pose.yaw =
                        wrap_degrees(self.pose.yaw + direction * self.config.rotate_key_speed);
                    transform.set_yaw_pitch(self.pose.yaw, self.pose.pitch);
                    events.push(NavEvent::Turned { yaw: self.pose.yaw });
                }
            }
        }

        self.pose.position = transform.position;
        tracing::trace!(
            position = ?self.pose.position,
            yaw = self.pose.yaw,
            pitch = self.pose.pitch,
            events = events.len(),
            "camera frame"
        );
        events
    }

    fn look(&mut self, input: &InputFrame, transform: &mut Transform, events: &mut Vec<NavEvent>) {
        let sign = if self.config.inverse_mouse_direction {
            -1.0
        } else {
            1.0
        };
        let delta = input.mouse_delta * self.config.rotate_mouse_speed * sign;

        self.pose.yaw = wrap_degrees(self.pose.yaw + delta.x);
        if self.config.mode == NavigationMode::Freeform {
            self.pose.pitch = clamp_pitch(self.pose.pitch - delta.y, self.config.pitch_limit);
        }
        transform.set_yaw_pitch(self.pose.yaw, self.pose.pitch);

        if delta.x.abs() > self.config.drag_threshold || delta.y.abs() > self.config.drag_threshold
        {
            if !self.dragging {
                tracing::trace!("drag started");
            }
            self.dragging = true;
        }
        if delta != glam::Vec2::ZERO {
            events.push(NavEvent::Looked {
                yaw: self.pose.yaw,
                pitch: self.pose.pitch,
            });
        }
    }

    /// Bounce back opposite the last travel direction when the trigger's tag
    /// is the configured collision target.
    pub fn on_trigger_enter(
        &mut self,
        event: &TriggerEvent,
        transform: &Transform,
    ) -> Option<NavEvent> {
        if !self.config.is_collision_target(&event.tag) {
            return None;
        }
        let from = transform.position;
        let to = from
            - transform.ground_forward() * self.config.animation_step * self.last_direction;
        self.animation.retarget(from, to);
        self.pose.position = from;
        tracing::debug!(
            tag = %event.tag,
            ?from,
            ?to,
            last_direction = self.last_direction,
            "bounce back"
        );
        Some(NavEvent::Bounced { from, to })
    }

    /// Pose as of the end of the last update or trigger.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn yaw(&self) -> f32 {
        self.pose.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pose.pitch
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn last_direction(&self) -> f32 {
        self.last_direction
    }

    pub fn animation(&self) -> &PositionAnimation {
        &self.animation
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }
}

impl Behavior for CameraController {
    fn start(&mut self, transform: &mut Transform) {
        self.activate(transform);
    }

    fn update(&mut self, ctx: &FrameContext<'_>, transform: &mut Transform) -> Vec<NavEvent> {
        CameraController::update(self, ctx.dt, ctx.input, transform)
    }

    fn on_trigger_enter(
        &mut self,
        event: &TriggerEvent,
        transform: &Transform,
    ) -> Option<NavEvent> {
        CameraController::on_trigger_enter(self, event, transform)
    }
}
