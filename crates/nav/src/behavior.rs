use navcam_common::{Transform, TriggerEvent};
use navcam_input::InputFrame;

use crate::event::NavEvent;

/// Per-frame data the host hands to a behavior.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    /// Seconds since the previous frame.
    pub dt: f32,
    pub input: &'a InputFrame,
}

/// A behavior attached to one object, driven by the host's frame loop.
///
/// The host calls [`Behavior::start`] once, then [`Behavior::update`] once per
/// frame. Trigger events arrive between updates, never concurrently with one.
pub trait Behavior {
    /// Initialize state from the object's current transform.
    fn start(&mut self, transform: &mut Transform);

    /// Advance one frame, writing the new pose into `transform`.
    fn update(&mut self, ctx: &FrameContext<'_>, transform: &mut Transform) -> Vec<NavEvent>;

    /// The object's trigger volume began overlapping another object.
    fn on_trigger_enter(
        &mut self,
        event: &TriggerEvent,
        transform: &Transform,
    ) -> Option<NavEvent>;
}
