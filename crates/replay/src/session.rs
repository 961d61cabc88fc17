use glam::Vec3;
use navcam_common::{Transform, TriggerEvent};
use navcam_input::InputFrame;
use navcam_nav::{Behavior, FrameContext, NavEvent};
use serde::{Deserialize, Serialize};

use crate::script::Script;

/// A record produced while a session runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The behavior emitted an event during `frame`.
    Nav { frame: u64, event: NavEvent },
    /// A trigger was delivered after `frame`'s update.
    Trigger {
        frame: u64,
        tag: String,
        handled: bool,
    },
}

/// Camera pose at the end of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseSample {
    pub frame: u64,
    /// Seconds since the session started.
    pub time: f32,
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

/// Drives one behavior on one camera transform, frame by frame.
///
/// Plays the host's role: calls update once per frame, then delivers that
/// frame's trigger events. Everything the behavior reports is appended to an
/// event log and every frame's pose to a trace.
pub struct Session<B: Behavior> {
    behavior: B,
    transform: Transform,
    frame: u64,
    time: f32,
    log: Vec<SessionEvent>,
    trace: Vec<PoseSample>,
}

impl<B: Behavior> Session<B> {
    /// Attach `behavior` to a camera at `transform` and start it.
    pub fn new(mut behavior: B, mut transform: Transform) -> Self {
        behavior.start(&mut transform);
        Self {
            behavior,
            transform,
            frame: 0,
            time: 0.0,
            log: Vec::new(),
            trace: Vec::new(),
        }
    }

    /// Start a session at the script's start pose and play every frame.
    pub fn replay(behavior: B, script: &Script) -> Self {
        let mut session = Self::new(behavior, script.start.transform());
        session.run(script);
        session
    }

    /// Play every frame of `script`, expanding repeats.
    pub fn run(&mut self, script: &Script) {
        let _span = tracing::info_span!("replay", frames = script.frame_count()).entered();
        for frame in &script.frames {
            for i in 0..frame.repeat {
                let triggers: &[TriggerEvent] = if i == 0 { &frame.triggers } else { &[] };
                self.step(frame.dt, &frame.input, triggers);
            }
        }
        tracing::info!(
            frames = self.frame,
            events = self.log.len(),
            hash = self.state_hash(),
            "replay finished"
        );
    }

    /// Run one frame: update, then deliver `triggers` in order.
    pub fn step(&mut self, dt: f32, input: &InputFrame, triggers: &[TriggerEvent]) {
        self.frame += 1;
        self.time += dt;
        let frame = self.frame;

        let ctx = FrameContext { dt, input };
        for event in self.behavior.update(&ctx, &mut self.transform) {
            self.log.push(SessionEvent::Nav { frame, event });
        }

        for trigger in triggers {
            let reaction = self.behavior.on_trigger_enter(trigger, &self.transform);
            tracing::debug!(frame, tag = %trigger.tag, handled = reaction.is_some(), "trigger");
            self.log.push(SessionEvent::Trigger {
                frame,
                tag: trigger.tag.clone(),
                handled: reaction.is_some(),
            });
            if let Some(event) = reaction {
                self.log.push(SessionEvent::Nav { frame, event });
            }
        }

        let (yaw, pitch) = self.transform.yaw_pitch();
        self.trace.push(PoseSample {
            frame,
            time: self.time,
            position: self.transform.position,
            yaw,
            pitch,
        });
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    pub fn events(&self) -> &[SessionEvent] {
        &self.log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.log)
    }

    pub fn trace(&self) -> &[PoseSample] {
        &self.trace
    }

    /// Count of logged behavior events by kind, in first-seen order.
    pub fn event_counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts: Vec<(&'static str, usize)> = Vec::new();
        for entry in &self.log {
            let kind = match entry {
                SessionEvent::Nav { event, .. } => event.kind(),
                SessionEvent::Trigger { .. } => "trigger",
            };
            match counts.iter_mut().find(|(k, _)| *k == kind) {
                Some((_, n)) => *n += 1,
                None => counts.push((kind, 1)),
            }
        }
        counts
    }

    /// FNV-1a hash of the frame count and camera transform.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &self.frame.to_le_bytes());
        let t = &self.transform;
        for v in t.position.to_array() {
            mix(&mut h, &v.to_le_bytes());
        }
        for v in t.rotation.to_array() {
            mix(&mut h, &v.to_le_bytes());
        }
        h
    }
}
