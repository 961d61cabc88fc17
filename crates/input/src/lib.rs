//! Input: host-neutral key identifiers, per-frame snapshots, raw event accumulation.
//!
//! # Invariants
//! - Behaviors consume `InputFrame` snapshots, never raw window events.
//! - A button can't be both pressed and released in the same snapshot unless
//!   the host saw both edges within one frame.
//! - The winit feature only adds conversions; it does not change frame logic.

pub mod bindings;
pub mod frame;
pub mod state;
#[cfg(feature = "winit")]
pub mod winit_events;

pub use bindings::{Key, KeyBindings, MoveAxis};
pub use frame::InputFrame;
pub use state::InputState;
