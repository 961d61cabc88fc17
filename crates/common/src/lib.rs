//! Shared value types: transforms, entity ids, trigger events, angle helpers.
//!
//! # Invariants
//! - Orientation helpers agree on one convention: +Y up, yaw 0 looks down -Z,
//!   positive yaw turns right, positive pitch looks down.

pub mod angle;
pub mod types;

pub use angle::{clamp_pitch, wrap_degrees, wrap_signed_degrees};
pub use types::{EntityId, Transform, TriggerEvent};
