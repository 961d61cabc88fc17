//! Replay: a deterministic stand-in for the host frame loop.
//!
//! # Invariants
//! - Each frame runs the behavior's update exactly once, then delivers that
//!   frame's trigger events in order.
//! - Replaying the same script from the same start yields the same state hash.

mod script;
mod session;

pub use script::{Script, ScriptError, ScriptFrame, StartPose};
pub use session::{PoseSample, Session, SessionEvent};
