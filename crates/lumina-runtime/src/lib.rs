//! Lumina Runtime - Frame loop infrastructure
//!
//! Provides the building blocks the per-frame callback is made of:
//! - `FrameClock` - delta-time tracking with a clamp against long stalls
//! - `PhaseMachine` - the forward-only experience state machine
//! - `PointerState` - hover tracking and queued clicks on hit regions
//! - `SceneEvent` - typed events the machine and pointer queue for presentation
//! - `FrameSystem` - trait for systems ticked once per frame

mod clock;
mod event;
mod input;
mod phase;
mod system;

pub use clock::FrameClock;
pub use event::SceneEvent;
pub use input::{CursorStyle, HitTarget, PointerEvent, PointerState};
pub use phase::PhaseMachine;
pub use system::FrameSystem;
