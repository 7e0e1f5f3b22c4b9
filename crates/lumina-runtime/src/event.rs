//! Events emitted by the phase machine and pointer input

use crate::input::HitTarget;
use lumina_core::{Phase, PhaseChange, Trigger};

/// Something presentation-facing that happened during a frame
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    /// The phase machine accepted a trigger
    PhaseChanged(PhaseChange),
    /// A trigger arrived in a phase that does not accept it
    TriggerIgnored { trigger: Trigger, phase: Phase },
    PointerEntered(HitTarget),
    PointerLeft(HitTarget),
    Clicked(HitTarget),
}
