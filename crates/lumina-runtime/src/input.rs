//! Pointer input over the scene's hit regions

use crate::event::SceneEvent;
use std::collections::HashSet;

/// A hit-testable primitive in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitTarget {
    GiftBox,
    ParticleCloud,
}

/// Pointer callbacks delivered by the host for a hit region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter(HitTarget),
    Leave(HitTarget),
    Click(HitTarget),
}

/// Cursor shape requested from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Auto,
    Pointer,
}

/// Tracks hovered regions and queues clicks until the next frame consumes them
pub struct PointerState {
    hovered: HashSet<HitTarget>,
    /// Clicks received since the last `take_clicks`
    pending_clicks: Vec<HitTarget>,
    events: Vec<SceneEvent>,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerState {
    pub fn new() -> Self {
        Self {
            hovered: HashSet::new(),
            pending_clicks: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Process one pointer callback from the host
    pub fn process(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Enter(target) => {
                if self.hovered.insert(target) {
                    self.events.push(SceneEvent::PointerEntered(target));
                }
            }
            PointerEvent::Leave(target) => {
                if self.hovered.remove(&target) {
                    self.events.push(SceneEvent::PointerLeft(target));
                }
            }
            PointerEvent::Click(target) => {
                self.pending_clicks.push(target);
                self.events.push(SceneEvent::Clicked(target));
            }
        }
    }

    pub fn is_hovered(&self, target: HitTarget) -> bool {
        self.hovered.contains(&target)
    }

    /// Forget hover state for a region that is no longer drawn
    pub fn release(&mut self, target: HitTarget) {
        if self.hovered.remove(&target) {
            self.events.push(SceneEvent::PointerLeft(target));
        }
    }

    /// Drain clicks queued since the previous frame, oldest first
    pub fn take_clicks(&mut self) -> Vec<HitTarget> {
        std::mem::take(&mut self.pending_clicks)
    }

    /// Hover changes and clicks since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }
}
