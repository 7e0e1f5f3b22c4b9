//! Experience lifecycle: phases and the triggers that move between them

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four discrete states of the card.
///
/// Phases are totally ordered by progression. The experience only ever moves
/// forward by one step; there is no skipping and no regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// The gift box is waiting to be opened
    Offering,
    /// Particles are converging into the tree shape
    Tree,
    /// Particles are flying outward
    Explosion,
    /// The message is revealed (terminal)
    Message,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Offering, Phase::Tree, Phase::Explosion, Phase::Message];

    /// The phase that follows this one, or `None` for `Message`.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Offering => Some(Phase::Tree),
            Phase::Tree => Some(Phase::Explosion),
            Phase::Explosion => Some(Phase::Message),
            Phase::Message => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::Message
    }

    /// True once the particle cloud has replaced the gift box.
    pub fn shows_particles(self) -> bool {
        self != Phase::Offering
    }

    /// True in the phases where particles fly under velocity and drag.
    pub fn is_dispersing(self) -> bool {
        matches!(self, Phase::Explosion | Phase::Message)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Offering => "OFFERING",
            Phase::Tree => "TREE",
            Phase::Explosion => "EXPLOSION",
            Phase::Message => "MESSAGE",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An input that may move the experience forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// The gift box was tapped
    GiftOpened,
    /// The particle tree was tapped
    TreeIgnited,
    /// The explosion has been running long enough (fired by the simulator)
    ExplosionSettled,
}

impl Trigger {
    /// The only phase in which this trigger is accepted.
    pub fn source(self) -> Phase {
        match self {
            Trigger::GiftOpened => Phase::Offering,
            Trigger::TreeIgnited => Phase::Tree,
            Trigger::ExplosionSettled => Phase::Explosion,
        }
    }

    /// The phase this trigger leads to.
    pub fn target(self) -> Phase {
        match self {
            Trigger::GiftOpened => Phase::Tree,
            Trigger::TreeIgnited => Phase::Explosion,
            Trigger::ExplosionSettled => Phase::Message,
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Trigger::GiftOpened => "gift opened",
            Trigger::TreeIgnited => "tree ignited",
            Trigger::ExplosionSettled => "explosion settled",
        };
        f.write_str(name)
    }
}

/// A transition that actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
    pub trigger: Trigger,
}
