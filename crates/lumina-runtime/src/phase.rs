//! Phase machine: the forward-only lifecycle of the card.
//!
//! The machine holds the current [`Phase`] and accepts [`Trigger`]s. A trigger
//! is only honoured in its source phase; anything else is ignored without
//! error. Every accepted transition is queued as a [`SceneEvent::PhaseChanged`]
//! so presentation code can observe it without being called back directly.

use crate::event::SceneEvent;
use lumina_core::{Phase, PhaseChange, Trigger};
use tracing::{debug, info};

pub struct PhaseMachine {
    phase: Phase,
    history: Vec<Phase>,
    /// Transitions and ignored triggers not yet drained
    events: Vec<SceneEvent>,
}

impl PhaseMachine {
    /// Creates a machine in `Offering`.
    pub fn new() -> Self {
        Self {
            phase: Phase::Offering,
            history: vec![Phase::Offering],
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Phases visited so far, in order, starting with `Offering`.
    pub fn history(&self) -> &[Phase] {
        &self.history
    }

    /// Whether `trigger` would move the machine right now.
    pub fn accepts(&self, trigger: Trigger) -> bool {
        trigger.source() == self.phase
    }

    /// Apply a trigger and return the (possibly unchanged) current phase.
    pub fn advance(&mut self, trigger: Trigger) -> Phase {
        if !self.accepts(trigger) {
            debug!(%trigger, phase = %self.phase, "trigger ignored");
            self.events.push(SceneEvent::TriggerIgnored {
                trigger,
                phase: self.phase,
            });
            return self.phase;
        }

        let change = PhaseChange {
            from: self.phase,
            to: trigger.target(),
            trigger,
        };
        info!(from = %change.from, to = %change.to, %trigger, "phase changed");
        self.phase = change.to;
        self.history.push(change.to);
        self.events.push(SceneEvent::PhaseChanged(change));
        self.phase
    }

    /// Take every event queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for PhaseMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TRIGGERS: [Trigger; 3] = [
        Trigger::GiftOpened,
        Trigger::TreeIgnited,
        Trigger::ExplosionSettled,
    ];

    #[test]
    fn new_starts_offering() {
        let sm = PhaseMachine::new();
        assert_eq!(sm.phase(), Phase::Offering);
        assert_eq!(sm.history(), &[Phase::Offering]);
    }

    #[test]
    fn ignite_before_open_is_noop() {
        let mut sm = PhaseMachine::new();
        assert_eq!(sm.advance(Trigger::TreeIgnited), Phase::Offering);
        assert_eq!(sm.advance(Trigger::ExplosionSettled), Phase::Offering);
        assert_eq!(sm.history().len(), 1);
    }

    #[test]
    fn open_while_tree_is_noop() {
        let mut sm = PhaseMachine::new();
        sm.advance(Trigger::GiftOpened);
        assert_eq!(sm.advance(Trigger::GiftOpened), Phase::Tree);
        assert_eq!(sm.history(), &[Phase::Offering, Phase::Tree]);
    }

    #[test]
    fn full_path_requires_exact_triggers() {
        let mut sm = PhaseMachine::new();
        assert_eq!(sm.advance(Trigger::GiftOpened), Phase::Tree);
        assert_eq!(sm.advance(Trigger::TreeIgnited), Phase::Explosion);
        assert_eq!(sm.advance(Trigger::ExplosionSettled), Phase::Message);
        assert!(sm.is_terminal());
        assert_eq!(sm.history(), &Phase::ALL);
    }

    #[test]
    fn message_is_terminal() {
        let mut sm = PhaseMachine::new();
        for trigger in ALL_TRIGGERS {
            sm.advance(trigger);
        }
        for trigger in ALL_TRIGGERS {
            assert_eq!(sm.advance(trigger), Phase::Message);
        }
        assert_eq!(sm.history().len(), 4);
    }

    #[test]
    fn every_trigger_order_only_moves_forward() {
        // Exhaust all sequences of three triggers; phase must never regress
        // and must never move by more than one step per trigger.
        for a in ALL_TRIGGERS {
            for b in ALL_TRIGGERS {
                for c in ALL_TRIGGERS {
                    let mut sm = PhaseMachine::new();
                    let mut prev = sm.phase();
                    for t in [a, b, c] {
                        let next = sm.advance(t);
                        assert!(next == prev || prev.next() == Some(next));
                        prev = next;
                    }
                    let reached_message = [a, b, c]
                        == [Trigger::GiftOpened, Trigger::TreeIgnited, Trigger::ExplosionSettled];
                    assert_eq!(sm.phase() == Phase::Message, reached_message);
                }
            }
        }
    }

    #[test]
    fn accepted_and_ignored_triggers_are_reported() {
        let mut sm = PhaseMachine::new();
        sm.advance(Trigger::TreeIgnited);
        sm.advance(Trigger::GiftOpened);

        let events = sm.drain_events();
        assert_eq!(
            events,
            vec![
                SceneEvent::TriggerIgnored {
                    trigger: Trigger::TreeIgnited,
                    phase: Phase::Offering,
                },
                SceneEvent::PhaseChanged(PhaseChange {
                    from: Phase::Offering,
                    to: Phase::Tree,
                    trigger: Trigger::GiftOpened,
                }),
            ]
        );
        assert!(sm.drain_events().is_empty());
    }
}
