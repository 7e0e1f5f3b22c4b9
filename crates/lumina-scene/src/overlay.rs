//! Text shown over the 3D scene, chosen by phase

use lumina_core::{CardText, Phase};

/// When an overlay element fades in, relative to its phase starting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub delay: f32,
    pub duration: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageLine {
    Headline(String),
    Title(String),
    Divider,
    Subtitle(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayContent {
    Empty,
    /// A single instruction near the bottom of the screen
    Prompt { text: &'static str, reveal: Reveal },
    /// The final card, revealed line by line
    Message { lines: Vec<(MessageLine, Reveal)> },
}

pub const OPEN_PROMPT: &str = "Tap to Open";
pub const IGNITE_PROMPT: &str = "Ignite the Light";

impl OverlayContent {
    pub fn for_phase(phase: Phase, text: &CardText) -> Self {
        match phase {
            Phase::Offering => OverlayContent::Prompt {
                text: OPEN_PROMPT,
                reveal: Reveal {
                    delay: 1.0,
                    duration: 1.0,
                },
            },
            // Waits for the tree to form first
            Phase::Tree => OverlayContent::Prompt {
                text: IGNITE_PROMPT,
                reveal: Reveal {
                    delay: 2.0,
                    duration: 1.0,
                },
            },
            Phase::Explosion => OverlayContent::Empty,
            Phase::Message => {
                let mut lines = Vec::with_capacity(4);
                if !text.headline.is_empty() {
                    lines.push((
                        MessageLine::Headline(text.headline.clone()),
                        Reveal {
                            delay: 0.5,
                            duration: 1.5,
                        },
                    ));
                }
                lines.push((
                    MessageLine::Title(text.title.clone()),
                    Reveal {
                        delay: 1.0,
                        duration: 2.0,
                    },
                ));
                lines.push((
                    MessageLine::Divider,
                    Reveal {
                        delay: 1.5,
                        duration: 1.5,
                    },
                ));
                lines.push((
                    MessageLine::Subtitle(text.subtitle.clone()),
                    Reveal {
                        delay: 2.0,
                        duration: 1.5,
                    },
                ));
                OverlayContent::Message { lines }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, OverlayContent::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts() {
        let text = CardText::default();
        match OverlayContent::for_phase(Phase::Offering, &text) {
            OverlayContent::Prompt { text, reveal } => {
                assert_eq!(text, "Tap to Open");
                assert_eq!(reveal.delay, 1.0);
            }
            other => panic!("unexpected {other:?}"),
        }
        match OverlayContent::for_phase(Phase::Tree, &text) {
            OverlayContent::Prompt { text, reveal } => {
                assert_eq!(text, "Ignite the Light");
                assert_eq!(reveal.delay, 2.0);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(OverlayContent::for_phase(Phase::Explosion, &text).is_empty());
    }

    #[test]
    fn message_without_headline() {
        let content = OverlayContent::for_phase(Phase::Message, &CardText::default());
        let OverlayContent::Message { lines } = content else {
            panic!("expected message");
        };
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].0, MessageLine::Title("Oun Chhan".to_string()));
        assert_eq!(lines[1].0, MessageLine::Divider);
        let delays: Vec<f32> = lines.iter().map(|(_, r)| r.delay).collect();
        assert_eq!(delays, [1.0, 1.5, 2.0]);
    }

    #[test]
    fn message_with_headline_is_staggered() {
        let text = CardText {
            headline: "Happy Birthday".to_string(),
            ..CardText::default()
        };
        let OverlayContent::Message { lines } = OverlayContent::for_phase(Phase::Message, &text)
        else {
            panic!("expected message");
        };
        assert_eq!(lines.len(), 4);
        let delays: Vec<f32> = lines.iter().map(|(_, r)| r.delay).collect();
        assert_eq!(delays, [0.5, 1.0, 1.5, 2.0]);
        assert!(matches!(lines[3].0, MessageLine::Subtitle(_)));
    }
}
