//! Placeholder pass choreography
//!
//! Passes run around the primary ring (`ATT1 → ATT2 → …`), at most three per
//! drill. Movement paths are a fixed one-unit nudge, not a simulated run.

use crate::config::AnimationConfig;
use crate::model::{
    Annotation, AnimationEvent, AnimationSequence, BallFlight, BallMovement, EventKind,
    MovementSpeed, Participant, ParticipantGroup, ParticipantMovement,
};
use tracing::debug;

pub struct AnimationSynthesizer {
    config: AnimationConfig,
}

impl AnimationSynthesizer {
    pub fn new(config: AnimationConfig) -> Self {
        Self { config }
    }

    /// Number of pass events for `primary` primary-group participants
    pub fn event_count(&self, primary: usize) -> usize {
        if primary < 2 {
            0
        } else {
            self.config.max_events.min(primary - 1)
        }
    }

    /// `None` when fewer than two primary-group participants exist
    pub fn synthesize(&self, participants: &[Participant], drill_name: &str) -> Option<AnimationSequence> {
        let primary: Vec<&Participant> = participants
            .iter()
            .filter(|p| p.group == ParticipantGroup::Primary)
            .collect();

        let count = self.event_count(primary.len());
        if count == 0 {
            return None;
        }

        let events: Vec<AnimationEvent> = (0..count)
            .map(|i| self.pass_event(i, primary[i], primary[(i + 1) % primary.len()]))
            .collect();

        debug!(drill = drill_name, events = events.len(), "animation synthesized");

        Some(AnimationSequence {
            id: format!("{}-sequence", drill_name.to_lowercase().replace(' ', "-")),
            name: format!("{} Sequence", drill_name),
            duration: events.len() as u32 * self.config.pass_interval,
            looped: true,
            events,
        })
    }

    fn pass_event(&self, index: usize, from: &Participant, to: &Participant) -> AnimationEvent {
        let cfg = &self.config;
        let nudge = cfg.nudge;

        let movements = vec![
            ParticipantMovement {
                participant_id: from.id.clone(),
                path: vec![from.position, from.position.offset(nudge, nudge)],
                duration: cfg.passer_move,
                speed: MovementSpeed::Walk,
                dribbling: false,
                with_ball: false,
            },
            ParticipantMovement {
                participant_id: to.id.clone(),
                path: vec![to.position, to.position.offset(-nudge, -nudge)],
                duration: cfg.receiver_move,
                speed: MovementSpeed::Walk,
                dribbling: false,
                with_ball: false,
            },
        ];

        AnimationEvent {
            start_time: index as u32 * cfg.pass_interval,
            duration: cfg.pass_interval,
            kind: EventKind::Pass,
            source_id: from.id.clone(),
            destination_id: to.id.clone(),
            movements,
            ball_movement: BallMovement {
                from: from.position,
                to: to.position,
                duration: cfg.ball_travel,
                flight: BallFlight::Ground,
            },
            highlight: vec![from.id.clone(), to.id.clone()],
            annotation: Annotation {
                text: format!("{} passes to {}", from.display_name, to.display_name),
                position: from.position.midpoint(&to.position),
                duration: cfg.annotation,
            },
        }
    }
}

impl Default for AnimationSynthesizer {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParsedDrill;
    use crate::synth::LayoutSynthesizer;

    fn participants(count: u32) -> Vec<Participant> {
        let mut d = ParsedDrill::with_defaults("U8", 1, "Passing");
        d.participant_count = count;
        LayoutSynthesizer::default().synthesize(&d, None).participants
    }

    #[test]
    fn test_too_few_primary() {
        let anim = AnimationSynthesizer::default();
        assert!(anim.synthesize(&participants(1), "Solo").is_none());
        // 2 players → 1 primary + 1 secondary
        assert!(anim.synthesize(&participants(2), "Pair").is_none());
        assert!(anim.synthesize(&[], "Empty").is_none());
    }

    #[test]
    fn test_event_count_capped() {
        let anim = AnimationSynthesizer::default();
        // 3 players → 2 primary → 1 pass
        assert_eq!(anim.synthesize(&participants(3), "Trio").unwrap().events.len(), 1);
        // 10 players → 6 primary → capped at 3
        let seq = anim.synthesize(&participants(10), "Triangle Passing").unwrap();
        assert_eq!(seq.events.len(), 3);
        assert_eq!(seq.duration, 9000);
        assert_eq!(seq.id, "triangle-passing-sequence");
        assert!(seq.looped);
    }

    #[test]
    fn test_pass_event_shape() {
        let players = participants(8);
        let seq = AnimationSynthesizer::default().synthesize(&players, "Gates").unwrap();
        let second = &seq.events[1];
        assert_eq!(second.start_time, 3000);
        assert_eq!(second.source_id, "ATT2");
        assert_eq!(second.destination_id, "ATT3");
        assert_eq!(second.ball_movement.duration, 600);
        assert_eq!(second.annotation.text, "Attacker 2 passes to Attacker 3");

        let from = players.iter().find(|p| p.id == "ATT2").unwrap().position;
        let to = players.iter().find(|p| p.id == "ATT3").unwrap().position;
        assert_eq!(second.annotation.position, from.midpoint(&to));
        assert_eq!(second.movements[0].path[1], from.offset(1.0, 1.0));
        assert_eq!(second.movements[1].path[1], to.offset(-1.0, -1.0));
    }
}
