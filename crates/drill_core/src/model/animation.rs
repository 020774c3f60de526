use super::layout::Position;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementSpeed {
    Walk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Pass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallFlight {
    Ground,
}

/// Short path a participant walks during one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantMovement {
    pub participant_id: String,
    pub path: Vec<Position>,
    pub duration: u32,
    pub speed: MovementSpeed,
    pub dribbling: bool,
    pub with_ball: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallMovement {
    pub from: Position,
    pub to: Position,
    pub duration: u32,
    pub flight: BallFlight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub text: String,
    pub position: Position,
    pub duration: u32,
}

/// One pass between two primary-group participants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationEvent {
    /// Offset from the start of the sequence (ms)
    pub start_time: u32,
    pub duration: u32,
    pub kind: EventKind,
    pub source_id: String,
    pub destination_id: String,
    pub movements: Vec<ParticipantMovement>,
    pub ball_movement: BallMovement,
    pub highlight: Vec<String>,
    pub annotation: Annotation,
}

/// Looped pass choreography for a drill diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSequence {
    pub id: String,
    pub name: String,
    /// Total length (ms)
    pub duration: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub events: Vec<AnimationEvent>,
}
