//! Diagram layout types
//!
//! All coordinates live in a fixed 120 × 80 space (yards), independent of
//! the drill's own field size.

use serde::{Deserialize, Serialize};

/// Point in the fixed diagram space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point on a circle around `center`, rounded to one decimal place
    pub fn on_circle(center: Position, radius: f64, angle: f64) -> Self {
        Self {
            x: round1(center.x + radius * angle.cos()),
            y: round1(center.y + radius * angle.sin()),
        }
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn midpoint(&self, other: &Position) -> Self {
        Self { x: (self.x + other.x) / 2.0, y: (self.y + other.y) / 2.0 }
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Participant partition (attacking-side vs defending-side analogue)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantGroup {
    Primary,
    Secondary,
}

impl ParticipantGroup {
    pub fn id_prefix(&self) -> &'static str {
        match self {
            ParticipantGroup::Primary => "ATT",
            ParticipantGroup::Secondary => "DEF",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            ParticipantGroup::Primary => "Attacker",
            ParticipantGroup::Secondary => "Defender",
        }
    }

    pub fn role(&self) -> &'static str {
        match self {
            ParticipantGroup::Primary => "midfielder",
            ParticipantGroup::Secondary => "defender",
        }
    }

    /// First shirt number handed out in this group
    pub fn first_number(&self) -> u32 {
        match self {
            ParticipantGroup::Primary => 7,
            ParticipantGroup::Secondary => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    #[serde(flatten)]
    pub position: Position,
    pub display_name: String,
    pub group: ParticipantGroup,
    pub role: String,
    pub number_tag: u32,
    /// Degrees in [0, 360)
    pub facing: u16,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerKind {
    BoundaryMarker,
    Ball,
    Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSize {
    Small,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: String,
    #[serde(flatten)]
    pub position: Position,
    pub kind: MarkerKind,
    pub color: String,
    pub size: MarkerSize,
}

/// Zone outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ZoneShape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

impl ZoneShape {
    pub fn is_circle(&self) -> bool {
        matches!(self, ZoneShape::Circle { .. })
    }
}

/// The single bounding region of a drill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    pub center: Position,
    #[serde(flatten)]
    pub shape: ZoneShape,
    pub color: String,
    pub border_color: String,
    pub border_width: u32,
    pub label: String,
}

/// Output of the layout step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillLayout {
    pub participants: Vec<Participant>,
    pub markers: Vec<Marker>,
    pub zone: Zone,
}

impl DrillLayout {
    pub fn primary(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.group == ParticipantGroup::Primary)
    }

    pub fn secondary(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.group == ParticipantGroup::Secondary)
    }

    pub fn count_markers(&self, kind: MarkerKind) -> u32 {
        self.markers.iter().filter(|m| m.kind == kind).count() as u32
    }
}
