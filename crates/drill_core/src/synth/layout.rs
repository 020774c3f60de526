//! Deterministic diagram layout for a parsed drill
//!
//! Participants sit on two concentric circles around the centre of the
//! fixed 120 × 80 space; the drill's own field size only scales the radii.
//! No randomness: the same drill and hint always give the same layout.

use crate::config::LayoutConfig;
use crate::hint::EntityHint;
use crate::model::{
    Category, DrillLayout, Marker, MarkerKind, MarkerSize, ParsedDrill, Participant,
    ParticipantGroup, Position, Zone, ZoneShape,
};
use std::f64::consts::PI;
use tracing::debug;

pub const ZONE_ID: &str = "drill-area";
const ZONE_FILL: &str = "rgba(59, 130, 246, 0.1)";
const ZONE_BORDER: &str = "rgba(59, 130, 246, 0.4)";

pub struct LayoutSynthesizer {
    config: LayoutConfig,
}

impl LayoutSynthesizer {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn center(&self) -> Position {
        Position::new(self.config.space_width / 2.0, self.config.space_height / 2.0)
    }

    /// Drill width/height, falling back to 30 × 30 for unknown field sizes
    pub fn drill_dimensions(&self, drill: &ParsedDrill) -> (f64, f64) {
        let (w, h) = drill
            .field_size
            .dimensions()
            .unwrap_or((self.config.fallback_width, self.config.fallback_height));
        (w as f64, h as f64)
    }

    pub fn synthesize(&self, drill: &ParsedDrill, hint: Option<&EntityHint>) -> DrillLayout {
        let cfg = &self.config;
        let (width, height) = self.drill_dimensions(drill);
        let center = self.center();
        let lower_name = drill.name.to_lowercase();

        let primary_count = cfg.primary_count(drill.participant_count);
        let secondary_count = drill.participant_count - primary_count;

        let mut participants = place_group(
            ParticipantGroup::Primary,
            primary_count,
            center,
            width / cfg.primary_radius_divisor,
        );
        participants.extend(place_group(
            ParticipantGroup::Secondary,
            secondary_count,
            center,
            width / cfg.secondary_radius_divisor,
        ));

        let marker_count = cfg.clamp_markers(
            hint.map(EntityHint::marker_count).unwrap_or(cfg.default_markers),
        );
        let marker_radius = width / cfg.marker_radius_divisor;
        let mut markers: Vec<Marker> = (0..marker_count)
            .map(|i| Marker {
                id: format!("cone-{}", i + 1),
                position: Position::on_circle(center, marker_radius, 2.0 * PI * i as f64 / marker_count as f64),
                kind: MarkerKind::BoundaryMarker,
                color: "orange".to_string(),
                size: MarkerSize::Small,
            })
            .collect();

        // 볼은 첫 번째 선수 위치 (선수가 없으면 중앙)
        markers.push(Marker {
            id: "ball-1".to_string(),
            position: participants.first().map(|p| p.position).unwrap_or(center),
            kind: MarkerKind::Ball,
            color: "white".to_string(),
            size: MarkerSize::Medium,
        });

        if drill.category == Category::Shooting || lower_name.contains("goal") {
            markers.push(Marker {
                id: "goal-1".to_string(),
                position: center.offset(0.0, height / 2.0 + cfg.goal_offset),
                kind: MarkerKind::Goal,
                color: "white".to_string(),
                size: MarkerSize::Small,
            });
        }

        let shape = if lower_name.contains("rondo") {
            ZoneShape::Circle { radius: width / 2.0 }
        } else {
            ZoneShape::Rectangle { width, height }
        };
        let zone = Zone {
            id: ZONE_ID.to_string(),
            center,
            shape,
            color: ZONE_FILL.to_string(),
            border_color: ZONE_BORDER.to_string(),
            border_width: 2,
            label: format!("{} Area", drill.name),
        };

        debug!(
            drill = %drill.name,
            primary = primary_count,
            secondary = secondary_count,
            markers = markers.len(),
            circle = shape.is_circle(),
            "layout synthesized"
        );

        DrillLayout { participants, markers, zone }
    }
}

impl Default for LayoutSynthesizer {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

/// Evenly spaced participants of one group on a circle.
///
/// The secondary ring is rotated by half a step and faces inward (+180°).
fn place_group(group: ParticipantGroup, count: u32, center: Position, radius: f64) -> Vec<Participant> {
    if count == 0 {
        return Vec::new();
    }
    let (phase, turn) = match group {
        ParticipantGroup::Primary => (0.0, 0.0),
        ParticipantGroup::Secondary => (PI / count as f64, 180.0),
    };

    (0..count)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / count as f64 + phase;
            Participant {
                id: format!("{}{}", group.id_prefix(), i + 1),
                position: Position::on_circle(center, radius, angle),
                display_name: format!("{} {}", group.display_label(), i + 1),
                group,
                role: group.role().to_string(),
                number_tag: group.first_number() + i,
                facing: facing_degrees(angle, turn),
                active: true,
            }
        })
        .collect()
}

/// Whole degrees in [0, 360), truncated
fn facing_degrees(angle: f64, turn: f64) -> u16 {
    let deg = (angle * 180.0 / PI + turn).rem_euclid(360.0);
    (deg as u32 % 360) as u16
}
