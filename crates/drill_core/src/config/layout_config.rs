//! Layout / Animation Configuration

use serde::{Deserialize, Serialize};

/// Placement parameters for the layout step
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    // === Coordinate Space ===
    /// 다이어그램 좌표 공간 너비 (기본: 120)
    pub space_width: f64,
    /// 다이어그램 좌표 공간 높이 (기본: 80)
    pub space_height: f64,

    // === Group Split ===
    /// Share of participants in the primary group (기본: 0.6)
    pub primary_ratio: f64,

    // === Radii (drill width / divisor) ===
    pub primary_radius_divisor: f64,
    pub secondary_radius_divisor: f64,
    pub marker_radius_divisor: f64,

    // === Markers ===
    pub min_markers: u32,
    pub max_markers: u32,
    /// Used when no entity hint is supplied
    pub default_markers: u32,
    /// Goal sits this far beyond the drill's vertical extent
    pub goal_offset: f64,

    /// Drill dimensions used when the field size is unknown
    pub fallback_width: u32,
    pub fallback_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            space_width: 120.0,
            space_height: 80.0,

            primary_ratio: 0.6,

            primary_radius_divisor: 2.5,
            secondary_radius_divisor: 5.0,
            marker_radius_divisor: 2.0,

            min_markers: 4,
            max_markers: 12,
            default_markers: 8,
            goal_offset: 5.0,

            fallback_width: 30,
            fallback_height: 30,
        }
    }
}

impl LayoutConfig {
    /// Text-extraction pipeline (60/40 split)
    pub fn extract() -> Self {
        Self::default()
    }

    /// Curriculum-template pipeline (65/35 split)
    pub fn curriculum() -> Self {
        Self { primary_ratio: 0.65, ..Self::default() }
    }

    /// Primary group size for `participants`: `max(1, round(n × ratio))`, or 0 for 0
    pub fn primary_count(&self, participants: u32) -> u32 {
        if participants == 0 {
            return 0;
        }
        let raw = (participants as f64 * self.primary_ratio).round() as u32;
        raw.clamp(1, participants)
    }

    pub fn clamp_markers(&self, count: u32) -> u32 {
        count.clamp(self.min_markers, self.max_markers)
    }
}

/// Timing for the placeholder pass choreography
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// ms per pass event
    pub pass_interval: u32,
    pub ball_travel: u32,
    pub passer_move: u32,
    pub receiver_move: u32,
    pub annotation: u32,
    pub max_events: usize,
    /// Size of the two-point nudge on each movement path
    pub nudge: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            pass_interval: 3000,
            ball_travel: 600,
            passer_move: 800,
            receiver_move: 1000,
            annotation: 2000,
            max_events: 3,
            nudge: 1.0,
        }
    }
}
