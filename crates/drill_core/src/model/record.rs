//! Exported catalog entry

use super::animation::AnimationSequence;
use super::layout::{Marker, Participant, Zone};
use super::types::{Category, Difficulty, FieldSize};
use serde::{Deserialize, Serialize};

pub const RECORD_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillRecord {
    pub id: String,
    pub drill_id: String,
    pub name: String,
    pub category: Category,
    pub subcategory: Category,
    pub age_group: String,
    pub focus: Category,
    pub difficulty: Difficulty,
    pub objective: String,
    /// Minutes
    pub duration: u32,
    pub player_count: u32,
    pub field_size: FieldSize,
    pub organization: String,
    pub setup_instructions: Vec<String>,
    pub player_actions: Vec<String>,
    pub coaching_points: Vec<String>,
    #[serde(rename = "vlmData")]
    pub diagram: DiagramData,
    pub formation_id: String,
    pub equipment: EquipmentTally,
    pub variations: Variations,
    pub tags: Vec<String>,
    pub key_words: Vec<String>,
    pub curriculum: CurriculumPlacement,
    pub source: String,
    pub metadata: RecordMetadata,
}

impl DrillRecord {
    pub fn week(&self) -> u32 {
        self.curriculum.week
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldDimensions {
    pub width: f64,
    pub height: f64,
    pub unit: DimensionUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionUnit {
    Yards,
}

/// Visual layout block consumed by the diagram renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramData {
    pub version: String,
    pub field_dimensions: FieldDimensions,
    pub players: Vec<Participant>,
    pub equipment: Vec<Marker>,
    /// Exactly one zone
    pub zones: Vec<Zone>,
    /// Zero or one sequence
    pub animations: Vec<AnimationSequence>,
    pub coaching: DiagramCoaching,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramCoaching {
    pub objective: String,
    pub coaching_points: Vec<String>,
    pub setup_instructions: Vec<String>,
    pub progressions: Vec<String>,
    pub key_focus: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentTally {
    pub balls: u32,
    pub cones: u32,
    pub goals: u32,
    pub pinnies: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variations {
    pub easier: Vec<String>,
    pub harder: Vec<String>,
    pub related: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumPlacement {
    pub week: u32,
    pub session: u32,
    pub phase: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetadata {
    pub version: String,
    pub is_reference: bool,
    /// Rough 0-100 estimate of how much of the record came from the source
    pub completeness: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    pub session_theme: String,
}
