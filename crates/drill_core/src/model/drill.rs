use super::types::{Category, FieldSize};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PARTICIPANT_COUNT: u32 = 8;
/// Larger counts in source text are treated as noise
pub const MAX_PARTICIPANT_COUNT: u32 = 50;
pub const DEFAULT_DURATION_MINUTES: u32 = 15;
pub const UNNAMED_DRILL: &str = "Unnamed Drill";

/// Fields recovered from one block of session-plan text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDrill {
    pub name: String,
    pub setup_description: String,
    /// Fragments longer than 10 characters, in source order
    pub coaching_points: Vec<String>,
    pub objective: String,
    /// Always in 1..=50 when parsed from text
    pub participant_count: u32,
    pub field_size: FieldSize,
    pub duration_minutes: u32,
    pub category: Category,
    pub age_group: String,
    pub week_number: u32,
    pub session_theme: String,
}

impl ParsedDrill {
    /// A drill with every field at its documented default
    pub fn with_defaults(age_group: &str, week_number: u32, session_theme: &str) -> Self {
        Self {
            name: UNNAMED_DRILL.to_string(),
            setup_description: String::new(),
            coaching_points: Vec::new(),
            objective: String::new(),
            participant_count: DEFAULT_PARTICIPANT_COUNT,
            field_size: FieldSize::Custom,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            category: Category::Technical,
            age_group: age_group.to_string(),
            week_number,
            session_theme: session_theme.to_string(),
        }
    }
}
