//! Fixed text tables used when a record field cannot be recovered from source
//!
//! Built-in values come from `Default`; a YAML file can override any subset.

use crate::error::{DrillError, Result};
use crate::model::Difficulty;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Read-only template tables injected into the record builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateTables {
    /// Identity prefix (`<prefix>-<age>-<name>-<week>`)
    pub id_prefix: String,
    /// Extra keyword appended to every record
    pub keyword_source: String,
    /// `"<source_label> - <file>"`
    pub source_label: String,
    pub phase: String,

    pub difficulty_by_age: BTreeMap<String, Difficulty>,
    pub default_difficulty: Difficulty,

    pub fallback_coaching_points: Vec<String>,
    pub fallback_player_actions: Vec<String>,
    pub easier_variations: Vec<String>,
    pub harder_variations: Vec<String>,
    pub progressions: Vec<String>,
    /// Appended after the category in the key-focus list
    pub key_focus_extras: Vec<String>,

    pub max_setup_instructions: usize,
    pub max_coaching_points: usize,
    /// Organization text is cut to this many characters in the diagram block
    pub diagram_setup_chars: usize,

    pub balls: u32,
    pub pinnies: u32,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for TemplateTables {
    fn default() -> Self {
        let difficulty_by_age = [
            ("U6", Difficulty::Beginner),
            ("U8", Difficulty::Beginner),
            ("U10", Difficulty::Intermediate),
            ("U12", Difficulty::Intermediate),
            ("U14", Difficulty::Advanced),
        ]
        .into_iter()
        .map(|(age, d)| (age.to_string(), d))
        .collect();

        Self {
            id_prefix: "mayouth".to_string(),
            keyword_source: "mayouthsoccer".to_string(),
            source_label: "MA Youth Soccer".to_string(),
            phase: "main-activity".to_string(),

            difficulty_by_age,
            default_difficulty: Difficulty::Intermediate,

            fallback_coaching_points: strings(&[
                "Focus on technique",
                "Quick decision making",
                "Proper body position",
                "Effective communication",
            ]),
            fallback_player_actions: strings(&[
                "Follow coaching instructions",
                "Maintain proper positioning",
                "Execute techniques with quality",
                "Communicate with teammates",
            ]),
            easier_variations: strings(&[
                "Increase area size",
                "Reduce pressure",
                "Allow more touches",
                "Slow down tempo",
            ]),
            harder_variations: strings(&[
                "Decrease area size",
                "Add time constraints",
                "Limit touches",
                "Increase tempo",
            ]),
            progressions: strings(&[
                "Increase tempo and intensity",
                "Add constraints (touch limits, time limits)",
                "Increase area size or player count",
                "Add competitive element",
            ]),
            key_focus_extras: strings(&[
                "Decision making",
                "Technical execution",
                "Tactical awareness",
            ]),

            max_setup_instructions: 5,
            max_coaching_points: 7,
            diagram_setup_chars: 100,

            balls: 1,
            pinnies: 2,
        }
    }
}

impl TemplateTables {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let tables: TemplateTables = serde_yaml::from_str(yaml)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| DrillError::io(path, e))?;
        Self::from_yaml_str(&yaml)
    }

    /// Fallback lists must be non-empty so every record stays complete
    pub fn validate(&self) -> Result<()> {
        let lists = [
            ("fallback_coaching_points", &self.fallback_coaching_points),
            ("fallback_player_actions", &self.fallback_player_actions),
            ("easier_variations", &self.easier_variations),
            ("harder_variations", &self.harder_variations),
        ];
        for (name, list) in lists {
            if list.is_empty() {
                return Err(DrillError::InvalidConfig(format!("{} must not be empty", name)));
            }
        }
        if self.max_setup_instructions == 0 || self.max_coaching_points == 0 {
            return Err(DrillError::InvalidConfig("caps must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Unknown age groups fall back to `default_difficulty`
    pub fn difficulty_for(&self, age_group: &str) -> Difficulty {
        self.difficulty_by_age
            .get(age_group)
            .copied()
            .unwrap_or(self.default_difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_lookup() {
        let t = TemplateTables::default();
        assert_eq!(t.difficulty_for("U6"), Difficulty::Beginner);
        assert_eq!(t.difficulty_for("U8"), Difficulty::Beginner);
        assert_eq!(t.difficulty_for("U10"), Difficulty::Intermediate);
        assert_eq!(t.difficulty_for("U14"), Difficulty::Advanced);
        assert_eq!(t.difficulty_for("U19"), Difficulty::Intermediate);
    }

    #[test]
    fn test_yaml_override_keeps_defaults() {
        let yaml = "id_prefix: club\nmax_coaching_points: 3\n";
        let t = TemplateTables::from_yaml_str(yaml).unwrap();
        assert_eq!(t.id_prefix, "club");
        assert_eq!(t.max_coaching_points, 3);
        assert_eq!(t.phase, "main-activity");
        assert_eq!(t.fallback_player_actions.len(), 4);
    }

    #[test]
    fn test_yaml_rejects_empty_fallbacks() {
        let yaml = "fallback_coaching_points: []\n";
        let err = TemplateTables::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, DrillError::InvalidConfig(_)));
    }
}
