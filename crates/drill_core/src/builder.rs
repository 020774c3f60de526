//! Catalog entry assembly
//!
//! Combines the parsed drill, its layout and animation into a [`DrillRecord`].
//! Cannot fail: every field has a fallback from [`TemplateTables`].

use crate::config::{LayoutConfig, TemplateTables};
use crate::model::{
    AnimationSequence, CurriculumPlacement, DiagramCoaching, DiagramData, DimensionUnit,
    DrillLayout, DrillRecord, EquipmentTally, FieldDimensions, MarkerKind, ParsedDrill,
    RecordMetadata, Variations, RECORD_VERSION,
};

/// Per-record inputs supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    /// Source file name, e.g. `U8-Week-3.pdf`
    pub source_file: Option<String>,
    /// 1-based ordinal of the drill within its session
    pub session_index: u32,
    /// Player actions recovered from the source; empty means use the fallback
    pub player_actions: Vec<String>,
    /// 0-100
    pub completeness: u8,
}

impl BuildContext {
    pub fn new(session_index: u32) -> Self {
        Self { session_index, completeness: 85, ..Default::default() }
    }

    pub fn with_source_file(mut self, file: impl Into<String>) -> Self {
        self.source_file = Some(file.into());
        self
    }

    pub fn with_player_actions(mut self, actions: Vec<String>) -> Self {
        self.player_actions = actions;
        self
    }

    pub fn with_completeness(mut self, completeness: u8) -> Self {
        self.completeness = completeness.min(100);
        self
    }
}

/// `<prefix>-<age>-<name>-<week>`, lower-cased, spaces to hyphens, only `[a-z0-9-]` kept
pub fn drill_identity(prefix: &str, age_group: &str, name: &str, week: u32) -> String {
    let raw = format!(
        "{}-{}-{}-{}",
        prefix,
        age_group.to_lowercase(),
        name.to_lowercase().replace(' ', "-"),
        week
    );
    raw.chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

pub struct DrillRecordBuilder {
    templates: TemplateTables,
    field_dimensions: FieldDimensions,
}

impl DrillRecordBuilder {
    pub fn new(templates: TemplateTables, layout: &LayoutConfig) -> Self {
        Self {
            templates,
            field_dimensions: FieldDimensions {
                width: layout.space_width,
                height: layout.space_height,
                unit: DimensionUnit::Yards,
            },
        }
    }

    pub fn templates(&self) -> &TemplateTables {
        &self.templates
    }

    pub fn identity(&self, drill: &ParsedDrill) -> String {
        drill_identity(&self.templates.id_prefix, &drill.age_group, &drill.name, drill.week_number)
    }

    /// Sentences of the setup description, or generic steps when it is empty
    pub fn setup_instructions(&self, drill: &ParsedDrill) -> Vec<String> {
        let steps: Vec<String> = drill
            .setup_description
            .split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .take(self.templates.max_setup_instructions)
            .map(str::to_string)
            .collect();
        if !steps.is_empty() {
            return steps;
        }
        vec![
            format!("Set up {} area", drill.field_size),
            format!("Position {} players", drill.participant_count),
            "Follow diagram layout".to_string(),
        ]
    }

    pub fn coaching_points(&self, drill: &ParsedDrill) -> Vec<String> {
        if drill.coaching_points.is_empty() {
            return self.templates.fallback_coaching_points.clone();
        }
        drill
            .coaching_points
            .iter()
            .take(self.templates.max_coaching_points)
            .cloned()
            .collect()
    }

    fn diagram_setup(&self, drill: &ParsedDrill) -> Vec<String> {
        let organization = if drill.setup_description.is_empty() {
            "Follow diagram setup".to_string()
        } else {
            drill.setup_description.chars().take(self.templates.diagram_setup_chars).collect()
        };
        vec![
            format!("Set up {} area using cones", drill.field_size),
            format!("Position {} players as shown", drill.participant_count),
            "Start with one ball".to_string(),
            organization,
        ]
    }

    pub fn build(
        &self,
        drill: &ParsedDrill,
        layout: DrillLayout,
        animation: Option<AnimationSequence>,
        ctx: &BuildContext,
    ) -> DrillRecord {
        let t = &self.templates;
        let id = self.identity(drill);
        let difficulty = t.difficulty_for(&drill.age_group);
        let category_tag = drill.category.tag();
        let coaching_points = self.coaching_points(drill);

        let objective = if drill.objective.is_empty() {
            format!("Develop {} skills", category_tag)
        } else {
            drill.objective.clone()
        };
        let diagram_objective = if drill.objective.is_empty() {
            format!("Develop skills through {}", drill.name)
        } else {
            drill.objective.clone()
        };
        let player_actions = if ctx.player_actions.is_empty() {
            t.fallback_player_actions.clone()
        } else {
            ctx.player_actions.clone()
        };

        let equipment = EquipmentTally {
            balls: t.balls,
            cones: layout.count_markers(MarkerKind::BoundaryMarker),
            goals: layout.count_markers(MarkerKind::Goal),
            pinnies: t.pinnies,
        };

        let mut key_focus = vec![drill.category.to_string()];
        key_focus.extend(t.key_focus_extras.iter().cloned());

        let source = match &ctx.source_file {
            Some(file) => format!("{} - {}", t.source_label, file),
            None => format!("{} - {} Curriculum", t.source_label, drill.age_group),
        };

        let diagram = DiagramData {
            version: RECORD_VERSION.to_string(),
            field_dimensions: self.field_dimensions,
            players: layout.participants,
            equipment: layout.markers,
            zones: vec![layout.zone],
            animations: animation.into_iter().collect(),
            coaching: DiagramCoaching {
                objective: diagram_objective,
                coaching_points: coaching_points.clone(),
                setup_instructions: self.diagram_setup(drill),
                progressions: t.progressions.clone(),
                key_focus,
            },
            confidence: ctx.completeness as f64 / 100.0,
        };

        DrillRecord {
            drill_id: id.clone(),
            id,
            name: drill.name.clone(),
            category: drill.category,
            subcategory: drill.category,
            age_group: drill.age_group.clone(),
            focus: drill.category,
            difficulty,
            objective,
            duration: drill.duration_minutes,
            player_count: drill.participant_count,
            field_size: drill.field_size,
            organization: drill.setup_description.clone(),
            setup_instructions: self.setup_instructions(drill),
            player_actions,
            coaching_points,
            diagram,
            formation_id: format!("{}-{}", drill.age_group.to_lowercase(), category_tag),
            equipment,
            variations: Variations {
                easier: t.easier_variations.clone(),
                harder: t.harder_variations.clone(),
                related: Vec::new(),
            },
            tags: vec![
                drill.age_group.clone(),
                drill.category.to_string(),
                difficulty.to_string(),
                drill.field_size.to_string(),
            ],
            key_words: vec![category_tag, drill.age_group.to_lowercase(), t.keyword_source.clone()],
            curriculum: CurriculumPlacement {
                week: drill.week_number,
                session: ctx.session_index,
                phase: t.phase.clone(),
            },
            source,
            metadata: RecordMetadata {
                version: RECORD_VERSION.to_string(),
                is_reference: false,
                completeness: ctx.completeness,
                source_file: ctx.source_file.clone(),
                session_theme: drill.session_theme.clone(),
            },
        }
    }
}

impl Default for DrillRecordBuilder {
    fn default() -> Self {
        Self::new(TemplateTables::default(), &LayoutConfig::default())
    }
}
