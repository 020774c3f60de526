//! Entity hints: rough object counts for a drill diagram
//!
//! Counts come either from diagram analysis (outside this crate) or are
//! derived from the parsed participant count when no diagram is left.

use crate::config::LayoutConfig;
use crate::model::ParsedDrill;
use serde::{Deserialize, Serialize};

/// Marker count used when counts are derived rather than detected
pub const DEFAULT_MARKER_COUNT: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityCounts {
    #[serde(default)]
    pub primary_group_count: u32,
    #[serde(default)]
    pub secondary_group_count: u32,
    #[serde(default)]
    pub marker_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "counts", rename_all = "kebab-case")]
pub enum EntityHint {
    FromDiagram(EntityCounts),
    Defaulted(EntityCounts),
}

impl EntityHint {
    /// Split the parsed participant count by the layout ratio, 8 markers
    pub fn defaulted(drill: &ParsedDrill, layout: &LayoutConfig) -> Self {
        let primary = layout.primary_count(drill.participant_count);
        EntityHint::Defaulted(EntityCounts {
            primary_group_count: primary,
            secondary_group_count: drill.participant_count - primary,
            marker_count: DEFAULT_MARKER_COUNT,
        })
    }

    /// Diagram `index` when one exists, otherwise a derived hint
    pub fn for_section(
        diagrams: &[EntityCounts],
        index: usize,
        drill: &ParsedDrill,
        layout: &LayoutConfig,
    ) -> Self {
        diagrams
            .get(index)
            .map(|counts| EntityHint::FromDiagram(*counts))
            .unwrap_or_else(|| EntityHint::defaulted(drill, layout))
    }

    pub fn counts(&self) -> &EntityCounts {
        match self {
            EntityHint::FromDiagram(c) | EntityHint::Defaulted(c) => c,
        }
    }

    pub fn marker_count(&self) -> u32 {
        self.counts().marker_count
    }

    pub fn is_from_diagram(&self) -> bool {
        matches!(self, EntityHint::FromDiagram(_))
    }
}
