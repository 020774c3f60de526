//! # Drill Pipeline
//!
//! text section → [`parse_drill`] → [`LayoutSynthesizer`] → [`AnimationSynthesizer`]
//! → [`DrillRecordBuilder`]
//!
//! 각 문서는 독립적이므로 `process_batch` 는 rayon 으로 병렬 처리한다.

use crate::builder::{BuildContext, DrillRecordBuilder};
use crate::config::PipelineConfig;
use crate::hint::{EntityCounts, EntityHint};
use crate::model::{DrillRecord, ParsedDrill};
use crate::parser::{parse_drill, parse_page, split_sections, SourceLabel};
use crate::synth::{AnimationSynthesizer, LayoutSynthesizer};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Completeness recorded for drills recovered from source text
pub const EXTRACTED_COMPLETENESS: u8 = 85;

/// One session-plan document with its text already extracted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// File name including extension, e.g. `U10-Scoring-Goals-2.pdf`
    pub file_name: String,
    pub age_group: String,
    /// Page-ordered text
    pub pages: Vec<String>,
    /// Diagram counts in document order
    #[serde(default)]
    pub diagrams: Vec<EntityCounts>,
}

impl SourceDocument {
    pub fn new(file_name: impl Into<String>, age_group: impl Into<String>, pages: Vec<String>) -> Self {
        Self {
            file_name: file_name.into(),
            age_group: age_group.into(),
            pages,
            diagrams: Vec::new(),
        }
    }

    pub fn with_diagrams(mut self, diagrams: Vec<EntityCounts>) -> Self {
        self.diagrams = diagrams;
        self
    }

    pub fn stem(&self) -> &str {
        Path::new(&self.file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.file_name)
    }

    pub fn label(&self) -> SourceLabel {
        SourceLabel::from_file_stem(self.stem(), &self.age_group)
    }
}

pub struct DrillPipeline {
    config: PipelineConfig,
    layout: LayoutSynthesizer,
    animation: AnimationSynthesizer,
    builder: DrillRecordBuilder,
}

impl DrillPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            layout: LayoutSynthesizer::new(config.layout.clone()),
            animation: AnimationSynthesizer::new(config.animation.clone()),
            builder: DrillRecordBuilder::new(config.templates.clone(), &config.layout),
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Layout, animation and record assembly for an already-parsed drill
    pub fn synthesize(&self, drill: &ParsedDrill, hint: Option<&EntityHint>, ctx: &BuildContext) -> DrillRecord {
        let layout = self.layout.synthesize(drill, hint);
        let animation = self.animation.synthesize(&layout.participants, &drill.name);
        self.builder.build(drill, layout, animation, ctx)
    }

    /// Section `index` of a document.
    ///
    /// Takes diagram `index` when one exists; once diagrams run out the hint is
    /// derived from the parsed participant count.
    pub fn process_section(
        &self,
        text: &str,
        label: &SourceLabel,
        diagrams: &[EntityCounts],
        index: usize,
        source_file: &str,
    ) -> DrillRecord {
        let drill = parse_drill(text, &label.age_group, label.week, &label.session_theme);
        let hint = EntityHint::for_section(diagrams, index, &drill, &self.config.layout);
        debug!(
            drill = %drill.name,
            players = drill.participant_count,
            field = %drill.field_size,
            category = %drill.category,
            from_diagram = hint.is_from_diagram(),
            "parsed section"
        );
        let ctx = BuildContext::new(index as u32 + 1)
            .with_source_file(source_file)
            .with_completeness(EXTRACTED_COMPLETENESS);
        self.synthesize(&drill, Some(&hint), &ctx)
    }

    /// All drill sections of one document
    pub fn process_document(&self, doc: &SourceDocument) -> Vec<DrillRecord> {
        let label = doc.label();
        let sections = split_sections(&doc.pages);

        info!(
            file = %doc.file_name,
            week = label.week,
            theme = %label.session_theme,
            sections = sections.len(),
            diagrams = doc.diagrams.len(),
            "processing document"
        );

        sections
            .iter()
            .enumerate()
            .map(|(idx, text)| self.process_section(text, &label, &doc.diagrams, idx, &doc.file_name))
            .collect()
    }

    /// Documents in parallel; output keeps document order
    pub fn process_batch(&self, docs: &[SourceDocument]) -> Vec<DrillRecord> {
        let records: Vec<DrillRecord> = docs
            .par_iter()
            .map(|doc| self.process_document(doc))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect();

        info!(documents = docs.len(), drills = records.len(), "batch complete");
        records
    }

    /// A single drill web page (title + visible text)
    pub fn process_page(
        &self,
        title: &str,
        text: &str,
        fallback_age_group: &str,
        week: u32,
        theme: &str,
        source: Option<&str>,
    ) -> DrillRecord {
        let page = parse_page(title, text);
        debug!(sections = ?page.found_sections(), "parsed page");

        let drill = page.to_parsed_drill(fallback_age_group, week, theme);
        let mut ctx = BuildContext::new(1)
            .with_player_actions(page.player_action_list())
            .with_completeness(EXTRACTED_COMPLETENESS);
        if let Some(source) = source {
            ctx = ctx.with_source_file(source);
        }
        self.synthesize(&drill, None, &ctx)
    }
}

impl Default for DrillPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::extract())
    }
}
