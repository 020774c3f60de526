//! # drill_core - Deterministic Drill Record Synthesis
//!
//! Turns free-form session-plan text into structured drill records with a
//! synthesized diagram layout and a short pass animation.
//!
//! ## Features
//! - Best-effort text parsing: every missing field resolves to a default
//! - 100% deterministic layout (no randomness, same input = same record)
//! - Template-driven curriculum catalog
//! - Parallel batch processing over independent documents
//!
//! ## Pipeline
//! ```text
//! text → parser → ParsedDrill ─┬─> LayoutSynthesizer → DrillLayout
//!                EntityHint ───┘        │
//!                                       └─> AnimationSynthesizer → AnimationSequence
//!                            DrillRecordBuilder → DrillRecord → catalog
//! ```

// Pipeline entry points take several independent context values
#![allow(clippy::too_many_arguments)]

pub mod builder;
pub mod catalog;
pub mod config;
pub mod curriculum;
pub mod error;
pub mod hint;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod synth;

pub use builder::{drill_identity, BuildContext, DrillRecordBuilder};
pub use catalog::{
    ensure_unique_ids, read_catalog, sort_catalog, write_catalog, CatalogSummary, DEFAULT_AGE_ORDER,
};
pub use config::{AnimationConfig, LayoutConfig, PipelineConfig, TemplateTables};
pub use curriculum::generate_catalog;
pub use error::{DrillError, Result};
pub use hint::{EntityCounts, EntityHint};
pub use model::{DrillLayout, DrillRecord, ParsedDrill};
pub use parser::{parse_drill, parse_page, PageDrill};
pub use pipeline::{DrillPipeline, SourceDocument};
pub use synth::{AnimationSynthesizer, LayoutSynthesizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
