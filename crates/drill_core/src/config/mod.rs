//! # Pipeline Configuration
//!
//! 모든 고정 템플릿/배치 상수를 한 곳에서 관리.
//!
//! ## 사용법
//! ```rust
//! use drill_core::config::PipelineConfig;
//!
//! let extract = PipelineConfig::extract();
//! let curriculum = PipelineConfig::curriculum();
//! assert!(curriculum.layout.primary_ratio > extract.layout.primary_ratio);
//! ```

mod layout_config;
mod templates;

pub use layout_config::{AnimationConfig, LayoutConfig};
pub use templates::TemplateTables;

use serde::{Deserialize, Serialize};

/// Everything one pipeline variant needs
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PipelineConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub templates: TemplateTables,
}

impl PipelineConfig {
    /// Text extraction from session-plan documents
    pub fn extract() -> Self {
        Self::default()
    }

    /// Template-driven curriculum catalog
    pub fn curriculum() -> Self {
        Self { layout: LayoutConfig::curriculum(), ..Self::default() }
    }

    pub fn with_templates(mut self, templates: TemplateTables) -> Self {
        self.templates = templates;
        self
    }
}
