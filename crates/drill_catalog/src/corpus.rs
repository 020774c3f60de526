//! Pre-extracted session-plan corpus
//!
//! ```text
//! <root>/<AGE_GROUP>/<name>.txt          pages separated by form feed
//! <root>/<AGE_GROUP>/<name>.hints.json   optional, one EntityCounts per diagram
//! ```
//!
//! 읽을 수 없는 파일은 경고 후 건너뛴다 (배치는 계속 진행).

use anyhow::{Context, Result};
use drill_core::{EntityCounts, SourceDocument};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const PAGE_BREAK: char = '\x0c';
pub const TEXT_EXTENSION: &str = "txt";
pub const HINTS_SUFFIX: &str = ".hints.json";

/// Form-feed separated pages, blank pages dropped
pub fn split_pages(text: &str) -> Vec<String> {
    text.split(PAGE_BREAK)
        .filter(|p| !p.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn hints_path(text_path: &Path) -> Option<PathBuf> {
    let stem = text_path.file_stem()?.to_str()?;
    Some(text_path.with_file_name(format!("{}{}", stem, HINTS_SUFFIX)))
}

/// Diagram hints next to a text file; a broken sidecar only loses the hints
fn load_hints(text_path: &Path) -> Vec<EntityCounts> {
    let Some(path) = hints_path(text_path).filter(|p| p.exists()) else {
        return Vec::new();
    };
    let parsed = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read hints: {}", path.display()))
        .and_then(|json| {
            serde_json::from_str::<Vec<EntityCounts>>(&json)
                .with_context(|| format!("Failed to parse hints: {}", path.display()))
        });
    match parsed {
        Ok(hints) => hints,
        Err(e) => {
            warn!(error = %format!("{:#}", e), "ignoring diagram hints");
            Vec::new()
        }
    }
}

pub fn load_document(path: &Path, age_group: &str) -> Result<SourceDocument> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Invalid file name: {}", path.display()))?;

    let doc = SourceDocument::new(file_name, age_group, split_pages(&text)).with_diagrams(load_hints(path));
    debug!(file = file_name, pages = doc.pages.len(), diagrams = doc.diagrams.len(), "document loaded");
    Ok(doc)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .filter_map(|entry| match entry {
            Ok(e) => Some(e.path()),
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                None
            }
        })
        .collect();
    paths.sort();
    Ok(paths)
}

fn is_text_document(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(TEXT_EXTENSION)
}

/// Every document under `root`, age group by age group, in file-name order.
///
/// Only an unreadable `root` is an error.
pub fn load_corpus(root: &Path) -> Result<Vec<SourceDocument>> {
    let mut targets: Vec<(PathBuf, String)> = Vec::new();

    for age_dir in sorted_entries(root)?.into_iter().filter(|p| p.is_dir()) {
        let Some(age_group) = age_dir.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
            continue;
        };
        match sorted_entries(&age_dir) {
            Ok(files) => targets.extend(
                files
                    .into_iter()
                    .filter(|p| is_text_document(p))
                    .map(|p| (p, age_group.clone())),
            ),
            Err(e) => warn!(error = %format!("{:#}", e), "skipping age group"),
        }
    }

    let docs: Vec<SourceDocument> = targets
        .par_iter()
        .filter_map(|(path, age)| match load_document(path, age) {
            Ok(doc) => Some(doc),
            Err(e) => {
                warn!(error = %format!("{:#}", e), "skipping document");
                None
            }
        })
        .collect();

    info!(root = %root.display(), found = targets.len(), loaded = docs.len(), "corpus loaded");
    Ok(docs)
}
