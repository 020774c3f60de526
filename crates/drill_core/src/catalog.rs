//! Catalog persistence and summary
//!
//! 정렬 순서: 연령대 (설정된 순서, 미지정은 마지막) → 주차 → 이름

use crate::error::{DrillError, Result};
use crate::model::{Category, DrillRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub const DEFAULT_AGE_ORDER: [&str; 5] = ["U6", "U8", "U10", "U12", "U14"];

fn age_rank(age_order: &[String], age_group: &str) -> usize {
    age_order
        .iter()
        .position(|a| a == age_group)
        .unwrap_or(age_order.len())
}

/// Stable sort by age group order, then week, then name
pub fn sort_catalog(records: &mut [DrillRecord], age_order: &[String]) {
    records.sort_by(|a, b| {
        age_rank(age_order, &a.age_group)
            .cmp(&age_rank(age_order, &b.age_group))
            .then_with(|| a.week().cmp(&b.week()))
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Append `-2`, `-3`, … to repeated identities. Returns the number renamed.
pub fn ensure_unique_ids(records: &mut [DrillRecord]) -> usize {
    let mut seen: HashMap<String, u32> = HashMap::new();
    let mut renamed = 0;

    for record in records.iter_mut() {
        let count = seen.entry(record.id.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            continue;
        }

        let mut suffix = *count;
        let mut candidate = format!("{}-{}", record.id, suffix);
        // 접미사가 붙은 id 가 원래 존재할 수 있음
        while seen.contains_key(&candidate) {
            suffix += 1;
            candidate = format!("{}-{}", record.id, suffix);
        }
        warn!(id = %record.id, renamed = %candidate, "duplicate drill id");
        seen.insert(candidate.clone(), 1);
        record.id = candidate.clone();
        record.drill_id = candidate;
        renamed += 1;
    }
    renamed
}

/// Pretty JSON, UTF-8; parent directories are created
pub fn write_catalog(path: &Path, records: &[DrillRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DrillError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).map_err(|e| DrillError::io(path, e))?;
    info!(path = %path.display(), drills = records.len(), "catalog written");
    Ok(())
}

pub fn read_catalog(path: &Path) -> Result<Vec<DrillRecord>> {
    let json = fs::read_to_string(path).map_err(|e| DrillError::io(path, e))?;
    Ok(serde_json::from_str(&json)?)
}

/// Per-age-group sample shown in reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillSample {
    pub age_group: String,
    pub name: String,
    pub category: Category,
    pub players: usize,
    pub markers: usize,
    pub animated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub total: usize,
    /// In configured age order; unknown groups follow alphabetically
    pub by_age: Vec<(String, usize)>,
    /// Alphabetical by category name
    pub by_category: BTreeMap<String, usize>,
    pub samples: Vec<DrillSample>,
}

impl CatalogSummary {
    pub fn from_records(records: &[DrillRecord], age_order: &[String]) -> Self {
        let mut age_counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut by_category = BTreeMap::new();
        for r in records {
            *age_counts.entry(r.age_group.as_str()).or_default() += 1;
            *by_category.entry(r.category.to_string()).or_default() += 1;
        }

        let mut ages: Vec<&str> = age_counts.keys().copied().collect();
        ages.sort_by_key(|a| age_rank(age_order, a));

        let by_age = ages
            .iter()
            .map(|a| (a.to_string(), age_counts[a]))
            .collect();

        let samples = ages
            .iter()
            .filter_map(|age| records.iter().find(|r| r.age_group == *age))
            .map(|r| DrillSample {
                age_group: r.age_group.clone(),
                name: r.name.clone(),
                category: r.category,
                players: r.diagram.players.len(),
                markers: r.diagram.equipment.len(),
                animated: !r.diagram.animations.is_empty(),
            })
            .collect();

        Self { total: records.len(), by_age, by_category, samples }
    }

    /// Largest single bucket, for scaling report bars
    pub fn max_bucket(&self) -> usize {
        self.by_age
            .iter()
            .map(|(_, n)| *n)
            .chain(self.by_category.values().copied())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BuildContext;
    use crate::model::ParsedDrill;
    use crate::pipeline::DrillPipeline;
    use tempfile::TempDir;

    fn order() -> Vec<String> {
        DEFAULT_AGE_ORDER.iter().map(|s| s.to_string()).collect()
    }

    fn record(age: &str, week: u32, name: &str) -> DrillRecord {
        let mut drill = ParsedDrill::with_defaults(age, week, "Passing");
        drill.name = name.to_string();
        DrillPipeline::default().synthesize(&drill, None, &BuildContext::new(1))
    }

    #[test]
    fn test_sort_order() {
        let mut records = vec![
            record("U19", 1, "Alpha"),
            record("U10", 2, "Bravo"),
            record("U6", 3, "Zulu"),
            record("U10", 1, "Zulu"),
            record("U6", 3, "Alpha"),
        ];
        sort_catalog(&mut records, &order());
        let keys: Vec<(String, u32, String)> = records
            .iter()
            .map(|r| (r.age_group.clone(), r.week(), r.name.clone()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("U6".into(), 3, "Alpha".into()),
                ("U6".into(), 3, "Zulu".into()),
                ("U10".into(), 1, "Zulu".into()),
                ("U10".into(), 2, "Bravo".into()),
                ("U19".into(), 1, "Alpha".into()),
            ]
        );
    }

    #[test]
    fn test_unique_ids() {
        let mut records = vec![
            record("U14", 1, "Rondo"),
            record("U14", 1, "Rondo"),
            record("U14", 1, "Rondo"),
            record("U14", 2, "Rondo"),
        ];
        assert_eq!(ensure_unique_ids(&mut records), 2);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["mayouth-u14-rondo-1", "mayouth-u14-rondo-1-2", "mayouth-u14-rondo-1-3", "mayouth-u14-rondo-2"]
        );
        assert_eq!(records[1].drill_id, records[1].id);
    }

    #[test]
    fn test_write_read_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out/catalog.json");
        let records = vec![record("U8", 1, "Dribble Gates"), record("U10", 2, "4v2 Rondo")];

        write_catalog(&path, &records).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"vlmData\""));
        assert!(text.contains("\"drillId\""));

        let loaded = read_catalog(&path).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_read_missing_is_io_error() {
        let err = read_catalog(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, DrillError::Io { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_summary() {
        let records = vec![
            record("U10", 1, "A"),
            record("U6", 1, "B"),
            record("U6", 2, "C"),
            record("Adult", 1, "D"),
        ];
        let summary = CatalogSummary::from_records(&records, &order());
        assert_eq!(summary.total, 4);
        assert_eq!(
            summary.by_age,
            vec![("U6".to_string(), 2), ("U10".to_string(), 1), ("Adult".to_string(), 1)]
        );
        assert_eq!(summary.by_category["Technical"], 4);
        assert_eq!(summary.samples.len(), 3);
        assert_eq!(summary.samples[0].name, "B");
        assert_eq!(summary.max_bucket(), 4);
    }
}
