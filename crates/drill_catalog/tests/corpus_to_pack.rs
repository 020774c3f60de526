//! Corpus on disk → catalog JSON → pack, as the CLI runs it

use anyhow::Result;
use drill_catalog::{finalize_catalog, load_corpus, load_pack, pack_catalog, verify_pack, CatalogConfig};
use drill_core::{read_catalog, write_catalog, CatalogSummary, DrillPipeline, PipelineConfig};
use std::fs;
use tempfile::TempDir;

const SESSION: &str = "\
Activity 1: Passing Gates
Organization: Set up a 30 x 30 yard area with six gates. Players work in pairs.
Coaching Points:
- Pass with the inside of the foot
- Look up before passing through the gate
Duration: 15 minutes

Activity 2: Rondo Square
Organization: 4 v 2 in a 15 x 15 yard grid. Defenders rotate every minute.
Coaching Points:
- Open body shape to receive
- Move to create passing angles
Duration: 12 minutes
";

const SCORING: &str = "\
Finishing pattern in front of goal, 8 players, 40 x 30 yard area.
Objective: Finish first time from wide service
Coaching Points: Attack the near post with pace and timing
\x0c\
Second page notes that are long enough to count as their own drill section in the document text.
Objective: Shoot early when space opens up
";

#[test]
fn test_corpus_extract_pack_roundtrip() -> Result<()> {
    let dir = TempDir::new()?;
    let corpus = dir.path().join("corpus");
    fs::create_dir_all(corpus.join("U10"))?;
    fs::create_dir_all(corpus.join("U8"))?;
    fs::write(corpus.join("U8/U8-Week-3.txt"), SESSION)?;
    fs::write(
        corpus.join("U8/U8-Week-3.hints.json"),
        r#"[{"primaryGroupCount": 4, "secondaryGroupCount": 2, "markerCount": 10}]"#,
    )?;
    fs::write(corpus.join("U10/U10-Scoring-Goals-1.txt"), SCORING)?;

    let docs = load_corpus(&corpus)?;
    assert_eq!(docs.len(), 2);

    let mut records = DrillPipeline::new(PipelineConfig::extract()).process_batch(&docs);
    let config = CatalogConfig::default();
    finalize_catalog(&mut records, &config);

    // U8 먼저 (연령 순서), 그 다음 U10
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(records[0].age_group, "U8");
    assert!(names.contains(&"Passing Gates"));
    assert!(names.contains(&"Rondo Square"));

    let gates = records.iter().find(|r| r.name == "Passing Gates").unwrap();
    assert_eq!(gates.week(), 3);
    assert_eq!(gates.equipment.cones, 10);
    assert_eq!(gates.field_size.to_string(), "30x30");
    assert_eq!(gates.coaching_points.len(), 2);

    let rondo = records.iter().find(|r| r.name == "Rondo Square").unwrap();
    assert_eq!(rondo.player_count, 6);
    assert!(rondo.diagram.zones[0].shape.is_circle());
    assert_eq!(rondo.equipment.cones, 8);

    let scoring: Vec<_> = records.iter().filter(|r| r.age_group == "U10").collect();
    assert_eq!(scoring.len(), 2);
    assert!(scoring.iter().all(|r| r.metadata.session_theme == "Scoring Goals"));
    assert!(scoring.iter().all(|r| r.equipment.goals == 1));

    let catalog_path = dir.path().join("out/drills.json");
    write_catalog(&catalog_path, &records)?;
    let loaded = read_catalog(&catalog_path)?;
    assert_eq!(loaded, records);

    let summary = CatalogSummary::from_records(&loaded, &config.age_order);
    assert_eq!(summary.by_age[0].0, "U8");
    assert_eq!(summary.total, records.len());

    let pack_path = dir.path().join("out/drills.msgpack.lz4");
    let meta = pack_catalog(&catalog_path, &pack_path, "v1")?;
    assert_eq!(meta.drill_count, records.len());
    assert!(verify_pack(&pack_path, &meta.checksum)?);
    assert_eq!(load_pack(&pack_path)?, records);
    Ok(())
}
