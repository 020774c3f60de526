//! Catalog report rendering

use drill_core::CatalogSummary;
use std::fmt::Write;

const BAR_WIDTH: usize = 40;

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (count * BAR_WIDTH).div_ceil(max);
    "█".repeat(len)
}

/// Distribution by age group and category plus one sample per age group
pub fn render_report(summary: &CatalogSummary) -> String {
    let max = summary.max_bucket();
    let mut out = String::new();

    let _ = writeln!(out, "📊 Total drills: {}", summary.total);

    let _ = writeln!(out, "\nDrills by Age Group:");
    for (age, count) in &summary.by_age {
        let _ = writeln!(out, "  {:<6} {:>4}  {}", age, count, bar(*count, max));
    }

    let _ = writeln!(out, "\nDrills by Category:");
    for (category, count) in &summary.by_category {
        let _ = writeln!(out, "  {:<11} {:>4}  {}", category, count, bar(*count, max));
    }

    if !summary.samples.is_empty() {
        let _ = writeln!(out, "\nSample Drills:");
        for s in &summary.samples {
            let _ = writeln!(
                out,
                "  [{}] {} ({}) - {} players, {} markers{}",
                s.age_group,
                s.name,
                s.category,
                s.players,
                s.markers,
                if s.animated { ", animated" } else { "" }
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::catalog::DrillSample;
    use drill_core::model::Category;
    use std::collections::BTreeMap;

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(10, 10).chars().count(), BAR_WIDTH);
        assert_eq!(bar(5, 10).chars().count(), BAR_WIDTH / 2);
        assert_eq!(bar(1, 1000).chars().count(), 1);
        assert_eq!(bar(0, 0), "");
    }

    #[test]
    fn test_render() {
        let summary = CatalogSummary {
            total: 3,
            by_age: vec![("U6".to_string(), 2), ("U10".to_string(), 1)],
            by_category: BTreeMap::from([("Technical".to_string(), 2), ("Possession".to_string(), 1)]),
            samples: vec![DrillSample {
                age_group: "U6".to_string(),
                name: "Cone Dribbling".to_string(),
                category: Category::Technical,
                players: 6,
                markers: 9,
                animated: true,
            }],
        };
        let text = render_report(&summary);
        assert!(text.contains("Total drills: 3"));
        assert!(text.contains("U10"));
        assert!(text.contains("Possession"));
        assert!(text.contains("[U6] Cone Dribbling (Technical) - 6 players, 9 markers, animated"));
        let tech = text.find("  Technical").unwrap();
        let poss = text.find("  Possession").unwrap();
        assert!(poss < tech);
    }
}
