//! # Curriculum Catalog
//!
//! 텍스트 추출 없이 연령별 커리큘럼 계획과 고정 드릴 템플릿으로 카탈로그를 생성.
//!
//! - U6 / U8: 주 단위 (테마 순환, 주당 드릴 수)
//! - U10 / U12 / U14: 세션 단위 (테마별 세션 수, 세션마다 주차 +1)
//!
//! Every generated drill goes through the same layout → animation → builder
//! path as extracted ones, with the curriculum layout preset.

use crate::builder::BuildContext;
use crate::model::{Category, DrillRecord, FieldSize, ParsedDrill};
use crate::parser::categorize;
use crate::pipeline::DrillPipeline;
use tracing::{debug, info};

/// Completeness recorded for template-generated drills
pub const GENERATED_COMPLETENESS: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillTemplate {
    pub name: &'static str,
    pub players: u32,
    pub field: (u32, u32),
    pub duration: u32,
}

const fn template(name: &'static str, players: u32, field: (u32, u32), duration: u32) -> DrillTemplate {
    DrillTemplate { name, players, field, duration }
}

#[derive(Debug)]
pub struct TemplateBucket {
    pub name: &'static str,
    pub category: Category,
    pub templates: [DrillTemplate; 3],
}

pub static BUCKETS: &[TemplateBucket] = &[
    TemplateBucket {
        name: "Dribbling",
        category: Category::Technical,
        templates: [
            template("Cone Dribbling", 6, (20, 20), 15),
            template("Dribble Tag", 8, (30, 30), 12),
            template("Dribble Relay", 8, (25, 15), 15),
        ],
    },
    TemplateBucket {
        name: "Passing",
        category: Category::Technical,
        templates: [
            template("Passing Gates", 6, (30, 30), 15),
            template("Triangle Passing", 6, (15, 15), 12),
            template("Passing Squares", 8, (20, 20), 15),
        ],
    },
    TemplateBucket {
        name: "Shooting",
        category: Category::Shooting,
        templates: [
            template("Shooting on Goal", 6, (30, 20), 15),
            template("Finishing Patterns", 8, (40, 30), 18),
            template("1v1 to Goal", 6, (25, 20), 15),
        ],
    },
    TemplateBucket {
        name: "Possession",
        category: Category::Possession,
        templates: [
            template("4v2 Rondo", 6, (15, 15), 15),
            template("5v2 Possession", 7, (20, 20), 18),
            template("6v3 Keep Away", 9, (25, 25), 20),
        ],
    },
    TemplateBucket {
        name: "Defending",
        category: Category::Defending,
        templates: [
            template("1v1 Defending", 6, (15, 10), 15),
            template("2v2 Defending", 8, (25, 20), 18),
            template("Defensive Shape", 8, (40, 30), 20),
        ],
    },
    TemplateBucket {
        name: "Transition",
        category: Category::Possession,
        templates: [
            template("Transition Boxes", 8, (40, 30), 20),
            template("Counter Attack", 10, (60, 40), 20),
            template("Quick Transition", 8, (50, 30), 18),
        ],
    },
];

/// Bucket by exact name; unknown names use Passing
pub fn bucket(name: &str) -> &'static TemplateBucket {
    BUCKETS
        .iter()
        .find(|b| b.name == name)
        .or_else(|| BUCKETS.iter().find(|b| b.name == "Passing"))
        .unwrap_or(&BUCKETS[0])
}

/// Bucket for a session theme, keyed on its category
fn session_bucket(theme: &str) -> &'static TemplateBucket {
    match categorize(theme) {
        Category::Shooting => bucket("Shooting"),
        Category::Defending => bucket("Defending"),
        _ => bucket("Possession"),
    }
}

#[derive(Debug, Clone, Copy)]
pub enum AgePlan {
    Weekly {
        weeks: u32,
        themes: &'static [&'static str],
        drills_per_week: u32,
    },
    Sessions {
        sessions: &'static [(&'static str, u32)],
        drills_per_session: u32,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct CurriculumPlan {
    pub age_group: &'static str,
    pub plan: AgePlan,
}

const SESSION_THEMES: [&str; 6] = [
    "Building Up in Own Half",
    "Building Up in Opponents Half",
    "Scoring Goals",
    "Preventing Build Up in Opponents Half",
    "Preventing Build Up in Own Half",
    "Preventing Goals",
];

pub static CURRICULUM: &[CurriculumPlan] = &[
    CurriculumPlan {
        age_group: "U6",
        plan: AgePlan::Weekly {
            weeks: 10,
            themes: &["Dribbling", "Passing", "Shooting", "Ball Control", "Fun Games"],
            drills_per_week: 3,
        },
    },
    CurriculumPlan {
        age_group: "U8",
        plan: AgePlan::Weekly {
            weeks: 12,
            themes: &["Dribbling", "Passing", "Receiving", "Shooting", "1v1", "Small-Sided Games"],
            drills_per_week: 3,
        },
    },
    CurriculumPlan {
        age_group: "U10",
        plan: AgePlan::Sessions {
            sessions: &[
                (SESSION_THEMES[0], 2),
                (SESSION_THEMES[1], 2),
                (SESSION_THEMES[2], 2),
                (SESSION_THEMES[3], 2),
                (SESSION_THEMES[4], 2),
                (SESSION_THEMES[5], 2),
            ],
            drills_per_session: 3,
        },
    },
    CurriculumPlan {
        age_group: "U12",
        plan: AgePlan::Sessions {
            sessions: &[
                (SESSION_THEMES[0], 2),
                (SESSION_THEMES[1], 2),
                (SESSION_THEMES[2], 2),
                (SESSION_THEMES[3], 2),
                (SESSION_THEMES[4], 2),
                (SESSION_THEMES[5], 1),
            ],
            drills_per_session: 3,
        },
    },
    CurriculumPlan {
        age_group: "U14",
        plan: AgePlan::Sessions {
            sessions: &[
                (SESSION_THEMES[0], 1),
                (SESSION_THEMES[1], 1),
                (SESSION_THEMES[2], 1),
                (SESSION_THEMES[3], 1),
                (SESSION_THEMES[4], 1),
                (SESSION_THEMES[5], 1),
            ],
            drills_per_session: 4,
        },
    },
];

/// One slot of the curriculum before synthesis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedDrill {
    pub age_group: &'static str,
    pub week: u32,
    pub theme: &'static str,
    /// 1-based ordinal within the week or session
    pub ordinal: u32,
    pub category: Category,
    pub template: DrillTemplate,
}

impl PlannedDrill {
    fn new(age_group: &'static str, week: u32, theme: &'static str, ordinal: u32, bucket: &TemplateBucket) -> Self {
        let idx = (ordinal as usize - 1) % bucket.templates.len();
        Self {
            age_group,
            week,
            theme,
            ordinal,
            category: bucket.category,
            template: bucket.templates[idx],
        }
    }

    pub fn to_parsed_drill(&self) -> ParsedDrill {
        let t = &self.template;
        let field_size = FieldSize::grid(t.field.0, t.field.1);
        let mut drill = ParsedDrill::with_defaults(self.age_group, self.week, self.theme);

        drill.name = t.name.to_string();
        drill.setup_description = format!(
            "Set up a {} yard area. Position {} players as shown. Use cones to mark boundaries.",
            field_size, t.players
        );
        drill.objective = format!(
            "Develop {} skills appropriate for {} players through {}",
            self.category.tag(),
            self.age_group,
            t.name
        );
        drill.participant_count = t.players;
        drill.field_size = field_size;
        drill.duration_minutes = t.duration;
        drill.category = self.category;
        drill
    }
}

impl CurriculumPlan {
    pub fn drills(&self) -> Vec<PlannedDrill> {
        let mut out = Vec::new();
        match self.plan {
            AgePlan::Weekly { weeks, themes, drills_per_week } => {
                for week in 1..=weeks {
                    let theme = themes[(week as usize - 1) % themes.len()];
                    let bucket = bucket(theme);
                    for ordinal in 1..=drills_per_week {
                        out.push(PlannedDrill::new(self.age_group, week, theme, ordinal, bucket));
                    }
                }
            }
            AgePlan::Sessions { sessions, drills_per_session } => {
                let mut week = 1;
                for &(theme, count) in sessions {
                    let bucket = session_bucket(theme);
                    for _ in 0..count {
                        for ordinal in 1..=drills_per_session {
                            out.push(PlannedDrill::new(self.age_group, week, theme, ordinal, bucket));
                        }
                        week += 1;
                    }
                }
            }
        }
        out
    }
}

/// Every planned drill, age group by age group
pub fn plan_curriculum() -> Vec<PlannedDrill> {
    CURRICULUM.iter().flat_map(CurriculumPlan::drills).collect()
}

/// Synthesize the whole curriculum with `pipeline`.
///
/// Identities may repeat (U14 has more drills per session than templates);
/// the catalog writer resolves that.
pub fn generate_catalog(pipeline: &DrillPipeline) -> Vec<DrillRecord> {
    let mut records = Vec::new();
    for plan in CURRICULUM {
        let planned = plan.drills();
        for slot in &planned {
            let drill = slot.to_parsed_drill();
            let ctx = BuildContext::new(slot.ordinal).with_completeness(GENERATED_COMPLETENESS);
            debug!(age = slot.age_group, week = slot.week, drill = slot.template.name, "generating drill");
            records.push(pipeline.synthesize(&drill, None, &ctx));
        }
        info!(age = plan.age_group, drills = planned.len(), "age group generated");
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use std::collections::HashMap;

    #[test]
    fn test_plan_sizes() {
        let mut by_age: HashMap<&str, usize> = HashMap::new();
        for slot in plan_curriculum() {
            *by_age.entry(slot.age_group).or_default() += 1;
        }
        assert_eq!(by_age["U6"], 30);
        assert_eq!(by_age["U8"], 36);
        assert_eq!(by_age["U10"], 36);
        assert_eq!(by_age["U12"], 33);
        assert_eq!(by_age["U14"], 24);
    }

    #[test]
    fn test_weekly_theme_rotation_and_fallback_bucket() {
        let u6 = CURRICULUM[0].drills();
        // week 4 = "Ball Control" → Passing templates
        let week4: Vec<_> = u6.iter().filter(|d| d.week == 4).collect();
        assert_eq!(week4[0].theme, "Ball Control");
        assert_eq!(week4[0].template.name, "Passing Gates");
        // week 6 wraps to "Dribbling"
        assert!(u6.iter().any(|d| d.week == 6 && d.template.name == "Cone Dribbling"));
    }

    #[test]
    fn test_session_weeks_and_buckets() {
        let u10 = CURRICULUM[2].drills();
        assert_eq!(u10.last().map(|d| d.week), Some(12));
        let scoring = u10.iter().find(|d| d.theme == "Scoring Goals").unwrap();
        assert_eq!(scoring.week, 5);
        assert_eq!(scoring.category, Category::Shooting);

        let u14 = CURRICULUM[4].drills();
        let first_session: Vec<_> = u14.iter().filter(|d| d.week == 1).collect();
        assert_eq!(first_session.len(), 4);
        assert_eq!(first_session[3].template, first_session[0].template);
        assert_eq!(first_session[3].ordinal, 4);
    }

    #[test]
    fn test_generated_records() {
        let pipeline = DrillPipeline::new(PipelineConfig::curriculum());
        let records = generate_catalog(&pipeline);
        assert_eq!(records.len(), 159);

        let rondo = records.iter().find(|r| r.name == "4v2 Rondo").unwrap();
        assert_eq!(rondo.metadata.completeness, 90);
        assert_eq!(rondo.source, "MA Youth Soccer - U10 Curriculum");
        assert!(rondo.diagram.zones[0].shape.is_circle());
        // 6 × 0.65 = 3.9 → 4 primary
        assert_eq!(rondo.diagram.players.iter().filter(|p| p.id.starts_with("ATT")).count(), 4);
        assert_eq!(
            rondo.setup_instructions,
            vec!["Set up a 15x15 yard area", "Position 6 players as shown", "Use cones to mark boundaries"]
        );
    }
}
