//! Drill fields from a block of session-plan text
//!
//! Every field is independent and best-effort: a field that cannot be
//! recovered resolves to its documented default, never to an error.

use super::rules::{
    capture_at, capture_pair, capture_trimmed, earliest_match, first_keyword, first_match,
    labelled_block, BlockEnd, KeywordRule, Rule,
};
use crate::model::{
    Category, FieldSize, ParsedDrill, DEFAULT_DURATION_MINUTES, DEFAULT_PARTICIPANT_COUNT,
    MAX_PARTICIPANT_COUNT, UNNAMED_DRILL,
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

/// Coaching-point fragments must be longer than this (chars)
pub const MIN_COACHING_POINT_CHARS: usize = 10;

static NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:activity|drill|exercise)[\s:]+([a-z][^\n]+)").expect("static regex")
});
static NUMBERED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:activity|drill|exercise)\s*#?\s*\d+\s*[:.)\-]?\s*([a-z][^\n]+)")
        .expect("static regex")
});
static ORGANIZATION_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\borganization[:\s]+").expect("static regex"));
static COACHING_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bcoaching\s+points?[:\s]+").expect("static regex"));
static COACHING_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[•\-\n]").expect("static regex"));
static OBJECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:objective|purpose|goal)[\s:]+([^\n]+)").expect("static regex")
});
static VERSUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(?:vs|v)\s*(\d+)").expect("static regex"));
static PLAYERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*players?").expect("static regex"));
static GRID_WITH_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*[x×]\s*(\d+)\s*(?:yard|yd|meter|m)").expect("static regex")
});
static GRID_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d+)\s*[x×]\s*(\d+)\b").expect("static regex"));
static DURATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*min").expect("static regex"));

// ========== Rules ==========

fn versus_count(text: &str) -> Option<u32> {
    capture_pair(&VERSUS, text).and_then(|(a, b)| a.checked_add(b))
}

fn players_count(text: &str) -> Option<u32> {
    capture_trimmed(&PLAYERS, text)?.parse().ok()
}

fn grid_with_unit(text: &str) -> Option<FieldSize> {
    capture_pair(&GRID_WITH_UNIT, text).map(|(w, h)| FieldSize::grid(w, h))
}

fn grid_bare(text: &str) -> Option<FieldSize> {
    capture_pair(&GRID_BARE, text).map(|(w, h)| FieldSize::grid(w, h))
}

fn duration_minutes(text: &str) -> Option<u32> {
    capture_trimmed(&DURATION, text)?.parse().ok()
}

fn labelled_name(text: &str) -> Option<(usize, String)> {
    capture_at(&NAME, text)
}

fn numbered_name(text: &str) -> Option<(usize, String)> {
    capture_at(&NUMBERED_NAME, text)
}

fn labelled_objective(text: &str) -> Option<String> {
    capture_trimmed(&OBJECTIVE, text)
}

/// `"<N> v <M>"` (summed) before `"<N> players"`
pub static PARTICIPANT_RULES: &[Rule<u32>] = &[
    Rule::new("versus", versus_count),
    Rule::new("players", players_count),
];

/// A dimension with a unit token before a bare `"<N> x <M>"`
pub static FIELD_SIZE_RULES: &[Rule<FieldSize>] = &[
    Rule::new("grid-with-unit", grid_with_unit),
    Rule::new("grid-bare", grid_bare),
];

pub static DURATION_RULES: &[Rule<u32>] = &[Rule::new("minutes", duration_minutes)];

/// `"Activity: <name>"` and `"Activity 2: <name>"`; whichever appears first in the text wins
pub static NAME_RULES: &[Rule<(usize, String)>] = &[
    Rule::new("label", labelled_name),
    Rule::new("numbered-label", numbered_name),
];

pub static OBJECTIVE_RULES: &[Rule<String>] = &[Rule::new("label", labelled_objective)];

/// Theme keywords, highest priority first; no match means Technical
pub static CATEGORY_RULES: &[KeywordRule<Category>] = &[
    KeywordRule { value: Category::Possession, keywords: &["build", "possession"] },
    KeywordRule { value: Category::Shooting, keywords: &["scoring", "finishing"] },
    KeywordRule { value: Category::Defending, keywords: &["preventing", "defending"] },
];

// ========== Field extractors ==========

pub fn extract_name(text: &str) -> String {
    earliest_match(NAME_RULES, text)
        .map(|(_, name)| name)
        .unwrap_or_else(|| UNNAMED_DRILL.to_string())
}

pub fn extract_setup(text: &str) -> String {
    labelled_block(text, &ORGANIZATION_LABEL, BlockEnd::NextLabelOrBlank).unwrap_or_default()
}

pub fn extract_coaching_points(text: &str) -> Vec<String> {
    let Some(block) = labelled_block(text, &COACHING_LABEL, BlockEnd::NextLabel) else {
        return Vec::new();
    };
    split_points(&block)
}

/// Split on bullet / dash / newline, keeping fragments longer than 10 chars
pub fn split_points(block: &str) -> Vec<String> {
    COACHING_SPLIT
        .split(block)
        .map(str::trim)
        .filter(|p| p.chars().count() > MIN_COACHING_POINT_CHARS)
        .map(str::to_string)
        .collect()
}

pub fn extract_objective(text: &str) -> String {
    first_match(OBJECTIVE_RULES, text)
        .map(|(_, o)| o)
        .unwrap_or_default()
}

/// A count read from text, raised to 1; `None` above [`MAX_PARTICIPANT_COUNT`]
pub fn plausible_count(count: u32) -> Option<u32> {
    (count <= MAX_PARTICIPANT_COUNT).then(|| count.max(1))
}

pub fn extract_participant_count(text: &str) -> u32 {
    match first_match(PARTICIPANT_RULES, text) {
        Some((rule, count)) => {
            trace!(rule, count, "participant count");
            plausible_count(count).unwrap_or_else(|| {
                debug!(rule, count, "implausible participant count, using default");
                DEFAULT_PARTICIPANT_COUNT
            })
        }
        None => DEFAULT_PARTICIPANT_COUNT,
    }
}

pub fn extract_field_size(text: &str) -> FieldSize {
    first_match(FIELD_SIZE_RULES, text)
        .map(|(_, size)| size)
        .unwrap_or(FieldSize::Custom)
}

pub fn extract_duration(text: &str) -> u32 {
    first_match(DURATION_RULES, text)
        .map(|(_, minutes)| minutes)
        .unwrap_or(DEFAULT_DURATION_MINUTES)
}

pub fn categorize(theme: &str) -> Category {
    first_keyword(CATEGORY_RULES, theme).unwrap_or(Category::Technical)
}

/// Parse one drill section.
///
/// Pure function of its inputs: the same arguments always give the same
/// [`ParsedDrill`].
pub fn parse_drill(text: &str, age_group: &str, week_number: u32, session_theme: &str) -> ParsedDrill {
    ParsedDrill {
        name: extract_name(text),
        setup_description: extract_setup(text),
        coaching_points: extract_coaching_points(text),
        objective: extract_objective(text),
        participant_count: extract_participant_count(text),
        field_size: extract_field_size(text),
        duration_minutes: extract_duration(text),
        category: categorize(session_theme),
        age_group: age_group.to_string(),
        week_number,
        session_theme: session_theme.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "Activity: Triangle Passing\n\
        Organization: Set up a 15x15 grid.\n\
        Coaching Points: Keep good spacing. Communicate early.\n";

    #[test]
    fn test_triangle_passing_section() {
        let drill = parse_drill(TRIANGLE, "U8", 3, "Passing");
        assert_eq!(drill.name, "Triangle Passing");
        assert_eq!(drill.setup_description, "Set up a 15x15 grid.");
        assert_eq!(drill.coaching_points, vec!["Keep good spacing. Communicate early."]);
        assert_eq!(drill.field_size, FieldSize::grid(15, 15));
        assert_eq!(drill.category, Category::Technical);
        assert_eq!(drill.participant_count, 8);
        assert_eq!(drill.duration_minutes, 15);
        assert_eq!(drill.week_number, 3);
        assert_eq!(drill.age_group, "U8");
    }

    #[test]
    fn test_rondo_line() {
        let text = "4 v 4 Rondo possession grid, 20 x 20 yard area, 18 minutes";
        let drill = parse_drill(text, "U10", 1, "Building Up in Own Half");
        assert_eq!(drill.participant_count, 8);
        assert_eq!(drill.field_size, FieldSize::grid(20, 20));
        assert_eq!(drill.duration_minutes, 18);
        assert_eq!(drill.category, Category::Possession);
        assert_eq!(drill.name, UNNAMED_DRILL);
    }

    #[test]
    fn test_empty_text_uses_defaults() {
        let drill = parse_drill("", "U6", 1, "General Training");
        assert_eq!(drill, ParsedDrill::with_defaults("U6", 1, "General Training"));
    }

    #[test]
    fn test_versus_beats_players() {
        assert_eq!(extract_participant_count("3 vs 2 with 12 players"), 5);
        assert_eq!(extract_participant_count("Split 12 players into pairs"), 12);
        assert_eq!(extract_participant_count("0 players"), 1);
    }

    #[test]
    fn test_huge_participant_count_falls_back() {
        assert_eq!(extract_participant_count("4000000000 players on the field"), DEFAULT_PARTICIPANT_COUNT);
        assert_eq!(extract_participant_count("30 v 30 small sided game"), DEFAULT_PARTICIPANT_COUNT);
        assert_eq!(extract_participant_count("25 v 25"), MAX_PARTICIPANT_COUNT);
        let drill = parse_drill("Activity: Big Game\n4000000000 players on the field", "U12", 1, "Passing");
        assert_eq!(drill.name, "Big Game");
        assert_eq!(drill.participant_count, DEFAULT_PARTICIPANT_COUNT);
    }

    #[test]
    fn test_field_size_prefers_unit() {
        assert_eq!(extract_field_size("4x4 teams in a 30 x 25 yd box"), FieldSize::grid(30, 25));
        assert_eq!(extract_field_size("area 40×30 meters"), FieldSize::grid(40, 30));
        assert_eq!(extract_field_size("half field"), FieldSize::Custom);
    }

    #[test]
    fn test_category_priority() {
        assert_eq!(categorize("Preventing Build Up in Own Half"), Category::Possession);
        assert_eq!(categorize("Scoring Goals"), Category::Shooting);
        assert_eq!(categorize("Finishing"), Category::Shooting);
        assert_eq!(categorize("Preventing Goals"), Category::Defending);
        assert_eq!(categorize("Dribbling"), Category::Technical);
    }

    #[test]
    fn test_coaching_points_drop_short_fragments() {
        let text = "Coaching Points:\n• Head up before receiving\n• Talk\n- Open body shape to the field\nObjective: Keep the ball";
        let points = extract_coaching_points(text);
        assert_eq!(
            points,
            vec!["Head up before receiving", "Open body shape to the field"]
        );
        assert_eq!(extract_objective(text), "Keep the ball");
    }

    #[test]
    fn test_name_label_variants() {
        assert_eq!(extract_name("EXERCISE: Gate Dribble\nmore"), "Gate Dribble");
        assert_eq!(extract_name("Drill - no colon here"), UNNAMED_DRILL);
        assert_eq!(extract_name("Activity 2: Rondo Square\nOrganization"), "Rondo Square");
        assert_eq!(extract_name("DRILL #3 - Wall Passes"), "Wall Passes");
        assert_eq!(earliest_match(NAME_RULES, "Activity 1: Gates").map(|(rule, _)| rule), Some("numbered-label"));
    }

    #[test]
    fn test_numbered_header_beats_later_drill_mention() {
        let text = "Activity 1: Passing Gates\n\
            Organization: Set up the drill in a 20 x 20 yard area with six gates for pairs.\n\
            Coaching Points: Pass through the gate with pace";
        assert_eq!(extract_name(text), "Passing Gates");
        assert_eq!(extract_name("Warm up first.\nDrill: Wall Passes\nActivity 2: Rondo"), "Wall Passes");
    }
}
