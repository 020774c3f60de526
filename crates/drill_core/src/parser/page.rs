//! Drill sections from a single drill web page
//!
//! Works on the page title plus its visible text (already fetched and
//! stripped of markup). Every section is optional.

use super::rules::{capture_trimmed, first_match, labelled_block, BlockEnd};
use super::sections::{categorize, plausible_count, split_points, FIELD_SIZE_RULES, PARTICIPANT_RULES};
use crate::model::{FieldSize, ParsedDrill, DEFAULT_DURATION_MINUTES, UNNAMED_DRILL};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static OBJECTIVE_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:objective|purpose|goal)[\s:]+").expect("static regex")
});
static ORGANIZATION_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:organization|setup|set[- ]up)[\s:]+").expect("static regex")
});
static ACTIONS_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:instructions?|description|how to play|player actions?)[\s:]+")
        .expect("static regex")
});
static COACHING_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:coaching points?|key points?|tips?)[\s:]+").expect("static regex")
});
static DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:duration|time)[\s:]+(\d+(?:-\d+)?\s*(?:min|minutes?))")
        .expect("static regex")
});
static AGE_GROUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:age group|age)[ \t]*:?[ \t]*(u[\d\- \t]+|[\d\-]+\s*years?)")
        .expect("static regex")
});
static FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:field|area|grid)[\s:]+(\d+\s*[x×]\s*\d+\s*(?:yards?|meters?|m)?)")
        .expect("static regex")
});
static PLAYER_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+\s*\+\s*\d+\s*v\s*\d+\s*\+\s*\d+)").expect("static regex")
});
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("static regex"));
static SENTENCE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[•\n]|\.\s+").expect("static regex"));

/// Sections recovered from one drill page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDrill {
    pub drill_name: Option<String>,
    pub objective: Option<String>,
    pub organization: Option<String>,
    pub player_actions: Option<String>,
    pub coaching_points: Option<String>,
    pub duration: Option<String>,
    pub age_group: Option<String>,
    pub field_size: Option<String>,
    pub player_format: Option<String>,
    /// From the player format, or the usual count rules over the page text
    pub participant_count: Option<u32>,
}

/// Sum of every number in a format such as `"3 + 2 v 3 + 2"`
pub fn format_participants(format: &str) -> Option<u32> {
    NUMBER
        .find_iter(format)
        .map(|m| m.as_str().parse::<u32>().ok())
        .try_fold(0u32, |acc, n| acc.checked_add(n?))
        .filter(|&total| total > 0)
}

pub fn parse_page(title: &str, text: &str) -> PageDrill {
    let title = title.trim();
    let drill_name = (!title.is_empty()).then(|| title.to_string());

    let player_format = capture_trimmed(&PLAYER_FORMAT, title)
        .or_else(|| capture_trimmed(&PLAYER_FORMAT, text));
    let participant_count = player_format
        .as_deref()
        .and_then(format_participants)
        .and_then(plausible_count)
        .or_else(|| first_match(PARTICIPANT_RULES, text).and_then(|(_, n)| plausible_count(n)));

    PageDrill {
        drill_name,
        objective: labelled_block(text, &OBJECTIVE_LABEL, BlockEnd::NextLabel),
        organization: labelled_block(text, &ORGANIZATION_LABEL, BlockEnd::NextLabel),
        player_actions: labelled_block(text, &ACTIONS_LABEL, BlockEnd::NextLabel),
        coaching_points: labelled_block(text, &COACHING_LABEL, BlockEnd::NextLabel),
        duration: capture_trimmed(&DURATION, text),
        age_group: capture_trimmed(&AGE_GROUP, text),
        field_size: capture_trimmed(&FIELD, text),
        player_format,
        participant_count,
    }
}

impl PageDrill {
    /// Section names that were found, for reporting
    pub fn found_sections(&self) -> Vec<&'static str> {
        let fields = [
            ("drill_name", self.drill_name.is_some()),
            ("objective", self.objective.is_some()),
            ("organization", self.organization.is_some()),
            ("player_actions", self.player_actions.is_some()),
            ("coaching_points", self.coaching_points.is_some()),
            ("duration", self.duration.is_some()),
            ("age_group", self.age_group.is_some()),
            ("field_size", self.field_size.is_some()),
            ("player_format", self.player_format.is_some()),
        ];
        fields.iter().filter(|(_, found)| *found).map(|(name, _)| *name).collect()
    }

    /// Player actions as separate sentences
    pub fn player_action_list(&self) -> Vec<String> {
        self.player_actions
            .as_deref()
            .map(|block| {
                SENTENCE_SPLIT
                    .split(block)
                    .map(|s| s.trim().trim_end_matches('.').trim())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Age group tag such as `"U12"`; the page's own value wins over `fallback`
    pub fn age_group_tag(&self, fallback: &str) -> String {
        self.age_group
            .as_deref()
            .map(|a| a.split_whitespace().collect::<String>().to_uppercase())
            .filter(|a| a.starts_with('U') && a.len() > 1)
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Bridge into the regular pipeline; missing sections take the usual defaults
    pub fn to_parsed_drill(&self, fallback_age_group: &str, week: u32, theme: &str) -> ParsedDrill {
        let field_size = self
            .field_size
            .as_deref()
            .and_then(|f| first_match(FIELD_SIZE_RULES, f).map(|(_, s)| s))
            .unwrap_or(FieldSize::Custom);
        let duration_minutes = self
            .duration
            .as_deref()
            .and_then(|d| NUMBER.find(d))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(DEFAULT_DURATION_MINUTES);
        let mut parsed = ParsedDrill::with_defaults(&self.age_group_tag(fallback_age_group), week, theme);

        parsed.name = self.drill_name.clone().unwrap_or_else(|| UNNAMED_DRILL.to_string());
        parsed.setup_description = self.organization.clone().unwrap_or_default();
        parsed.coaching_points = self.coaching_points.as_deref().map(split_points).unwrap_or_default();
        parsed.objective = self.objective.clone().unwrap_or_default();
        if let Some(count) = self.participant_count {
            parsed.participant_count = count;
        }
        parsed.field_size = field_size;
        parsed.duration_minutes = duration_minutes;
        parsed.category = categorize(theme);
        parsed
    }
}
