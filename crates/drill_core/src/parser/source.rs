//! Source documents: file-name metadata and drill section splitting

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Sections this short (chars) are page furniture, not drills
pub const MIN_SECTION_CHARS: usize = 100;
pub const DEFAULT_THEME: &str = "General Training";

static WEEK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)week[- ]?(\d+)").expect("static regex"));
static TRAILING_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+(\d+)$").expect("static regex"));

/// Section headers, tried in order; the first pattern with any match wins
static SPLIT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?:Activity|Drill|Exercise)\s*[#:]?\s*\d+",
        r"(?:ACTIVITY|DRILL|EXERCISE)\s*\d+",
        r"\d+\.\s+[A-Z][A-Za-z\s]+(?:\n|\z)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static regex"))
    .collect()
});

/// Metadata carried by a session-plan file name such as `U10-Scoring-Goals-2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLabel {
    pub age_group: String,
    pub week: u32,
    pub session_theme: String,
    /// Trailing part number (`-1`, `-2`) when the name has one
    pub part: Option<u32>,
}

impl SourceLabel {
    pub fn from_file_stem(stem: &str, age_group: &str) -> Self {
        let week = WEEK
            .captures(stem)
            .and_then(|c| c[1].parse().ok())
            .unwrap_or(1);

        let without_age = if age_group.is_empty() { stem.to_string() } else { stem.replace(age_group, "") };
        let without_week = WEEK.replace_all(&without_age, " ");
        let spaced = without_week.replace(['-', '_'], " ");
        let mut theme = spaced.split_whitespace().collect::<Vec<_>>().join(" ");

        let mut part = None;
        if let Some(caps) = TRAILING_PART.captures(&theme) {
            part = caps[1].parse().ok();
            let cut = caps.get(0).map(|m| m.start()).unwrap_or(theme.len());
            theme.truncate(cut);
        }
        // A bare number left over is a part, not a theme
        if part.is_none() {
            if let Ok(n) = theme.parse::<u32>() {
                part = Some(n);
                theme.clear();
            }
        }
        if theme.is_empty() {
            theme = DEFAULT_THEME.to_string();
        }

        Self { age_group: age_group.to_string(), week, session_theme: theme, part }
    }
}

/// Split a document's pages into drill sections.
///
/// Pages are joined with newlines and cut at section headers; without any
/// header each long-enough page is its own section.
pub fn split_sections(pages: &[String]) -> Vec<String> {
    let full_text = pages.join("\n");

    let starts: Vec<usize> = SPLIT_PATTERNS
        .iter()
        .map(|re| re.find_iter(&full_text).map(|m| m.start()).collect::<Vec<_>>())
        .find(|starts| !starts.is_empty())
        .unwrap_or_default();

    if starts.is_empty() {
        return pages
            .iter()
            .filter(|p| p.chars().count() > MIN_SECTION_CHARS)
            .cloned()
            .collect();
    }

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(full_text.len());
            &full_text[start..end]
        })
        .filter(|s| s.chars().count() > MIN_SECTION_CHARS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_based_label() {
        let label = SourceLabel::from_file_stem("U8-Week-3", "U8");
        assert_eq!(label.week, 3);
        assert_eq!(label.session_theme, DEFAULT_THEME);
        assert_eq!(label.part, None);
    }

    #[test]
    fn test_session_based_label() {
        let label = SourceLabel::from_file_stem("U10-Building-Up-in-Own-Half-2", "U10");
        assert_eq!(label.week, 1);
        assert_eq!(label.session_theme, "Building Up in Own Half");
        assert_eq!(label.part, Some(2));
    }

    #[test]
    fn test_split_on_activity_headers() {
        let body = "x".repeat(120);
        let pages = vec![
            format!("Intro\nActivity 1\n{}", body),
            format!("Activity 2\n{}\nActivity 3\nshort", body),
        ];
        let sections = split_sections(&pages);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].starts_with("Activity 1"));
        assert!(sections[1].starts_with("Activity 2"));
    }

    #[test]
    fn test_split_falls_back_to_pages() {
        let long = "a".repeat(150);
        let pages = vec![long.clone(), "tiny".to_string(), long];
        assert_eq!(split_sections(&pages).len(), 2);
    }
}
