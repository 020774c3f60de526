//! Ordered extraction rules
//!
//! Each field is recovered by a list of named rules tried in priority order;
//! the first rule that yields a value wins.

use once_cell::sync::Lazy;
use regex::Regex;

/// One named extractor in a priority list
#[derive(Clone, Copy)]
pub struct Rule<T> {
    pub name: &'static str,
    extract: fn(&str) -> Option<T>,
}

impl<T> Rule<T> {
    pub const fn new(name: &'static str, extract: fn(&str) -> Option<T>) -> Self {
        Self { name, extract }
    }

    pub fn apply(&self, text: &str) -> Option<T> {
        (self.extract)(text)
    }
}

impl<T> std::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Run `rules` in order, returning the first hit and the rule that produced it
pub fn first_match<T>(rules: &[Rule<T>], text: &str) -> Option<(&'static str, T)> {
    rules.iter().find_map(|rule| rule.apply(text).map(|v| (rule.name, v)))
}

/// Like [`first_match`], but the hit starting earliest in `text` wins.
///
/// Rules yield `(offset, value)`; on equal offsets the earlier rule wins.
pub fn earliest_match<T>(rules: &[Rule<(usize, T)>], text: &str) -> Option<(&'static str, T)> {
    rules
        .iter()
        .filter_map(|rule| rule.apply(text).map(|(at, v)| (at, rule.name, v)))
        .min_by_key(|(at, _, _)| *at)
        .map(|(_, name, v)| (name, v))
}

/// Keyword predicate: matches when the haystack contains any keyword (case-insensitive)
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T: Copy> {
    pub value: T,
    pub keywords: &'static [&'static str],
}

impl<T: Copy> KeywordRule<T> {
    pub fn matches(&self, haystack: &str) -> bool {
        let lower = haystack.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k))
    }
}

pub fn first_keyword<T: Copy>(rules: &[KeywordRule<T>], haystack: &str) -> Option<T> {
    rules.iter().find(|r| r.matches(haystack)).map(|r| r.value)
}

// Capitalized words followed by a colon, e.g. "Coaching Points:" or "Note:"
static LABEL_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[A-Z][A-Za-z]*(?:[ \t]+[A-Za-z()/\-]+){0,3}[ \t]*:").expect("static regex")
});

pub fn is_label_line(line: &str) -> bool {
    LABEL_LINE.is_match(line)
}

/// How a labelled block ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEnd {
    /// Next label-like line
    NextLabel,
    /// Next label-like line or the first blank line
    NextLabelOrBlank,
}

/// Text following the first match of `label` up to the next label-like line.
///
/// `label` must consume the separator after the label token. Returns `None`
/// when the label is absent or the block is empty.
pub fn labelled_block(text: &str, label: &Regex, end: BlockEnd) -> Option<String> {
    let m = label.find(text)?;
    let rest = &text[m.end()..];

    let mut lines = Vec::new();
    for (i, line) in rest.lines().enumerate() {
        // The first line directly follows the label, so it is always content.
        if i > 0 && is_label_line(line) {
            break;
        }
        if end == BlockEnd::NextLabelOrBlank && line.trim().is_empty() {
            break;
        }
        lines.push(line.trim_end());
    }

    let block = lines.join("\n").trim().to_string();
    (!block.is_empty()).then_some(block)
}

/// First capture group of `re`, trimmed and non-empty
pub fn capture_trimmed(re: &Regex, text: &str) -> Option<String> {
    let caps = re.captures(text)?;
    let value = caps.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// [`capture_trimmed`] plus the byte offset where the whole match starts
pub fn capture_at(re: &Regex, text: &str) -> Option<(usize, String)> {
    let caps = re.captures(text)?;
    let start = caps.get(0)?.start();
    let value = caps.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| (start, value.to_string()))
}

/// Two integer capture groups
pub fn capture_pair(re: &Regex, text: &str) -> Option<(u32, u32)> {
    let caps = re.captures(text)?;
    let a = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let b = caps.get(2)?.as_str().parse::<u32>().ok()?;
    Some((a, b))
}
