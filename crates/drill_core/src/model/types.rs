// 드릴 분류 기본 타입
use serde::{Deserialize, Serialize};
use std::fmt;

/// Drill category, derived from the session theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Technical,
    Possession,
    Shooting,
    Defending,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technical => "Technical",
            Category::Possession => "Possession",
            Category::Shooting => "Shooting",
            Category::Defending => "Defending",
        }
    }

    /// Lower-case tag used in keywords and formation ids
    pub fn tag(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty tier, looked up from the age group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Playing-area size as written in the source text: `"<W>x<H>"` or `"custom"`.
///
/// Serialized as its string form. Anything that does not parse as two
/// integers separated by `x` becomes [`FieldSize::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldSize {
    Grid { width: u32, height: u32 },
    #[default]
    Custom,
}

impl FieldSize {
    pub fn grid(width: u32, height: u32) -> Self {
        FieldSize::Grid { width, height }
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match *self {
            FieldSize::Grid { width, height } => Some((width, height)),
            FieldSize::Custom => None,
        }
    }

    pub fn parse(s: &str) -> Self {
        let mut parts = s.trim().split(['x', 'X']);
        let (Some(w), Some(h), None) = (parts.next(), parts.next(), parts.next()) else {
            return FieldSize::Custom;
        };
        match (w.trim().parse::<u32>(), h.trim().parse::<u32>()) {
            (Ok(width), Ok(height)) => FieldSize::Grid { width, height },
            _ => FieldSize::Custom,
        }
    }
}

impl fmt::Display for FieldSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldSize::Grid { width, height } => write!(f, "{}x{}", width, height),
            FieldSize::Custom => f.write_str("custom"),
        }
    }
}

impl From<String> for FieldSize {
    fn from(s: String) -> Self {
        FieldSize::parse(&s)
    }
}

impl From<&str> for FieldSize {
    fn from(s: &str) -> Self {
        FieldSize::parse(s)
    }
}

impl From<FieldSize> for String {
    fn from(size: FieldSize) -> Self {
        size.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_size_parse() {
        assert_eq!(FieldSize::parse("20x30"), FieldSize::grid(20, 30));
        assert_eq!(FieldSize::parse(" 15 X 10 "), FieldSize::grid(15, 10));
        assert_eq!(FieldSize::parse("custom"), FieldSize::Custom);
        assert_eq!(FieldSize::parse("20x"), FieldSize::Custom);
        assert_eq!(FieldSize::parse("1x2x3"), FieldSize::Custom);
    }

    #[test]
    fn test_field_size_serializes_as_string() {
        let json = serde_json::to_string(&FieldSize::grid(25, 20)).unwrap();
        assert_eq!(json, "\"25x20\"");
        let back: FieldSize = serde_json::from_str("\"custom\"").unwrap();
        assert_eq!(back, FieldSize::Custom);
    }

    #[test]
    fn test_category_tags() {
        assert_eq!(Category::Possession.tag(), "possession");
        assert_eq!(Difficulty::Advanced.to_string(), "advanced");
    }
}
