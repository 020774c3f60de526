//! Text → drill field extraction
//!
//! - `sections`: one session-plan section → [`ParsedDrill`](crate::model::ParsedDrill)
//! - `page`: a single drill web page → [`PageDrill`]
//! - `source`: file-name metadata and section splitting
//! - `rules`: the ordered rule lists both parsers are built from

pub mod page;
pub mod rules;
pub mod sections;
pub mod source;

pub use page::{parse_page, PageDrill};
pub use rules::{first_match, KeywordRule, Rule};
pub use sections::{categorize, parse_drill};
pub use source::{split_sections, SourceLabel};
