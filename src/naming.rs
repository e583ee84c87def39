//! Filename conventions for content sources.
//!
//! A source whose file stem looks like `YYYY-MM-DD-slug` is a blog entry and
//! gets a dated output path (`2012/01/01/slug.html`). Only the shape of the
//! date is checked here, never the calendar.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

/// Date and slug pulled out of a blog-style file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogEntry {
    pub year: String,
    pub month: String,
    pub day: String,
    pub slug: String,
}

impl BlogEntry {
    /// `YYYY-MM-DD`, exactly as written in the filename.
    pub fn date_string(&self) -> String {
        format!("{}-{}-{}", self.year, self.month, self.day)
    }

    /// The calendar date, if the digits name a real day.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date_string(), "%Y-%m-%d").ok()
    }

    /// Relative path segments `year/month/day/slug`, no leading slash.
    pub fn dated_path(&self) -> String {
        format!("{}/{}/{}/{}", self.year, self.month, self.day, self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    Page,
    Blog(BlogEntry),
}

fn blog_entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{4})-(\d{2})-(\d{2})-(.+)$").expect("blog entry pattern is valid")
    })
}

/// Classify a file stem (no directory, no extension).
pub fn classify(stem: &str) -> FileKind {
    match blog_entry_pattern().captures(stem) {
        Some(caps) => FileKind::Blog(BlogEntry {
            year: caps[1].to_string(),
            month: caps[2].to_string(),
            day: caps[3].to_string(),
            slug: caps[4].to_string(),
        }),
        None => FileKind::Page,
    }
}

/// Hyphens become spaces and the first character is uppercased; the rest
/// keep their case.
pub fn deduce_title(slug: &str) -> String {
    let spaced = slug.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
