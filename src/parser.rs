//! # Automatic Parser
//!
//! Splits cleansed lines written in the inline-title convention into a title,
//! the verses, and the subtitle each verse falls under.
//!
//! ## Convention
//! - The first line is the title
//! - A line containing the caesura token (e.g. `**` between hemistichs) is a verse
//! - Any other line is a subtitle header for the verses that follow it
//!
//! ## Example
//! ```rust
//! use arlpcg::parse_automatic;
//!
//! let lines: Vec<String> = ["Title", "1. a ** b", "Chapter", "2. c ** d"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let poem = parse_automatic(&lines, "**");
//!
//! assert_eq!(poem.title, "Title");
//! assert_eq!(poem.verses, vec!["1. a ** b", "2. c ** d"]);
//! assert_eq!(poem.subtitles, vec!["", "Chapter"]);
//! ```

use serde::Serialize;

/// A poem split into verses, each tagged with the subtitle it falls under
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedPoem {
    pub title: String,
    pub verses: Vec<String>,
    /// Parallel to `verses`; empty string before the first header
    pub subtitles: Vec<String>,
}

impl ParsedPoem {
    /// Subtitle of verse `i`; the empty string when none was recorded.
    pub fn subtitle(&self, i: usize) -> &str {
        self.subtitles.get(i).map_or("", String::as_str)
    }

    /// Maximal runs of consecutive verses sharing a subtitle, in order.
    pub fn sections(&self) -> Vec<(&str, &[String])> {
        let mut sections = Vec::new();
        let mut start = 0;

        for i in 1..self.verses.len() {
            if self.subtitle(i) != self.subtitle(start) {
                sections.push((self.subtitle(start), &self.verses[start..i]));
                start = i;
            }
        }
        if start < self.verses.len() {
            sections.push((self.subtitle(start), &self.verses[start..]));
        }

        sections
    }
}

/// Parse cleansed lines using `caesura` to tell verses from subtitle headers.
pub fn parse_automatic(lines: &[String], caesura: &str) -> ParsedPoem {
    let Some((title, body)) = lines.split_first() else {
        return ParsedPoem::default();
    };

    let mut poem = ParsedPoem {
        title: title.clone(),
        ..ParsedPoem::default()
    };
    let mut current_subtitle = String::new();

    for line in body {
        if line.contains(caesura) {
            poem.verses.push(line.clone());
            poem.subtitles.push(current_subtitle.clone());
        } else {
            current_subtitle = line.clone();
        }
    }

    poem
}
