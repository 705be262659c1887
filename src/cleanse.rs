//! # Text Cleanser
//!
//! Turns the raw text typed into the poem editor into the flat list of lines
//! that notes are built from.
//!
//! ## Rules
//! - Leading tabs/spaces record one level of indentation, however much there is
//! - Lines starting with `#` are comments and are dropped entirely
//! - A trailing `# comment` is stripped from any other line
//! - A run of blank lines between two lines is one stanza break; blank lines
//!   at the start or end are ignored
//! - The last line of a stanza gets the end-of-stanza marker, the last line of
//!   the poem gets the end-of-text marker instead
//! - Indented lines are wrapped in `<span class="indent">…</span>`
//!
//! ## Example
//! ```rust
//! use arlpcg::{cleanse_text, Config};
//!
//! let config = Config::with_markers("X", "Y");
//! let lines = cleanse_text("One\nTwo\n\n\n\tThree # note", &config);
//! assert_eq!(lines, vec![
//!     "One".to_string(),
//!     "TwoY".to_string(),
//!     "<span class=\"indent\">ThreeX</span>".to_string(),
//! ]);
//! ```

use crate::config::Config;
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_INDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]+").unwrap());
static TRAILING_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*#.*$").unwrap());

/// A non-blank line on its way through the cleanser
#[derive(Debug)]
struct SourceLine {
    text: String,
    indented: bool,
    ends_stanza: bool,
}

impl SourceLine {
    /// `None` for blank lines, which only matter as stanza separators.
    /// Comment lines are filtered out before this is called.
    fn read(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let text = TRAILING_COMMENT.replace(trimmed, "").into_owned();
        Some(Self {
            text,
            indented: LEADING_INDENT.is_match(raw),
            ends_stanza: false,
        })
    }

    fn render(self, marker: &str) -> String {
        if self.indented {
            format!("<span class=\"indent\">{}{}</span>", self.text, marker)
        } else {
            format!("{}{}", self.text, marker)
        }
    }
}

fn is_comment(raw: &str) -> bool {
    raw.trim_start().starts_with('#')
}

/// Cleanse raw poem text into the ordered lines used for note generation.
///
/// Whitespace-only input produces an empty list.
pub fn cleanse_text(raw: &str, config: &Config) -> Vec<String> {
    let mut lines: Vec<SourceLine> = Vec::new();
    let mut pending_break = false;

    for raw_line in raw.lines().filter(|l| !is_comment(l)) {
        match SourceLine::read(raw_line) {
            None => pending_break = !lines.is_empty(),
            Some(line) => {
                if pending_break {
                    if let Some(previous) = lines.last_mut() {
                        previous.ends_stanza = true;
                    }
                    pending_break = false;
                }
                lines.push(line);
            }
        }
    }

    let last = lines.len().saturating_sub(1);
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let marker = if i == last {
                config.end_of_text_marker.as_str()
            } else if line.ends_stanza {
                config.end_of_stanza_marker.as_str()
            } else {
                ""
            };
            line.render(marker)
        })
        .collect()
}
