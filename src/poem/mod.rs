//! # Poem-Line Graph
//!
//! The chain of poem positions that notes are generated from.
//!
//! ## Purpose
//! Each position knows its neighbours, so it can answer how the poem reads
//! around it: which lines come before it (the context shown on the card),
//! which lines follow it (what the learner recites), and which subtitles lead
//! up to it.
//!
//! ## Structure
//! ```text
//! Poem
//!   └── Vec<PoemLine>   (arena, index = LineId)
//!         [0] Beginning ─▶ [1] ─▶ [2] ─▶ ... ─▶ [n]
//!                       ◀─     ◀─     ◀─
//! ```
//! Every record stores its predecessor's index and, once the next record is
//! pushed, its successor's index. The Beginning sentinel is its own
//! predecessor and is never handed out as a [`Position`].
//!
//! ## Kinds
//! - `Single` - one physical line
//! - `Grouped` - several physical lines treated as one position
//! - `Section` - a whole subtitle section; its context is the subtitle and it
//!   is always recited in full
//!
//! ## Example
//! ```rust
//! use arlpcg::{poem, Config};
//!
//! let lines: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
//! let poem = poem::from_text_lines(&Config::default(), &lines, 1);
//!
//! let third = poem.position(2).unwrap();
//! assert_eq!(third.context(2), vec!["a", "b"]);
//! assert_eq!(third.recite(3), vec!["c"]);
//! assert_eq!(third.prompt(3), None);
//! ```
//!
//! ## Related Modules
//! - `cleanse` / `parser` - produce the lines the chain is built from
//! - `notes` - turns positions into note fields
//! - `store` - persists the whole poem text

mod build;
mod line;
mod window;


pub use build::{by_section, from_parsed, from_text_lines};
pub use line::{LineId, LineKind, PoemLine};
pub use window::Position;

/// Arena holding the Beginning sentinel followed by every position in order
#[derive(Debug, Clone)]
pub struct Poem {
    lines: Vec<PoemLine>,
}

impl Poem {
    pub(crate) fn new(beginning_line: &str) -> Self {
        Self {
            lines: vec![PoemLine::beginning(beginning_line)],
        }
    }

    /// Append a position after the current last one and link it in.
    pub(crate) fn push(&mut self, kind: LineKind, text: Vec<String>, subtitles: Vec<String>) -> LineId {
        let predecessor_id = self.lines.len() - 1;
        let id = self.lines.len();
        let line = PoemLine::after(&self.lines[predecessor_id], predecessor_id, kind, text, subtitles);
        self.lines.push(line);
        self.lines[predecessor_id].successor = Some(id);
        id
    }

    pub(crate) fn record(&self, id: LineId) -> &PoemLine {
        &self.lines[id]
    }

    /// Number of positions, not counting the sentinel.
    pub fn len(&self) -> usize {
        self.lines.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn beginning(&self) -> &PoemLine {
        &self.lines[0]
    }

    /// Position by 0-based index.
    pub fn position(&self, index: usize) -> Option<Position<'_>> {
        (index < self.len()).then(|| Position::new(self, index + 1))
    }

    pub fn positions(&self) -> impl Iterator<Item = Position<'_>> {
        (1..self.lines.len()).map(move |id| Position::new(self, id))
    }

    /// Every physical line of every position, in order.
    pub fn physical_lines(&self) -> impl Iterator<Item = &str> {
        self.lines[1..].iter().flat_map(|line| line.lines())
    }
}
