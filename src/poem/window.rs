//! Context, recitation and subtitle windows around one position.
//!
//! All walks are bounded loops over the arena: at most `lines` steps backward
//! or forward, stopping early at the sentinel or at the end of the chain.

use super::line::{LineId, LineKind, PoemLine};
use super::Poem;

/// A handle to one real position in a [`Poem`] (never the sentinel)
#[derive(Debug, Clone, Copy)]
pub struct Position<'a> {
    poem: &'a Poem,
    id: LineId,
}

impl<'a> Position<'a> {
    pub(super) fn new(poem: &'a Poem, id: LineId) -> Self {
        debug_assert!(id > 0, "the Beginning sentinel is not a position");
        Self { poem, id }
    }

    fn record(&self) -> &'a PoemLine {
        self.poem.record(self.id)
    }

    /// 0-based index among the poem's positions.
    pub fn index(&self) -> usize {
        self.id - 1
    }

    pub fn kind(&self) -> LineKind {
        self.record().kind
    }

    pub fn seq(&self) -> usize {
        self.record().seq
    }

    pub fn start_index(&self) -> usize {
        self.record().start_index
    }

    /// Physical lines covered by this position.
    pub fn text(&self) -> Vec<&'a str> {
        self.record().lines().collect()
    }

    pub fn subtitles(&self) -> &'a [String] {
        &self.record().subtitles
    }

    pub fn predecessor(&self) -> Option<Position<'a>> {
        let id = self.record().predecessor;
        (id > 0).then(|| Position::new(self.poem, id))
    }

    pub fn successor(&self) -> Option<Position<'a>> {
        self.record()
            .successor
            .map(|id| Position::new(self.poem, id))
    }

    /// Lines shown before this position.
    ///
    /// The text of the `lines` previous positions, oldest first, where the
    /// sentinel contributes its placeholder and ends the walk. With `lines == 0`
    /// this is the position's own text. A section's context is its subtitle.
    pub fn context(&self, lines: usize) -> Vec<&'a str> {
        let record = self.record();
        match record.kind {
            LineKind::Section => return vec![record.section_subtitle()],
            LineKind::Beginning | LineKind::Single | LineKind::Grouped if lines == 0 => {
                return record.lines().collect();
            }
            LineKind::Beginning | LineKind::Single | LineKind::Grouped => {}
        }

        let mut window = Vec::with_capacity(lines);
        let mut current = record.predecessor;
        for _ in 0..lines {
            window.push(current);
            let visited = self.poem.record(current);
            if visited.kind == LineKind::Beginning {
                break;
            }
            current = visited.predecessor;
        }

        window
            .into_iter()
            .rev()
            .flat_map(|id| self.poem.record(id).lines())
            .collect()
    }

    /// Lines the learner recites: this position and up to `lines - 1`
    /// following ones, cut short at the end of the poem. A section is always
    /// recited whole.
    pub fn recite(&self, lines: usize) -> Vec<&'a str> {
        let record = self.record();
        let mut recited: Vec<&'a str> = record.lines().collect();
        if record.kind == LineKind::Section {
            return recited;
        }

        let mut next = record.successor;
        for _ in 1..lines {
            let Some(id) = next else { break };
            let following = self.poem.record(id);
            recited.extend(following.lines());
            next = following.successor;
        }
        recited
    }

    /// `[...n]` telling how many lines to recite, or `None` for a single line.
    ///
    /// `n` counts what [`recite`](Self::recite) actually returns, so positions
    /// near the end of the poem ask for fewer lines.
    pub fn prompt(&self, lines: usize) -> Option<String> {
        match self.recite(lines).len() {
            1 => None,
            n => Some(format!("[...{n}]")),
        }
    }

    /// Subtitles leading up to this position as `<p>` fragments.
    ///
    /// Walks the same `lines` predecessors as [`context`](Self::context) and
    /// lists their subtitles chronologically, then this position's own. Empty
    /// subtitles and repeats of the immediately preceding value are skipped.
    /// A section shows its subtitle as context instead, so its trail is empty.
    pub fn subtitle_trail(&self, lines: usize) -> String {
        let record = self.record();
        if record.kind == LineKind::Section {
            return String::new();
        }

        let mut ids = vec![self.id];
        let mut current = record.predecessor;
        for _ in 0..lines {
            let visited = self.poem.record(current);
            if visited.kind == LineKind::Beginning {
                break;
            }
            ids.push(current);
            current = visited.predecessor;
        }

        let mut trail = String::new();
        let mut previous: &str = "";
        for id in ids.into_iter().rev() {
            for subtitle in self.poem.record(id).subtitles.iter().map(String::as_str) {
                if !subtitle.is_empty() && subtitle != previous {
                    trail.push_str(&format!("<p>{subtitle}</p>"));
                }
                previous = subtitle;
            }
        }
        trail
    }
}
