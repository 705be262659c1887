//! Poem-line records stored in the [`Poem`](super::Poem) arena.

/// Index of a record in the poem arena. Index 0 is always the Beginning sentinel.
pub type LineId = usize;

/// Which windowing rule a record follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Sentinel before the first line; holds the placeholder text
    Beginning,
    /// One physical line
    Single,
    /// A fixed-size bundle of physical lines, no overlap with its neighbours
    Grouped,
    /// A whole subtitle-delimited section, recited in one go
    Section,
}

/// One position in the poem
#[derive(Debug, Clone)]
pub struct PoemLine {
    pub kind: LineKind,
    /// Physical lines covered by this position (the placeholder for Beginning)
    pub text: Vec<String>,
    /// One subtitle per physical line; exactly one for a Section; none for Beginning
    pub subtitles: Vec<String>,
    pub seq: usize,
    /// 1-based index of the first physical line (0 for Beginning)
    pub start_index: usize,
    pub predecessor: LineId,
    pub successor: Option<LineId>,
}

impl PoemLine {
    pub(crate) fn beginning(placeholder: &str) -> Self {
        Self {
            kind: LineKind::Beginning,
            text: vec![placeholder.to_string()],
            subtitles: Vec::new(),
            seq: 0,
            start_index: 0,
            predecessor: 0,
            successor: None,
        }
    }

    /// Create a record following `predecessor` (stored at `predecessor_id`).
    pub(crate) fn after(
        predecessor: &PoemLine,
        predecessor_id: LineId,
        kind: LineKind,
        text: Vec<String>,
        subtitles: Vec<String>,
    ) -> Self {
        let start_index = match kind {
            LineKind::Single | LineKind::Beginning => predecessor.start_index + 1,
            LineKind::Grouped | LineKind::Section => {
                predecessor.start_index + predecessor.text.len()
            }
        };

        Self {
            kind,
            text,
            subtitles,
            seq: predecessor.seq + 1,
            start_index,
            predecessor: predecessor_id,
            successor: None,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.iter().map(String::as_str)
    }

    /// The section heading; empty for anything but a Section.
    pub fn section_subtitle(&self) -> &str {
        match self.kind {
            LineKind::Section => self.subtitles.first().map_or("", String::as_str),
            LineKind::Beginning | LineKind::Single | LineKind::Grouped => "",
        }
    }
}
