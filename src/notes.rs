//! # Note Assembly
//!
//! Drives a whole generation run: cleanse the typed text, build the poem
//! chain, sample positions, fill one note per sampled position and hand it to
//! the collection, then save the whole poem text for the card templates.
//!
//! ## Import Modes
//! - `Custom` - every cleansed line is a verse; the caller's title is used
//! - `Automatic` - the text carries its own title and subtitle headers
//! - `BySection` - like `Automatic`, but one note per subtitle section
//!
//! ## Example
//! ```rust
//! use arlpcg::{add_notes, Config, GenerationRequest, MemoryCollection, Note};
//!
//! let mut collection = MemoryCollection::with_arlpcg();
//! let request = GenerationRequest::new("Winter", "One\nTwo\nThree").with_recite_lines(2);
//!
//! let added = add_notes(&mut collection, &Config::default(), Note::factory, None, &request).unwrap();
//! assert_eq!(added, 3);
//! assert_eq!(collection.notes[0].field("محث"), "[...2]");
//! ```

use crate::cleanse::cleanse_text;
use crate::collection::{Collection, DeckId, NoteRecord};
use crate::config::Config;
use crate::error::{LpcgError, Result};
use crate::media::{choose_media, MediaImportMode};
use crate::model::{
    NoteType, FIELD_CONTEXT, FIELD_CURRENT, FIELD_MEDIA, FIELD_POEM_REFERENCE, FIELD_PROMPT,
    FIELD_SEQUENCE, FIELD_SUBTITLE, FIELD_TITLE, FIELD_VERSES, NOTE_TYPE_NAME, NOTE_TYPE_VERSION,
};
use crate::parser::parse_automatic;
use crate::poem::{self, Poem, Position};
use crate::store::{poem_file_name, save_whole_poem, PoemStore};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Where verses, titles and subtitles come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportMode {
    #[default]
    Custom,
    Automatic,
    BySection,
}

/// Everything one generation run needs from the caller
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub title: String,
    pub tags: Vec<String>,
    /// Raw poem text as typed, before cleansing
    pub text: String,
    pub deck_id: DeckId,
    pub context_lines: usize,
    pub group_lines: usize,
    pub recite_lines: usize,
    /// Generate a note for every `step`-th position
    pub step: usize,
    /// Media links, already formatted for the note
    pub media: Vec<String>,
    pub media_mode: MediaImportMode,
    pub mode: ImportMode,
    /// Token separating hemistichs; tells verses from headers in automatic modes
    pub caesura: String,
}

impl GenerationRequest {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tags: Vec::new(),
            text: text.into(),
            deck_id: 1,
            context_lines: 2,
            group_lines: 1,
            recite_lines: 1,
            step: 1,
            media: Vec::new(),
            media_mode: MediaImportMode::Bulk,
            mode: ImportMode::Custom,
            caesura: " ".to_string(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_deck(mut self, deck_id: DeckId) -> Self {
        self.deck_id = deck_id;
        self
    }

    pub fn with_context_lines(mut self, lines: usize) -> Self {
        self.context_lines = lines;
        self
    }

    pub fn with_group_lines(mut self, lines: usize) -> Self {
        self.group_lines = lines;
        self
    }

    pub fn with_recite_lines(mut self, lines: usize) -> Self {
        self.recite_lines = lines;
        self
    }

    /// A step of 0 is treated as 1.
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    pub fn with_media(mut self, media: Vec<String>, mode: MediaImportMode) -> Self {
        self.media = media;
        self.media_mode = mode;
        self
    }

    pub fn with_mode(mut self, mode: ImportMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_caesura(mut self, caesura: impl Into<String>) -> Self {
        self.caesura = caesura.into();
        self
    }

    fn effective_step(&self) -> usize {
        self.step.max(1)
    }
}

/// Settings shared by every note of a run
#[derive(Debug, Clone, Copy)]
pub struct NoteSettings<'a> {
    pub title: &'a str,
    pub tags: &'a [String],
    pub deck_id: DeckId,
    pub context_lines: usize,
    pub recite_lines: usize,
    pub step: usize,
}

fn paragraphs(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("<p>{line}</p>")).collect()
}

/// Fill `note` with the fields testing `position`.
///
/// Tags are replaced, not merged. The prompt field is only written when the
/// position recites more than one line.
pub fn populate_note<N: NoteRecord>(
    position: &Position<'_>,
    note: &mut N,
    settings: &NoteSettings<'_>,
    media: &[String],
) -> Result<()> {
    note.set_deck(settings.deck_id);
    *note.tags_mut() = settings.tags.to_vec();

    let sequence = position.seq().div_ceil(settings.step.max(1));

    note.set(FIELD_TITLE, settings.title.to_string())?;
    note.set(FIELD_SUBTITLE, position.subtitle_trail(settings.context_lines))?;
    note.set(FIELD_SEQUENCE, sequence.to_string())?;
    note.set(FIELD_CONTEXT, paragraphs(&position.context(settings.context_lines)))?;
    note.set(FIELD_VERSES, paragraphs(&position.recite(settings.recite_lines)))?;
    note.set(FIELD_MEDIA, media.concat())?;
    note.set(FIELD_CURRENT, position.start_index().to_string())?;
    note.set(
        FIELD_POEM_REFERENCE,
        format!("<img src=\"{}\">", poem_file_name(settings.title)),
    )?;
    if let Some(prompt) = position.prompt(settings.recite_lines) {
        note.set(FIELD_PROMPT, prompt)?;
    }
    Ok(())
}

/// Generate notes for `request` and add them to `collection`.
///
/// `new_note` builds an empty note of the given note type. When `store` is
/// `None` the whole-poem file is not written. Returns the number of notes
/// added; on error, notes added before the failure stay in the collection.
/// A note type lacking a generated field is rejected before any note is added.
pub fn add_notes<C, F>(
    collection: &mut C,
    config: &Config,
    mut new_note: F,
    store: Option<&mut dyn PoemStore>,
    request: &GenerationRequest,
) -> Result<usize>
where
    C: Collection,
    F: FnMut(&C, &NoteType) -> C::Note,
{
    let lines = cleanse_text(&request.text, config);
    let note_type = collection
        .note_type(NOTE_TYPE_NAME)
        .cloned()
        .ok_or_else(|| LpcgError::MissingNoteType(NOTE_TYPE_NAME.to_string()))?;
    if let Some(field) = note_type.missing_fields().first() {
        return Err(LpcgError::MissingField {
            field: field.to_string(),
        });
    }
    if note_type.version != NOTE_TYPE_VERSION {
        warn!(
            "Note type '{}' is version {}, expected {}",
            note_type.name, note_type.version, NOTE_TYPE_VERSION
        );
    }

    let (title, poem) = build_poem(config, &lines, request);
    info!(
        "Generating notes for '{}' ({:?} mode, {} positions)",
        title,
        request.mode,
        poem.len()
    );

    let mut emit = |position: &Position<'_>, settings: &NoteSettings<'_>, media: &[String]| {
        let mut note = new_note(&*collection, &note_type);
        populate_note(position, &mut note, settings, media)?;
        collection.add_note(note)?;
        debug!(
            "Added note {} (line {}, {} media)",
            position.seq(),
            position.start_index(),
            media.len()
        );
        Ok::<(), LpcgError>(())
    };

    let mut added = 0;
    match request.mode {
        ImportMode::Custom | ImportMode::Automatic => {
            let step = request.effective_step();
            let settings = NoteSettings {
                title: &title,
                tags: &request.tags,
                deck_id: request.deck_id,
                context_lines: request.context_lines,
                recite_lines: request.recite_lines,
                step,
            };
            for position in poem.positions().step_by(step) {
                let media = choose_media(
                    &request.media,
                    request.media_mode,
                    added * step,
                    request.recite_lines,
                );
                emit(&position, &settings, media)?;
                added += 1;
            }
        }
        ImportMode::BySection => {
            let mut media_added = 0;
            for position in poem.positions() {
                let section_lines = position.text().len();
                let settings = NoteSettings {
                    title: &title,
                    tags: &request.tags,
                    deck_id: request.deck_id,
                    context_lines: 0,
                    recite_lines: section_lines,
                    step: 1,
                };
                let media = choose_media(
                    &request.media,
                    request.media_mode,
                    media_added,
                    section_lines,
                );
                media_added += media.len();
                emit(&position, &settings, media)?;
                added += 1;
            }
        }
    }

    if let Some(store) = store {
        save_whole_poem(store, &poem, &title)?;
    }

    info!("Added {} notes for '{}'", added, title);
    Ok(added)
}

/// The title notes carry and the poem chain for the request's import mode.
fn build_poem(config: &Config, lines: &[String], request: &GenerationRequest) -> (String, Poem) {
    match request.mode {
        ImportMode::Custom => (
            request.title.clone(),
            poem::from_text_lines(config, lines, request.group_lines),
        ),
        ImportMode::Automatic => {
            let parsed = parse_automatic(lines, &request.caesura);
            let poem = poem::from_parsed(config, &parsed, request.group_lines);
            (parsed.title, poem)
        }
        ImportMode::BySection => {
            let parsed = parse_automatic(lines, &request.caesura);
            let poem = poem::by_section(config, &parsed);
            (parsed.title, poem)
        }
    }
}
