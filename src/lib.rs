pub mod cleanse;
pub mod collection;
pub mod config;
pub mod error;
pub mod media;
pub mod model;
pub mod notes;
pub mod parser;
pub mod poem;
pub mod store;

pub use cleanse::cleanse_text;
pub use collection::{Collection, DeckId, MemoryCollection, Note, NoteRecord};
pub use config::Config;
pub use error::*;
pub use media::{media_link, media_links, MediaImportMode};
pub use model::NoteType;
pub use notes::{add_notes, populate_note, GenerationRequest, ImportMode, NoteSettings};
pub use parser::{parse_automatic, ParsedPoem};
pub use poem::{Poem, Position};
pub use store::{MediaFolderStore, MemoryStore, PoemStore};

/// Generate the notes for a request without a host collection.
/// The notes are returned in order; no poem file is written.
pub fn generate_notes(config: &Config, request: &GenerationRequest) -> Result<Vec<Note>> {
    let mut collection = MemoryCollection::with_arlpcg();
    add_notes(&mut collection, config, Note::factory, None, request)?;
    Ok(collection.notes)
}
