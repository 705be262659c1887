//! # Collection Seams
//!
//! The generator never talks to a card database directly. It needs:
//!
//! - a [`Collection`] that can look up a note type and register a note
//! - a note factory building a fresh [`NoteRecord`] for that note type
//!
//! [`Note`] and [`MemoryCollection`] are in-memory implementations that check
//! field names against the note type, the way a real collection does.

use crate::error::{LpcgError, Result};
use crate::model::NoteType;
use serde::Serialize;
use std::collections::BTreeMap;

pub type DeckId = i64;

/// A note whose fields are addressed by name
pub trait NoteRecord {
    fn get(&self, field: &str) -> Option<&str>;

    /// Set a field. Fails with [`LpcgError::MissingField`] when the note type
    /// has no field of that name.
    fn set(&mut self, field: &str, value: String) -> Result<()>;

    fn remove(&mut self, field: &str) -> Option<String>;

    /// Whether the note type defines a field of this name, set or not.
    fn contains(&self, field: &str) -> bool;

    /// Whether the field currently holds a value.
    fn has_value(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    fn tags_mut(&mut self) -> &mut Vec<String>;

    fn set_deck(&mut self, deck_id: DeckId);
}

/// Where generated notes end up
pub trait Collection {
    type Note: NoteRecord;

    fn note_type(&self, name: &str) -> Option<&NoteType>;

    fn add_note(&mut self, note: Self::Note) -> Result<()>;
}

/// An in-memory note checked against its note type's fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub note_type: String,
    #[serde(skip)]
    schema: Vec<String>,
    pub fields: BTreeMap<String, String>,
    pub tags: Vec<String>,
    pub deck_id: Option<DeckId>,
}

impl Note {
    pub fn new(note_type: &NoteType) -> Self {
        Self {
            note_type: note_type.name.clone(),
            schema: note_type.fields.clone(),
            fields: BTreeMap::new(),
            tags: Vec::new(),
            deck_id: None,
        }
    }

    /// Note factory with the `(collection, note type)` shape the generator expects.
    pub fn factory<C>(_collection: &C, note_type: &NoteType) -> Self {
        Self::new(note_type)
    }

    /// Field value, or the empty string when unset.
    pub fn field(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }
}

impl NoteRecord for Note {
    fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    fn set(&mut self, field: &str, value: String) -> Result<()> {
        if !self.contains(field) {
            return Err(LpcgError::MissingField {
                field: field.to_string(),
            });
        }
        self.fields.insert(field.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, field: &str) -> Option<String> {
        self.fields.remove(field)
    }

    fn contains(&self, field: &str) -> bool {
        self.schema.iter().any(|f| f == field)
    }

    fn tags_mut(&mut self) -> &mut Vec<String> {
        &mut self.tags
    }

    fn set_deck(&mut self, deck_id: DeckId) {
        self.deck_id = Some(deck_id);
    }
}

/// A collection that keeps added notes in a list
#[derive(Debug, Clone, Default)]
pub struct MemoryCollection {
    note_types: Vec<NoteType>,
    pub notes: Vec<Note>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A collection that already knows the ARLPCG note type.
    pub fn with_arlpcg() -> Self {
        let mut collection = Self::new();
        collection.add_note_type(NoteType::arlpcg());
        collection
    }

    /// Register a note type, replacing one of the same name.
    pub fn add_note_type(&mut self, note_type: NoteType) {
        self.note_types.retain(|t| t.name != note_type.name);
        self.note_types.push(note_type);
    }
}

impl Collection for MemoryCollection {
    type Note = Note;

    fn note_type(&self, name: &str) -> Option<&NoteType> {
        self.note_types.iter().find(|t| t.name == name)
    }

    fn add_note(&mut self, note: Note) -> Result<()> {
        if self.note_type(&note.note_type).is_none() {
            return Err(LpcgError::Collection(format!(
                "unknown note type '{}'",
                note.note_type
            )));
        }
        self.notes.push(note);
        Ok(())
    }
}
