//! # Note Type
//!
//! The `ARLPCG 1.0` note type: its name, its fields in order, and the names
//! the generator writes into. Templates, styling and migrations belong to the
//! host; this is only the shape notes must have.

use serde::Serialize;

/// Name the generator looks the note type up by.
pub const NOTE_TYPE_NAME: &str = "ARLPCG 1.0";
/// Version of the note type the field names were written against.
pub const NOTE_TYPE_VERSION: &str = "1.3.0";

pub const FIELD_VERSES: &str = "الأبيات";
pub const FIELD_CONTEXT: &str = "السياق";
pub const FIELD_TITLE: &str = "العنوان";
pub const FIELD_SUBTITLE: &str = "الباب";
pub const FIELD_SEQUENCE: &str = "الرقم";
pub const FIELD_PROMPT: &str = "محث";
pub const FIELD_MEDIA: &str = "وسائط";
pub const FIELD_EXTRA: &str = "إضافي";
pub const FIELD_CURRENT: &str = "الحالي";
/// Holds a reference to the poem text file so the host keeps it with the deck
pub const FIELD_POEM_REFERENCE: &str = "خاص (لا تعدل)";

/// Fields of the note type, in order
pub const FIELDS: [&str; 10] = [
    FIELD_VERSES,
    FIELD_CONTEXT,
    FIELD_TITLE,
    FIELD_SUBTITLE,
    FIELD_SEQUENCE,
    FIELD_PROMPT,
    FIELD_MEDIA,
    FIELD_EXTRA,
    FIELD_CURRENT,
    FIELD_POEM_REFERENCE,
];

/// Fields the generator may write to
pub const GENERATED_FIELDS: [&str; 9] = [
    FIELD_TITLE,
    FIELD_SUBTITLE,
    FIELD_SEQUENCE,
    FIELD_CONTEXT,
    FIELD_VERSES,
    FIELD_MEDIA,
    FIELD_CURRENT,
    FIELD_POEM_REFERENCE,
    FIELD_PROMPT,
];

/// A note type as the host collection knows it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteType {
    pub name: String,
    pub fields: Vec<String>,
    pub sort_field: String,
    pub version: String,
}

impl NoteType {
    /// The note type this crate generates notes for.
    pub fn arlpcg() -> Self {
        Self {
            name: NOTE_TYPE_NAME.to_string(),
            fields: FIELDS.iter().map(|f| f.to_string()).collect(),
            sort_field: FIELD_SEQUENCE.to_string(),
            version: NOTE_TYPE_VERSION.to_string(),
        }
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }

    /// Generated fields this note type lacks, in the order they are written.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        GENERATED_FIELDS
            .iter()
            .copied()
            .filter(|f| !self.has_field(f))
            .collect()
    }
}
