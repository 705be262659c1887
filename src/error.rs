//! # Error Types
//!
//! All errors the note generator can surface to its caller.
//!
//! ## Error Types
//! - `MissingField` - the note record has no field with the expected name
//! - `MissingNoteType` - the collection does not know the ARLPCG note type
//! - `Config` - configuration YAML could not be parsed
//! - `PoemStore` - the whole-poem text could not be written
//! - `Encode` - the whole-poem text could not be encoded as JSON
//! - `Collection` - the collection refused to register a note
//!
//! ## Usage
//! ```rust,ignore
//! match add_notes(&mut col, &config, Note::new, None, &request) {
//!     Ok(added) => println!("{added} notes added"),
//!     Err(LpcgError::MissingField { field }) => {
//!         eprintln!("note type is missing the field {field}");
//!     }
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LpcgError>;

#[derive(Error, Debug)]
pub enum LpcgError {
    /// The note record does not define a field the generator writes.
    ///
    /// This happens when the note type in the host collection was edited by
    /// hand. The caller should report which field is missing.
    ///
    /// # Example
    /// ```
    /// # use arlpcg::LpcgError;
    /// let err = LpcgError::MissingField { field: "الرقم".to_string() };
    /// assert_eq!(err.to_string(), "Note type has no field named 'الرقم'");
    /// ```
    #[error("Note type has no field named '{field}'")]
    MissingField { field: String },

    /// The collection has no note type with the requested name.
    #[error("Note type '{0}' not found in collection")]
    MissingNoteType(String),

    /// Invalid configuration.
    ///
    /// # Example
    /// ```
    /// # use arlpcg::LpcgError;
    /// let err = LpcgError::Config("endOfTextMarker: expected a string".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: endOfTextMarker: expected a string");
    /// ```
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Writing the whole-poem text failed.
    #[error("Could not write poem text to {}: {source}", file.display())]
    PoemStore {
        file: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not encode poem text: {0}")]
    Encode(#[from] serde_json::Error),

    /// The collection rejected a note.
    #[error("Could not add note: {0}")]
    Collection(String),
}
