//! # Whole-Poem Persistence
//!
//! Every generated note points at a script file holding the full poem text,
//! so the card templates can show the surrounding lines. This module renders
//! that file and hands it to a [`PoemStore`].
//!
//! The rendered text has one `<p id="arlpcg-text-N">` per physical line, N
//! counting from 1, with nothing between the paragraphs:
//!
//! ```text
//! var ARLPCGText = "<p id=\"arlpcg-text-1\">…</p><p id=\"arlpcg-text-2\">…</p>";
//! ```

use crate::error::{LpcgError, Result};
use crate::poem::Poem;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Characters that cannot appear in a single media-folder file name
static UNSAFE_FILE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).unwrap());

/// Somewhere the whole-poem file can be written
pub trait PoemStore {
    /// Write `contents` under `file_name`, replacing any earlier file of that name.
    fn write_poem(&mut self, file_name: &str, contents: &str) -> Result<()>;
}

/// Name of the poem file notes reference: `_{title}.js`.
///
/// Path separators and other characters a file name cannot hold are replaced
/// by `_`, so the name always stays inside the media folder.
pub fn poem_file_name(title: &str) -> String {
    format!("_{}.js", UNSAFE_FILE_CHARS.replace_all(title, "_"))
}

/// Every physical line of the poem as numbered paragraphs.
pub fn render_whole_poem(poem: &Poem) -> String {
    poem.physical_lines()
        .enumerate()
        .map(|(i, line)| format!("<p id=\"arlpcg-text-{}\">{}</p>", i + 1, line))
        .collect()
}

/// The script assigning the rendered poem to `ARLPCGText`.
pub fn poem_script(poem: &Poem) -> Result<String> {
    let text = serde_json::to_string(&render_whole_poem(poem))?;
    Ok(format!("var ARLPCGText = {text};"))
}

/// Render the poem and write it to `store` as `_{title}.js`.
pub fn save_whole_poem(store: &mut dyn PoemStore, poem: &Poem, title: &str) -> Result<()> {
    let file_name = poem_file_name(title);
    let script = poem_script(poem)?;
    debug!("Saving {} lines of poem text to {}", poem.physical_lines().count(), file_name);
    store.write_poem(&file_name, &script)
}

/// Keeps written files in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub files: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.files.get(file_name).map(String::as_str)
    }
}

impl PoemStore for MemoryStore {
    fn write_poem(&mut self, file_name: &str, contents: &str) -> Result<()> {
        self.files.insert(file_name.to_string(), contents.to_string());
        Ok(())
    }
}

/// Writes poem files into a media folder on disk
#[derive(Debug, Clone)]
pub struct MediaFolderStore {
    dir: PathBuf,
}

impl MediaFolderStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PoemStore for MediaFolderStore {
    fn write_poem(&mut self, file_name: &str, contents: &str) -> Result<()> {
        let file = self.dir.join(file_name);
        let to_error = |source: io::Error| LpcgError::PoemStore {
            file: file.clone(),
            source,
        };

        if Path::new(file_name).file_name() != Some(OsStr::new(file_name)) {
            return Err(to_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "poem file name must not contain a path",
            )));
        }

        match fs::remove_file(&file) {
            Ok(()) => debug!("Replaced existing {}", file.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(to_error(e)),
        }
        fs::write(&file, contents).map_err(to_error)
    }
}
