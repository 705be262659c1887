//! # Media Distribution
//!
//! Decides which media files go on which note, and formats stored media file
//! names as the markup the host renders (`<img>` for pictures, `[sound:…]`
//! for everything else).

use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// How the media list is spread across generated notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaImportMode {
    /// Every note gets the whole list
    #[default]
    Bulk,
    /// One file per note, following the sampling step
    OneForEachNote,
    /// As many files as the note has lines to recite
    ByReciteLines,
}

/// Extensions the host shows as images
const PICTURE_EXTENSIONS: [&str; 9] = ["jpg", "jpeg", "png", "tif", "tiff", "gif", "svg", "webp", "ico"];

/// Pick the media for one note.
///
/// `offset` is where this note's share starts and `count` how many items
/// `ByReciteLines` takes. Ranges past the end of the list are clipped.
pub fn choose_media(media: &[String], mode: MediaImportMode, offset: usize, count: usize) -> &[String] {
    let count = match mode {
        MediaImportMode::Bulk => return media,
        MediaImportMode::OneForEachNote => 1,
        MediaImportMode::ByReciteLines => count,
    };

    let start = offset.min(media.len());
    let end = offset.saturating_add(count).min(media.len());
    if end - start < count && !media.is_empty() {
        warn!(
            "Only {} of {} media files available from offset {}",
            end - start,
            count,
            offset
        );
    }
    &media[start..end]
}

/// Markup for a media file already stored in the host's media folder.
pub fn media_link(file_name: &str) -> String {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if PICTURE_EXTENSIONS.contains(&extension.as_str()) {
        format!("<img src=\"{}\">", urlencoding::encode(file_name))
    } else {
        format!("[sound:{}]", escape_html(file_name))
    }
}

pub fn media_links(file_names: &[String]) -> Vec<String> {
    file_names.iter().map(|name| media_link(name)).collect()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
