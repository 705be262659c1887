//! Construction strategies for the poem chain.
//!
//! - [`from_text_lines`] - custom import, one position per line or per group
//! - [`from_parsed`] - automatic import, like custom but positions carry subtitles
//! - [`by_section`] - one position per subtitle section

use super::line::LineKind;
use super::Poem;
use crate::config::Config;
use crate::parser::ParsedPoem;
use tracing::debug;

/// Build from cleansed lines. `group_lines > 1` bundles that many lines into
/// each position; the last bundle holds whatever is left over.
pub fn from_text_lines(config: &Config, lines: &[String], group_lines: usize) -> Poem {
    let subtitles = vec![String::new(); lines.len()];
    build_grouped(config, lines, &subtitles, group_lines)
}

/// Build from an automatically parsed poem, aligning each verse with its subtitle.
pub fn from_parsed(config: &Config, parsed: &ParsedPoem, group_lines: usize) -> Poem {
    let subtitles: Vec<String> = (0..parsed.verses.len())
        .map(|i| parsed.subtitle(i).to_string())
        .collect();
    build_grouped(config, &parsed.verses, &subtitles, group_lines)
}

/// Build one Section position per run of verses sharing a subtitle.
pub fn by_section(config: &Config, parsed: &ParsedPoem) -> Poem {
    let mut poem = Poem::new(&config.beginning_line);
    for (subtitle, verses) in parsed.sections() {
        poem.push(LineKind::Section, verses.to_vec(), vec![subtitle.to_string()]);
    }
    debug!("Built {} sections from {} verses", poem.len(), parsed.verses.len());
    poem
}

fn build_grouped(config: &Config, verses: &[String], subtitles: &[String], group_lines: usize) -> Poem {
    let mut poem = Poem::new(&config.beginning_line);

    if group_lines <= 1 {
        for (verse, subtitle) in verses.iter().zip(subtitles) {
            poem.push(LineKind::Single, vec![verse.clone()], vec![subtitle.clone()]);
        }
    } else {
        for (group, group_subtitles) in verses.chunks(group_lines).zip(subtitles.chunks(group_lines)) {
            poem.push(LineKind::Grouped, group.to_vec(), group_subtitles.to_vec());
        }
    }

    debug!(
        "Built {} positions from {} lines (group size {})",
        poem.len(),
        verses.len(),
        group_lines.max(1)
    );
    poem
}
