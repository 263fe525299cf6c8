use serde::{Deserialize, Serialize};
use sightline_types::Color;

use crate::search::{locate, split_at};

/// Fixed foreground painted over the caller-supplied highlight background.
pub const HIGHLIGHT_FG: Color = Color::BLACK;

/// Rendering style of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStyle {
    Plain,
    Highlight { bg: Color, fg: Color },
}

/// Contiguous span of text sharing one rendering style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub style: RunStyle,
}

impl TextRun {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            style: RunStyle::Plain,
        }
    }

    fn highlighted(text: &str, bg: Color) -> Self {
        Self {
            text: text.to_string(),
            style: RunStyle::Highlight {
                bg,
                fg: HIGHLIGHT_FG,
            },
        }
    }
}

/// Render `text` as styled runs with the first case-insensitive occurrence
/// of `query` highlighted on the given background.
///
/// Emits a single plain run when the query is empty or absent. Zero-length
/// prefix/suffix runs are filtered out; downstream renderers may assume
/// every run is non-empty. The one exception is empty `text`, which yields
/// a single empty plain run so callers always receive something to draw.
/// Concatenating the run texts reconstructs `text` exactly.
pub fn render(text: &str, query: &str, highlight: Color) -> Vec<TextRun> {
    let Some(span) = locate(text, query) else {
        return vec![TextRun::plain(text)];
    };

    let (prefix, matched, suffix) = split_at(text, span);
    let mut runs = Vec::with_capacity(3);
    if !prefix.is_empty() {
        runs.push(TextRun::plain(prefix));
    }
    runs.push(TextRun::highlighted(matched, highlight));
    if !suffix.is_empty() {
        runs.push(TextRun::plain(suffix));
    }
    runs
}
