use serde::{Deserialize, Serialize};

/// Location of the first case-insensitive occurrence of a query inside a
/// text body, expressed in characters of the original text.
///
/// Both fields count characters, never bytes: slicing must happen against
/// the original string, and case folding can change how many storage units
/// a character occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    /// Characters before the match.
    pub prefix_chars: usize,
    /// Characters covered by the match.
    pub match_chars: usize,
}

/// Find the first case-insensitive occurrence of `query` in `text`.
///
/// Returns `None` for an empty query (callers render plain text) and when
/// the lowered query does not occur in the lowered text. A returned span
/// always partitions the original text: `prefix + match + suffix == text`
/// with original casing preserved.
pub fn locate(text: &str, query: &str) -> Option<MatchSpan> {
    if query.is_empty() {
        return None;
    }
    let needle = query.to_lowercase();

    // Lower the haystack one character at a time, recording the byte offset
    // in the lowered string where each original character begins. Folding
    // can widen a character (U+0130 lowers to "i" + combining dot), so
    // lowered offsets cannot be reused against the original directly.
    let mut lowered = String::with_capacity(text.len());
    let mut starts: Vec<usize> = Vec::with_capacity(text.len() + 1);
    for ch in text.chars() {
        starts.push(lowered.len());
        for low in ch.to_lowercase() {
            lowered.push(low);
        }
    }
    starts.push(lowered.len());

    let mut from = 0;
    while let Some(found) = lowered[from..].find(&needle) {
        let start = from + found;
        let end = start + needle.len();
        // Accept the occurrence only if both ends land on original
        // character boundaries; a hit inside a widened fold cannot be
        // sliced out of the original text.
        if let (Ok(start_char), Ok(end_char)) =
            (starts.binary_search(&start), starts.binary_search(&end))
        {
            return Some(MatchSpan {
                prefix_chars: start_char,
                match_chars: end_char - start_char,
            });
        }
        from = start + lowered[start..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// Split `text` into `(prefix, match, suffix)` around a span produced by
/// [`locate`] on the same text.
pub fn split_at(text: &str, span: MatchSpan) -> (&str, &str, &str) {
    let start = byte_offset(text, span.prefix_chars);
    let end = start + byte_offset(&text[start..], span.match_chars);
    (&text[..start], &text[start..end], &text[end..])
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}
