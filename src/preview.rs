//! Preview extraction: a short plain teaser derived from a caption's first
//! sentence, used as thumbnail hover text on the gallery page.

use crate::escape::escape_html;
use crate::footnote;
use crate::typography::smart_punctuation;

/// The longest first sentence shown without truncation, in characters.
const MAX_LENGTH: usize = 120;

/// Truncation length when the first sentence runs over [`MAX_LENGTH`].
const TRUNCATED_LENGTH: usize = 117;

const ELLIPSIS: char = '\u{2026}';

/// Extracts the preview for a caption: footnote markers stripped, text up
/// to (not including) the first `.`, `!`, or `?`, truncated to
/// [`TRUNCATED_LENGTH`] characters with an ellipsis when over-long, or
/// suffixed with an ellipsis when more content follows the first sentence.
/// The result is typography-normalized then escaped; an empty caption
/// yields an empty string.
pub fn extract(caption: &str) -> String {
    let stripped = strip_markers(caption);
    let stripped = stripped.trim();
    if stripped.is_empty() {
        return String::new();
    }

    let (sentence, trailing) = match stripped.find(|c| matches!(c, '.' | '!' | '?')) {
        Some(i) => (&stripped[..i], &stripped[i + 1..]),
        None => (stripped, ""),
    };

    let mut teaser: String;
    if sentence.chars().count() > MAX_LENGTH {
        teaser = sentence.chars().take(TRUNCATED_LENGTH).collect();
        teaser.push(ELLIPSIS);
    } else if !trailing.is_empty() {
        teaser = sentence.to_owned();
        teaser.push(ELLIPSIS);
    } else {
        teaser = sentence.to_owned();
    }

    escape_html(&smart_punctuation(&teaser))
}

// Removes every inline `[FN<digits>]` marker, definitions included; the
// preview never shows footnote apparatus.
fn strip_markers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    while let Some(marker) = footnote::find_marker(text, cursor) {
        out.push_str(&text[cursor..marker.start]);
        cursor = marker.end;
    }
    out.push_str(&text[cursor..]);
    out
}
