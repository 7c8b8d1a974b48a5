//! Caption rendering: turns one raw caption into the HTML fragment shown
//! beneath its image in the gallery lightbox.
//!
//! The stages run in a fixed order. The body text is typography-normalized,
//! then escaped, then each inline footnote marker is replaced with
//! superscript markup (with a hover tooltip when the footnote is defined),
//! and finally remaining newlines become `<br />`. Footnote text follows
//! the same normalize-then-escape order and additionally passes through the
//! term linker, which is why escaping must happen before any markup is
//! spliced in.

use crate::escape::escape_html;
use crate::footnote::{self, Footnotes};
use crate::linker::{link_terms, LinkRule};
use crate::typography::smart_punctuation;
use serde::Deserialize;

/// A literal prefix replacement applied to raw captions before any other
/// processing. The upstream feed occasionally ships captions with a known
/// bad opening fragment; this table patches them without touching the
/// formatting logic.
#[derive(Clone, Debug, Deserialize)]
pub struct Replacement {
    /// The literal opening fragment to look for.
    pub prefix: String,

    /// The text that replaces the matched fragment.
    pub replacement: String,
}

/// Applies each replacement rule in order to the start of the caption.
/// Rules that do not match the current prefix leave the caption unchanged.
pub fn apply_replacements(caption: &str, replacements: &[Replacement]) -> String {
    let mut caption = caption.to_owned();
    for rule in replacements {
        if caption.starts_with(&rule.prefix) {
            let mut replaced = rule.replacement.clone();
            replaced.push_str(&caption[rule.prefix.len()..]);
            caption = replaced;
        }
    }
    caption
}

/// Renders a raw caption to its HTML fragment: footnotes are extracted from
/// the trailing definition lines, the body is normalized and escaped, each
/// `[FN<n>]` marker becomes a numbered superscript (interactive when the
/// footnote is defined, plain when dangling), and newlines become `<br />`.
pub fn to_html(caption: &str, links: &[LinkRule]) -> String {
    let (body, notes) = footnote::split(caption);
    let body = escape_html(&smart_punctuation(&body));

    let mut out = String::with_capacity(body.len());
    let mut cursor = 0;
    while let Some(marker) = footnote::find_marker(&body, cursor) {
        out.push_str(&body[cursor..marker.start]);
        out.push_str(&reference(marker.number, &notes, links));
        cursor = marker.end;
    }
    out.push_str(&body[cursor..]);

    out.replace('\n', "<br />")
}

// Builds the superscript markup for one marker. A defined footnote gets a
// tooltip span holding its normalized, escaped, link-augmented text; a
// dangling reference renders as the bare number, which upstream captions
// produce often enough that it is tolerated rather than treated as an
// error.
fn reference(number: u32, notes: &Footnotes, links: &[LinkRule]) -> String {
    match notes.get(number) {
        Some(text) => {
            let text = link_terms(&escape_html(&smart_punctuation(text)), links);
            format!(
                "<sup class=\"footnote-reference\">{}\
                 <span class=\"footnote-tooltip\">{}</span></sup>",
                number, text
            )
        }
        None => format!("<sup class=\"footnote-reference\">{}</sup>", number),
    }
}
