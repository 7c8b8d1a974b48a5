//! Smart typography for caption text: replaces ASCII quote and dash
//! conventions with their typographic Unicode equivalents.
//!
//! The rules run as sequential passes in a fixed order, because later rules
//! must not re-match characters produced by earlier rules:
//!
//! 1. ` -- ` becomes a spaced em dash
//! 2. any remaining `--` becomes a bare em dash
//! 3. a `"` that begins a quotation becomes an opening curly double-quote
//! 4. a `"` that ends a quotation becomes a closing curly double-quote
//! 5. any remaining `"` becomes a closing curly double-quote (ambiguous
//!    cases default to closing)
//! 6. a `'` that begins a quotation becomes an opening curly single-quote
//! 7. any remaining `'` becomes a curly apostrophe (contractions need no
//!    special handling; they fall through to this rule)
//!
//! Captions are not Markdown, so this is implemented in-crate rather than
//! through a Markdown parser's punctuation option; the fallback rule and the
//! rule order are load-bearing for the caption corpus.

const EM_DASH: char = '\u{2014}';
const OPEN_DOUBLE: char = '\u{201C}';
const CLOSE_DOUBLE: char = '\u{201D}';
const OPEN_SINGLE: char = '\u{2018}';
const APOSTROPHE: char = '\u{2019}';

/// Applies the full rule sequence to `text` and returns the normalized
/// string. Text without quotes or doubled hyphens passes through unchanged.
pub fn smart_punctuation(text: &str) -> String {
    let text = text.replace(" -- ", " \u{2014} ");
    let text = text.replace("--", EM_DASH.to_string().as_str());
    let text = replace_quotes(&text, '"', OPEN_DOUBLE, |prev, _| opens_quotation(prev));
    let text = replace_quotes(&text, '"', CLOSE_DOUBLE, |_, next| closes_quotation(next));
    let text = text.replace('"', CLOSE_DOUBLE.to_string().as_str());
    let text = replace_quotes(&text, '\'', OPEN_SINGLE, |prev, _| opens_quotation(prev));
    text.replace('\'', APOSTROPHE.to_string().as_str())
}

/// Returns true when a quote preceded by `prev` begins a quotation:
/// start-of-string, whitespace, or an opening bracket, parenthesis, or
/// brace.
fn opens_quotation(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(c) => c.is_whitespace() || matches!(c, '(' | '[' | '{'),
    }
}

/// Returns true when a quote followed by `next` ends a quotation:
/// end-of-string, whitespace, sentence punctuation, or a closing bracket,
/// parenthesis, or brace.
fn closes_quotation(next: Option<char>) -> bool {
    match next {
        None => true,
        Some(c) => {
            c.is_whitespace()
                || matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | ')' | ']' | '}')
        }
    }
}

// One left-to-right pass replacing `from` with `to` wherever the boundary
// predicate holds for the characters on either side.
fn replace_quotes<F>(text: &str, from: char, to: char, boundary: F) -> String
where
    F: Fn(Option<char>, Option<char>) -> bool,
{
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let replaced = if c == from && boundary(prev, chars.peek().copied()) {
            to
        } else {
            c
        };
        out.push(replaced);
        prev = Some(replaced);
    }
    out
}
