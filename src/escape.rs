//! HTML escaping for caption and footnote text.
//!
//! Escaping runs after typographic normalization and before any markup is
//! injected (footnote superscripts, term links), so the injected markup is
//! never itself escaped. Escaping is deliberately not idempotent: applying
//! it twice double-escapes, so each pipeline stage applies it exactly once.

/// Escapes `&`, `<`, `>`, and `"` to their entity forms. The ampersand is
/// escaped first so that entities produced by the later replacements are
/// not themselves re-escaped.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
