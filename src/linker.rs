//! Selective term hyperlinking for footnote text.
//!
//! Footnote definitions frequently name a book or a place that has a
//! canonical page elsewhere; the link table turns the first mention of each
//! configured phrase into an anchor. Body text is never linked.

use crate::escape::escape_html;
use serde::Deserialize;
use url::Url;

/// One term-linking rule: a literal phrase and the page it links to.
///
/// Rules are applied to footnote text *after* typography normalization and
/// HTML escaping, so a phrase must be written the way it appears at that
/// stage — a phrase containing an apostrophe must use the curly `’`, not
/// the ASCII `'`, or it will never match.
#[derive(Clone, Debug, Deserialize)]
pub struct LinkRule {
    /// The exact text to link, matched case-sensitively.
    pub phrase: String,

    /// The link target, opened in a new browsing context.
    pub url: Url,
}

/// Replaces the first occurrence of each rule's phrase with an anchor
/// wrapping that phrase. Rules run in list order, each against the output
/// of the previous one, so a rule whose phrase contains an earlier rule's
/// phrase will no longer match once the earlier anchor is in place; this
/// order dependence is deliberate.
pub fn link_terms(text: &str, rules: &[LinkRule]) -> String {
    let mut out = text.to_owned();
    for rule in rules {
        out = out.replacen(rule.phrase.as_str(), &anchor(rule), 1);
    }
    out
}

// Assembles the anchor markup for a rule. The href is attribute-escaped
// here because the surrounding text was escaped before the anchor is
// spliced in and must not be escaped again.
fn anchor(rule: &LinkRule) -> String {
    format!(
        r#"<a href="{}" target="_blank">{}</a>"#,
        escape_html(rule.url.as_str()),
        rule.phrase
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(phrase: &str, url: &str) -> LinkRule {
        LinkRule {
            phrase: phrase.to_owned(),
            url: Url::parse(url).unwrap(),
        }
    }

    #[test]
    fn test_links_first_occurrence_only() {
        let rules = vec![rule("Minor Mage", "https://example.org/minor-mage")];
        let result = link_terms(
            "Minor Mage is a book. Minor Mage is short.",
            &rules,
        );
        assert_eq!(
            "<a href=\"https://example.org/minor-mage\" target=\"_blank\">Minor Mage</a> \
             is a book. Minor Mage is short.",
            result
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let rules = vec![rule("Minor Mage", "https://example.org/minor-mage")];
        assert_eq!(
            "minor mage is not the title",
            link_terms("minor mage is not the title", &rules)
        );
    }

    #[test]
    fn test_rules_apply_in_list_order() {
        // The first rule consumes "Mage" inside "Minor Mage", so the
        // second rule no longer finds its phrase intact.
        let rules = vec![
            rule("Mage", "https://example.org/mage"),
            rule("Minor Mage", "https://example.org/minor-mage"),
        ];
        let result = link_terms("Minor Mage", &rules);
        assert_eq!(
            "Minor <a href=\"https://example.org/mage\" target=\"_blank\">Mage</a>",
            result
        );
    }

    #[test]
    fn test_phrase_with_curly_apostrophe() {
        let rules = vec![rule("the dog\u{2019}s tale", "https://example.org/tale")];
        let result = link_terms("about the dog\u{2019}s tale here", &rules);
        assert!(result.contains("target=\"_blank\">the dog\u{2019}s tale</a>"));
    }

    #[test]
    fn test_no_rules_is_identity() {
        assert_eq!("untouched", link_terms("untouched", &[]));
    }

    #[test]
    fn test_href_is_attribute_escaped() {
        let rules = vec![rule("archive", "https://example.org/?a=1&b=2")];
        let result = link_terms("see the archive", &rules);
        assert!(result.contains("href=\"https://example.org/?a=1&amp;b=2\""));
    }
}
