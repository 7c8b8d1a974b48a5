//! Footnote extraction from raw captions.
//!
//! A caption may carry inline markers (`[FN3]`) in its prose and, after the
//! prose, definition lines (`[FN3] The actual note.`) that supply the text
//! those markers reference. Numbering is caller-supplied: two markers with
//! the same number refer to the same definition, and nothing here
//! auto-increments.
//!
//! Extraction is a two-state automaton over the caption's lines. It starts
//! in the body state; the first definition line switches it to the footnote
//! state, and the transition is one-way — once definitions begin, no later
//! line is treated as body text even if it looks like prose. Within the
//! footnote state, a non-empty line that is not itself a definition
//! continues the most recently defined entry, and blank lines are dropped.

/// An inline footnote marker located in a piece of text.
pub struct Marker {
    /// The footnote number the marker references.
    pub number: u32,
    /// Byte offset of the opening `[`.
    pub start: usize,
    /// Byte offset one past the closing `]`.
    pub end: usize,
}

/// Finds the first well-formed `[FN<digits>]` marker at or after byte
/// offset `from`. Bracketed text that merely resembles a marker (no digits,
/// no closing bracket, digits too large for a footnote number) is skipped
/// over rather than reported.
pub fn find_marker(text: &str, from: usize) -> Option<Marker> {
    const SIGIL: &str = "[FN";
    let mut search = from;
    while let Some(found) = text[search..].find(SIGIL) {
        let start = search + found;
        let digits_start = start + SIGIL.len();
        let rest = &text[digits_start..];
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or_else(|| rest.len());
        if digits > 0 && rest[digits..].starts_with(']') {
            if let Ok(number) = rest[..digits].parse::<u32>() {
                return Some(Marker {
                    number,
                    start,
                    end: digits_start + digits + 1,
                });
            }
        }
        search = digits_start;
    }
    None
}

// A definition line is a marker anchored at the start of the line followed
// by a single space and the definition text: `[FN<digits>] <rest>`.
fn parse_definition(line: &str) -> Option<(u32, &str)> {
    let marker = find_marker(line, 0)?;
    if marker.start != 0 {
        return None;
    }
    let text = line[marker.end..].strip_prefix(' ')?;
    Some((marker.number, text.trim()))
}

/// The footnote definitions extracted from one caption, in insertion order.
#[derive(Default)]
pub struct Footnotes {
    notes: Vec<(u32, String)>,
}

impl Footnotes {
    /// Looks up the definition text for footnote `number`, if any.
    pub fn get(&self, number: u32) -> Option<&str> {
        self.notes
            .iter()
            .find(|(n, _)| *n == number)
            .map(|(_, text)| text.as_str())
    }

    /// Returns the number of distinct footnote entries.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true when no footnotes were defined.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    // Records a definition, overwriting in place when the number was
    // already defined, and returns the index of the entry for continuation
    // lines to target.
    fn define(&mut self, number: u32, text: &str) -> usize {
        match self.notes.iter().position(|(n, _)| *n == number) {
            Some(index) => {
                self.notes[index].1 = text.to_owned();
                index
            }
            None => {
                self.notes.push((number, text.to_owned()));
                self.notes.len() - 1
            }
        }
    }

    // Appends a continuation line to the entry at `index` with a single
    // separating space.
    fn append(&mut self, index: usize, continuation: &str) {
        let note = &mut self.notes[index].1;
        note.push(' ');
        note.push_str(continuation);
    }
}

enum State {
    Body,
    // Carries the index of the most recently defined entry, which is the
    // target for continuation lines (insertion order, not number value).
    Footnotes { last: usize },
}

/// Splits a raw caption into its body text (newline-joined, markers left in
/// place) and its extracted footnote definitions.
pub fn split(caption: &str) -> (String, Footnotes) {
    let mut notes = Footnotes::default();
    let mut body: Vec<&str> = Vec::new();
    let mut state = State::Body;

    for line in caption.lines() {
        if let Some((number, text)) = parse_definition(line) {
            state = State::Footnotes {
                last: notes.define(number, text),
            };
        } else {
            match state {
                State::Body => body.push(line),
                State::Footnotes { last } => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        notes.append(last, trimmed);
                    }
                }
            }
        }
    }

    (body.join("\n"), notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_marker_basic() {
        let marker = find_marker("See [FN1] here", 0).unwrap();
        assert_eq!(1, marker.number);
        assert_eq!(4, marker.start);
        assert_eq!(9, marker.end);
    }

    #[test]
    fn test_find_marker_multi_digit() {
        let marker = find_marker("[FN12]", 0).unwrap();
        assert_eq!(12, marker.number);
        assert_eq!(0, marker.start);
        assert_eq!(6, marker.end);
    }

    #[test]
    fn test_find_marker_skips_malformed() {
        // `[FN]` has no digits and `[FNx]` has a letter; only the final
        // bracket pair is a marker.
        let marker = find_marker("[FN] [FNx] [FN7]", 0).unwrap();
        assert_eq!(7, marker.number);
        assert_eq!(11, marker.start);
    }

    #[test]
    fn test_find_marker_respects_offset() {
        let text = "[FN1] and [FN2]";
        let marker = find_marker(text, 1).unwrap();
        assert_eq!(2, marker.number);
    }

    #[test]
    fn test_find_marker_none() {
        assert!(find_marker("no markers at all", 0).is_none());
        assert!(find_marker("[FN1 unclosed", 0).is_none());
    }

    #[test]
    fn test_split_plain_caption() {
        let (body, notes) = split("Just a story.\nWith two lines.");
        assert_eq!("Just a story.\nWith two lines.", body);
        assert!(notes.is_empty());
    }

    #[test]
    fn test_split_definitions_and_continuation() {
        let (body, notes) =
            split("Intro text.\n[FN1] First note.\ncontinued.\n[FN2] Second.");
        assert_eq!("Intro text.", body);
        assert_eq!(2, notes.len());
        assert_eq!(Some("First note. continued."), notes.get(1));
        assert_eq!(Some("Second."), notes.get(2));
    }

    #[test]
    fn test_split_blank_line_between_definitions_is_dropped() {
        let (_, notes) = split("Body.\n[FN1] One.\n\n[FN2] Two.");
        assert_eq!(Some("One."), notes.get(1));
        assert_eq!(Some("Two."), notes.get(2));
    }

    #[test]
    fn test_split_transition_is_one_way() {
        // The final line reads like prose, but the footnote section never
        // returns to the body; the line continues footnote 1.
        let (body, notes) = split("Body.\n[FN1] A note.\nThis is not prose.");
        assert_eq!("Body.", body);
        assert_eq!(Some("A note. This is not prose."), notes.get(1));
    }

    #[test]
    fn test_split_same_number_overwrites() {
        let (_, notes) = split("Body.\n[FN1] old\n[FN2] other\n[FN1] new");
        assert_eq!(Some("new"), notes.get(1));
        assert_eq!(2, notes.len());
    }

    #[test]
    fn test_split_continuation_follows_redefinition() {
        // Continuations target the most recently *defined* entry, which
        // after redefinition is footnote 1 again.
        let (_, notes) = split("Body.\n[FN1] old\n[FN2] other\n[FN1] new\nmore");
        assert_eq!(Some("new more"), notes.get(1));
        assert_eq!(Some("other"), notes.get(2));
    }

    #[test]
    fn test_split_marker_without_space_is_not_a_definition() {
        // `[FN1]no space` fails the `] ` pattern and stays body text.
        let (body, notes) = split("[FN1]no space");
        assert_eq!("[FN1]no space", body);
        assert!(notes.is_empty());
    }

    #[test]
    fn test_split_indented_marker_is_not_a_definition() {
        let (body, notes) = split("  [FN1] indented");
        assert_eq!("  [FN1] indented", body);
        assert!(notes.is_empty());
    }

    #[test]
    fn test_split_empty_caption() {
        let (body, notes) = split("");
        assert_eq!("", body);
        assert!(notes.is_empty());
    }
}
