//! # Reference Definitions
//!
//! Footnote-style link targets that can be used anywhere in the document:
//!
//! ```text
//! [1]: http://www.example.com/ "Example"
//! [repo]: <http://github.com/>
//!   'Title on the next line'
//! ```
//!
//! Text elsewhere links to them by label: `see [the repo][repo]`.
//!
//! Definitions are recognised during the first pass, on the raw input and
//! without any knowledge of block structure. A recognised definition is
//! removed from the normalised buffer and stored in a [`ReferenceTable`].
//!
//! Labels are case-insensitive. A later definition for the same label
//! replaces an earlier one.

use std::collections::HashMap;

use super::chars::{is_blank, is_line_end};

/// The target and optional title of a reference definition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reference {
    /// Link target with any `<` `>` delimiters stripped.
    pub target: Vec<u8>,
    /// Title with its delimiters stripped; empty when absent.
    pub title: Vec<u8>,
}

/// A definition recognised at the start of some input, borrowing from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedReference<'a> {
    /// Bytes covered by the definition, including its line terminator(s).
    pub consumed: usize,
    /// Label as written, before case folding.
    pub label: &'a [u8],
    pub target: &'a [u8],
    pub title: &'a [u8],
}

/// Reference definitions keyed by folded label.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    refs: HashMap<String, Reference>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tries to read a reference definition at the start of `data`.
    ///
    /// On success the definition is stored (replacing any previous one with
    /// the same folded label) and the number of bytes it spans is returned.
    /// Returns 0 when `data` does not start with a definition.
    pub fn try_parse(&mut self, data: &[u8]) -> usize {
        let Some(parsed) = parse_reference(data) else {
            return 0;
        };
        self.insert(
            parsed.label,
            Reference {
                target: parsed.target.to_vec(),
                title: parsed.title.to_vec(),
            },
        );
        parsed.consumed
    }

    /// Stores `reference` under the folded `label`, returning the entry it replaced.
    pub fn insert(&mut self, label: &[u8], reference: Reference) -> Option<Reference> {
        let key = fold_label(label);
        log::trace!(
            "reference [{key}] -> {}",
            String::from_utf8_lossy(&reference.target)
        );
        self.refs.insert(key, reference)
    }

    /// Looks up a label case-insensitively.
    pub fn get(&self, label: &[u8]) -> Option<&Reference> {
        self.refs.get(&fold_label(label))
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Iterates over `(folded label, reference)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Reference)> {
        self.refs.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Canonical lookup key for a label.
pub fn fold_label(label: &[u8]) -> String {
    String::from_utf8_lossy(label).to_lowercase()
}

/// Recognises a reference definition at the start of `data`.
///
/// Grammar, left to right:
///
/// ```text
/// {0,3 spaces} '[' label ']' ':' blanks [newline] blanks target blanks
///     ( end | newline [blanks title-line] | title-on-same-line )
/// ```
///
/// The title is `'…'`, `"…"` or `(…)`, alone on the rest of its line apart
/// from trailing blanks. Anything else after the target rejects the line.
pub fn parse_reference(data: &[u8]) -> Option<ParsedReference<'_>> {
    let len = data.len();
    if len < 4 {
        return None;
    }

    let mut i = 0;
    while i < 3 && data[i] == b' ' {
        i += 1;
    }

    // label: anything but a line break between brackets
    if data[i] != b'[' {
        return None;
    }
    i += 1;
    let label_start = i;
    while i < len && data[i] != b']' && !is_line_end(data[i]) {
        i += 1;
    }
    if i >= len || data[i] != b']' {
        return None;
    }
    let label = &data[label_start..i];

    // spacer: ':' blanks [newline] blanks
    i += 1;
    if i >= len || data[i] != b':' {
        return None;
    }
    i = skip_blanks(data, i + 1);
    if i < len && is_line_end(data[i]) {
        i += 1;
        if i < len && data[i] == b'\n' && data[i - 1] == b'\r' {
            i += 1;
        }
    }
    i = skip_blanks(data, i);
    if i >= len {
        return None;
    }

    // target: whitespace-free run, optionally inside angle brackets
    let target_start = i;
    while i < len && !is_blank(data[i]) && !is_line_end(data[i]) {
        i += 1;
    }
    let target = strip_angle_brackets(&data[target_start..i]);

    // only a line break or a title opener may follow
    i = skip_blanks(data, i);
    if i < len && !is_line_end(data[i]) && title_closer(data[i]).is_none() {
        return None;
    }

    let mut line_end = link_line_end(data, i);

    // a title may sit on the next line, indented by blanks
    if let Some(end) = line_end {
        i = skip_blanks(data, end);
    }

    let mut title: &[u8] = &[];
    if i + 1 < len
        && let Some(close) = title_closer(data[i])
        && let Some((span, end)) = scan_title(data, i + 1, close)
    {
        title = span;
        line_end = Some(end);
    }

    // garbage after the link
    let consumed = line_end?;

    Some(ParsedReference {
        consumed,
        label,
        target,
        title,
    })
}

fn skip_blanks(data: &[u8], mut i: usize) -> usize {
    while i < data.len() && is_blank(data[i]) {
        i += 1;
    }
    i
}

fn strip_angle_brackets(run: &[u8]) -> &[u8] {
    match run {
        [b'<', inner @ .., b'>'] => inner,
        _ => run,
    }
}

/// The closing delimiter for a title opener.
fn title_closer(open: u8) -> Option<u8> {
    match open {
        b'"' => Some(b'"'),
        b'\'' => Some(b'\''),
        b'(' => Some(b')'),
        _ => None,
    }
}

/// Position just past the link line, if the target ended the line.
///
/// `\r\n` counts as one terminator here.
fn link_line_end(data: &[u8], i: usize) -> Option<usize> {
    match data.get(i) {
        None => Some(data.len()),
        Some(b'\r') if data.get(i + 1) == Some(&b'\n') => Some(i + 2),
        Some(&c) if is_line_end(c) => Some(i + 1),
        Some(_) => None,
    }
}

/// Scans a title starting after its opener at `start`.
///
/// Walks to the end of the line, then back over trailing blanks; the byte
/// before them must be `close`. Returns the title span and the position past
/// the title line. `\n\r` and `\r\n` both count as one terminator.
fn scan_title(data: &[u8], start: usize, close: u8) -> Option<(&[u8], usize)> {
    let len = data.len();
    let mut eol = start;
    while eol < len && !is_line_end(data[eol]) {
        eol += 1;
    }
    let pair = data.get(eol..eol + 2);
    let line_end = if matches!(pair, Some(b"\n\r") | Some(b"\r\n")) {
        eol + 2
    } else if eol < len {
        eol + 1
    } else {
        eol
    };

    let mut j = eol;
    while j > start && is_blank(data[j - 1]) {
        j -= 1;
    }
    if j > start && data[j - 1] == close {
        Some((&data[start..j - 1], line_end))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(input: &str) -> Option<(usize, String, String, String)> {
        parse_reference(input.as_bytes()).map(|r| {
            (
                r.consumed,
                String::from_utf8_lossy(r.label).into_owned(),
                String::from_utf8_lossy(r.target).into_owned(),
                String::from_utf8_lossy(r.title).into_owned(),
            )
        })
    }

    #[test]
    fn simple_definition_with_title() {
        let input = "[1]: http://example.com \"Example\"\nSee [text][1].\n";
        let (consumed, label, target, title) = parse(input).unwrap();
        assert_eq!(label, "1");
        assert_eq!(target, "http://example.com");
        assert_eq!(title, "Example");
        assert_eq!(&input[consumed..], "See [text][1].\n");
    }

    #[test]
    fn definition_without_title_consumes_its_line() {
        let input = "[a]: /url\nnext";
        let (consumed, _, target, title) = parse(input).unwrap();
        assert_eq!(target, "/url");
        assert_eq!(title, "");
        assert_eq!(&input[consumed..], "next");
    }

    #[test]
    fn definition_at_end_of_input() {
        let input = "[a]: /url";
        let (consumed, _, target, _) = parse(input).unwrap();
        assert_eq!(target, "/url");
        assert_eq!(consumed, input.len());
    }

    #[rstest]
    #[case("[a]: /url 'single'\n", "single")]
    #[case("[a]: /url \"double\"\n", "double")]
    #[case("[a]: /url (paren)\n", "paren")]
    #[case("[a]: /url \"spaced out\"   \n", "spaced out")]
    #[case("[a]: /url \"\"\n", "")]
    fn title_delimiters_are_stripped(#[case] input: &str, #[case] expected: &str) {
        let (consumed, _, _, title) = parse(input).unwrap();
        assert_eq!(title, expected);
        assert_eq!(consumed, input.len());
    }

    #[test]
    fn title_on_continuation_line() {
        let input = "[a]: /url\n   \"Title\"\nrest";
        let (consumed, _, target, title) = parse(input).unwrap();
        assert_eq!(target, "/url");
        assert_eq!(title, "Title");
        assert_eq!(&input[consumed..], "rest");
    }

    #[test]
    fn unterminated_continuation_title_is_left_as_content() {
        let input = "[a]: /url\n\"not a title\nrest";
        let (consumed, _, _, title) = parse(input).unwrap();
        assert_eq!(title, "");
        assert_eq!(&input[consumed..], "\"not a title\nrest");
    }

    #[test]
    fn unterminated_same_line_title_rejects() {
        assert_eq!(parse("[a]: /url \"open\n"), None);
    }

    #[test]
    fn mismatched_title_delimiters_reject() {
        assert_eq!(parse("[a]: /url \"title'\n"), None);
    }

    #[test]
    fn angle_brackets_are_stripped() {
        let (_, _, target, _) = parse("[a]: <http://x.org/>\n").unwrap();
        assert_eq!(target, "http://x.org/");
    }

    #[test]
    fn unmatched_angle_bracket_is_kept() {
        let (_, _, target, _) = parse("[a]: <http://x.org/\n").unwrap();
        assert_eq!(target, "<http://x.org/");
    }

    #[test]
    fn target_on_next_line() {
        let input = "[a]:\n  /url\nrest";
        let (consumed, _, target, _) = parse(input).unwrap();
        assert_eq!(target, "/url");
        assert_eq!(&input[consumed..], "rest");
    }

    #[test]
    fn crlf_link_line_consumes_both_bytes() {
        let input = "[a]: /url\r\nrest";
        let (consumed, _, _, _) = parse(input).unwrap();
        assert_eq!(&input[consumed..], "rest");
    }

    #[test]
    fn crlf_after_colon_is_one_break() {
        let (_, _, target, _) = parse("[a]:\r\n/url\r\n").unwrap();
        assert_eq!(target, "/url");
    }

    #[rstest]
    #[case::lf("[a]: /url\n\"T\"\nrest")]
    #[case::lf_cr("[a]: /url\n\"T\"\n\rrest")]
    #[case::cr_lf("[a]: /url\n\"T\"\r\nrest")]
    #[case::cr("[a]: /url\n\"T\"\rrest")]
    #[case::same_line_cr_lf("[a]: /url \"T\"\r\nrest")]
    fn title_line_terminator_is_consumed_whole(#[case] input: &str) {
        let (consumed, _, _, title) = parse(input).unwrap();
        assert_eq!(title, "T");
        assert_eq!(&input[consumed..], "rest");
    }

    #[rstest]
    #[case("   [a]: /url\n", true)]
    #[case("    [a]: /url\n", false)]
    fn at_most_three_leading_spaces(#[case] input: &str, #[case] accepted: bool) {
        assert_eq!(parse(input).is_some(), accepted);
    }

    #[rstest]
    #[case::missing_close_bracket("[a: /url\n")]
    #[case::bracket_after_line_break("[a\n]: /url\n")]
    #[case::missing_colon("[a] /url\n")]
    #[case::trailing_garbage("[a]: /url garbage\n")]
    #[case::no_target("[a]:   ")]
    #[case::too_short("[a]")]
    #[case::not_a_bracket("a]: /url\n")]
    fn malformed_lines_are_rejected(#[case] input: &str) {
        assert_eq!(parse(input), None);
    }

    #[test]
    fn table_folds_labels() {
        let mut refs = ReferenceTable::new();
        assert!(refs.try_parse(b"[Foo]: /foo\n") > 0);
        assert_eq!(refs.get(b"foo").unwrap().target, b"/foo");
        assert_eq!(refs.get(b"FOO").unwrap().target, b"/foo");
    }

    #[test]
    fn later_definition_wins() {
        let mut refs = ReferenceTable::new();
        refs.try_parse(b"[foo]: /first\n");
        refs.try_parse(b"[FOO]: /second \"2\"\n");
        assert_eq!(refs.len(), 1);
        let r = refs.get(b"Foo").unwrap();
        assert_eq!(r.target, b"/second");
        assert_eq!(r.title, b"2");
    }

    #[test]
    fn rejected_line_records_nothing() {
        let mut refs = ReferenceTable::new();
        assert_eq!(refs.try_parse(b"[foo: /url\n"), 0);
        assert!(refs.is_empty());
    }

    #[test]
    fn fold_label_handles_unicode() {
        assert_eq!(fold_label("ÄBC".as_bytes()), "äbc");
    }
}
