use crate::{
    context::RenderContext,
    extensions::Extensions,
    parsing::{
        chars::{is_punct, is_space},
        inline::parse_inline,
    },
    render::{Renderer, Slots},
};

use super::{code_span::CodeSpan, escape::Escape};

/// Emphasis markers with owned delimiter constants.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    pub const TILDE: u8 = b'~';

    /// The slot that renders a run of `len` copies of `marker`.
    pub fn slot(marker: u8, len: usize) -> Option<Slots> {
        match (marker, len) {
            (Self::TILDE, 2) => Some(Slots::STRIKETHROUGH),
            (Self::TILDE, _) => None,
            (_, 1) => Some(Slots::EMPHASIS),
            (_, 2) => Some(Slots::DOUBLE_EMPHASIS),
            (_, 3) => Some(Slots::TRIPLE_EMPHASIS),
            _ => None,
        }
    }
}

/// `*em*`, `**strong**`, `***both***`, `~~struck~~` (and `_` forms).
///
/// The opening run must not be followed by whitespace and the closing run
/// must not be preceded by it. The content is rendered recursively.
pub fn parse<R: Renderer>(
    out: &mut Vec<u8>,
    ctx: &mut RenderContext<'_, R>,
    opaque: &mut R::Opaque,
    data: &[u8],
    offset: usize,
) -> usize {
    let marker = data[offset];
    let run = data[offset..].iter().take_while(|&&c| c == marker).count();
    let Some(slot) = Emphasis::slot(marker, run) else {
        return 0;
    };
    let renderer = ctx.renderer();
    if !renderer.has_slot(slot) {
        return 0;
    }

    let no_intra = ctx.extensions().is_set(Extensions::NO_INTRA_EMPHASIS);
    if no_intra && offset > 0 && !is_space(data[offset - 1]) && !is_punct(data[offset - 1]) {
        return 0;
    }

    let start = offset + run;
    match data.get(start) {
        Some(&c) if !is_space(c) => {}
        _ => return 0,
    }
    let Some(close) = find_closing(data, start, marker, run, no_intra) else {
        return 0;
    };

    let mut work = Vec::new();
    parse_inline(&mut work, ctx, opaque, &data[start..close]);

    let rendered = if slot == Slots::STRIKETHROUGH {
        renderer.strikethrough(out, &work, opaque)
    } else {
        match run {
            1 => renderer.emphasis(out, &work, opaque),
            2 => renderer.double_emphasis(out, &work, opaque),
            _ => renderer.triple_emphasis(out, &work, opaque),
        }
    };
    if rendered { close + run - offset } else { 0 }
}

/// Finds a closing run of exactly `run` markers at or after `start`.
///
/// Code spans and backslash escapes are skipped over.
fn find_closing(data: &[u8], start: usize, marker: u8, run: usize, no_intra: bool) -> Option<usize> {
    let mut i = start;
    while i < data.len() {
        let c = data[i];
        if c == Escape::BACKSLASH {
            i += 2;
            continue;
        }
        if c == CodeSpan::TICK {
            let n = data[i..].iter().take_while(|&&b| b == CodeSpan::TICK).count();
            i = match CodeSpan::find_close(data, i + n, n) {
                Some((_, end)) => end,
                None => i + n,
            };
            continue;
        }
        if c != marker {
            i += 1;
            continue;
        }

        let len = data[i..].iter().take_while(|&&b| b == marker).count();
        let after = data.get(i + len).copied();
        let left_flanking = i > start && !is_space(data[i - 1]);
        let word_boundary = after.is_none_or(|a| is_space(a) || is_punct(a));
        if len == run && left_flanking && (!no_intra || word_boundary) {
            return Some(i);
        }
        i += len;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{Tags, render, render_with};
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("*em*", "<em>em</em>")]
    #[case("_em_", "<em>em</em>")]
    #[case("**strong**", "<strong>strong</strong>")]
    #[case("__strong__", "<strong>strong</strong>")]
    #[case("***both***", "<strong-em>both</strong-em>")]
    #[case("a *b **c** d* e", "a <em>b <strong>c</strong> d</em> e")]
    #[case("* not em*", "* not em*")]
    #[case("*not em *", "*not em *")]
    #[case("*unclosed", "*unclosed")]
    #[case("****four****", "****four****")]
    #[case("*a `*` b*", "<em>a <code>*</code> b</em>")]
    #[case(r"*a \* b*", "<em>a * b</em>")]
    fn emphasis(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(render(input), expected);
    }

    #[test]
    fn strikethrough_needs_extension() {
        assert_eq!(render("~~gone~~"), "~~gone~~");
        let out = render_with(&Tags::all(), Extensions::STRIKETHROUGH, "", "~~gone~~");
        assert_eq!(out, "<del>gone</del>");
    }

    #[test]
    fn single_tilde_is_text() {
        let out = render_with(&Tags::all(), Extensions::STRIKETHROUGH, "", "~a~");
        assert_eq!(out, "~a~");
    }

    #[test]
    fn missing_slot_leaves_markers() {
        let tags = Tags::with(Slots::EMPHASIS);
        assert_eq!(render_with(&tags, Extensions::empty(), "", "**a**"), "**a**");
        assert_eq!(render_with(&tags, Extensions::empty(), "", "*a*"), "<em>a</em>");
    }

    #[test]
    fn intra_word_emphasis() {
        assert_eq!(render("snake_case_name"), "snake<em>case</em>name");
        let out = render_with(&Tags::all(), Extensions::NO_INTRA_EMPHASIS, "", "snake_case_name");
        assert_eq!(out, "snake_case_name");
        let out = render_with(&Tags::all(), Extensions::NO_INTRA_EMPHASIS, "", "an _em_ word.");
        assert_eq!(out, "an <em>em</em> word.");
    }

    #[test]
    fn slot_for_runs() {
        assert_eq!(Emphasis::slot(b'*', 1), Some(Slots::EMPHASIS));
        assert_eq!(Emphasis::slot(b'~', 1), None);
        assert_eq!(Emphasis::slot(b'~', 2), Some(Slots::STRIKETHROUGH));
        assert_eq!(Emphasis::slot(b'_', 4), None);
    }
}
