use crate::{
    context::RenderContext,
    parsing::chars::{is_alnum, is_space},
    render::{LinkKind, Renderer, Slots},
};

use super::super::cursor::Cursor;
use super::escape::Escape;

/// Angle-bracket spans with owned delimiter constants.
pub struct Angle;

impl Angle {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';
    pub const COMMENT_OPEN: &'static [u8] = b"<!--";
    pub const COMMENT_CLOSE: &'static [u8] = b"-->";
    pub const MAILTO: &'static [u8] = b"mailto:";
}

/// What a `<...>` span turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bracketed {
    Tag,
    Autolink(LinkKind),
}

/// `<http://url>`, `<user@host>` and inline raw HTML such as `<b>` or
/// `<!-- comment -->`.
pub fn parse<R: Renderer>(
    out: &mut Vec<u8>,
    ctx: &mut RenderContext<'_, R>,
    opaque: &mut R::Opaque,
    data: &[u8],
    offset: usize,
) -> usize {
    let span = &data[offset..];
    let Some((len, kind)) = span_length(span) else {
        return 0;
    };

    let renderer = ctx.renderer();
    let rendered = match kind {
        Bracketed::Autolink(link_kind) => {
            if !renderer.has_slot(Slots::AUTOLINK) {
                return 0;
            }
            let inner = &span[1..len - 1];
            let link = match inner.strip_prefix(Angle::MAILTO) {
                Some(address) if link_kind == LinkKind::Normal => address,
                _ => inner,
            };
            let kind = if link.len() < inner.len() { LinkKind::Email } else { link_kind };
            renderer.autolink(out, link, kind, opaque)
        }
        Bracketed::Tag => {
            renderer.has_slot(Slots::RAW_HTML_TAG) && renderer.raw_html_tag(out, &span[..len], opaque)
        }
    };
    if rendered { len } else { 0 }
}

/// Length of the bracketed span at the start of `span`, and what it is.
fn span_length(span: &[u8]) -> Option<(usize, Bracketed)> {
    let mut cur = Cursor::at(span, 0);
    if cur.starts_with(Angle::COMMENT_OPEN) {
        let body = &span[Angle::COMMENT_OPEN.len()..];
        let close = body
            .windows(Angle::COMMENT_CLOSE.len())
            .position(|w| w == Angle::COMMENT_CLOSE)?;
        let len = Angle::COMMENT_OPEN.len() + close + Angle::COMMENT_CLOSE.len();
        return Some((len, Bracketed::Tag));
    }
    if span.len() < 3 {
        return None;
    }

    cur.bump();
    if cur.peek() == Some(b'/') {
        cur.bump();
    }
    if !cur.peek().is_some_and(is_alnum) {
        return None;
    }

    let word = cur.bump_while(|c| is_alnum(c) || matches!(c, b'.' | b'+' | b'-'));
    match cur.peek() {
        Some(b'@') if word > 0 => {
            if let Some(len) = email_length(&span[cur.pos()..]) {
                return Some((cur.pos() + len, Bracketed::Autolink(LinkKind::Email)));
            }
        }
        Some(b':') if cur.pos() > 2 => {
            cur.bump();
            let start = cur.pos();
            while let Some(c) = cur.peek() {
                if c == Escape::BACKSLASH {
                    cur.bump_n(2);
                } else if c == Angle::CLOSE || c == b'\'' || c == b'"' || is_space(c) {
                    break;
                } else {
                    cur.bump();
                }
            }
            if cur.peek() == Some(Angle::CLOSE) && cur.pos() > start {
                return Some((cur.pos() + 1, Bracketed::Autolink(LinkKind::Normal)));
            }
        }
        _ => {}
    }

    cur.bump_while(|c| c != Angle::CLOSE);
    cur.bump().map(|_| (cur.pos(), Bracketed::Tag))
}

/// Length of `@host.tld>` when it completes an email autolink.
fn email_length(rest: &[u8]) -> Option<usize> {
    let mut at_signs = 0;
    for (i, &c) in rest.iter().enumerate() {
        match c {
            b'@' => at_signs += 1,
            b'.' | b'-' | b'_' => {}
            Angle::CLOSE if at_signs == 1 => return Some(i + 1),
            c if is_alnum(c) => {}
            _ => return None,
        }
    }
    None
}
