use crate::{
    context::RenderContext,
    parsing::chars::is_space,
    render::{Renderer, Slots},
};

use super::super::cursor::Cursor;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: nothing inside them is parsed.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Finds the end of a code span opened by `n` backticks at `start`.
    ///
    /// Returns `(inner_end, end)`: where the closing run starts and the
    /// position just after it.
    pub fn find_close(data: &[u8], start: usize, n: usize) -> Option<(usize, usize)> {
        let mut cur = Cursor::at(data, start);
        let mut run = 0;
        while run < n {
            match cur.bump()? {
                Self::TICK => run += 1,
                _ => run = 0,
            }
        }
        Some((cur.pos() - n, cur.pos()))
    }
}

/// `` `code` `` and ``` `` code with ` inside `` ```.
///
/// Surrounding whitespace inside the delimiters is trimmed.
pub fn parse<R: Renderer>(
    out: &mut Vec<u8>,
    ctx: &mut RenderContext<'_, R>,
    opaque: &mut R::Opaque,
    data: &[u8],
    offset: usize,
) -> usize {
    let renderer = ctx.renderer();
    if !renderer.has_slot(Slots::CODE_SPAN) {
        return 0;
    }

    let mut cur = Cursor::at(data, offset);
    let n = cur.bump_while(|b| b == CodeSpan::TICK);
    let Some((inner_end, end)) = CodeSpan::find_close(data, cur.pos(), n) else {
        return 0;
    };

    let inner = trim_space(&data[offset + n..inner_end]);
    if renderer.code_span(out, inner, opaque) {
        end - offset
    } else {
        0
    }
}

fn trim_space(text: &[u8]) -> &[u8] {
    let start = text.iter().position(|&c| !is_space(c)).unwrap_or(text.len());
    let end = text.iter().rposition(|&c| !is_space(c)).map_or(start, |p| p + 1);
    &text[start..end]
}
