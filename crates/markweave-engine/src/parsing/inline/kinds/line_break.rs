use crate::{
    context::RenderContext,
    extensions::Extensions,
    render::{Renderer, Slots},
};

/// A newline preceded by two or more spaces, or any newline with
/// `HARD_LINE_BREAK`.
///
/// Trailing spaces before the newline are dropped from the output either way.
pub fn parse<R: Renderer>(
    out: &mut Vec<u8>,
    ctx: &mut RenderContext<'_, R>,
    opaque: &mut R::Opaque,
    data: &[u8],
    offset: usize,
) -> usize {
    let trailing = out.iter().rev().take_while(|&&c| c == b' ').count();
    out.truncate(out.len() - trailing);

    let two_spaces = offset >= 2 && data[offset - 2..offset] == *b"  ";
    if !ctx.extensions().is_set(Extensions::HARD_LINE_BREAK) && !two_spaces {
        return 0;
    }

    let renderer = ctx.renderer();
    if renderer.has_slot(Slots::LINE_BREAK) && renderer.line_break(out, opaque) {
        1
    } else {
        0
    }
}
