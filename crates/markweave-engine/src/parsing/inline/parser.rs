use crate::{
    context::RenderContext,
    render::{Renderer, write_text},
};

use super::kinds;

/// Renders inline content into `out`.
///
/// Runs of bytes without a handler in the dispatch table go through
/// `normal_text`. At a trigger byte the registered handler gets a chance to
/// parse a span; when it declines (consumes nothing) the trigger byte is
/// treated as plain text and scanning resumes after it.
///
/// Each call is one nesting level. Past the ceiling the data is written as
/// plain text without looking for spans.
pub fn parse_inline<R: Renderer>(
    out: &mut Vec<u8>,
    ctx: &mut RenderContext<'_, R>,
    opaque: &mut R::Opaque,
    data: &[u8],
) {
    let renderer = ctx.renderer();
    if ctx.enter().is_err() {
        write_text(renderer, out, data, opaque);
        return;
    }

    let mut i = 0;
    let mut end = 0;
    while i < data.len() {
        while end < data.len() && !ctx.dispatch().is_trigger(data[end]) {
            end += 1;
        }
        write_text(renderer, out, &data[i..end], opaque);

        if end >= data.len() {
            break;
        }
        i = end;

        let consumed = match ctx.dispatch().get(data[i]) {
            Some(handler) => kinds::run(handler, out, ctx, opaque, data, i),
            None => 0,
        };
        if consumed == 0 {
            // not a span after all: emit the trigger with the next text run
            end = i + 1;
        } else {
            i += consumed;
            end = i;
        }
    }

    ctx.leave();
}
