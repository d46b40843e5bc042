use crate::{
    context::RenderContext,
    render::{Renderer, Slots},
};

use super::super::cursor::Cursor;
use crate::parsing::chars::is_alnum;

/// `&amp;`, `&#169;`, `&#x1F980;`. Anything else leaves the `&` as text.
pub fn parse<R: Renderer>(
    out: &mut Vec<u8>,
    ctx: &mut RenderContext<'_, R>,
    opaque: &mut R::Opaque,
    data: &[u8],
    offset: usize,
) -> usize {
    let mut cur = Cursor::at(data, offset + 1);
    if cur.peek() == Some(b'#') {
        cur.bump();
    }
    if cur.bump_while(is_alnum) == 0 || cur.peek() != Some(b';') {
        return 0;
    }
    cur.bump();

    let entity = cur.since(offset);
    let renderer = ctx.renderer();
    if renderer.has_slot(Slots::ENTITY) {
        renderer.entity(out, entity, opaque);
    } else {
        out.extend_from_slice(entity);
    }
    entity.len()
}
