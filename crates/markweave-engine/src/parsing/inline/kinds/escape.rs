use crate::{
    context::RenderContext,
    render::{Renderer, write_text},
};

/// Backslash escapes with owned delimiter constants.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';
    /// Bytes a backslash can escape.
    pub const ESCAPABLE: &'static [u8] = b"\\`*_{}[]()#+-.!:|&<>~";
}

/// `\*` renders a literal `*`. A backslash before anything else is plain text.
pub fn parse<R: Renderer>(
    out: &mut Vec<u8>,
    ctx: &mut RenderContext<'_, R>,
    opaque: &mut R::Opaque,
    data: &[u8],
    offset: usize,
) -> usize {
    let Some(escaped) = data.get(offset + 1) else {
        return 0;
    };
    if !Escape::ESCAPABLE.contains(escaped) {
        return 0;
    }
    write_text(ctx.renderer(), out, std::slice::from_ref(escaped), opaque);
    2
}
