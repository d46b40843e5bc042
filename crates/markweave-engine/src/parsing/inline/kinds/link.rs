use crate::{
    context::RenderContext,
    parsing::{chars::is_space, inline::parse_inline},
    render::{Renderer, Slots},
};

use super::super::cursor::Cursor;
use super::escape::Escape;

/// Links and images with owned delimiter constants.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    /// Prefix turning a link into an image.
    pub const BANG: u8 = b'!';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';
}

/// Destination and title of a link, resolved from either form.
struct Target {
    dest: Vec<u8>,
    title: Vec<u8>,
    end: usize,
}

/// `[text](dest "title")`, `[text][id]`, `[text][]`, `[text]` and the `![alt]`
/// image forms of each.
///
/// Links do not nest: inside link text only images are recognised.
pub fn parse<R: Renderer>(
    out: &mut Vec<u8>,
    ctx: &mut RenderContext<'_, R>,
    opaque: &mut R::Opaque,
    data: &[u8],
    offset: usize,
) -> usize {
    let renderer = ctx.renderer();
    let bang = offset > 0
        && data[offset - 1] == Link::BANG
        && !(offset > 1 && data[offset - 2] == Escape::BACKSLASH);
    let is_image = bang && renderer.has_slot(Slots::IMAGE);

    if !is_image && (ctx.inside_link() || !renderer.has_slot(Slots::LINK)) {
        return 0;
    }

    let Some(text_end) = find_text_end(data, offset + 1) else {
        return 0;
    };
    let text = &data[offset + 1..text_end];

    let target = match data.get(text_end + 1) {
        Some(&Link::DEST_OPEN) => inline_target(data, text_end + 2),
        Some(&Link::OPEN) => {
            let id_start = text_end + 2;
            data[id_start..]
                .iter()
                .position(|&c| c == Link::CLOSE)
                .and_then(|len| {
                    let id = &data[id_start..id_start + len];
                    let id = if id.is_empty() { text } else { id };
                    reference_target(ctx, id, id_start + len + 1)
                })
        }
        _ => reference_target(ctx, text, text_end + 1),
    };
    let Some(target) = target else {
        return 0;
    };

    if is_image {
        let popped = out.last() == Some(&Link::BANG);
        if popped {
            out.pop();
        }
        if renderer.image(out, &target.dest, &target.title, text, opaque) {
            return target.end - offset;
        }
        if popped {
            out.push(Link::BANG);
        }
        return 0;
    }

    let mut content = Vec::new();
    let was_inside = ctx.set_inside_link(true);
    parse_inline(&mut content, ctx, opaque, text);
    ctx.set_inside_link(was_inside);

    if renderer.link(out, &target.dest, &target.title, &content, opaque) {
        target.end - offset
    } else {
        0
    }
}

/// Position of the `]` matching the `[` just before `start`.
fn find_text_end(data: &[u8], start: usize) -> Option<usize> {
    let mut cur = Cursor::at(data, start);
    let mut level = 1;
    while let Some(c) = cur.bump() {
        match c {
            Escape::BACKSLASH => {
                cur.bump();
            }
            Link::OPEN => level += 1,
            Link::CLOSE => {
                level -= 1;
                if level == 0 {
                    return Some(cur.pos() - 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parses `dest "title")` starting just after the `(`.
fn inline_target(data: &[u8], start: usize) -> Option<Target> {
    let mut cur = Cursor::at(data, start);
    cur.bump_while(is_space);

    let dest = if cur.peek() == Some(b'<') {
        cur.bump();
        let dest_start = cur.pos();
        cur.bump_while(|c| c != b'>' && c != b'\n');
        let dest = cur.since(dest_start);
        if cur.bump()? != b'>' {
            return None;
        }
        dest
    } else {
        let dest_start = cur.pos();
        let mut depth = 0usize;
        while let Some(c) = cur.peek() {
            match c {
                Escape::BACKSLASH => {
                    cur.bump_n(2);
                    continue;
                }
                Link::DEST_OPEN => depth += 1,
                Link::DEST_CLOSE if depth == 0 => break,
                Link::DEST_CLOSE => depth -= 1,
                c if is_space(c) => break,
                _ => {}
            }
            cur.bump();
        }
        cur.since(dest_start)
    };

    cur.bump_while(is_space);
    let title = match cur.peek()? {
        q @ (b'"' | b'\'') => {
            let title_start = cur.pos() + 1;
            let close = find_title_close(data, title_start, q)?;
            cur = Cursor::at(data, close + 1);
            cur.bump_while(is_space);
            &data[title_start..close]
        }
        _ => &[][..],
    };

    if cur.bump()? != Link::DEST_CLOSE {
        return None;
    }
    Some(Target {
        dest: unescape(dest),
        title: unescape(title),
        end: cur.pos(),
    })
}

/// The first `quote` after `start` that is followed only by spaces and `)`.
fn find_title_close(data: &[u8], start: usize, quote: u8) -> Option<usize> {
    (start..data.len()).find(|&i| {
        data[i] == quote
            && data[i + 1..]
                .iter()
                .find(|&&c| !is_space(c))
                .is_some_and(|&c| c == Link::DEST_CLOSE)
    })
}

fn reference_target<R: Renderer>(
    ctx: &RenderContext<'_, R>,
    id: &[u8],
    end: usize,
) -> Option<Target> {
    let found = if id.contains(&b'\n') {
        let joined: Vec<u8> = id.iter().map(|&c| if c == b'\n' { b' ' } else { c }).collect();
        ctx.references().get(&joined)
    } else {
        ctx.references().get(id)
    };
    let Some(reference) = found else {
        log::trace!("no reference for [{}]", String::from_utf8_lossy(id));
        return None;
    };
    Some(Target {
        dest: reference.target.clone(),
        title: reference.title.clone(),
        end,
    })
}

/// Drops the backslash in front of escapable bytes.
fn unescape(text: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut i = 0;
    while i < text.len() {
        if text[i] == Escape::BACKSLASH
            && let Some(&next) = text.get(i + 1)
            && Escape::ESCAPABLE.contains(&next)
        {
            out.push(next);
            i += 2;
            continue;
        }
        out.push(text[i]);
        i += 1;
    }
    out
}
