use crate::{
    context::RenderContext,
    parsing::chars::is_space,
    render::{LinkKind, Renderer, Slots},
};

use super::super::cursor::Cursor;
use super::escape::Escape;

/// Bare URL autolinks, triggered at the `:` of the scheme separator.
pub struct Autolink;

impl Autolink {
    pub const SEPARATOR: &'static [u8] = b"://";
    /// Schemes recognised without angle brackets.
    pub const SCHEMES: &'static [&'static [u8]] = &[b"http", b"https", b"ftp"];
    /// Longest scheme looked for behind the `:`.
    pub const MAX_SCHEME: usize = 6;
    /// Trailing bytes that end a sentence rather than a URL.
    pub const TRAILING: &'static [u8] = b".,;:!?";
}

/// `http://example.com` in running text.
///
/// The scheme letters have already been written as plain text when the `:`
/// is reached, so they are taken back off the output before rendering.
pub fn parse<R: Renderer>(
    out: &mut Vec<u8>,
    ctx: &mut RenderContext<'_, R>,
    opaque: &mut R::Opaque,
    data: &[u8],
    offset: usize,
) -> usize {
    let renderer = ctx.renderer();
    if ctx.inside_link() || !renderer.has_slot(Slots::AUTOLINK) {
        return 0;
    }
    if !Cursor::at(data, offset).starts_with(Autolink::SEPARATOR) {
        return 0;
    }

    let rewind = data[..offset]
        .iter()
        .rev()
        .take(Autolink::MAX_SCHEME + 1)
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    let start = offset - rewind;
    let scheme = &data[start..offset];
    if !Autolink::SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme)) {
        return 0;
    }

    let end = link_end(data, offset + Autolink::SEPARATOR.len());
    if end <= offset + Autolink::SEPARATOR.len() {
        return 0;
    }
    if !out.ends_with(scheme) {
        return 0;
    }

    out.truncate(out.len() - rewind);
    if renderer.autolink(out, &data[start..end], LinkKind::Normal, opaque) {
        end - offset
    } else {
        out.extend_from_slice(scheme);
        0
    }
}

/// End of the URL whose authority starts at `from`.
fn link_end(data: &[u8], from: usize) -> usize {
    let mut end = from;
    while end < data.len() && !is_space(data[end]) && data[end] != b'<' {
        end += 1;
    }

    while end > from {
        let last = data[end - 1];
        if Autolink::TRAILING.contains(&last) && data[end - 2] != Escape::BACKSLASH {
            end -= 1;
            continue;
        }
        let opener = match last {
            b')' => b'(',
            b']' => b'[',
            b'}' => b'{',
            _ => break,
        };
        let link = &data[from..end];
        let opens = link.iter().filter(|&&c| c == opener).count();
        let closes = link.iter().filter(|&&c| c == last).count();
        if closes <= opens {
            break;
        }
        end -= 1;
    }
    end
}
