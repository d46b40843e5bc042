use crate::render::is_block_tag;

/// Raw HTML block type.
pub struct HtmlBlock;

impl HtmlBlock {
    /// The tag name when `line` opens a block-level HTML element.
    pub fn open_tag(line: &[u8]) -> Option<&[u8]> {
        let rest = line.strip_prefix(b"<")?;
        let len = rest.iter().take_while(|c| c.is_ascii_alphanumeric()).count();
        let name = &rest[..len];
        match rest.get(len) {
            Some(b'>' | b' ' | b'/') | None if is_block_tag(name) => Some(name),
            _ => None,
        }
    }

    /// Offset just past the line holding `</tag>`, searching from `from`.
    ///
    /// Under `lax`, a blank line before the closing tag also ends the block.
    pub fn find_end(data: &[u8], from: usize, tag: &[u8], lax: bool) -> Option<usize> {
        let mut beg = from;
        while beg < data.len() {
            let end = data[beg..]
                .iter()
                .position(|&c| c == b'\n')
                .map_or(data.len(), |p| beg + p + 1);
            let line = &data[beg..end];
            if contains_closing(line, tag) {
                return Some(end);
            }
            if lax && beg > from && line.iter().all(|c| c.is_ascii_whitespace()) {
                return Some(beg);
            }
            beg = end;
        }
        None
    }
}

fn contains_closing(line: &[u8], tag: &[u8]) -> bool {
    let len = tag.len() + 3;
    line.windows(len).any(|w| {
        w.starts_with(b"</") && w[2..len - 1].eq_ignore_ascii_case(tag) && w[len - 1] == b'>'
    })
}
