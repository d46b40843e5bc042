use crate::extensions::Extensions;

use super::kinds::{BlockQuote, CodeFence, FenceKind, HRule, Header, HtmlBlock, IndentedCode};

/// The block a line opens, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    FencedCode { kind: FenceKind, lang: &'a [u8] },
    IndentedCode,
    Header { level: u8, text: &'a [u8] },
    HRule,
    BlockQuote,
    Html { tag: &'a [u8] },
}

impl BlockOpen<'_> {
    /// Whether this opener ends a paragraph it appears under.
    pub fn interrupts_paragraph(&self) -> bool {
        !matches!(self, BlockOpen::IndentedCode)
    }
}

pub fn try_open(line: &[u8], extensions: Extensions) -> Option<BlockOpen<'_>> {
    // Precedence: fence beats everything else.
    if extensions.is_set(Extensions::FENCED_CODE)
        && let Some(sig) = CodeFence::sig(line)
    {
        return Some(BlockOpen::FencedCode {
            kind: CodeFence::kind(sig),
            lang: CodeFence::info(line),
        });
    }
    if IndentedCode::strip_indent(line).is_some() {
        return Some(BlockOpen::IndentedCode);
    }
    if let Some((level, text)) = Header::parse(line, extensions.is_set(Extensions::SPACE_HEADERS)) {
        return Some(BlockOpen::Header { level, text });
    }
    if HRule::matches(line) {
        return Some(BlockOpen::HRule);
    }
    if BlockQuote::strip_prefix(line).is_some() {
        return Some(BlockOpen::BlockQuote);
    }
    if let Some(tag) = HtmlBlock::open_tag(line) {
        return Some(BlockOpen::Html { tag });
    }
    None
}
