use std::borrow::Cow;

use crate::{
    context::RenderContext,
    extensions::Extensions,
    parsing::inline::parse_inline,
    render::{Renderer, Slots, write_text},
};

use super::{
    BlockParser,
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{BlockQuote, CodeFence, FenceKind, HtmlBlock, IndentedCode},
    open::{BlockOpen, try_open},
};

/// The default block parser.
///
/// Handles blank lines, ATX headers, horizontal rules, fenced and indented
/// code, block quotes, raw HTML blocks and paragraphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownBlockParser;

impl<R: Renderer> BlockParser<R> for MarkdownBlockParser {
    fn parse_blocks(
        &self,
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

        let mut beg = 0;
        while beg < data.len() {
            beg += self.parse_block(out, ctx, opaque, &data[beg..]);
        }

        ctx.leave();
    }
}

impl MarkdownBlockParser {
    /// Renders the block starting at the beginning of `data`, returning the
    /// number of bytes it spans (always at least one line).
    fn parse_block<R: Renderer>(
        &self,
        out: &mut Vec<u8>,
        ctx: &mut RenderContext<'_, R>,
        opaque: &mut R::Opaque,
        data: &[u8],
    ) -> usize {
        let line = MarkdownLineClassifier.classify(data, 0);
        if line.is_blank {
            return line.next;
        }

        let renderer = ctx.renderer();
        match try_open(line.text(data), ctx.extensions()) {
            Some(BlockOpen::FencedCode { kind, lang }) => {
                self.fenced_code(out, ctx, opaque, data, line, kind, lang)
            }
            Some(BlockOpen::IndentedCode) => self.indented_code(out, ctx, opaque, data),
            Some(BlockOpen::Header { level, text }) => {
                if renderer.has_slot(Slots::HEADER) {
                    renderer.header(
                        out,
                        &mut |buf: &mut Vec<u8>, op: &mut R::Opaque| -> bool {
                            render_inline(buf, ctx, op, text)
                        },
                        level,
                        opaque,
                    );
                }
                line.next
            }
            Some(BlockOpen::HRule) => {
                if renderer.has_slot(Slots::HRULE) {
                    renderer.hrule(out, opaque);
                }
                line.next
            }
            Some(BlockOpen::BlockQuote) => self.block_quote(out, ctx, opaque, data),
            Some(BlockOpen::Html { tag }) => {
                let lax = ctx.extensions().is_set(Extensions::LAX_HTML_BLOCKS);
                match HtmlBlock::find_end(data, 0, tag, lax) {
                    Some(end) => {
                        if renderer.has_slot(Slots::BLOCK_HTML) {
                            renderer.block_html(out, trim_newlines(&data[..end]), opaque);
                        }
                        end
                    }
                    None => self.paragraph(out, ctx, opaque, data),
                }
            }
            None => self.paragraph(out, ctx, opaque, data),
        }
    }

    fn paragraph<R: Renderer>(
        &self,
        out: &mut Vec<u8>,
        ctx: &mut RenderContext<'_, R>,
        opaque: &mut R::Opaque,
        data: &[u8],
    ) -> usize {
        let extensions = ctx.extensions();
        let lax = extensions.is_set(Extensions::LAX_HTML_BLOCKS);
        let mut end = 0;
        for line in MarkdownLineClassifier.lines(data, 0) {
            if line.start > 0 {
                if line.is_blank {
                    break;
                }
                let interrupted = match try_open(line.text(data), extensions) {
                    Some(BlockOpen::Html { tag }) => {
                        HtmlBlock::find_end(data, line.start, tag, lax).is_some()
                    }
                    Some(open) => open.interrupts_paragraph(),
                    None => false,
                };
                if interrupted {
                    break;
                }
            }
            end = line.next;
        }

        let text = data[..end].trim_ascii();
        let renderer = ctx.renderer();
        if renderer.has_slot(Slots::PARAGRAPH) {
            renderer.paragraph(
                out,
                &mut |buf: &mut Vec<u8>, op: &mut R::Opaque| -> bool {
                    render_inline(buf, ctx, op, text)
                },
                opaque,
            );
        }
        end
    }

    #[allow(clippy::too_many_arguments)]
    fn fenced_code<R: Renderer>(
        &self,
        out: &mut Vec<u8>,
        ctx: &mut RenderContext<'_, R>,
        opaque: &mut R::Opaque,
        data: &[u8],
        open: LineClass,
        kind: FenceKind,
        lang: &[u8],
    ) -> usize {
        let (body_end, end) = MarkdownLineClassifier
            .lines(data, open.next)
            .find(|line| CodeFence::closes(kind, line.text(data)))
            .map_or((data.len(), data.len()), |close| (close.start, close.next));

        let renderer = ctx.renderer();
        if renderer.has_slot(Slots::BLOCK_CODE) {
            let lang: Cow<'_, str> = String::from_utf8_lossy(lang);
            renderer.block_code(out, &data[open.next..body_end], &lang, opaque);
        }
        end
    }

    fn indented_code<R: Renderer>(
        &self,
        out: &mut Vec<u8>,
        ctx: &mut RenderContext<'_, R>,
        opaque: &mut R::Opaque,
        data: &[u8],
    ) -> usize {
        let mut work = Vec::new();
        let mut end = 0;
        let mut kept = 0;
        for line in MarkdownLineClassifier.lines(data, 0) {
            let text = line.text(data);
            match IndentedCode::strip_indent(text) {
                Some(code) if !line.is_blank => {
                    work.extend_from_slice(code);
                    work.push(b'\n');
                    end = line.next;
                    kept = work.len();
                }
                _ if line.is_blank => {
                    work.extend_from_slice(IndentedCode::strip_indent(text).unwrap_or_default());
                    work.push(b'\n');
                }
                _ => break,
            }
        }
        work.truncate(kept);

        let renderer = ctx.renderer();
        if renderer.has_slot(Slots::BLOCK_CODE) {
            renderer.block_code(out, &work, "", opaque);
        }
        end
    }

    fn block_quote<R: Renderer>(
        &self,
        out: &mut Vec<u8>,
        ctx: &mut RenderContext<'_, R>,
        opaque: &mut R::Opaque,
        data: &[u8],
    ) -> usize {
        let extensions = ctx.extensions();
        let mut work = Vec::new();
        let mut end = 0;
        let mut last_blank = false;
        for line in MarkdownLineClassifier.lines(data, 0) {
            let text = line.text(data);
            if let Some(p) = BlockQuote::strip_prefix(text) {
                work.extend_from_slice(&text[p..]);
                last_blank = text[p..].iter().all(|c| c.is_ascii_whitespace());
            } else if line.is_blank {
                let next = MarkdownLineClassifier.classify(data, line.next);
                if line.next >= data.len() || BlockQuote::strip_prefix(next.text(data)).is_none() {
                    break;
                }
                last_blank = true;
            } else if !last_blank && try_open(text, extensions).is_none() {
                // lazy continuation of a quoted paragraph
                work.extend_from_slice(text);
            } else {
                break;
            }
            work.push(b'\n');
            end = line.next;
        }

        let renderer = ctx.renderer();
        if renderer.has_slot(Slots::BLOCK_QUOTE) {
            let mut inner = Vec::new();
            self.parse_blocks(&mut inner, ctx, opaque, &work);
            renderer.block_quote(out, &inner, opaque);
        }
        end
    }
}

/// Inline-parses `text` into `buf`, reporting whether anything was written.
fn render_inline<R: Renderer>(
    buf: &mut Vec<u8>,
    ctx: &mut RenderContext<'_, R>,
    opaque: &mut R::Opaque,
    text: &[u8],
) -> bool {
    let before = buf.len();
    parse_inline(buf, ctx, opaque, text);
    buf.len() > before
}

fn trim_newlines(text: &[u8]) -> &[u8] {
    let end = text.iter().rposition(|&c| c != b'\n').map_or(0, |p| p + 1);
    &text[..end]
}
