//! # Span Kinds
//!
//! One module per span handler. Each owns its delimiter constants and a
//! `parse` function with the same shape: it is given the whole inline data
//! and the offset of its trigger byte, and returns the number of bytes it
//! consumed from that offset (0 to decline).
//!
//! ## Handlers
//!
//! - **`emphasis`**: `*`, `_`, `~` runs
//! - **`code_span`**: backtick runs, a raw zone
//! - **`line_break`**: hard breaks at `\n`
//! - **`link`**: `[text](url)`, `[text][ref]`, `![alt](src)`
//! - **`angle`**: `<url>`, `<address>`, raw HTML tags
//! - **`escape`**: `\` before punctuation
//! - **`entity`**: `&name;`, `&#123;`
//! - **`autolink`**: bare `scheme://` URLs, triggered at `:`

pub mod angle;
pub mod autolink;
pub mod code_span;
pub mod emphasis;
pub mod entity;
pub mod escape;
pub mod line_break;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use escape::Escape;
pub use link::Link;

use crate::{context::RenderContext, render::Renderer};

use super::InlineHandler;

/// Runs the handler registered for `data[offset]`.
pub(crate) fn run<R: Renderer>(
    handler: InlineHandler,
    out: &mut Vec<u8>,
    ctx: &mut RenderContext<'_, R>,
    opaque: &mut R::Opaque,
    data: &[u8],
    offset: usize,
) -> usize {
    match handler {
        InlineHandler::Emphasis => emphasis::parse(out, ctx, opaque, data, offset),
        InlineHandler::CodeSpan => code_span::parse(out, ctx, opaque, data, offset),
        InlineHandler::LineBreak => line_break::parse(out, ctx, opaque, data, offset),
        InlineHandler::Link => link::parse(out, ctx, opaque, data, offset),
        InlineHandler::LeftAngle => angle::parse(out, ctx, opaque, data, offset),
        InlineHandler::Escape => escape::parse(out, ctx, opaque, data, offset),
        InlineHandler::Entity => entity::parse(out, ctx, opaque, data, offset),
        InlineHandler::Autolink => autolink::parse(out, ctx, opaque, data, offset),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! A small HTML-ish renderer for exercising span handlers in isolation.

    use crate::{
        context::RenderContext,
        extensions::Extensions,
        parsing::inline::parse_inline,
        render::{LinkKind, Renderer, Slots},
    };

    pub struct Tags {
        pub slots: Slots,
    }

    impl Tags {
        pub fn all() -> Self {
            Self {
                slots: Slots::all() - Slots::NORMAL_TEXT - Slots::ENTITY,
            }
        }

        pub fn with(slots: Slots) -> Self {
            Self { slots }
        }
    }

    fn wrap(out: &mut Vec<u8>, tag: &str, text: &[u8]) {
        out.extend_from_slice(format!("<{tag}>").as_bytes());
        out.extend_from_slice(text);
        out.extend_from_slice(format!("</{tag}>").as_bytes());
    }

    impl Renderer for Tags {
        type Opaque = ();

        fn slots(&self) -> Slots {
            self.slots
        }

        fn autolink(&self, out: &mut Vec<u8>, link: &[u8], kind: LinkKind, _: &mut ()) -> bool {
            let link = String::from_utf8_lossy(link);
            out.extend_from_slice(format!("<auto {kind:?} {link}>").as_bytes());
            true
        }

        fn code_span(&self, out: &mut Vec<u8>, text: &[u8], _: &mut ()) -> bool {
            wrap(out, "code", text);
            true
        }

        fn double_emphasis(&self, out: &mut Vec<u8>, text: &[u8], _: &mut ()) -> bool {
            wrap(out, "strong", text);
            true
        }

        fn emphasis(&self, out: &mut Vec<u8>, text: &[u8], _: &mut ()) -> bool {
            wrap(out, "em", text);
            true
        }

        fn image(
            &self,
            out: &mut Vec<u8>,
            link: &[u8],
            title: &[u8],
            alt: &[u8],
            _: &mut (),
        ) -> bool {
            let (link, title, alt) = (
                String::from_utf8_lossy(link),
                String::from_utf8_lossy(title),
                String::from_utf8_lossy(alt),
            );
            out.extend_from_slice(format!("<img {link}|{title}|{alt}>").as_bytes());
            true
        }

        fn line_break(&self, out: &mut Vec<u8>, _: &mut ()) -> bool {
            out.extend_from_slice(b"<br>");
            true
        }

        fn link(
            &self,
            out: &mut Vec<u8>,
            link: &[u8],
            title: &[u8],
            content: &[u8],
            _: &mut (),
        ) -> bool {
            let (link, title) = (String::from_utf8_lossy(link), String::from_utf8_lossy(title));
            out.extend_from_slice(format!("<a {link}|{title}>").as_bytes());
            out.extend_from_slice(content);
            out.extend_from_slice(b"</a>");
            true
        }

        fn raw_html_tag(&self, out: &mut Vec<u8>, tag: &[u8], _: &mut ()) -> bool {
            wrap(out, "raw", tag);
            true
        }

        fn triple_emphasis(&self, out: &mut Vec<u8>, text: &[u8], _: &mut ()) -> bool {
            wrap(out, "strong-em", text);
            true
        }

        fn strikethrough(&self, out: &mut Vec<u8>, text: &[u8], _: &mut ()) -> bool {
            wrap(out, "del", text);
            true
        }
    }

    /// Renders `input` as inline content with reference definitions taken
    /// from `refs` (a first-pass style block of `[id]: url` lines).
    pub fn render_with(renderer: &Tags, extensions: Extensions, refs: &str, input: &str) -> String {
        let mut ctx = RenderContext::new(renderer, extensions);
        let mut rest = refs.as_bytes();
        while !rest.is_empty() {
            let consumed = ctx.references_mut().try_parse(rest);
            assert!(consumed > 0, "bad reference fixture: {refs:?}");
            rest = &rest[consumed..];
        }
        let mut out = Vec::new();
        parse_inline(&mut out, &mut ctx, &mut (), input.as_bytes());
        assert!(ctx.is_balanced());
        assert!(!ctx.inside_link());
        String::from_utf8(out).unwrap()
    }

    pub fn render(input: &str) -> String {
        render_with(&Tags::all(), Extensions::empty(), "", input)
    }
}
