//! An XHTML renderer for end-to-end tests.

#![allow(dead_code)]

use markweave_engine::{
    Extensions, LinkKind, NestedContent, Renderer, Slots, convert,
};

/// Renders to XHTML and counts slot calls in its opaque value.
pub struct Html {
    pub slots: Slots,
}

impl Html {
    pub fn new() -> Self {
        Self {
            slots: Slots::all()
                - Slots::LIST
                - Slots::LIST_ITEM
                - Slots::TABLE
                - Slots::TABLE_ROW
                - Slots::TABLE_CELL
                - Slots::DOCUMENT_HEADER
                - Slots::DOCUMENT_FOOTER,
        }
    }

    pub fn without(slots: Slots) -> Self {
        let mut html = Self::new();
        html.slots.remove(slots);
        html
    }
}

fn text(out: &mut Vec<u8>, raw: &[u8]) {
    let raw = String::from_utf8_lossy(raw);
    out.extend_from_slice(html_escape::encode_text(&raw).as_bytes());
}

fn attr(out: &mut Vec<u8>, raw: &[u8]) {
    let raw = String::from_utf8_lossy(raw);
    out.extend_from_slice(html_escape::encode_double_quoted_attribute(&raw).as_bytes());
}

impl Renderer for Html {
    type Opaque = usize;

    fn slots(&self) -> Slots {
        self.slots
    }

    fn block_code(&self, out: &mut Vec<u8>, code: &[u8], lang: &str, calls: &mut usize) {
        *calls += 1;
        if lang.is_empty() {
            out.extend_from_slice(b"<pre><code>");
        } else {
            out.extend_from_slice(b"<pre><code class=\"language-");
            attr(out, lang.as_bytes());
            out.extend_from_slice(b"\">");
        }
        text(out, code);
        out.extend_from_slice(b"</code></pre>\n");
    }

    fn block_quote(&self, out: &mut Vec<u8>, inner: &[u8], calls: &mut usize) {
        *calls += 1;
        out.extend_from_slice(b"<blockquote>\n");
        out.extend_from_slice(inner);
        out.extend_from_slice(b"</blockquote>\n");
    }

    fn block_html(&self, out: &mut Vec<u8>, html: &[u8], calls: &mut usize) {
        *calls += 1;
        out.extend_from_slice(html);
        out.push(b'\n');
    }

    fn header(
        &self,
        out: &mut Vec<u8>,
        content: &mut NestedContent<'_, usize>,
        level: u8,
        calls: &mut usize,
    ) {
        *calls += 1;
        out.extend_from_slice(format!("<h{level}>").as_bytes());
        content(out, calls);
        out.extend_from_slice(format!("</h{level}>\n").as_bytes());
    }

    fn hrule(&self, out: &mut Vec<u8>, calls: &mut usize) {
        *calls += 1;
        out.extend_from_slice(b"<hr />\n");
    }

    fn paragraph(
        &self,
        out: &mut Vec<u8>,
        content: &mut NestedContent<'_, usize>,
        calls: &mut usize,
    ) {
        *calls += 1;
        out.extend_from_slice(b"<p>");
        content(out, calls);
        out.extend_from_slice(b"</p>\n");
    }

    fn autolink(&self, out: &mut Vec<u8>, link: &[u8], kind: LinkKind, calls: &mut usize) -> bool {
        *calls += 1;
        out.extend_from_slice(b"<a href=\"");
        if kind == LinkKind::Email {
            out.extend_from_slice(b"mailto:");
        }
        attr(out, link);
        out.extend_from_slice(b"\">");
        text(out, link);
        out.extend_from_slice(b"</a>");
        true
    }

    fn code_span(&self, out: &mut Vec<u8>, code: &[u8], calls: &mut usize) -> bool {
        *calls += 1;
        out.extend_from_slice(b"<code>");
        text(out, code);
        out.extend_from_slice(b"</code>");
        true
    }

    fn double_emphasis(&self, out: &mut Vec<u8>, inner: &[u8], calls: &mut usize) -> bool {
        *calls += 1;
        out.extend_from_slice(b"<strong>");
        out.extend_from_slice(inner);
        out.extend_from_slice(b"</strong>");
        true
    }

    fn emphasis(&self, out: &mut Vec<u8>, inner: &[u8], calls: &mut usize) -> bool {
        *calls += 1;
        out.extend_from_slice(b"<em>");
        out.extend_from_slice(inner);
        out.extend_from_slice(b"</em>");
        true
    }

    fn image(
        &self,
        out: &mut Vec<u8>,
        link: &[u8],
        title: &[u8],
        alt: &[u8],
        calls: &mut usize,
    ) -> bool {
        *calls += 1;
        out.extend_from_slice(b"<img src=\"");
        attr(out, link);
        out.extend_from_slice(b"\" alt=\"");
        attr(out, alt);
        if !title.is_empty() {
            out.extend_from_slice(b"\" title=\"");
            attr(out, title);
        }
        out.extend_from_slice(b"\" />");
        true
    }

    fn line_break(&self, out: &mut Vec<u8>, calls: &mut usize) -> bool {
        *calls += 1;
        out.extend_from_slice(b"<br />\n");
        true
    }

    fn link(
        &self,
        out: &mut Vec<u8>,
        link: &[u8],
        title: &[u8],
        content: &[u8],
        calls: &mut usize,
    ) -> bool {
        *calls += 1;
        out.extend_from_slice(b"<a href=\"");
        attr(out, link);
        if !title.is_empty() {
            out.extend_from_slice(b"\" title=\"");
            attr(out, title);
        }
        out.extend_from_slice(b"\">");
        out.extend_from_slice(content);
        out.extend_from_slice(b"</a>");
        true
    }

    fn raw_html_tag(&self, out: &mut Vec<u8>, tag: &[u8], calls: &mut usize) -> bool {
        *calls += 1;
        out.extend_from_slice(tag);
        true
    }

    fn triple_emphasis(&self, out: &mut Vec<u8>, inner: &[u8], calls: &mut usize) -> bool {
        *calls += 1;
        out.extend_from_slice(b"<strong><em>");
        out.extend_from_slice(inner);
        out.extend_from_slice(b"</em></strong>");
        true
    }

    fn strikethrough(&self, out: &mut Vec<u8>, inner: &[u8], calls: &mut usize) -> bool {
        *calls += 1;
        out.extend_from_slice(b"<del>");
        out.extend_from_slice(inner);
        out.extend_from_slice(b"</del>");
        true
    }

    fn entity(&self, out: &mut Vec<u8>, entity: &[u8], _calls: &mut usize) {
        out.extend_from_slice(entity);
    }

    fn normal_text(&self, out: &mut Vec<u8>, raw: &[u8], _calls: &mut usize) {
        text(out, raw);
    }
}

/// Converts `input` to HTML with the given extensions.
pub fn html_with(extensions: Extensions, input: &str) -> String {
    html_using(&Html::new(), extensions, input)
}

pub fn html_using(renderer: &Html, extensions: Extensions, input: &str) -> String {
    let mut calls = 0;
    let out = convert(input.as_bytes(), Some(renderer), &mut calls, extensions)
        .expect("balanced conversion")
        .expect("renderer supplied");
    String::from_utf8(out).expect("utf-8 output")
}

pub fn html(input: &str) -> String {
    html_with(Extensions::empty(), input)
}
